//! Application Context

use std::collections::HashMap;

/// Context handed to functions at registration time: the owning
/// application's name plus its configured properties. Evaluation never
/// sees this; whatever a function needs from it is captured at setup.
#[derive(Debug, Clone)]
pub struct AppContext {
    name: String,
    properties: HashMap<String, String>,
}

impl AppContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|v| v.as_str())
    }

    pub fn property_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.property(key).unwrap_or(default)
    }
}
