//! Function Registry

use crate::{AppContext, ArgDescriptor, FunctionMeta, ScalarExecutor, ScalarFunction};
use brook_core::ValidationError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of scalar functions, keyed by qualified name
/// (`namespace:name`, case-insensitive).
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn ScalarFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn with_function<F: ScalarFunction + 'static>(mut self, f: F) -> Self {
        let name = f.meta().qualified_name().to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn ScalarFunction> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    /// Resolve a function and run its one-time setup for a registration.
    pub fn init_function(
        &self,
        name: &str,
        args: &[ArgDescriptor],
        ctx: &AppContext,
    ) -> Result<Box<dyn ScalarExecutor>, ValidationError> {
        match self.get(name) {
            Some(f) => f.init(args, ctx),
            None => {
                let similar = self.find_similar(name);
                if !similar.is_empty() {
                    debug!(name, ?similar, "unknown function, similar names exist");
                }
                Err(ValidationError::UnknownFunction {
                    name: name.to_string(),
                })
            }
        }
    }

    pub fn list(&self) -> Vec<FunctionMeta> {
        self.functions.values().map(|f| f.meta()).collect()
    }

    /// Registered names similar to the given one (for diagnostics)
    fn find_similar(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self
            .functions
            .keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&name_lower, candidate);
                if score > 0 {
                    Some((candidate.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().take(5).map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        if candidate.starts_with(query) {
            100
        } else if candidate.contains(query) || query.contains(candidate) {
            50
        } else {
            0
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
