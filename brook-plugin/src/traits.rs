//! Function traits
//!
//! The lifecycle is two-phase: a registered `ScalarFunction` is asked once,
//! at query registration, to validate the declared argument types and
//! produce a `ScalarExecutor`. The executor then serves every event for
//! that registration with whatever interpretation it locked in at setup.

use brook_core::{AttributeType, EvalError, ValidationError, Value};
use crate::AppContext;
use serde::{Deserialize, Serialize};

/// Metadata about a function argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: false, default: None }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str, default: &'static str) -> Self {
        Self { name, typ, description, optional: true, default: Some(default) }
    }
}

/// Metadata for a scalar function
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMeta {
    pub name: &'static str,
    pub namespace: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
}

impl FunctionMeta {
    /// Qualified lookup name, e.g. `time:dateDiff`
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace, self.name)
    }
}

/// Argument slot known at registration time: the declared type of the
/// expression bound to the slot, and nothing else. No values exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgDescriptor {
    pub declared: AttributeType,
}

impl ArgDescriptor {
    pub const fn new(declared: AttributeType) -> Self {
        Self { declared }
    }
}

/// Durable state of an executor, as handed to the host's checkpointing.
///
/// Pure functions have none: `snapshot` yields an empty map and `restore`
/// discards whatever it is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateSnapshot(serde_json::Map<String, serde_json::Value>);

impl StateSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A registered scalar function: static metadata plus the one-time setup
/// step that turns declared argument types into a configured executor.
pub trait ScalarFunction: Send + Sync {
    fn meta(&self) -> FunctionMeta;

    /// Validate the declared argument types and lock in an interpretation.
    /// Called exactly once per registration; a failure rejects the query
    /// before any event flows.
    fn init(
        &self,
        args: &[ArgDescriptor],
        ctx: &AppContext,
    ) -> Result<Box<dyn ScalarExecutor>, ValidationError>;
}

/// A configured evaluator bound to one registration.
///
/// `execute` takes `&self` and must keep all scratch state in per-call
/// locals: the host may deliver events from several threads to the same
/// registration concurrently.
pub trait ScalarExecutor: Send + Sync + std::fmt::Debug {
    fn execute(&self, values: &[Value]) -> Result<Value, EvalError>;

    /// Return type tag, queried by the host during planning
    fn return_type(&self) -> AttributeType;

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::empty()
    }

    fn restore(&mut self, _snapshot: StateSnapshot) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_meta_builders() {
        let required = ArgMeta::required("date.value1", "STRING", "value of date");
        assert!(!required.optional);
        assert_eq!(required.default, None);

        let optional = ArgMeta::optional("date.format1", "STRING", "date format", "yyyy-MM-dd HH:mm:ss.SSS");
        assert!(optional.optional);
        assert_eq!(optional.default, Some("yyyy-MM-dd HH:mm:ss.SSS"));
    }

    #[test]
    fn test_state_snapshot_empty() {
        assert!(StateSnapshot::empty().is_empty());
    }

    #[test]
    fn test_state_snapshot_serde_round_trip() {
        let snapshot = StateSnapshot::empty();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }
}
