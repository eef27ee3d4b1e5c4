//! Brook Time Functions
//!
//! The `time` namespace: date handling functions for Brook pipelines.

pub mod constants;
mod diff;

pub use diff::DateDiff;

use brook_plugin::FunctionRegistry;

/// Load the time namespace into a registry
pub fn load_time_functions(registry: FunctionRegistry) -> FunctionRegistry {
    registry.with_function(DateDiff)
}

/// Create a registry with the time namespace loaded
pub fn time_registry() -> FunctionRegistry {
    load_time_functions(FunctionRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brook_plugin::{AppContext, ArgDescriptor};
    use brook_core::{AttributeType, Value};

    #[test]
    fn test_date_diff_is_registered() {
        let registry = time_registry();
        assert!(registry.get("time:dateDiff").is_some());
        assert!(registry.get("time:datediff").is_some());
    }

    #[test]
    fn test_registry_end_to_end() {
        let registry = time_registry();
        let ctx = AppContext::new("orders-app");
        let descriptors = [
            ArgDescriptor::new(AttributeType::Long),
            ArgDescriptor::new(AttributeType::Long),
        ];
        let executor = registry
            .init_function("time:dateDiff", &descriptors, &ctx)
            .unwrap();
        let result = executor
            .execute(&[Value::Long(1_423_456_224_000), Value::Long(1_415_712_224_000)])
            .unwrap();
        assert_eq!(result, Value::Long(89));
    }
}
