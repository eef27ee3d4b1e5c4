//! Brook Core - Fundamental types
//!
//! This crate provides the core types used throughout Brook:
//! - `Value`: runtime values delivered per event
//! - `AttributeType`: declared types of expression slots
//! - `ValidationError` / `EvalError`: setup-time and evaluation-time failures
//! - `time`: epoch-millisecond instants and the date format engine

mod error;
pub mod time;
mod value;

pub use error::{EvalError, ValidationError};
pub use time::{DateFormat, TimeError, Timestamp};
pub use value::{AttributeType, Value};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AttributeType, EvalError, ValidationError, Value};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        #[test]
        fn test_from_i64() {
            let v: Value = 42i64.into();
            assert!(matches!(v, Value::Long(42)));
            assert_eq!(v.as_long(), Some(42));
        }

        #[test]
        fn test_from_str() {
            let v: Value = "hello".into();
            assert!(matches!(v, Value::String(_)));
            assert_eq!(v.as_str(), Some("hello"));
        }

        #[test]
        fn test_from_bool() {
            let v: Value = true.into();
            assert!(matches!(v, Value::Bool(true)));
        }

        #[test]
        fn test_accessors_are_strict() {
            // an INT does not read as a LONG; coercion is the caller's call
            let v = Value::Int(7);
            assert_eq!(v.as_long(), None);
            assert_eq!(v.as_int(), Some(7));
        }

        #[test]
        fn test_type_name() {
            assert_eq!(Value::String("".to_string()).type_name(), "STRING");
            assert_eq!(Value::Long(0).type_name(), "LONG");
            assert_eq!(Value::Double(0.0).type_name(), "DOUBLE");
            assert_eq!(Value::Null.type_name(), "NULL");
        }

        #[test]
        fn test_attribute_type() {
            assert_eq!(Value::Long(1).attribute_type(), Some(AttributeType::Long));
            assert_eq!(Value::Null.attribute_type(), None);
        }

        #[test]
        fn test_is_null() {
            assert!(Value::Null.is_null());
            assert!(!Value::Long(0).is_null());
        }

        #[test]
        fn test_attribute_type_display() {
            assert_eq!(AttributeType::String.to_string(), "STRING");
            assert_eq!(AttributeType::Long.to_string(), "LONG");
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_invalid_arity_display() {
            let err = ValidationError::InvalidArity {
                function: "time:dateDiff()",
                expected: "2 or 4",
                found: 3,
            };
            assert_eq!(
                err.to_string(),
                "invalid number of arguments passed to time:dateDiff(), required 2 or 4, but found 3"
            );
        }

        #[test]
        fn test_invalid_argument_type_names_position() {
            let err = ValidationError::InvalidArgumentType {
                function: "time:dateDiff(date.value1, date.value2, date.format1, date.format2)",
                position: 3,
                expected: AttributeType::String,
                found: AttributeType::Long,
            };
            let display = err.to_string();
            assert!(display.contains("argument 3"));
            assert!(display.contains("required STRING"));
            assert!(display.contains("found LONG"));
        }

        #[test]
        fn test_null_argument_display() {
            let err = EvalError::NullArgument {
                function: "time:dateDiff(timestamp.in.milliseconds1, timestamp.in.milliseconds2)",
                position: 2,
            };
            let display = err.to_string();
            assert!(display.contains("argument 2 cannot be null"));
            assert!(display.contains("timestamp.in.milliseconds1"));
        }

        #[test]
        fn test_format_mismatch_carries_pattern_and_value() {
            let err = EvalError::FormatMismatch {
                pattern: "yyyy-MM-dd HH:mm:ss.SSS".to_string(),
                value: "11/11/2014".to_string(),
                reason: "expected '-' at offset 2".to_string(),
            };
            let display = err.to_string();
            assert!(display.contains("yyyy-MM-dd HH:mm:ss.SSS"));
            assert!(display.contains("11/11/2014"));
        }
    }
}
