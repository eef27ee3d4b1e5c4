//! dateDiff: whole days between two dates
//!
//! Two call shapes, resolved once at registration from the declared
//! argument types:
//!
//! - `dateDiff(date.value1, date.value2, date.format1, date.format2)` -
//!   four STRING arguments; the formats are read per call.
//! - `dateDiff(date.value1, date.value2)` - two STRING arguments parsed
//!   with the default layout, or two LONG arguments taken as
//!   epoch-millisecond timestamps.
//!
//! The result is the signed millisecond difference `value1 - value2`
//! divided by the milliseconds in a day, truncated toward zero.

use crate::constants::DEFAULT_DATE_FORMAT;
use brook_core::time::{DateFormat, Timestamp, TimeError, MILLIS_PER_DAY};
use brook_plugin::prelude::*;
use tracing::debug;

const FUNCTION: &str = "time:dateDiff()";
const FORMATTED_USAGE: &str = "time:dateDiff(date.value1, date.value2, date.format1, date.format2)";
const EPOCH_USAGE: &str = "time:dateDiff(timestamp.in.milliseconds1, timestamp.in.milliseconds2)";

static DATEDIFF_ARGS: [ArgMeta; 6] = [
    ArgMeta::required("date.value1", "STRING", "value of date, e.g. \"2014-11-11 13:23:44.657\" or \"2014-11-11\""),
    ArgMeta::required("date.value2", "STRING", "value of date, e.g. \"2014-11-11 13:23:44.657\" or \"2014-11-11\""),
    ArgMeta::optional("date.format1", "STRING", "date format of date.value1", DEFAULT_DATE_FORMAT),
    ArgMeta::optional("date.format2", "STRING", "date format of date.value2", DEFAULT_DATE_FORMAT),
    ArgMeta::required("timestamp.in.milliseconds1", "LONG", "date value in milliseconds from the epoch, e.g. 1415712224000"),
    ArgMeta::required("timestamp.in.milliseconds2", "LONG", "date value in milliseconds from the epoch, e.g. 1423456224000"),
];

static DATEDIFF_EXAMPLES: [&str; 2] = [
    "dateDiff('2014-11-11 13:23:44.657', '2014-11-11', 'yyyy-MM-dd HH:mm:ss.SSS', 'yyyy-MM-dd')",
    "dateDiff(1415712224000, 1423456224000)",
];

/// The registered `time:dateDiff` function
pub struct DateDiff;

/// Interpretation locked in at registration time
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// Two LONG epoch-millisecond arguments
    EpochPair,
    /// STRING date values. With `default_format` the two-argument form is
    /// in use and the layout applies to both values; without it the
    /// patterns arrive as arguments 3 and 4 on every call.
    FormattedPair { default_format: Option<String> },
}

impl ScalarFunction for DateDiff {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "dateDiff",
            namespace: "time",
            description: "Returns the number of whole days between two dates.",
            usage: "dateDiff(date.value1, date.value2, date.format1, date.format2) or dateDiff(timestamp.in.milliseconds1, timestamp.in.milliseconds2)",
            args: &DATEDIFF_ARGS,
            returns: "LONG",
            examples: &DATEDIFF_EXAMPLES,
        }
    }

    fn init(
        &self,
        args: &[ArgDescriptor],
        ctx: &AppContext,
    ) -> Result<Box<dyn ScalarExecutor>, ValidationError> {
        let mode = match args.len() {
            4 => {
                for (index, descriptor) in args.iter().enumerate() {
                    if descriptor.declared != AttributeType::String {
                        return Err(ValidationError::InvalidArgumentType {
                            function: FORMATTED_USAGE,
                            position: index + 1,
                            expected: AttributeType::String,
                            found: descriptor.declared,
                        });
                    }
                }
                Mode::FormattedPair { default_format: None }
            }
            2 => {
                if args[0].declared == AttributeType::Long {
                    if args[1].declared != AttributeType::Long {
                        return Err(ValidationError::InvalidArgumentType {
                            function: EPOCH_USAGE,
                            position: 2,
                            expected: AttributeType::Long,
                            found: args[1].declared,
                        });
                    }
                    Mode::EpochPair
                } else {
                    // anything but a LONG first argument selects the
                    // formatted interpretation, so both must be STRING
                    for (index, descriptor) in args.iter().enumerate() {
                        if descriptor.declared != AttributeType::String {
                            return Err(ValidationError::InvalidArgumentType {
                                function: FORMATTED_USAGE,
                                position: index + 1,
                                expected: AttributeType::String,
                                found: descriptor.declared,
                            });
                        }
                    }
                    Mode::FormattedPair {
                        default_format: Some(DEFAULT_DATE_FORMAT.to_string()),
                    }
                }
            }
            found => {
                return Err(ValidationError::InvalidArity {
                    function: FUNCTION,
                    expected: "2 or 4",
                    found,
                });
            }
        };

        debug!(app = ctx.name(), ?mode, "registered time:dateDiff");
        Ok(Box::new(DateDiffExecutor { mode }))
    }
}

/// Executor bound to one registration. The mode never changes; every
/// call resolves both instants into locals of its own.
#[derive(Debug)]
struct DateDiffExecutor {
    mode: Mode,
}

impl DateDiffExecutor {
    fn resolve_pair(&self, values: &[Value]) -> Result<(Timestamp, Timestamp), EvalError> {
        match &self.mode {
            Mode::EpochPair => {
                let first = read_long(values, 0)?;
                let second = read_long(values, 1)?;
                Ok((
                    Timestamp::from_epoch_millis(first),
                    Timestamp::from_epoch_millis(second),
                ))
            }
            Mode::FormattedPair { default_format } => {
                let value1 = read_string(values, 0)?;
                let value2 = read_string(values, 1)?;
                let (format1, format2) = match default_format {
                    Some(pattern) => (pattern.as_str(), pattern.as_str()),
                    None => (read_string(values, 2)?, read_string(values, 3)?),
                };
                Ok((parse_instant(format1, value1)?, parse_instant(format2, value2)?))
            }
        }
    }
}

impl ScalarExecutor for DateDiffExecutor {
    fn execute(&self, values: &[Value]) -> Result<Value, EvalError> {
        let (first, second) = self.resolve_pair(values)?;
        // i64 division truncates toward zero, keeping the sign
        let days = (first.epoch_millis() - second.epoch_millis()) / MILLIS_PER_DAY;
        Ok(Value::Long(days))
    }

    fn return_type(&self) -> AttributeType {
        AttributeType::Long
    }
}

fn require<'a>(values: &'a [Value], index: usize, function: &'static str) -> Result<&'a Value, EvalError> {
    match values.get(index) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(EvalError::NullArgument {
            function,
            position: index + 1,
        }),
    }
}

fn read_long(values: &[Value], index: usize) -> Result<i64, EvalError> {
    let value = require(values, index, EPOCH_USAGE)?;
    value.as_long().ok_or(EvalError::TypeCoercion {
        function: EPOCH_USAGE,
        position: index + 1,
        expected: AttributeType::Long,
        found: value.type_name(),
    })
}

fn read_string<'a>(values: &'a [Value], index: usize) -> Result<&'a str, EvalError> {
    let value = require(values, index, FORMATTED_USAGE)?;
    value.as_str().ok_or(EvalError::TypeCoercion {
        function: FORMATTED_USAGE,
        position: index + 1,
        expected: AttributeType::String,
        found: value.type_name(),
    })
}

fn parse_instant(pattern: &str, value: &str) -> Result<Timestamp, EvalError> {
    let format = DateFormat::new(pattern).map_err(|e| format_mismatch(pattern, value, e))?;
    format.parse(value).map_err(|e| format_mismatch(pattern, value, e))
}

fn format_mismatch(pattern: &str, value: &str, reason: TimeError) -> EvalError {
    EvalError::FormatMismatch {
        pattern: pattern.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
