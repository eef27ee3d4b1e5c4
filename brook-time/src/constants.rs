//! Time namespace constants

/// Date format applied to both values when the two-argument string form
/// of `time:dateDiff` is used. Registered pipelines depend on this exact
/// layout; do not change it.
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd HH:mm:ss.SSS";
