//! Logger configuration
//!
//! Holds everything that shapes an output line: destination, debug
//! visibility, version string, separator, timestamp pattern, the ordered
//! field sequence, and the rendering strategy. Every knob has a canonical
//! default so `Config::default()` is a complete, usable configuration.

use super::field::FieldKind;
use super::format::OutputFormat;
use std::path::PathBuf;

/// Version stamped into the `version` field when none is configured.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Separator between fields in delimited output.
pub const DEFAULT_SEPARATOR: &str = "\t";

/// ISO-8601-like timestamp pattern with millisecond precision and offset,
/// e.g. `2025-01-08T10:30:45.123+09:00`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

#[derive(Debug, Clone)]
pub struct Config {
    /// Destination file; `None` logs to standard output.
    pub logfile: Option<PathBuf>,
    /// When `false`, debug-level calls are silent no-ops.
    pub show_debug: bool,
    /// Value of the `version` field.
    pub version: String,
    /// Separator between fields in delimited output.
    pub separator: String,
    /// strftime pattern for the `timestamp` field.
    pub time_format: String,
    /// Ordered fields to emit. Order is output order; duplicates permitted.
    pub fields: Vec<FieldKind>,
    /// Line rendering strategy.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logfile: None,
            show_debug: true,
            version: DEFAULT_VERSION.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            fields: FieldKind::canonical_order().to_vec(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Create a configuration with all defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination file
    #[must_use]
    pub fn with_logfile(mut self, path: impl Into<PathBuf>) -> Self {
        self.logfile = Some(path.into());
        self
    }

    /// Set debug visibility
    #[must_use]
    pub fn with_show_debug(mut self, show: bool) -> Self {
        self.show_debug = show;
        self
    }

    /// Set the version string
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the field separator
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the strftime timestamp pattern
    #[must_use]
    pub fn with_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.time_format = pattern.into();
        self
    }

    /// Replace the ordered field sequence
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<FieldKind>) -> Self {
        self.fields = fields;
        self
    }

    /// Set the rendering strategy
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
