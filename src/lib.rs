//! # Fieldlog
//!
//! A field-oriented log line formatter: every record is assembled from a
//! configurable ordered list of fields (timestamp, severity, host, process
//! id, caller identity, message, source location) and rendered either as a
//! delimiter-separated line or a single-line JSON object.
//!
//! ## Features
//!
//! - **Configurable Fields**: Pick which fields appear and in what order
//! - **Two Output Forms**: Delimited lines or single-line JSON objects
//! - **Call-Site Metadata**: Caller function name and `[file:line]` per record
//! - **Thread Safe**: One mutex around the destination; lines never interleave
//!
//! ## Example
//!
//! ```no_run
//! use fieldlog::prelude::*;
//!
//! let logger = Logger::new(Config::new().with_logfile("app.log"));
//! logger.info("server started");
//! logger.close().unwrap();
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        CallerInfo, Config, FieldKind, HostIdentity, LogLevel, LogRecord, Logger, LoggerError,
        OutputFormat, Result, Sink,
    };
}

pub use core::{
    CallerInfo, Config, FieldKind, HostIdentity, LogLevel, LogRecord, Logger, LoggerError,
    OutputFormat, Result, Sink, DEFAULT_SEPARATOR, DEFAULT_TIME_FORMAT, DEFAULT_VERSION,
};
