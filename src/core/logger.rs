//! Main logger implementation

use super::{
    caller,
    config::Config,
    error::Result,
    field::FieldKind,
    format::OutputFormat,
    host::HostIdentity,
    level::LogLevel,
    record::LogRecord,
    sink::Sink,
};

/// Stack frames between `caller::resolve` and the application call site.
///
/// Every public entry point (`log`, `debug`, `info`, `warning`, `error`,
/// `fatal`, `panic`) is exactly one frame above [`Logger::emit`], which
/// invokes the resolver, so the depth is two for all of them. Both layers
/// are `#[inline(never)]` to pin that count; adding or removing a wrapper
/// on this path must be matched here. The macros in `crate::macros` expand
/// inline and add no frame.
const ENTRY_SKIP_FRAMES: usize = 2;

pub struct Logger {
    config: Config,
    host: HostIdentity,
    sink: Sink,
}

impl Logger {
    /// Build a logger, terminating the process when the destination cannot
    /// be opened.
    ///
    /// Fail-fast is deliberate: a logger without a destination cannot
    /// fulfill its contract, so construction failure is a fatal dependency
    /// failure. Use [`Logger::try_new`] in embedding contexts that cannot
    /// tolerate process exit.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let sink = Sink::open(config.logfile.as_deref());
        Self {
            config,
            host: HostIdentity::resolve(),
            sink,
        }
    }

    /// Build a logger, returning an error instead of exiting when the
    /// destination cannot be opened.
    pub fn try_new(config: Config) -> Result<Self> {
        let sink = Sink::try_open(config.logfile.as_deref())?;
        Ok(Self {
            config,
            host: HostIdentity::resolve(),
            sink,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set the version string for subsequent records.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.config.version = version.into();
    }

    /// Set the delimited-output separator for subsequent records.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.config.separator = separator.into();
    }

    /// Set the strftime timestamp pattern for subsequent records.
    pub fn set_time_format(&mut self, pattern: impl Into<String>) {
        self.config.time_format = pattern.into();
    }

    /// Replace the ordered field sequence for subsequent records.
    pub fn set_fields(&mut self, fields: Vec<FieldKind>) {
        self.config.fields = fields;
    }

    /// Switch the rendering strategy for subsequent records.
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.config.format = format;
    }

    /// Silence debug-level calls.
    pub fn mute_debug(&mut self) {
        self.config.show_debug = false;
    }

    /// Re-enable debug-level calls.
    pub fn unmute_debug(&mut self) {
        self.config.show_debug = true;
    }

    /// Flush buffered output to the destination.
    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Flush and release the destination.
    ///
    /// Must be called before process exit when a file destination is in
    /// use, or buffered bytes may be lost.
    pub fn close(&self) -> Result<()> {
        self.sink.close()
    }

    /// Format one record and append it to the sink.
    ///
    /// Write failures are swallowed: a secondary error path out of the
    /// logger would recurse straight back into it.
    #[inline(never)]
    fn emit(&self, level: LogLevel, message: String) {
        let record = LogRecord {
            config: &self.config,
            host: &self.host,
            level,
            message: &message,
            caller: caller::resolve(ENTRY_SKIP_FRAMES),
        };
        let line = self.config.format.render(&record);
        let _ = self.sink.write_line(&line);
    }

    /// Log a message at an explicit level.
    #[inline(never)]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level == LogLevel::Debug && !self.config.show_debug {
            return;
        }
        self.emit(level, message.into());
    }

    /// Log a debug-level message; a silent no-op while debug is muted.
    #[inline(never)]
    pub fn debug(&self, message: impl Into<String>) {
        if !self.config.show_debug {
            return;
        }
        self.emit(LogLevel::Debug, message.into());
    }

    /// Log an info-level message.
    #[inline(never)]
    pub fn info(&self, message: impl Into<String>) {
        self.emit(LogLevel::Info, message.into());
    }

    /// Log a warning-level message.
    #[inline(never)]
    pub fn warning(&self, message: impl Into<String>) {
        self.emit(LogLevel::Warning, message.into());
    }

    /// Log an error-level message.
    #[inline(never)]
    pub fn error(&self, message: impl Into<String>) {
        self.emit(LogLevel::Error, message.into());
    }

    /// Log a fatal-level message. The record is written; control returns
    /// to the caller.
    #[inline(never)]
    pub fn fatal(&self, message: impl Into<String>) {
        self.emit(LogLevel::Fatal, message.into());
    }

    /// Log a panic-level message, flush, then panic with a fixed
    /// description.
    ///
    /// Discouraged for general use; intended for callers that must halt on
    /// a critical condition after the record is safely written.
    #[inline(never)]
    pub fn panic(&self, message: impl Into<String>) -> ! {
        self.emit(LogLevel::Panic, message.into());
        let _ = self.flush();
        panic!("panic requested via Logger::panic");
    }
}

impl Default for Logger {
    /// A console logger with the canonical configuration.
    fn default() -> Self {
        Self::new(Config::default())
    }
}
