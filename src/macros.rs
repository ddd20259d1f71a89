//! Logging macros for variadic log calls.
//!
//! Each macro accepts any number of values implementing `Display`, joins
//! their renderings with single spaces into one message, and calls the
//! matching [`Logger`](crate::Logger) entry point. Zero values produce an
//! empty message. The macros expand inline and add no stack frame, so
//! call-site resolution reports the surrounding function.
//!
//! # Examples
//!
//! ```no_run
//! use fieldlog::prelude::*;
//! use fieldlog::info;
//!
//! let logger = Logger::new(Config::default());
//!
//! let port = 8080;
//! info!(logger, "listening on port", port);
//! ```

/// Join any number of `Display` values into one space-separated message.
#[doc(hidden)]
#[macro_export]
macro_rules! join_values {
    () => {
        ::std::string::String::new()
    };
    ($first:expr $(, $rest:expr)*) => {{
        use ::std::fmt::Write as _;
        let mut message = ::std::string::String::new();
        let _ = ::std::write!(message, "{}", $first);
        $(
            let _ = ::std::write!(message, " {}", $rest);
        )*
        message
    }};
}

/// Log any number of values at an explicit level.
///
/// # Examples
///
/// ```no_run
/// # use fieldlog::prelude::*;
/// # let logger = Logger::new(Config::default());
/// use fieldlog::log;
/// log!(logger, LogLevel::Error, "exit code", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $crate::join_values!($($arg),*))
    };
}

/// Log any number of values at debug level.
///
/// A silent no-op while debug is muted.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug($crate::join_values!($($arg),*))
    };
}

/// Log any number of values at info level.
///
/// # Examples
///
/// ```no_run
/// # use fieldlog::prelude::*;
/// # let logger = Logger::new(Config::default());
/// use fieldlog::info;
/// info!(logger, "processed", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($crate::join_values!($($arg),*))
    };
}

/// Log any number of values at warning level.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warning($crate::join_values!($($arg),*))
    };
}

/// Log any number of values at error level.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error($crate::join_values!($($arg),*))
    };
}

/// Log any number of values at fatal level.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal($crate::join_values!($($arg),*))
    };
}
