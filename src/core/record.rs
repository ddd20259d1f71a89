//! One in-flight log record and its field value producers
//!
//! A `LogRecord` borrows everything a single log call needs and lives only
//! until its line is written. `field_value` is the producer dispatch: given
//! a `FieldKind` it renders that field's string value. Producers have no
//! side effects and are repeatable for identical inputs, timestamp excepted.

use super::caller::CallerInfo;
use super::config::Config;
use super::field::FieldKind;
use super::host::HostIdentity;
use super::level::LogLevel;
use chrono::Local;

pub struct LogRecord<'a> {
    pub config: &'a Config,
    pub host: &'a HostIdentity,
    pub level: LogLevel,
    pub message: &'a str,
    pub caller: CallerInfo,
}

impl LogRecord<'_> {
    /// Render the value of one configured field.
    pub fn field_value(&self, kind: FieldKind) -> String {
        match kind {
            FieldKind::Timestamp => Local::now().format(&self.config.time_format).to_string(),
            FieldKind::Level => self.level.to_str().to_string(),
            FieldKind::Hostname => self.host.hostname.clone(),
            FieldKind::ProcessId => std::process::id().to_string(),
            FieldKind::ThreadId => {
                format!("{}:{}", FieldKind::ThreadId.key(), current_thread_numeric_id())
            }
            FieldKind::Username => self.host.username.clone(),
            FieldKind::Version => self.config.version.clone(),
            FieldKind::Message => self.message.to_string(),
            FieldKind::Function => self.caller.function.clone(),
            FieldKind::FileName => self.caller.file_line(),
        }
    }
}

/// Numeric identifier of the current thread.
///
/// `ThreadId` exposes no stable numeric accessor, so the id is extracted
/// from its Debug form, `ThreadId(<n>)`.
fn current_thread_numeric_id() -> u64 {
    let raw = format!("{:?}", std::thread::current().id());
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(config: &'a Config, host: &'a HostIdentity, message: &'a str) -> LogRecord<'a> {
        LogRecord {
            config,
            host,
            level: LogLevel::Info,
            message,
            caller: CallerInfo::default(),
        }
    }

    #[test]
    fn test_level_label() {
        let config = Config::default();
        let host = HostIdentity::default();
        let rec = LogRecord {
            level: LogLevel::Warning,
            ..record(&config, &host, "")
        };
        assert_eq!(rec.field_value(FieldKind::Level), "WARNING");
    }

    #[test]
    fn test_message_is_verbatim() {
        let config = Config::default();
        let host = HostIdentity::default();
        let rec = record(&config, &host, "disk  almost\tfull");
        assert_eq!(rec.field_value(FieldKind::Message), "disk  almost\tfull");
    }

    #[test]
    fn test_process_id_is_decimal_pid() {
        let config = Config::default();
        let host = HostIdentity::default();
        let rec = record(&config, &host, "");
        assert_eq!(
            rec.field_value(FieldKind::ProcessId),
            std::process::id().to_string()
        );
    }

    #[test]
    fn test_thread_id_is_prefixed() {
        let config = Config::default();
        let host = HostIdentity::default();
        let rec = record(&config, &host, "");
        let value = rec.field_value(FieldKind::ThreadId);
        let digits = value.strip_prefix("gid:").expect("gid: prefix");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_version_default() {
        let config = Config::default();
        let host = HostIdentity::default();
        let rec = record(&config, &host, "");
        assert_eq!(rec.field_value(FieldKind::Version), "1.0.0");
    }

    #[test]
    fn test_host_fields_come_from_identity() {
        let config = Config::default();
        let host = HostIdentity {
            hostname: "buildbox".to_string(),
            username: "ci".to_string(),
        };
        let rec = record(&config, &host, "");
        assert_eq!(rec.field_value(FieldKind::Hostname), "buildbox");
        assert_eq!(rec.field_value(FieldKind::Username), "ci");
    }

    #[test]
    fn test_caller_fields() {
        let config = Config::default();
        let host = HostIdentity::default();
        let rec = LogRecord {
            caller: CallerInfo {
                function: "serve".to_string(),
                file: "server.rs".to_string(),
                line: 17,
            },
            ..record(&config, &host, "")
        };
        assert_eq!(rec.field_value(FieldKind::Function), "serve");
        assert_eq!(rec.field_value(FieldKind::FileName), "[server.rs:17]");
    }

    #[test]
    fn test_unresolved_caller_renders_empty() {
        let config = Config::default();
        let host = HostIdentity::default();
        let rec = record(&config, &host, "");
        assert_eq!(rec.field_value(FieldKind::Function), "");
        assert_eq!(rec.field_value(FieldKind::FileName), "");
    }

    #[test]
    fn test_timestamp_uses_configured_pattern() {
        let config = Config::new().with_time_format("%Y");
        let host = HostIdentity::default();
        let rec = record(&config, &host, "");
        let value = rec.field_value(FieldKind::Timestamp);
        assert_eq!(value.len(), 4);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }
}
