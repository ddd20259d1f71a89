//! Loggable field kinds and their canonical output keys
//!
//! A `FieldKind` names one attribute of a log record. The configured field
//! sequence decides which attributes a line carries and in which order;
//! duplicates are permitted and render twice.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Timestamp,
    Level,
    Hostname,
    ProcessId,
    ThreadId,
    Username,
    Version,
    Message,
    Function,
    FileName,
}

impl FieldKind {
    /// Canonical key for this field in structured (JSON) output.
    ///
    /// The key set is fixed; `ThreadId`'s key doubles as the literal prefix
    /// label in delimited output (`gid:<n>`).
    pub fn key(&self) -> &'static str {
        match self {
            FieldKind::Timestamp => "timestamp",
            FieldKind::Level => "loglevel",
            FieldKind::Hostname => "hostname",
            FieldKind::ProcessId => "pid",
            FieldKind::ThreadId => "gid",
            FieldKind::Username => "username",
            FieldKind::Version => "version",
            FieldKind::Message => "msg",
            FieldKind::Function => "func",
            FieldKind::FileName => "filename",
        }
    }

    /// Every field kind in the default output order.
    pub fn canonical_order() -> [FieldKind; 10] {
        [
            FieldKind::Timestamp,
            FieldKind::Level,
            FieldKind::Hostname,
            FieldKind::ProcessId,
            FieldKind::ThreadId,
            FieldKind::Username,
            FieldKind::Version,
            FieldKind::Message,
            FieldKind::Function,
            FieldKind::FileName,
        ]
    }
}
