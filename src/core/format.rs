//! Line rendering strategies
//!
//! Two interchangeable forms behind one `render` entry point:
//! - Delimited: separator-joined values, separator after every field
//! - Json: single-line object keyed by each field's canonical key

use super::field::FieldKind;
use super::record::LogRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Separator-joined line. The separator follows every field, the last
    /// one included; the trailing separator is part of the wire format.
    #[default]
    Delimited,

    /// Single-line JSON object restricted to the configured fields.
    Json,
}

impl OutputFormat {
    /// Render a record according to this output format.
    pub fn render(&self, record: &LogRecord<'_>) -> String {
        match self {
            OutputFormat::Delimited => Self::render_delimited(record),
            OutputFormat::Json => Self::render_json(record),
        }
    }

    fn render_delimited(record: &LogRecord<'_>) -> String {
        let mut line = String::new();
        for kind in &record.config.fields {
            line.push_str(&record.field_value(*kind));
            line.push_str(&record.config.separator);
        }
        line
    }

    fn render_json(record: &LogRecord<'_>) -> String {
        let mut map = serde_json::Map::new();
        for kind in &record.config.fields {
            let mut value = record.field_value(*kind);
            if *kind == FieldKind::ThreadId {
                // the structured form stores the bare numeric id, no label
                if let Some((_, id)) = value.split_once(':') {
                    value = id.to_string();
                }
            }
            map.insert(kind.key().to_string(), serde_json::Value::String(value));
        }

        // Best effort on encoding failure: fall back to the delimited
        // rendering rather than dropping the line.
        serde_json::to_string(&map).unwrap_or_else(|_| Self::render_delimited(record))
    }
}
