//! Property-based tests for fieldlog using proptest

use fieldlog::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
        Just(LogLevel::Panic),
    ]
}

fn any_field_sequence() -> impl Strategy<Value = Vec<FieldKind>> {
    prop::collection::vec(
        prop::sample::select(FieldKind::canonical_order().to_vec()),
        1..=12,
    )
}

fn fixed_host() -> HostIdentity {
    HostIdentity {
        hostname: "prophost".to_string(),
        username: "propuser".to_string(),
    }
}

// ============================================================================
// LogLevel properties
// ============================================================================

proptest! {
    /// Label/parse round-trips for every level
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Ordering agrees with the numeric discriminants
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;
        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Display always matches the literal label
    #[test]
    fn test_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }
}

// ============================================================================
// Formatter properties
// ============================================================================

proptest! {
    /// For all non-empty field sequences, a delimited line splits into one
    /// segment per configured field plus the empty trailing one
    #[test]
    fn test_delimited_segment_count(fields in any_field_sequence(), level in any_level()) {
        let config = Config::new().with_fields(fields.clone());
        let host = fixed_host();
        let record = LogRecord {
            config: &config,
            host: &host,
            level,
            message: "steady",
            caller: CallerInfo::default(),
        };

        let line = OutputFormat::Delimited.render(&record);
        prop_assert_eq!(line.split('\t').count(), fields.len() + 1);
        prop_assert!(line.ends_with('\t'));
    }

    /// JSON output carries exactly the canonical keys of the configured
    /// fields, collapsed over duplicates
    #[test]
    fn test_json_key_set(fields in any_field_sequence(), level in any_level()) {
        let config = Config::new().with_fields(fields.clone());
        let host = fixed_host();
        let record = LogRecord {
            config: &config,
            host: &host,
            level,
            message: "steady",
            caller: CallerInfo::default(),
        };

        let line = OutputFormat::Json.render(&record);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        let obj = parsed.as_object().unwrap();

        let mut expected: Vec<&str> = fields.iter().map(|k| k.key()).collect();
        expected.sort_unstable();
        expected.dedup();

        let mut actual: Vec<&str> = obj.keys().map(String::as_str).collect();
        actual.sort_unstable();

        prop_assert_eq!(actual, expected);
    }

    /// JSON output is one line regardless of the configured sequence
    #[test]
    fn test_json_is_single_line(fields in any_field_sequence()) {
        let config = Config::new().with_fields(fields);
        let host = fixed_host();
        let record = LogRecord {
            config: &config,
            host: &host,
            level: LogLevel::Info,
            message: "steady",
            caller: CallerInfo::default(),
        };

        let line = OutputFormat::Json.render(&record);
        prop_assert!(!line.contains('\n'));
    }

    /// The severity label lands verbatim wherever a Level field appears
    #[test]
    fn test_level_label_appears_per_occurrence(level in any_level(), repeats in 1usize..4) {
        let config = Config::new().with_fields(vec![FieldKind::Level; repeats]);
        let host = fixed_host();
        let record = LogRecord {
            config: &config,
            host: &host,
            level,
            message: "",
            caller: CallerInfo::default(),
        };

        let line = OutputFormat::Delimited.render(&record);
        let segments: Vec<&str> = line.split('\t').collect();
        for segment in &segments[..repeats] {
            prop_assert_eq!(*segment, level.to_str());
        }
    }
}
