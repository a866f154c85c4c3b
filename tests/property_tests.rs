//! Property-based tests for rust_logger_registry using proptest

use proptest::prelude::*;
use rust_logger_registry::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level(), use_lower in any::<bool>()) {
        let as_str = if use_lower { level.to_str().to_lowercase() } else { level.to_str().to_string() };
        let parsed: LogLevel = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering matches the discriminants
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }
}

// ============================================================================
// LogEntry Message Sanitization Tests
// ============================================================================

proptest! {
    /// A message always renders as exactly one line
    #[test]
    fn test_message_is_single_line(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, message.clone());

        prop_assert!(!entry.message.contains('\n'));
        prop_assert!(!entry.message.contains('\r'));
        prop_assert!(!entry.message.contains('\t'));

        if message.contains('\n') {
            prop_assert!(entry.message.contains("\\n"));
        }
    }
}

// ============================================================================
// Registry Tests
// ============================================================================

proptest! {
    /// Console configurations install a logger at exactly the configured level
    #[test]
    fn test_registered_level_is_preserved(name in "[a-z][a-z0-9_]{0,15}", level in any_level()) {
        let registry = LoggerRegistry::new();
        registry.load_configuration(Some(name.as_str()), LoggerConfiguration::new(level)).unwrap();

        let logger = registry.logger(Some(name.as_str()));
        prop_assert_eq!(logger.min_level(), level);
        prop_assert_eq!(logger.label(), name.as_str());
    }

    /// The last registration under a name wins
    #[test]
    fn test_last_registration_wins(
        name in "[a-z]{1,12}",
        levels in proptest::collection::vec(any_level(), 1..8),
    ) {
        let registry = LoggerRegistry::new();
        for level in &levels {
            registry.load_configuration(Some(name.as_str()), LoggerConfiguration::new(*level)).unwrap();
        }

        prop_assert_eq!(registry.logger(Some(name.as_str())).min_level(), *levels.last().unwrap());
        // one named entry plus the self-healed main logger
        prop_assert_eq!(registry.len(), 2);
    }

    /// Names that were never registered resolve to the main logger
    #[test]
    fn test_unknown_names_fall_back_to_main(
        registered in "[a-m]{1,8}",
        lookup in "[n-z]{1,8}",
        main_level in any_level(),
    ) {
        let registry = LoggerRegistry::new();
        registry.load_configuration(None, LoggerConfiguration::new(main_level)).unwrap();
        registry.load_configuration(Some(registered.as_str()), LoggerConfiguration::new(LogLevel::Error)).unwrap();

        let resolved = registry.logger(Some(lookup.as_str()));
        prop_assert!(Arc::ptr_eq(&resolved, &registry.main_logger()));
        prop_assert_eq!(resolved.min_level(), main_level);
    }

    /// A file name without a directory never mutates the registry
    #[test]
    fn test_invalid_file_configuration_is_rejected(name in "[a-z]{1,8}", filename in "[a-z]{1,8}\\.log") {
        let registry = LoggerRegistry::new();
        let config = LoggerConfiguration {
            level: LogLevel::Info,
            log_dir: None,
            filename: Some(filename),
        };

        prop_assert!(registry.load_configuration(Some(name.as_str()), config).is_err());
        prop_assert!(registry.is_empty());
    }
}
