//! Property-based tests for sinklog using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use sinklog::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn count(_event: &LogEvent<'_>, hits: &Arc<AtomicUsize>) {
    hits.fetch_add(1, Ordering::SeqCst);
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Level names roundtrip through FromStr and never change between calls
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        prop_assert_eq!(as_str, level.to_str());
        let parsed: LogLevel = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Ordering agrees with the numeric discriminants
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Distinct levels have distinct names
    #[test]
    fn test_log_level_names_distinct(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 == level2, level1.to_str() == level2.to_str());
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    /// A sink fires exactly when the event level reaches its threshold
    #[test]
    fn test_sink_threshold_is_monotonic(threshold in any_level(), level in any_level()) {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut logger = Logger::builder().quiet(true).build().unwrap();
        logger.add_callback(count, Arc::clone(&hits), threshold).unwrap();

        logger.log(level, "prop.rs", 1, format_args!("event"));

        let expected = usize::from(level >= threshold);
        prop_assert_eq!(hits.load(Ordering::SeqCst), expected);
    }

    /// Global floor and per-sink threshold combine as a conjunction
    #[test]
    fn test_global_and_sink_thresholds(
        global in any_level(),
        threshold in any_level(),
        level in any_level(),
    ) {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut logger = Logger::builder().quiet(true).min_level(global).build().unwrap();
        logger.add_callback(count, Arc::clone(&hits), threshold).unwrap();

        logger.log(level, "prop.rs", 1, format_args!("event"));

        let expected = usize::from(level >= global && level >= threshold);
        prop_assert_eq!(hits.load(Ordering::SeqCst), expected);
    }

    /// Registration succeeds up to capacity and fails after, leaving the sinks intact
    #[test]
    fn test_capacity_bound(capacity in 1usize..40, extra in 1usize..5) {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut logger = Logger::builder().quiet(true).max_sinks(capacity).build().unwrap();

        for _ in 0..capacity {
            prop_assert!(logger.add_callback(count, Arc::clone(&hits), LogLevel::Trace).is_ok());
        }
        for _ in 0..extra {
            let result = logger.add_callback(count, Arc::clone(&hits), LogLevel::Trace);
            let full = matches!(
                result,
                Err(LoggerError::CapacityExceeded { capacity: c }) if c == capacity
            );
            prop_assert!(full);
        }

        prop_assert_eq!(logger.sink_count(), capacity);
        logger.log(LogLevel::Info, "prop.rs", 1, format_args!("event"));
        prop_assert_eq!(hits.load(Ordering::SeqCst), capacity);
    }

    /// Sinks render exactly what `format!` renders
    #[test]
    fn test_rendered_message_matches_format(word in "[a-zA-Z ]{0,20}", number in any::<i64>()) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut logger = Logger::builder().quiet(true).build().unwrap();
        logger
            .add_callback(
                |event, seen: &Arc<Mutex<Vec<String>>>| seen.lock().push(event.message()),
                Arc::clone(&seen),
                LogLevel::Trace,
            )
            .unwrap();

        logger.log(LogLevel::Info, "prop.rs", 1, format_args!("{word}={number:>8}"));

        let expected = [format!("{word}={number:>8}")];
        let seen = seen.lock();
        prop_assert_eq!(seen.as_slice(), &expected[..]);
    }
}

// ============================================================================
// Location Tests
// ============================================================================

proptest! {
    /// Aligned locations are exactly `width` chars whenever the line number fits
    #[test]
    fn test_aligned_location_width(
        file in "[a-z/_]{1,40}\\.rs",
        line in 1u32..100000u32,
        width in 10usize..40,
    ) {
        let rendered = LocationStyle::Aligned(width).render(&file, line);
        let line_str = format!(":{}", line);

        prop_assert_eq!(rendered.chars().count(), width);
        prop_assert!(rendered.ends_with(&line_str));
        if file.len() + line_str.len() > width {
            prop_assert!(rendered.starts_with("..."));
        } else {
            prop_assert!(rendered.trim_start().starts_with(file.as_str()));
        }
    }
}
