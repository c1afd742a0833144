mod common;

use common::harness;
use hybrid_logger::{Logger, LoggerOptions, LogLevel, PlatformKind};
use std::collections::HashMap;

fn web_logger(tag: &str, options: LoggerOptions) -> (Logger, common::Harness) {
    let h = harness(PlatformKind::Web);
    let logger = Logger::with_platform(tag, options, h.platform.clone());
    (logger, h)
}

#[test]
fn test_emits_iff_level_within_threshold() {
    for threshold in LogLevel::ALL {
        for level in LogLevel::ALL {
            let (logger, h) = web_logger("App", LoggerOptions::new().with_level(threshold));
            logger.log_at_level(level, "msg");

            let emitted = !h.console.is_empty();
            let expected = level != LogLevel::Silent && level <= threshold;
            assert_eq!(emitted, expected, "threshold={threshold} level={level}");
        }
    }
}

#[test]
fn test_warn_threshold_with_pictographic_label() {
    let (logger, h) = web_logger("App", LoggerOptions::new().with_level(LogLevel::Warn));

    logger.debug("x");
    logger.info("y");
    assert!(h.console.is_empty());

    logger.warn("z");
    assert_eq!(
        h.console.entries(),
        vec![("warn".to_string(), "🟠 [App]: z".to_string())]
    );
}

#[test]
fn test_ascii_label_follows_tag() {
    let (mut logger, h) = web_logger("Net", LoggerOptions::new().with_level(LogLevel::Debug));
    logger.set_label(LogLevel::Error, "ERR");

    logger.error("timeout");
    assert_eq!(
        h.console.entries(),
        vec![("error".to_string(), "[Net] ERR: timeout".to_string())]
    );
}

#[test]
fn test_empty_label_has_no_label_segment() {
    let options = LoggerOptions::new()
        .with_level(LogLevel::Debug)
        .with_labels([("info", "")]);
    let (logger, h) = web_logger("App", options);

    logger.info("plain");
    assert_eq!(h.console.lines(), vec!["[App]: plain".to_string()]);
}

#[test]
fn test_each_level_uses_its_own_channel() {
    let (logger, h) = web_logger("App", LoggerOptions::new().with_level(LogLevel::Debug));
    logger.error("e");
    logger.warn("w");
    logger.info("i");
    logger.log("l");
    logger.debug("d");
    logger.silent("s");

    let channels: Vec<String> = h.console.entries().into_iter().map(|(c, _)| c).collect();
    assert_eq!(channels, vec!["error", "warn", "info", "info", "debug"]);
}

#[test]
fn test_log_at_level_by_name() {
    let (logger, h) = web_logger("App", LoggerOptions::new().with_level(LogLevel::Debug));

    logger.log_at_level("debug", "by name");
    logger.log_at_level("Debug", "case mismatch falls back to info");
    logger.log_at_level("trace", "unknown falls back to info");

    assert_eq!(
        h.console.entries(),
        vec![
            ("debug".to_string(), "🔎 [App]: by name".to_string()),
            ("info".to_string(), "🟢 [App]: case mismatch falls back to info".to_string()),
            ("info".to_string(), "🟢 [App]: unknown falls back to info".to_string()),
        ]
    );
}

#[test]
fn test_log_at_level_name_still_filtered() {
    let (logger, h) = web_logger("App", LoggerOptions::new().with_level(LogLevel::Error));
    logger.log_at_level("nonsense", "info is above error");
    logger.log_at_level("silent", "never");
    assert!(h.console.is_empty());
}

#[test]
fn test_log_with_tag_does_not_change_tag() {
    let (logger, h) = web_logger("App", LoggerOptions::default());
    logger.log_with_tag_at_level(LogLevel::Warn, "Other", "once");
    logger.warn("again");

    assert_eq!(
        h.console.lines(),
        vec!["🟠 [Other]: once".to_string(), "🟠 [App]: again".to_string()]
    );
    assert_eq!(logger.tag(), "App");
}

#[test]
fn test_silent_threshold_suppresses_everything() {
    let (mut logger, h) = web_logger("App", LoggerOptions::default());
    logger.set_level(LogLevel::Silent);
    logger.error("e");
    logger.warn("w");
    logger.info("i");
    logger.debug("d");
    logger.dir(&serde_json::json!({ "a": 1 }));
    assert!(h.console.is_empty());
}

#[test]
fn test_empty_tag_is_ignored() {
    let (mut logger, h) = web_logger("App", LoggerOptions::default());
    logger.set_tag("");
    logger.set_tag("");
    assert_eq!(logger.tag(), "App");

    logger.set_tag("Net");
    logger.info("x");
    assert_eq!(h.console.lines(), vec!["🟢 [Net]: x".to_string()]);
}

#[test]
fn test_unknown_label_names_are_ignored() {
    let (mut logger, _h) = web_logger("App", LoggerOptions::default());
    let before = logger.labels();

    let mut labels = HashMap::new();
    labels.insert("trace".to_string(), "T".to_string());
    labels.insert("ERROR".to_string(), "E".to_string());
    logger.set_labels(&labels);
    assert_eq!(logger.labels(), before);

    labels.insert("warn".to_string(), "W".to_string());
    logger.set_labels(&labels);
    assert_eq!(logger.labels().get("warn").map(String::as_str), Some("W"));
    assert_eq!(logger.labels().get("error"), before.get("error"));
}

#[test]
fn test_labels_returns_snapshot() {
    let (logger, h) = web_logger("App", LoggerOptions::default());
    let mut labels = logger.labels();
    labels.insert("info".to_string(), "changed".to_string());

    logger.info("x");
    assert_eq!(h.console.lines(), vec!["🟢 [App]: x".to_string()]);
}

#[test]
fn test_level_name_round_trip() {
    let (mut logger, _h) = web_logger("App", LoggerOptions::default());
    logger.set_level_name("warn");
    assert_eq!(logger.level(), LogLevel::Warn);
    assert_eq!(logger.level_name(), "warn");

    logger.set_level_name("loud");
    assert_eq!(logger.level(), LogLevel::Warn);
}

#[test]
fn test_console_helpers_forwarded_on_web() {
    let (logger, h) = web_logger("App", LoggerOptions::default());
    logger.clear();
    logger.count(None);
    logger.count("clicks");
    logger.count_reset("clicks");
    logger.group("outer");
    logger.group_collapsed("inner");
    logger.group_end();
    logger.trace();
    logger.dir(&vec![1, 2, 3]);
    logger.table(&vec![("ana", 2)], Some(&["0".to_string()][..]));

    let channels: Vec<String> = h.console.entries().into_iter().map(|(c, _)| c).collect();
    assert_eq!(
        channels,
        vec![
            "clear",
            "count",
            "count",
            "countReset",
            "group",
            "groupCollapsed",
            "groupEnd",
            "trace",
            "dir",
            "table"
        ]
    );
    assert_eq!(h.console.entries()[1].1, "default");
    assert_eq!(h.console.entries()[8].1, "[1,2,3]");
    assert_eq!(h.console.entries()[9].1, "[[\"ana\",2]] [0]");
}

#[test]
fn test_instances_do_not_share_state() {
    let h = harness(PlatformKind::Web);
    let mut first = Logger::with_platform("A", LoggerOptions::default(), h.platform.clone());
    let second = Logger::with_platform("B", LoggerOptions::default(), h.platform.clone());

    first.set_level(LogLevel::Silent);
    first.set_label(LogLevel::Info, "I");

    assert_eq!(second.level(), LogLevel::Info);
    assert_eq!(second.labels().get("info").map(String::as_str), Some("🟢"));
}
