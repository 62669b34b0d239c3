//! Tests for queue configuration

use campusq::config::QueueConfig;
use campusq::models::{Kind, Priority};

#[test]
fn test_defaults() {
    let config = QueueConfig::default();
    assert_eq!(config.application_prefix, "APP");
    assert_eq!(config.complaint_prefix, "CMP");
    assert_eq!(config.default_priority, Priority::Normal);
}

#[test]
fn test_prefix_for() {
    let config = QueueConfig::default();
    assert_eq!(config.prefix_for(Kind::Application), "APP");
    assert_eq!(config.prefix_for(Kind::Complaint), "CMP");
}

#[test]
fn test_deserialize_empty_table() {
    let config: QueueConfig = toml::from_str("").unwrap();
    assert_eq!(config.application_prefix, "APP");
    assert_eq!(config.default_priority, Priority::Normal);
}

#[test]
fn test_deserialize_overrides() {
    let config: QueueConfig = toml::from_str(
        r#"
application_prefix = "REQ"
default_priority = "low"
"#,
    )
    .unwrap();
    assert_eq!(config.application_prefix, "REQ");
    assert_eq!(config.complaint_prefix, "CMP");
    assert_eq!(config.default_priority, Priority::Low);
}

#[test]
fn test_deserialize_medium_default_priority() {
    let config: QueueConfig = toml::from_str(r#"default_priority = "medium""#).unwrap();
    assert_eq!(config.default_priority, Priority::Normal);
}
