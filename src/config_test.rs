use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.app_title, "Student Portal");
    assert_eq!(config.session_storage_key, "student_portal_session");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn values_are_trimmed() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("PORTAL_APP_TITLE", "  Campus Hub "),
        ("PORTAL_SESSION_KEY", "hub_session"),
        ("PORTAL_LOG_LEVEL", " debug "),
    ]))
    .unwrap();
    assert_eq!(config.app_title, "Campus Hub");
    assert_eq!(config.session_storage_key, "hub_session");
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn log_level_is_case_insensitive() {
    let config = AppConfig::from_lookup(lookup_from(&[("PORTAL_LOG_LEVEL", "WARN")])).unwrap();
    assert_eq!(config.log_level, log::Level::Warn);
}

#[test]
fn blank_value_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORTAL_SESSION_KEY", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyValue { var: "PORTAL_SESSION_KEY" });
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORTAL_LOG_LEVEL", "loud")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidLogLevel { var: "PORTAL_LOG_LEVEL", value: "loud".to_owned() });
    assert_eq!(err.to_string(), "PORTAL_LOG_LEVEL has unknown log level \"loud\"");
}
