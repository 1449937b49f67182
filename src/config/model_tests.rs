use super::*;

const fn full(
    min_pass: usize,
    max_fail: usize,
    max_warning: usize,
    max_undef: usize,
) -> ThresholdConfig {
    ThresholdConfig {
        min_pass: Some(min_pass),
        max_fail: Some(max_fail),
        max_warning: Some(max_warning),
        max_undefined_reference: Some(max_undef),
    }
}

#[test]
fn default_config_has_no_thresholds() {
    let config = Config::default();
    assert_eq!(config.thresholds, ThresholdConfig::default());
}

#[test]
fn merge_prefers_overrides() {
    let base = full(1, 2, 3, 4);
    let overrides = ThresholdConfig {
        max_fail: Some(20),
        ..ThresholdConfig::default()
    };

    let merged = base.merge(overrides);

    assert_eq!(merged, full(1, 20, 3, 4));
}

#[test]
fn merge_fills_gaps_from_base() {
    let base = ThresholdConfig {
        max_warning: Some(7),
        ..ThresholdConfig::default()
    };
    let overrides = ThresholdConfig {
        min_pass: Some(1),
        max_fail: Some(0),
        max_undefined_reference: Some(0),
        ..ThresholdConfig::default()
    };

    assert_eq!(base.merge(overrides), full(1, 0, 7, 0));
}

#[test]
fn resolve_full_config() {
    let thresholds = full(10, 0, 25, 1).resolve().unwrap();

    assert_eq!(thresholds, Thresholds::new(10, 0, 25, 1));
}

#[test]
fn resolve_reports_first_missing_threshold() {
    let partial = ThresholdConfig {
        min_pass: Some(1),
        max_fail: Some(1),
        ..ThresholdConfig::default()
    };

    let err = partial.resolve().unwrap_err();

    assert!(matches!(
        err,
        BuildLogError::MissingThreshold { name: "maxWarning" }
    ));
}

#[test]
fn deserialize_partial_table() {
    let config: Config = toml::from_str(
        r"
[thresholds]
min_pass = 3
max_undefined_reference = 0
",
    )
    .unwrap();

    assert_eq!(config.thresholds.min_pass, Some(3));
    assert_eq!(config.thresholds.max_fail, None);
    assert_eq!(config.thresholds.max_undefined_reference, Some(0));
}

#[test]
fn deserialize_rejects_unknown_keys() {
    let result: std::result::Result<Config, _> = toml::from_str(
        r"
[thresholds]
max_errors = 3
",
    );

    assert!(result.is_err());
}

#[test]
fn deserialize_rejects_negative_values() {
    let result: std::result::Result<Config, _> = toml::from_str(
        r"
[thresholds]
min_pass = -1
",
    );

    assert!(result.is_err());
}
