use std::path::PathBuf;

use super::*;

#[test]
fn cli_positional_arguments() {
    let cli = Cli::parse_from(["buildlog-guard", "build.log", "10", "0", "25", "1"]);

    assert_eq!(cli.log_path, PathBuf::from("build.log"));
    assert_eq!(cli.min_pass.as_deref(), Some("10"));
    assert_eq!(cli.max_undefined_reference.as_deref(), Some("1"));
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.no_config);
}

#[test]
fn cli_thresholds_are_optional() {
    let cli = Cli::parse_from(["buildlog-guard", "build.log", "3"]);

    let overrides = cli.threshold_overrides().unwrap();

    assert_eq!(overrides.min_pass, Some(3));
    assert_eq!(overrides.max_fail, None);
    assert_eq!(overrides.max_warning, None);
    assert_eq!(overrides.max_undefined_reference, None);
}

#[test]
fn cli_requires_log_path() {
    assert!(Cli::try_parse_from(["buildlog-guard"]).is_err());
}

#[test]
fn cli_rejects_fifth_threshold() {
    assert!(Cli::try_parse_from(["buildlog-guard", "b.log", "1", "2", "3", "4", "5"]).is_err());
}

#[test]
fn cli_options() {
    let cli = Cli::parse_from([
        "buildlog-guard",
        "build.log",
        "--config",
        "gate.toml",
        "--format",
        "json",
        "--output",
        "report.json",
        "-vv",
    ]);

    assert_eq!(cli.config, Some(PathBuf::from("gate.toml")));
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.output, Some(PathBuf::from("report.json")));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_config_conflicts_with_no_config() {
    let result = Cli::try_parse_from([
        "buildlog-guard",
        "build.log",
        "--config",
        "gate.toml",
        "--no-config",
    ]);

    assert!(result.is_err());
}

#[test]
fn threshold_overrides_parse_all_four() {
    let cli = Cli::parse_from(["buildlog-guard", "build.log", "10", "0", "25", "1"]);

    let thresholds = cli.threshold_overrides().unwrap().resolve().unwrap();

    assert_eq!(thresholds, crate::checker::Thresholds::new(10, 0, 25, 1));
}

#[test]
fn threshold_overrides_reject_non_numeric() {
    let cli = Cli::parse_from(["buildlog-guard", "build.log", "10", "many"]);

    let err = cli.threshold_overrides().unwrap_err();

    match err {
        BuildLogError::InvalidThreshold { name, value, .. } => {
            assert_eq!(name, "maxFail");
            assert_eq!(value, "many");
        }
        other => panic!("expected InvalidThreshold, got {other:?}"),
    }
}

#[test]
fn threshold_overrides_reject_negative() {
    let cli = Cli::parse_from(["buildlog-guard", "build.log", "-1"]);

    assert!(matches!(
        cli.threshold_overrides(),
        Err(BuildLogError::InvalidThreshold {
            name: "minPass",
            ..
        })
    ));
}

#[test]
fn threshold_overrides_reject_decimal() {
    let cli = Cli::parse_from(["buildlog-guard", "build.log", "1", "1", "2.5"]);

    assert!(cli.threshold_overrides().is_err());
}
