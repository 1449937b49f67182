use std::path::PathBuf;

use super::*;

fn render(error: &BuildLogError) -> String {
    let mut buf = Vec::new();
    ErrorOutput::new(false).write(&mut buf, error);
    String::from_utf8(buf).unwrap()
}

#[test]
fn file_read_error_with_detail_and_help() {
    let error = BuildLogError::FileRead {
        path: PathBuf::from("build.log"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
    };

    let output = render(&error);

    assert!(output.starts_with("✖ FileRead: Failed to read file: build.log\n"));
    assert!(output.contains("  × No such file\n"));
    assert!(output.contains("  help: Check that the log file path exists\n"));
}

#[test]
fn missing_threshold_has_no_detail() {
    let output = render(&BuildLogError::MissingThreshold { name: "maxFail" });

    assert!(output.starts_with("✖ Argument: Missing threshold: maxFail\n"));
    assert!(!output.contains('×'));
    assert!(output.contains("help:"));
}

#[test]
fn colored_output_contains_ansi_codes() {
    let error = BuildLogError::MissingThreshold { name: "minPass" };
    let mut buf = Vec::new();
    ErrorOutput::new(true).write(&mut buf, &error);
    let output = String::from_utf8(buf).unwrap();

    assert!(output.starts_with("\x1b[1m\x1b[31m✖ Argument:\x1b[0m Missing threshold: minPass"));
    assert!(output.contains("  \x1b[36mhelp:\x1b[0m "));
}

#[test]
fn plain_output_has_no_escape_codes() {
    let error = BuildLogError::InvalidThreshold {
        name: "maxFail",
        value: "x".to_string(),
        source: "x".parse::<usize>().unwrap_err(),
    };

    let output = render(&error);

    assert!(!output.contains('\x1b'));
    assert!(output.contains("  × invalid digit found in string\n"));
}
