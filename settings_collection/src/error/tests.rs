//! Unit tests for error classification and rendering.

use std::path::{Path, PathBuf};

use rstest::rstest;

use super::{SettingsError, decode_error, io_error};

#[rstest]
fn not_found_lists_searched_paths() {
    let err = SettingsError::not_found(
        "settings.yaml",
        vec![
            PathBuf::from("/etc/testapp/settings.yaml"),
            PathBuf::from("settings.yaml"),
        ],
    );
    let rendered = err.to_string();
    assert!(err.is_not_found());
    assert!(
        rendered.contains("/etc/testapp/settings.yaml, settings.yaml"),
        "unexpected message: {rendered}"
    );
}

#[rstest]
fn not_found_without_candidates_renders_placeholder() {
    let err = SettingsError::not_found("settings.yaml", Vec::new());
    assert!(err.to_string().ends_with("searched: <none>"));
}

#[rstest]
#[case::io(io_error(
    Path::new("/srv/app.yaml"),
    std::io::Error::from(std::io::ErrorKind::PermissionDenied),
))]
#[case::decode(decode_error(Path::new("/srv/app.yaml"), "bad indentation"))]
#[case::unsupported(SettingsError::UnsupportedFormat {
    path: PathBuf::from("/srv/app.yaml"),
    extension: String::from("json"),
})]
fn document_errors_expose_path(#[case] err: SettingsError) {
    assert_eq!(err.path(), Some(Path::new("/srv/app.yaml")));
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("/srv/app.yaml"));
}

#[rstest]
#[case::user(SettingsError::UserResolution)]
#[case::name(SettingsError::invalid_name("document name must not be empty"))]
#[case::missing(SettingsError::not_found("settings.yaml", Vec::new()))]
fn non_document_errors_have_no_path(#[case] err: SettingsError) {
    assert!(err.path().is_none());
}

#[rstest]
fn io_error_keeps_source() {
    let err = io_error(
        Path::new("settings.yaml"),
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert!(source.is_some(), "expected I/O source to be retained");
}
