//! Tests for format selection and document decoding.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde::Deserialize;

use super::*;
use crate::SettingsError;

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Endpoint {
    #[serde(default)]
    address: String,
    #[serde(default)]
    port: u16,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Optional {
    name: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Deserialize, PartialEq)]
enum Mode {
    Custom { x: u32 },
    Other { y: u32 },
    Idle,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Modes {
    mode: Mode,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Ids {
    ids: HashMap<u32, String>,
}

fn yaml<T: DeserializeOwned>(contents: &str) -> Result<T> {
    decode(Path::new("settings.yaml"), contents).map_err(|err| anyhow!("{err}"))
}

#[rstest]
#[case("settings.yaml")]
#[case("settings.YML")]
#[case("settings.conf")]
#[case("settings")]
fn yaml_is_the_fallback_format(#[case] name: &str) -> Result<()> {
    let format = Format::for_path(Path::new(name)).map_err(|err| anyhow!("{err}"))?;
    ensure!(format == Format::Yaml, "expected YAML for {name}, got {format:?}");
    Ok(())
}

#[cfg(feature = "toml")]
#[rstest]
fn toml_documents_decode_when_enabled() -> Result<()> {
    let endpoint: Endpoint = decode(
        Path::new("settings.toml"),
        "address = \"10.0.0.1\"\nport = 9000",
    )
    .map_err(|err| anyhow!("{err}"))?;
    ensure!(endpoint.address == "10.0.0.1" && endpoint.port == 9000);
    Ok(())
}

#[cfg(not(feature = "json"))]
#[rstest]
fn json_requires_feature() {
    let err = Format::for_path(Path::new("settings.json"));
    assert!(matches!(
        err,
        Err(SettingsError::UnsupportedFormat { ref extension, .. }) if extension == "json"
    ));
}

#[rstest]
fn yaml_mapping_decodes_scalars() -> Result<()> {
    let endpoint: Endpoint = yaml("address: 127.0.0.1\nport: 8080\n")?;
    ensure!(
        endpoint
            == Endpoint {
                address: String::from("127.0.0.1"),
                port: 8080,
            },
        "unexpected endpoint {endpoint:?}"
    );
    Ok(())
}

#[rstest]
#[case::keyword("name: null\nport: null\n")]
#[case::tilde("name: ~\nport: ~\n")]
#[case::empty_value("name:\nport:\n")]
fn yaml_nulls_decode_as_none(#[case] contents: &str) -> Result<()> {
    let optional: Optional = yaml(contents)?;
    ensure!(
        optional == Optional { name: None, port: None },
        "expected nulls, got {optional:?}"
    );
    Ok(())
}

#[rstest]
fn yaml_quoted_null_stays_a_string() -> Result<()> {
    let optional: Optional = yaml("name: \"null\"\nport: 8\n")?;
    ensure!(optional.name.as_deref() == Some("null") && optional.port == Some(8));
    Ok(())
}

#[rstest]
#[case("mode: {Other: {y: 2}}\n", Mode::Other { y: 2 })]
#[case("mode:\n  Custom:\n    x: 1\n", Mode::Custom { x: 1 })]
#[case("mode: Idle\n", Mode::Idle)]
fn yaml_enums_follow_the_document(#[case] contents: &str, #[case] expected: Mode) -> Result<()> {
    let modes: Modes = yaml(contents)?;
    ensure!(modes.mode == expected, "got {:?}", modes.mode);
    Ok(())
}

#[rstest]
fn yaml_maps_accept_integer_keys() -> Result<()> {
    let ids: Ids = yaml("ids:\n  1: one\n  7: seven\n")?;
    ensure!(ids.ids.get(&1).map(String::as_str) == Some("one"));
    ensure!(ids.ids.get(&7).map(String::as_str) == Some("seven"));
    Ok(())
}

#[rstest]
#[case("")]
#[case("   \n\n")]
fn blank_documents_decode_as_empty_mapping(#[case] contents: &str) -> Result<()> {
    let endpoint: Endpoint = yaml(contents)?;
    ensure!(endpoint == Endpoint::default());
    ensure!(is_blank(contents));
    Ok(())
}

#[rstest]
fn blank_document_needs_defaults_for_required_fields() {
    let result: SettingsResult<Modes> = decode(Path::new("settings.yaml"), "");
    assert!(matches!(result, Err(SettingsError::Decode { .. })));
}

#[rstest]
#[case::sequence("- 1\n- 2\n")]
#[case::scalar("just a string\n")]
#[case::malformed("address: [unterminated\n")]
fn non_mapping_yaml_is_a_decode_error(#[case] contents: &str) {
    let result: SettingsResult<Endpoint> = decode(Path::new("settings.yaml"), contents);
    assert!(
        matches!(result, Err(SettingsError::Decode { .. })),
        "expected {contents:?} to be rejected"
    );
}

#[rstest]
fn invalid_utf8_is_a_decode_error() {
    let err = document_text(Path::new("settings.yaml"), vec![0xff, 0xfe, 0x00]);
    assert!(matches!(err, Err(SettingsError::Decode { .. })));
}
