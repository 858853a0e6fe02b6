use std::io::Write;

use rust_multiplier::{utils::load_config, AdderKind, Error, Multiplier};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn load_wrapping_adder() {
    let file = write_config("adder = \"wrapping\"\n");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.adder, AdderKind::Wrapping);
    assert_eq!(
        Multiplier::new(config.adder).multiply(2, i64::MAX).unwrap(),
        -2
    );
}

#[test]
fn empty_config_uses_plain() {
    let file = write_config("");
    assert_eq!(load_config(file.path()).unwrap().adder, AdderKind::Plain);
}

#[test]
fn unknown_adder_rejected() {
    let file = write_config("adder = \"saturating\"\n");
    assert!(matches!(
        load_config(file.path()),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn unknown_field_rejected() {
    let file = write_config("adder = \"plain\"\nlimit = 3\n");
    assert!(matches!(
        load_config(file.path()),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_config(dir.path().join("missing.toml")),
        Err(Error::IoError(_))
    ));
}
