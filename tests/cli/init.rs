use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created i18n-sheets.config.json\n");

    let content = test.read_file("i18n-sheets.config.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["delimiter"], ".");
    assert!(parsed.get("categories").is_some());
    assert!(parsed.get("sheetId").is_some());
    assert!(content.contains("\n  \"delimiter\""), "2-space indentation");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n-sheets.config.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("i18n-sheets.config.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_points_at_google() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;

    // The starter config has no credentials yet, so fetching fails on auth
    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Authentication failed"));
    Ok(())
}
