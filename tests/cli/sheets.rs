use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn setup() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n-sheets.config.json",
        r#"{
            "languages": ["en"],
            "output": "locales",
            "tabs": ["common"],
            "csvDir": "sheets"
        }"#,
    )?;
    test.write_file("sheets/Common.csv", "category,key,en\ncommon,hi,Hi\n")?;
    test.write_file("sheets/Drafts.csv", "category,key,en\n")?;
    Ok(test)
}

#[test]
fn test_sheets_lists_titles() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["--sheets"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Available sheets:\n  \u{2713} Common\n  \u{2718} Drafts (excluded)\n"
    );
    // Listing alone does not fetch
    assert!(!test.exists("locales"));
    Ok(())
}

#[test]
fn test_fetch_and_sheets_together() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["-f", "-s"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Successfully generated 1 i18n file!"));
    assert!(out.ends_with("Available sheets:\n  \u{2713} Common\n  \u{2718} Drafts (excluded)\n"));
    assert!(test.exists("locales/en/common.json"));
    Ok(())
}
