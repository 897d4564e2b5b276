use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const CONFIG: &str = r#"{
    "categories": ["section", "key"],
    "staticLanguages": ["en"],
    "dynamicLanguages": ["fr"],
    "staticOutput": "./static",
    "dynamicOutput": "./dynamic",
    "excludedTabs": ["Drafts"],
    "csvDir": "./sheets"
}"#;

const COMMON_CSV: &str = "\
section,key,ignore,en,fr
common,greeting,,Hello,
common,bye,,Bye,Au revoir
#,hidden,,Hidden,Cache
common,skipped,yes,Skipped,Saute
errors,Not found. Try again.,,Not found,Introuvable
";

fn setup() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("i18n-sheets.config.json", CONFIG)?;
    test.write_file("sheets/Common.csv", COMMON_CSV)?;
    test.write_file("sheets/Drafts.csv", "section,key,en,fr\ndraft,title,Draft,Brouillon\n")?;
    Ok(test)
}

#[test]
fn test_fetch_generates_files() -> Result<()> {
    let test = setup()?;

    let output = test.run(&[])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} Fetched rows from 1 worksheet\n\
         \u{2713} Generated 1 file for the static output\n\
         \u{2713} Generated 1 file for the dynamic output\n\
         \u{2713} Successfully generated 2 i18n files!\n"
    );

    assert_snapshot!(test.read_file("static/en/common.json")?, @r#"
    {
      "common": {
        "bye": "Bye",
        "greeting": "Hello"
      },
      "errors": {
        "Not found. Try again.": "Not found"
      }
    }
    "#);
    assert_snapshot!(test.read_file("dynamic/fr/common.json")?, @r#"
    {
      "common": {
        "bye": "Au revoir"
      },
      "errors": {
        "Not found. Try again.": "Introuvable"
      }
    }
    "#);

    // Excluded tab produces nothing, languages stay in their own target
    assert!(!test.exists("static/en/drafts.json"));
    assert!(!test.exists("dynamic/fr/drafts.json"));
    assert!(!test.exists("static/fr"));
    Ok(())
}

#[test]
fn test_fetch_flag_matches_default() -> Result<()> {
    let test = setup()?;
    test.run(&["--fetch"])?;
    let first = test.read_file("static/en/common.json")?;

    test.run(&["-f"])?;
    assert_eq!(test.read_file("static/en/common.json")?, first);
    Ok(())
}

#[test]
fn test_fetch_wipes_previous_output() -> Result<()> {
    let test = setup()?;
    test.write_file("static/en/old.json", "{}")?;

    let output = test.run(&[])?;
    assert!(output.status.success());
    assert!(!test.exists("static/en/old.json"));
    Ok(())
}

#[test]
fn test_fetch_skips_empty_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n-sheets.config.json",
        r#"{
            "categories": ["section", "key"],
            "languages": ["en", "fr"],
            "output": "locales",
            "csvDir": "sheets"
        }"#,
    )?;
    test.write_file(
        "sheets/Common.csv",
        "section,key,ignore,en,fr\ncommon,greeting,,Hello,\n",
    )?;

    let output = test.run(&["-v"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("(1 empty skipped)"));

    assert_snapshot!(test.read_file("locales/en/common.json")?, @r#"
    {
      "common": {
        "greeting": "Hello"
      }
    }
    "#);
    assert!(!test.exists("locales/fr/common.json"));
    Ok(())
}

#[test]
fn test_fetch_concatenated_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n-sheets.config.json",
        r#"{
            "categories": ["section", "key"],
            "languages": ["en"],
            "outputs": [
                { "name": "bundle", "outDir": "dist", "concat": true, "prefix": "messages.", "preset": "esm" }
            ],
            "csvDir": "sheets"
        }"#,
    )?;
    test.write_file("sheets/A.csv", "section,key,en\na,one,One\n")?;
    test.write_file("sheets/B.csv", "section,key,en\nb,two,Two\n")?;

    let output = test.run(&[])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.read_file("dist/messages.en.js")?, @r#"
    export default {
      "a": {
        "one": "One"
      },
      "b": {
        "two": "Two"
      }
    };
    "#);
    Ok(())
}

#[test]
fn test_missing_config_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).starts_with("Error: You don't have the configuration file!"),
        "stderr: {}",
        stderr(&output)
    );
    Ok(())
}

#[test]
fn test_missing_source_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n-sheets.config.json", r#"{ "output": "locales" }"#)?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("csvDir"));
    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("config/i18n.json", CONFIG)?;
    test.write_file("config/sheets/Common.csv", COMMON_CSV)?;

    let output = test.run(&["--config", "config/i18n.json"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    // Paths resolve relative to the config file
    assert!(test.exists("config/static/en/common.json"));
    Ok(())
}

#[test]
fn test_absolute_config_path_from_another_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("config/i18n.json", CONFIG)?;
    test.write_file("config/sheets/Common.csv", COMMON_CSV)?;
    test.write_file("elsewhere/.keep", "")?;

    let config_path = test.root().join("config/i18n.json");
    let output = test
        .command()
        .current_dir(test.root().join("elsewhere"))
        .arg("--config")
        .arg(&config_path)
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.exists("config/static/en/common.json"));
    assert!(!test.exists("elsewhere/static"));
    Ok(())
}

#[test]
fn test_static_and_dynamic_share_an_output_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n-sheets.config.json",
        r#"{
            "categories": ["section", "key"],
            "staticLanguages": ["en"],
            "dynamicLanguages": ["fr"],
            "staticOutput": "./locales",
            "dynamicOutput": "./locales",
            "csvDir": "./sheets"
        }"#,
    )?;
    test.write_file("sheets/Common.csv", COMMON_CSV)?;

    let output = test.run(&[])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.exists("locales/en/common.json"));
    assert!(test.exists("locales/fr/common.json"));
    Ok(())
}

#[test]
fn test_worksheets_colliding_on_file_name_are_rejected() -> Result<()> {
    let test = setup()?;
    test.write_file("sheets/COMMON.csv", COMMON_CSV)?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("same output file"), "stderr: {}", stderr(&output));
    Ok(())
}
