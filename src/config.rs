use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        KeySpec, OutputFormat, OutputMode, OutputTarget, SyncConfig, TabFilter,
        key::{DEFAULT_DELIMITER, DEFAULT_IGNORE_COLUMN, DEFAULT_IGNORE_VALUE},
    },
    error::{Result, SyncError},
};

pub const CONFIG_FILE_NAME: &str = "i18n-sheets.config.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_ignore_column")]
    pub ignore_column: String,
    #[serde(default = "default_ignore_value")]
    pub ignore_value: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_languages: Vec<String>,

    /// Worksheets to keep. Empty keeps all of them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_tabs: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_output: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputConfig>,
    /// Write `{}` files for languages without any value in a worksheet.
    #[serde(default)]
    pub write_empty: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_dir: Option<String>,
}

/// An explicitly named output target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(alias = "outPath")]
    pub out_dir: String,
    /// Falls back to the top-level `languages`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub concat: bool,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_empty: Option<bool>,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_categories() -> Vec<String> {
    ["category", "subcategory", "key"].map(String::from).to_vec()
}

fn default_ignore_column() -> String {
    DEFAULT_IGNORE_COLUMN.to_string()
}

fn default_ignore_value() -> String {
    DEFAULT_IGNORE_VALUE.to_string()
}

fn default_preset() -> String {
    "json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            categories: default_categories(),
            ignore_column: default_ignore_column(),
            ignore_value: default_ignore_value(),
            languages: Vec::new(),
            static_languages: Vec::new(),
            dynamic_languages: Vec::new(),
            tabs: Vec::new(),
            excluded_tabs: Vec::new(),
            output: None,
            static_output: None,
            dynamic_output: None,
            outputs: Vec::new(),
            write_empty: false,
            sheet_id: None,
            credentials_path: None,
            csv_dir: None,
        }
    }
}

/// Where rows are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Google {
        sheet_id: String,
        credentials_path: PathBuf,
    },
    CsvDir(PathBuf),
}

impl Config {
    /// Resolve the file contents into the explicit pipeline configuration.
    ///
    /// Relative output paths are taken relative to `base_dir`.
    pub fn resolve(&self, base_dir: &Path) -> Result<SyncConfig> {
        // An empty delimiter falls back to the default instead of gluing segments
        let delimiter = if self.delimiter.is_empty() {
            DEFAULT_DELIMITER.to_string()
        } else {
            self.delimiter.clone()
        };
        let spec = KeySpec {
            categories: self.categories.clone(),
            delimiter,
            ignore_column: self.ignore_column.clone(),
            ignore_value: self.ignore_value.clone(),
        };

        let mut tab_filter = TabFilter::exclude(&self.excluded_tabs);
        if !self.tabs.is_empty() {
            tab_filter = tab_filter.and_include(&self.tabs);
        }

        Ok(SyncConfig {
            spec,
            tab_filter,
            targets: self.targets(base_dir)?,
        })
    }

    fn targets(&self, base_dir: &Path) -> Result<Vec<OutputTarget>> {
        let legacy = [
            ("default", &self.output, &self.languages),
            ("static", &self.static_output, &self.static_languages),
            ("dynamic", &self.dynamic_output, &self.dynamic_languages),
        ];

        let mut targets: Vec<OutputTarget> = legacy
            .into_iter()
            .filter_map(|(name, out_dir, languages)| {
                out_dir.as_ref().map(|out_dir| {
                    let mut target =
                        OutputTarget::new(name, base_dir.join(out_dir), languages.clone());
                    target.write_empty = self.write_empty;
                    target
                })
            })
            .collect();

        for (index, output) in self.outputs.iter().enumerate() {
            targets.push(self.output_target(output, index, base_dir)?);
        }

        Ok(targets)
    }

    fn output_target(
        &self,
        output: &OutputConfig,
        index: usize,
        base_dir: &Path,
    ) -> Result<OutputTarget> {
        let name = output
            .name
            .clone()
            .unwrap_or_else(|| format!("output-{}", index + 1));

        let format = OutputFormat::from_preset(&output.preset).ok_or_else(|| {
            invalid_config(format!(
                "Unknown preset \"{}\" for output '{}' (available: {})",
                output.preset,
                name,
                OutputFormat::PRESETS.join(", ")
            ))
        })?;

        Ok(OutputTarget {
            out_dir: base_dir.join(&output.out_dir),
            languages: output
                .languages
                .clone()
                .unwrap_or_else(|| self.languages.clone()),
            mode: if output.concat {
                OutputMode::Concatenated
            } else {
                OutputMode::PerWorksheet
            },
            prefix: output.prefix.clone(),
            suffix: output.suffix.clone(),
            format,
            write_empty: output.write_empty.unwrap_or(self.write_empty),
            name,
        })
    }

    /// Pick the row source. A CSV directory wins over a Google sheet.
    pub fn source(&self, base_dir: &Path) -> Result<SourceConfig> {
        if let Some(dir) = &self.csv_dir {
            return Ok(SourceConfig::CsvDir(base_dir.join(dir)));
        }

        match (&self.sheet_id, &self.credentials_path) {
            (Some(sheet_id), Some(credentials_path)) => Ok(SourceConfig::Google {
                sheet_id: sheet_id.clone(),
                credentials_path: base_dir.join(credentials_path),
            }),
            _ => Err(invalid_config(
                "either \"csvDir\" or both \"sheetId\" and \"credentialsPath\" must be set",
            )),
        }
    }
}

fn invalid_config(message: impl Into<String>) -> SyncError {
    SyncError::ConfigInvalid {
        path: PathBuf::from(CONFIG_FILE_NAME),
        message: message.into(),
    }
}

/// The config written by `init`.
pub fn default_config_json() -> anyhow::Result<String> {
    let config = Config {
        languages: vec!["en".to_string()],
        output: Some("./locales".to_string()),
        sheet_id: Some("<spreadsheet id>".to_string()),
        credentials_path: Some("./credentials.json".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_string_pretty(&config)?;
    Ok(format!("{}\n", json))
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// A parsed config file and where it was found.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

impl LoadedConfig {
    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Load the config file at `explicit`, or the nearest one above `start_dir`.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) if path.exists() => path.to_path_buf(),
        Some(path) => {
            return Err(SyncError::ConfigMissing {
                searched_from: path.to_path_buf(),
            });
        }
        None => find_config_file(start_dir).ok_or_else(|| SyncError::ConfigMissing {
            searched_from: start_dir.to_path_buf(),
        })?,
    };

    let invalid = |message: String| SyncError::ConfigInvalid {
        path: path.clone(),
        message,
    };
    let content = fs::read_to_string(&path).map_err(|err| invalid(err.to_string()))?;
    let config: Config = serde_json::from_str(&content).map_err(|err| invalid(err.to_string()))?;

    Ok(LoadedConfig { config, path })
}
