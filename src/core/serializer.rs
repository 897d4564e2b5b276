//! Rendering nested dictionaries to file contents.
//!
//! `OutputFormat` is picked once per output target, either from a preset name
//! in the config file or injected by library users as a `CustomSerializer`.

use std::{fmt, sync::Arc};

use enum_dispatch::enum_dispatch;

use super::unflatten::NestedDictionary;
use crate::error::{Result, SyncError};

/// Serialized file contents plus the extension (with leading dot) to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub contents: Vec<u8>,
    pub extension: String,
}

#[enum_dispatch]
pub trait Serializer {
    fn serialize(&self, dictionary: &NestedDictionary, language: &str) -> Result<Rendered>;
}

/// Pretty JSON with 2-space indentation and a trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize(&self, dictionary: &NestedDictionary, _language: &str) -> Result<Rendered> {
        Ok(Rendered {
            contents: pretty_json(dictionary)?.into_bytes(),
            extension: ".json".to_string(),
        })
    }
}

/// An ES module whose default export is the dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EsModuleSerializer;

impl Serializer for EsModuleSerializer {
    fn serialize(&self, dictionary: &NestedDictionary, _language: &str) -> Result<Rendered> {
        let json = pretty_json(dictionary)?;
        Ok(Rendered {
            contents: format!("export default {};\n", json.trim_end()).into_bytes(),
            extension: ".js".to_string(),
        })
    }
}

type RenderFn = dyn Fn(&NestedDictionary, &str) -> std::result::Result<Vec<u8>, String> + Send + Sync;

/// A caller-supplied render function.
#[derive(Clone)]
pub struct CustomSerializer {
    render: Arc<RenderFn>,
    extension: String,
}

impl CustomSerializer {
    pub fn new<F>(extension: impl Into<String>, render: F) -> Self
    where
        F: Fn(&NestedDictionary, &str) -> std::result::Result<Vec<u8>, String>
            + Send
            + Sync
            + 'static,
    {
        Self {
            render: Arc::new(render),
            extension: extension.into(),
        }
    }
}

impl fmt::Debug for CustomSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomSerializer")
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

impl Serializer for CustomSerializer {
    fn serialize(&self, dictionary: &NestedDictionary, language: &str) -> Result<Rendered> {
        let contents = (self.render)(dictionary, language).map_err(SyncError::Serialize)?;
        Ok(Rendered {
            contents,
            extension: self.extension.clone(),
        })
    }
}

#[enum_dispatch(Serializer)]
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Json(JsonSerializer),
    EsModule(EsModuleSerializer),
    Custom(CustomSerializer),
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json(JsonSerializer)
    }
}

impl OutputFormat {
    pub const PRESETS: &'static [&'static str] = &["json", "esm"];

    /// Look up a built-in preset by name.
    pub fn from_preset(name: &str) -> Option<Self> {
        match name {
            "json" => Some(JsonSerializer.into()),
            "esm" => Some(EsModuleSerializer.into()),
            _ => None,
        }
    }
}

fn pretty_json(dictionary: &NestedDictionary) -> Result<String> {
    let json = serde_json::to_string_pretty(dictionary)
        .map_err(|err| SyncError::Serialize(err.to_string()))?;
    Ok(format!("{}\n", json))
}
