//! i18n-sheets - spreadsheet to i18n JSON sync
//!
//! i18n-sheets is a CLI tool and library that reads translation strings from
//! spreadsheet worksheets and writes one nested JSON dictionary per language
//! (and per worksheet, or concatenated) for each configured output target.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, terminal output)
//! - `config`: Configuration file loading and resolution
//! - `core`: Row filtering, key building, unflattening and output writing
//! - `error`: Error kinds surfaced by a run
//! - `source`: Spreadsheet sources (Google Sheets, CSV directory, in-memory)

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod source;
