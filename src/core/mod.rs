//! Core transformation engine.
//!
//! Rows flow through four steps:
//!
//! 1. `key`: decide whether a row is eligible and build its dotted key
//! 2. `entry`: pick the non-empty language cells of the row
//! 3. `unflatten`: expand one language's `(key, value)` pairs into a tree
//! 4. `writer`: serialize each tree and write it for every output target
//!
//! `sheet` drives steps 1-2 per worksheet and `pipeline` ties everything
//! together. Nothing in here reads configuration files or global state.

pub mod entry;
pub mod key;
pub mod pipeline;
pub mod row;
pub mod serializer;
pub mod sheet;
pub mod unflatten;
pub mod writer;

pub use entry::{FlatEntry, LanguageValues, extract_languages, format_row};
pub use key::KeySpec;
pub use pipeline::{SyncConfig, SyncReport, run_sync};
pub use row::{RawRow, RowAccessor};
pub use serializer::{CustomSerializer, OutputFormat, Rendered, Serializer};
pub use sheet::{Sheet, TabFilter, aggregate_sheets};
pub use unflatten::{NestedDictionary, split_key, unflatten};
pub use writer::{OutputMode, OutputTarget, TargetReport, write_targets};
