//! Core catalog engine.
//!
//! - `model`: TS document data model
//! - `parser`: TS text → [`TsDocument`]
//! - `writer`: [`TsDocument`] → TS text
//! - `catalog`: immutable lookup table with fallback
//! - `bundled`: catalogs compiled into the binary
//! - `context`: loading TS files for checks

pub mod bundled;
pub mod catalog;
pub mod context;
pub mod model;
pub mod parser;
pub mod writer;

pub use catalog::{Catalog, DuplicatePolicy, PluralRule};
pub use context::{CheckContext, resolve_catalog_paths};
pub use model::{Location, TranslationEntry, TranslationType, TsContext, TsDocument};
pub use parser::{ParseError, is_ts_document, parse_file, parse_str};
