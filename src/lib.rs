//! tscat - Qt Linguist translation catalog toolkit
//!
//! tscat reads `.ts` translation catalogs, answers lookups with fallback to
//! the source string, checks catalogs for common translation problems and
//! rewrites them in canonical layout. The German strings of the settings
//! dialog ship with the crate (see [`core::bundled`]).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: TS model, parser, writer and the lookup catalog
//! - `issues`: Issue type definitions and reporting
//! - `logging`: stderr logger for the `log` facade
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Catalog checks

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod mcp;
pub mod rules;
