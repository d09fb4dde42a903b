//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes catalog lookups and checks to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: Document loading, pagination and result encoding
//! - `server`: Tool definitions and the server entry point
//! - `types`: Tool parameter and result types

mod helpers;
mod server;
pub mod types;

pub use server::{TscatMcpServer, run_server};
