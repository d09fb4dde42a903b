//! Shared helpers for MCP tools.

use std::path::Path;

use anyhow::Result;
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use super::types::Pagination;
use crate::core::{TsDocument, bundled, parse_file};

/// Parse `file_path` relative to `root`, or the bundled catalog when absent.
pub fn load_document(root: &Path, file_path: Option<&str>) -> Result<TsDocument> {
    match file_path {
        Some(file) => parse_file(&root.join(file)),
        None => bundled::settings_de_document(),
    }
}

/// Take one page of `items`; `limit` is clamped to `max_limit`.
pub fn paginate<T>(
    items: Vec<T>,
    offset: Option<u32>,
    limit: Option<u32>,
    default_limit: usize,
    max_limit: usize,
) -> (Vec<T>, Pagination) {
    let limit = limit
        .map(|v| v as usize)
        .unwrap_or(default_limit)
        .min(max_limit);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    let total = items.len();

    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total;

    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}

/// Serialize `value` as the text content of a successful tool result.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

pub fn internal_error(context: &str, err: anyhow::Error) -> McpError {
    McpError::internal_error(format!("{}: {:#}", context, err), None)
}
