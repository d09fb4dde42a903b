use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use super::helpers::{internal_error, json_result, load_document, paginate};
use super::types::{
    CheckCatalogParams, CheckCatalogResult, ConfigDto, ConfigValues, EntryItem, GetConfigParams,
    IssueItem, ListEntriesParams, ListEntriesResult, LookupParams, LookupResult,
};
use crate::{
    config::load_config,
    core::{Catalog, CheckContext, bundled, resolve_catalog_paths},
    issues::{Rule, Severity},
    rules::run_checks,
};

#[derive(Clone)]
pub struct TscatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TscatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TscatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tscat configuration
    #[tool(description = "Get the current tscat configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path).map_err(|e| internal_error("Failed to load config", e))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Translate a source string
    #[tool(
        description = "Translate a source string. Returns the translation, or the source string itself with found=false when the catalog has no entry."
    )]
    pub async fn lookup(
        &self,
        params: Parameters<LookupParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = Path::new(&params.project_root_path);
        let config = load_config(root)
            .map_err(|e| internal_error("Failed to load config", e))?
            .config;

        let document = load_document(root, params.file_path.as_deref())
            .map_err(|e| internal_error("Failed to load catalog", e))?;
        let catalog = Catalog::from_document(&document, config.duplicate_policy);

        let context = params.context.unwrap_or(config.default_context);
        let found = catalog.resolve(
            &context,
            &params.source,
            params.comment.as_deref(),
            params.count,
        );
        let is_found = found.is_some();
        let text = found.unwrap_or_else(|| match params.count {
            Some(n) => params.source.replace("%n", &n.to_string()),
            None => params.source.clone(),
        });

        json_result(&LookupResult {
            context,
            source: params.source,
            text,
            found: is_found,
            catalog: params
                .file_path
                .unwrap_or_else(|| bundled::SETTINGS_DE_PATH.to_string()),
        })
    }

    /// Check TS catalogs for problems
    #[tool(
        description = "Check TS translation catalogs for problems (empty translations, duplicates, unfinished entries, place markers, punctuation, whitespace). Returns a paginated list of issues."
    )]
    pub async fn check_catalog(
        &self,
        params: Parameters<CheckCatalogParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = Path::new(&params.project_root_path);
        let loaded = load_config(root).map_err(|e| internal_error("Failed to load config", e))?;

        let paths: Vec<PathBuf> = match &params.files {
            Some(files) => files.iter().map(|file| root.join(file)).collect(),
            None => resolve_catalog_paths(&loaded.config, &loaded.root)
                .map_err(|e| internal_error("Failed to resolve catalogs", e))?,
        };

        let rules: Vec<Rule> = match &params.rules {
            Some(ids) => ids
                .iter()
                .map(|id| {
                    Rule::from_id(id).ok_or_else(|| {
                        McpError::invalid_params(format!("Unknown rule: {}", id), None)
                    })
                })
                .collect::<Result<_, _>>()?,
            None => Rule::ALL.to_vec(),
        };

        let ctx = CheckContext::load(loaded.config, &paths)
            .map_err(|e| internal_error("Failed to load catalogs", e))?;
        let issues = run_checks(&ctx, &rules);
        debug!("check_catalog: {} issue(s)", issues.len());

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();
        let warning_count = issues.len() - error_count;

        let mut items: Vec<IssueItem> = issues.iter().map(IssueItem::from).collect();
        items.sort_by(|a, b| {
            a.file_path
                .cmp(&b.file_path)
                .then_with(|| a.line.cmp(&b.line))
                .then_with(|| a.rule.cmp(&b.rule))
        });
        let total_count = items.len();
        let (items, pagination) = paginate(items, params.offset, params.limit, 20, 100);

        json_result(&CheckCatalogResult {
            files_checked: ctx.file_count(),
            error_count,
            warning_count,
            total_count,
            items,
            pagination,
        })
    }

    /// List the messages of a TS file
    #[tool(
        description = "List the messages of a TS file (or the bundled German settings catalog), optionally filtered by context. Paginated."
    )]
    pub async fn list_entries(
        &self,
        params: Parameters<ListEntriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = Path::new(&params.project_root_path);

        let document = load_document(root, params.file_path.as_deref())
            .map_err(|e| internal_error("Failed to load catalog", e))?;

        let items: Vec<EntryItem> = document
            .entries()
            .filter(|entry| {
                params
                    .context
                    .as_ref()
                    .is_none_or(|context| entry.context == *context)
            })
            .map(EntryItem::from)
            .collect();
        let total_count = items.len();
        let (items, pagination) = paginate(items, params.offset, params.limit, 50, 200);

        json_result(&ListEntriesResult {
            file_path: params
                .file_path
                .unwrap_or_else(|| bundled::SETTINGS_DE_PATH.to_string()),
            language: document.language,
            total_count,
            items,
            pagination,
        })
    }
}

#[tool_handler]
impl ServerHandler for TscatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscat MCP helps AI agents work with Qt Linguist TS translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. lookup - Translate a source string (falls back to the source)\n\
                 3. check_catalog - Report problems in TS files (paginated)\n\
                 4. list_entries - List messages of a TS file (paginated)\n\n\
                 Without a file path, lookup and list_entries use the bundled German\n\
                 settings catalog (context SettingsPage)."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TscatMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
