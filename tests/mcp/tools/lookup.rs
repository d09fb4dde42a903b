use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{TscatMcpServer, types::LookupParams};

use crate::{APP_DE, McpTestFixture, extract_tool_result_json};

fn params(fixture: &McpTestFixture, source: &str) -> LookupParams {
    LookupParams {
        project_root_path: fixture.root(),
        source: source.to_string(),
        context: None,
        comment: None,
        count: None,
        file_path: None,
    }
}

#[tokio::test]
async fn test_lookup_bundled_catalog() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .lookup(Parameters(params(&fixture, "Threads:")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Fäden:");
    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["context"], "SettingsPage");
    assert_eq!(json_result["catalog"], "<bundled>/settings_de.ts");
}

#[tokio::test]
async fn test_lookup_whitespace_is_significant() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .lookup(Parameters(params(&fixture, " step(s)")))
        .await
        .unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "Schritt(e)");

    let result = server
        .lookup(Parameters(params(&fixture, "step(s)")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["text"], "step(s)");
    assert_eq!(json_result["found"], false);
}

#[tokio::test]
async fn test_lookup_falls_back_to_source() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let mut lookup = params(&fixture, "Threads:");
    lookup.context = Some("MainWindow".to_string());
    let result = server.lookup(Parameters(lookup)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result,
        json!({
            "context": "MainWindow",
            "source": "Threads:",
            "text": "Threads:",
            "found": false,
            "catalog": "<bundled>/settings_de.ts"
        })
    );
}

#[tokio::test]
async fn test_lookup_in_project_file() {
    let fixture = McpTestFixture::with_files(&[("lan/app_de.ts", APP_DE)]).unwrap();
    fixture
        .write_config(&json!({ "defaultContext": "MainWindow" }))
        .unwrap();
    let server = TscatMcpServer::new();

    let mut lookup = params(&fixture, "Open");
    lookup.file_path = Some("lan/app_de.ts".to_string());
    let result = server.lookup(Parameters(lookup)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Öffnen");
    assert_eq!(json_result["context"], "MainWindow");
    assert_eq!(json_result["catalog"], "lan/app_de.ts");
}

#[tokio::test]
async fn test_lookup_unfinished_entry_falls_back() {
    let fixture = McpTestFixture::with_files(&[("lan/app_de.ts", APP_DE)]).unwrap();
    let server = TscatMcpServer::new();

    let mut lookup = params(&fixture, "Save");
    lookup.context = Some("MainWindow".to_string());
    lookup.file_path = Some("lan/app_de.ts".to_string());
    let result = server.lookup(Parameters(lookup)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Save");
    assert_eq!(json_result["found"], false);
}

#[tokio::test]
async fn test_lookup_missing_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let mut lookup = params(&fixture, "Open");
    lookup.file_path = Some("lan/missing_de.ts".to_string());
    let err = server.lookup(Parameters(lookup)).await.unwrap_err();
    assert!(err.message.contains("Failed to load catalog"));
}
