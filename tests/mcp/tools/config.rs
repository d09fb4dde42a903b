use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{TscatMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["catalogs"], json!(["**/*_*.ts"]));
    assert_eq!(json_result["config"]["defaultContext"], "SettingsPage");
    assert_eq!(json_result["config"]["duplicatePolicy"], "first");
    assert_eq!(json_result["config"]["expectedContexts"], json!([]));
}

#[tokio::test]
async fn test_get_config_from_tscatrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "catalogs": ["lan/*.ts"],
            "expectedContexts": ["MainWindow"],
            "duplicatePolicy": "last",
            "ignoreRules": ["unfinished"]
        }))
        .unwrap();

    let server = TscatMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["catalogs"], json!(["lan/*.ts"]));
    assert_eq!(json_result["config"]["expectedContexts"], json!(["MainWindow"]));
    assert_eq!(json_result["config"]["duplicatePolicy"], "last");
    assert_eq!(json_result["config"]["ignoreRules"], json!(["unfinished"]));
    // Not set in the file
    assert_eq!(json_result["config"]["defaultContext"], "SettingsPage");
}

#[tokio::test]
async fn test_get_config_found_from_subdirectory() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "defaultContext": "MainWindow" }))
        .unwrap();
    fixture.write_file("lan/.keep", "").unwrap();

    let server = TscatMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root_path().join("lan").to_string_lossy().to_string(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["defaultContext"], "MainWindow");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "ignoreRules": ["hardcoded"] }))
        .unwrap();

    let server = TscatMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_config(params).await.unwrap_err();
    assert!(err.message.contains("ignoreRules"));
}
