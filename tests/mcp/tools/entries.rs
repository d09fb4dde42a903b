use rmcp::handler::server::wrapper::Parameters;
use tscat::mcp::{TscatMcpServer, types::ListEntriesParams};

use crate::{APP_DE, McpTestFixture, assert_pagination, extract_tool_result_json};

fn params(fixture: &McpTestFixture) -> ListEntriesParams {
    ListEntriesParams {
        project_root_path: fixture.root(),
        file_path: None,
        context: None,
        limit: None,
        offset: None,
    }
}

#[tokio::test]
async fn test_list_bundled_entries() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .list_entries(Parameters(params(&fixture)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filePath"], "<bundled>/settings_de.ts");
    assert_eq!(json_result["language"], "de_DE");
    assert_eq!(json_result["totalCount"], 15);
    assert_pagination(&json_result, 0, 50, false);

    let threads = &json_result["items"][5];
    assert_eq!(threads["source"], "Threads:");
    assert_eq!(threads["translation"], "Fäden:");
    assert_eq!(threads["kind"], "finished");
    assert_eq!(threads["locations"][0], "settingspage.ui:129");
}

#[tokio::test]
async fn test_list_entries_pagination() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let mut list = params(&fixture);
    list.limit = Some(5);
    let result = server.list_entries(Parameters(list)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 5);
    assert_pagination(&json_result, 0, 5, true);

    let mut list = params(&fixture);
    list.limit = Some(5);
    list.offset = Some(10);
    let result = server.list_entries(Parameters(list)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"][4]["source"], "German");
    assert_pagination(&json_result, 10, 5, false);
}

#[tokio::test]
async fn test_list_entries_of_project_file() {
    let fixture = McpTestFixture::with_files(&[("lan/app_de.ts", APP_DE)]).unwrap();
    let server = TscatMcpServer::new();

    let mut list = params(&fixture);
    list.file_path = Some("lan/app_de.ts".to_string());
    let result = server.list_entries(Parameters(list)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["items"][1]["source"], "Save");
    assert_eq!(json_result["items"][1]["kind"], "unfinished");
    assert_eq!(json_result["items"][1]["line"], 11);
}

#[tokio::test]
async fn test_list_entries_context_filter() {
    let fixture = McpTestFixture::with_files(&[("lan/app_de.ts", APP_DE)]).unwrap();
    let server = TscatMcpServer::new();

    let mut list = params(&fixture);
    list.file_path = Some("lan/app_de.ts".to_string());
    list.context = Some("SettingsPage".to_string());
    let result = server.list_entries(Parameters(list)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 0);
}
