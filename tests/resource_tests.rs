//! Integration tests for request bodies and paginated responses.
//!
//! These tests verify that each operation sends the documented method, path
//! and body, and that list responses are decoded and narrowed correctly.

use std::collections::HashMap;

use notion_api::rest::query::{
    Direction, Filter, QueryDatabaseParams, SearchFilter, SearchParams, SearchSort, Sort,
    TextCondition,
};
use notion_api::rest::resources::{Block, BlockContent, Parent, PropertyValue};
use notion_api::{
    ApiToken, BaseUrl, NotionClient, NotionConfig, ObjectKind, ObjectsExt, PaginationParams,
    ResourceError,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> NotionClient {
    let config = NotionConfig::builder()
        .token(ApiToken::new("secret_test_token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    NotionClient::new(&config).unwrap()
}

fn page_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "object": "page",
        "id": id,
        "archived": false,
        "parent": {"type": "database_id", "database_id": "db1"},
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [{"type": "text", "text": {"content": title}, "plain_text": title}]
            }
        }
    })
}

fn list_json(results: serde_json::Value, next_cursor: Option<&str>, has_more: bool) -> serde_json::Value {
    json!({
        "object": "list",
        "results": results,
        "next_cursor": next_cursor,
        "has_more": has_more
    })
}

async fn last_body(server: &MockServer) -> serde_json::Value {
    let requests = server.received_requests().await.unwrap();
    let request = requests.last().unwrap();
    serde_json::from_slice(&request.body).unwrap()
}

// ============================================================================
// Databases
// ============================================================================

#[tokio::test]
async fn test_query_database_sends_filter_and_page_size() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/databases/db1/query"))
        .and(body_json(json!({
            "filter": {"property": "Name", "text": {"contains": "Report"}},
            "page_size": 50
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            json!([page_json("p1", "Q1 Report"), page_json("p2", "Q2 Report")]),
            Some("cursor-2"),
            true,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = QueryDatabaseParams::new()
        .filter(Filter::text("Name", TextCondition::Contains("Report".to_string())))
        .page_size(50);

    let pages = client.query_database("db1", &params).await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].title().as_deref(), Some("Q1 Report"));
    assert!(pages.has_more());
    assert_eq!(pages.next_cursor(), Some("cursor-2"));
}

#[tokio::test]
async fn test_query_database_with_compound_filter_and_sorts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/databases/db1/query"))
        .and(body_json(json!({
            "filter": {"or": [
                {"property": "Name", "text": {"starts_with": "Q1"}},
                {"property": "Name", "text": {"starts_with": "Q2"}}
            ]},
            "sorts": [
                {"property": "Name", "direction": "ascending"},
                {"timestamp": "last_edited_time", "direction": "descending"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(json!([]), None, false)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = QueryDatabaseParams::new()
        .filter(Filter::or(vec![
            Filter::text("Name", TextCondition::StartsWith("Q1".to_string())),
            Filter::text("Name", TextCondition::StartsWith("Q2".to_string())),
        ]))
        .sort(Sort::by_property("Name", Direction::Ascending))
        .sort(Sort::by_last_edited_time(Direction::Descending));

    let pages = client.query_database("db1", &params).await.unwrap();
    assert!(pages.is_empty());
    assert!(pages.next_params(50).is_none());
}

#[tokio::test]
async fn test_query_database_follows_cursor_until_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/databases/db1/query"))
        .and(body_json(json!({"page_size": 1, "start_cursor": "cursor-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            json!([page_json("p2", "Second")]),
            None,
            false,
        )))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/databases/db1/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            json!([page_json("p1", "First")]),
            Some("cursor-2"),
            true,
        )))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut params = QueryDatabaseParams::new().page_size(1);
    let mut titles = Vec::new();

    loop {
        let page = client.query_database("db1", &params).await.unwrap();
        titles.extend(page.iter().filter_map(notion_api::rest::resources::Page::title));
        match page.next_params(1) {
            Some(next) => params = params.pagination(next),
            None => break,
        }
    }

    assert_eq!(titles, vec!["First".to_string(), "Second".to_string()]);
}

#[tokio::test]
async fn test_has_more_without_cursor_is_a_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/databases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(json!([]), None, true)))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .list_databases(&PaginationParams::new())
        .await
        .unwrap_err();

    assert!(matches!(error, ResourceError::PaginationProtocol));
}

#[tokio::test]
async fn test_list_databases_sends_pagination_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/databases"))
        .and(query_param("page_size", "10"))
        .and(query_param("start_cursor", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            json!([{"object": "database", "id": "db1", "title": [], "properties": {}}]),
            None,
            false,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let databases = client
        .list_databases(&PaginationParams::new().page_size(10).start_cursor("abc"))
        .await
        .unwrap();

    assert_eq!(databases.len(), 1);
    assert_eq!(databases[0].id, "db1");
}

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_create_page_sends_parent_properties_and_children() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json("p-new", "Weekly sync")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut properties = HashMap::new();
    properties.insert("Name".to_string(), PropertyValue::title("Weekly sync"));

    let page = client
        .create_page(
            Parent::database("db1"),
            properties,
            vec![Block::heading_2("Agenda"), Block::to_do("Review", false)],
        )
        .await
        .unwrap();
    assert_eq!(page.id, "p-new");

    let body = last_body(&server).await;
    assert_eq!(body["parent"], json!({"type": "database_id", "database_id": "db1"}));
    assert_eq!(body["properties"]["Name"]["type"], "title");
    assert_eq!(body["properties"]["Name"]["title"][0]["text"]["content"], "Weekly sync");
    assert_eq!(body["children"][0]["type"], "heading_2");
    assert_eq!(body["children"][1]["to_do"]["checked"], false);
}

#[tokio::test]
async fn test_create_page_omits_empty_children() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json("p-new", "Notes")))
        .mount(&server)
        .await;

    let client = create_client(&server);
    client
        .create_page(Parent::page("p-parent"), HashMap::new(), Vec::new())
        .await
        .unwrap();

    let body = last_body(&server).await;
    assert!(body.get("children").is_none());
    assert_eq!(body["parent"]["page_id"], "p-parent");
}

#[tokio::test]
async fn test_create_page_rejects_empty_parent_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .create_page(Parent::database(""), HashMap::new(), Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(error, ResourceError::InvalidArgument { argument: "parent" }));
}

#[tokio::test]
async fn test_update_page_properties_sends_only_supplied_keys() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/pages/p1"))
        .and(body_json(json!({
            "properties": {"Done": {"type": "checkbox", "checkbox": true}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json("p1", "Weekly sync")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut properties = HashMap::new();
    properties.insert("Done".to_string(), PropertyValue::checkbox(true));

    let page = client.update_page_properties("p1", properties).await.unwrap();
    assert_eq!(page.id, "p1");
}

// ============================================================================
// Blocks
// ============================================================================

#[tokio::test]
async fn test_append_empty_children_sends_empty_array() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/blocks/b1/children"))
        .and(body_json(json!({"children": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "block",
            "id": "b1",
            "type": "paragraph",
            "has_children": false,
            "paragraph": {"text": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let parent = client.append_block_children("b1", Vec::new()).await.unwrap();
    assert_eq!(parent.id.as_deref(), Some("b1"));
}

#[tokio::test]
async fn test_retrieve_block_children_tolerates_unknown_kinds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/blocks/p1/children"))
        .and(query_param("page_size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            json!([
                {"object": "block", "id": "b1", "type": "paragraph", "has_children": false,
                 "paragraph": {"text": [{"type": "text", "text": {"content": "Hello"}, "plain_text": "Hello"}]}},
                {"object": "block", "id": "b2", "type": "image", "has_children": false,
                 "image": {"type": "external", "external": {"url": "https://example.com/a.png"}}}
            ]),
            None,
            false,
        )))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let blocks = client
        .retrieve_block_children("p1", &PaginationParams::new().page_size(100))
        .await
        .unwrap();

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].plain_text(), "Hello");
    assert!(matches!(&blocks[1].content, BlockContent::Unsupported(fields) if fields["type"] == "image"));
    assert_eq!(
        serde_json::to_value(&blocks[1]).unwrap()["image"]["external"]["url"],
        "https://example.com/a.png"
    );
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_list_all_users_skips_entries_of_other_kinds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            json!([
                {"object": "user", "id": "u1", "type": "person", "person": {"email": "a@example.org"}},
                page_json("p1", "Stray"),
                {"object": "user", "id": "u2", "type": "bot", "bot": {}}
            ]),
            None,
            false,
        )))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let users = client.list_all_users(&PaginationParams::new()).await.unwrap();

    let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2"]);
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_with_page_filter_returns_pages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(body_json(json!({
            "query": "Report",
            "sort": {"direction": "descending", "timestamp": "last_edited_time"},
            "filter": {"property": "object", "value": "page"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            json!([page_json("p1", "Q1 Report"), page_json("p2", "Q2 Report")]),
            None,
            false,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = SearchParams::new()
        .query("Report")
        .sort(SearchSort::last_edited_time(Direction::Descending))
        .filter(SearchFilter::pages());

    let results = client.search(&params).await.unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|o| o.kind() == ObjectKind::Page));
    assert!(results.iter().all(|o| o.as_page().is_some()));
    assert_eq!(results.pages().len(), 2);
    assert_eq!(results.databases().len(), 0);
}

#[tokio::test]
async fn test_search_keeps_mixed_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            json!([
                page_json("p1", "Roadmap"),
                {"object": "database", "id": "db1", "title": [], "properties": {}}
            ]),
            None,
            false,
        )))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let results = client.search(&SearchParams::new()).await.unwrap();

    assert_eq!(results.pages().len(), 1);
    assert_eq!(results.databases().first().map(|d| d.id.as_str()), Some("db1"));
}

#[tokio::test]
async fn test_search_unknown_kind_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            json!([{"object": "comment", "id": "c1"}]),
            None,
            false,
        )))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.search(&SearchParams::new()).await.unwrap_err();

    assert!(matches!(error, ResourceError::MalformedEnvelope(_)));
}
