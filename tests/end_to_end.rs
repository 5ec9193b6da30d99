//! Full query chain against a mock org, driven through the root crate.

use salesforce_soql_agent::{ClientConfig, ConnectorConfig, QueryExecutor, SoqlTool, ToolError};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SOQL: &str = "SELECT Id, Name FROM Account LIMIT 2";

fn http_config() -> ClientConfig {
    ClientConfig::builder().with_tracing(false).build()
}

/// Token endpoint on `domain` that points API calls at `instance`.
async fn mount_token(domain: &MockServer, instance: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client123"))
        .and(body_string_contains("client_secret=secret456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "00Dxx!session",
            "instance_url": instance.uri(),
            "id": "https://login.salesforce.com/id/00Dxx/005xx",
            "token_type": "Bearer",
            "issued_at": "1700000000000",
            "signature": "c2lnbmF0dXJl"
        })))
        .expect(1)
        .mount(domain)
        .await;
}

fn config_for(domain: &MockServer) -> ConnectorConfig {
    ConnectorConfig::new()
        .with_client_id("client123")
        .with_client_secret("secret456")
        .with_my_domain_url(format!("{}/", domain.uri()))
}

#[tokio::test]
async fn test_query_targets_instance_url_from_token() {
    let domain = MockServer::start().await;
    let instance = MockServer::start().await;
    mount_token(&domain, &instance).await;

    let body = json!({
        "totalSize": 2,
        "done": true,
        "records": [
            {"attributes": {"type": "Account"}, "Id": "001A", "Name": "Acme"},
            {"attributes": {"type": "Account"}, "Id": "001B", "Name": "Globex"}
        ]
    });
    Mock::given(method("GET"))
        .and(path("/services/data/v59.0/query"))
        .and(query_param("q", SOQL))
        .and(header("Authorization", "Bearer 00Dxx!session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&instance)
        .await;

    let executor = QueryExecutor::with_config(config_for(&domain), http_config()).unwrap();
    let result = executor.execute_query(SOQL).await.unwrap();

    assert_eq!(result.as_value(), &body);
    assert_eq!(result.records()[1]["Name"], "Globex");
}

#[tokio::test]
async fn test_tool_call_through_root_crate() {
    let domain = MockServer::start().await;
    let instance = MockServer::start().await;
    mount_token(&domain, &instance).await;

    Mock::given(method("GET"))
        .and(path("/services/data/v61.0/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 0,
            "done": true,
            "records": []
        })))
        .expect(1)
        .mount(&instance)
        .await;

    let config = config_for(&domain).with_api_version("v61.0");
    let tool = SoqlTool::with_config(config, http_config()).unwrap();
    let output = tool.call(&json!({"soql_query": SOQL})).await.unwrap();

    assert_eq!(output["totalSize"], 0);
}

#[tokio::test]
async fn test_tool_call_surfaces_query_failure() {
    let domain = MockServer::start().await;
    let instance = MockServer::start().await;
    mount_token(&domain, &instance).await;

    Mock::given(method("GET"))
        .and(path("/services/data/v59.0/query"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(
                r#"[{"message":"sObject type 'Acount' is not supported.","errorCode":"INVALID_TYPE"}]"#,
            ),
        )
        .mount(&instance)
        .await;

    let tool = SoqlTool::with_config(config_for(&domain), http_config()).unwrap();
    let err = tool
        .call(&json!({"soql_query": "SELECT Id FROM Acount"}))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Execution { .. }));
    let msg = err.to_string();
    assert!(msg.starts_with("Failed to execute SOQL query:"));
    assert!(msg.contains("INVALID_TYPE"));
    assert!(!msg.contains("00Dxx!session"));
}

#[tokio::test]
async fn test_lookup_driven_config() {
    let domain = MockServer::start().await;
    let instance = MockServer::start().await;
    mount_token(&domain, &instance).await;

    Mock::given(method("GET"))
        .and(path("/services/data/v60.0/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalSize": 1})))
        .expect(1)
        .mount(&instance)
        .await;

    let domain_uri = domain.uri();
    let config = ConnectorConfig::from_lookup(|name| match name {
        "SALESFORCE_CLIENT_ID" => Some("client123".to_string()),
        "SALESFORCE_CLIENT_SECRET" => Some("secret456".to_string()),
        "SALESFORCE_MY_DOMAIN_URL" => Some(domain_uri.clone()),
        "SALESFORCE_API_VERSION" => Some("60.0".to_string()),
        _ => None,
    });

    let result = salesforce_soql_agent::execute_query(config, SOQL).await.unwrap();
    assert_eq!(result.total_size(), Some(1));
}
