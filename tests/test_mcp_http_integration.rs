use std::sync::Arc;

use axum::Router;
use http_body_util::BodyExt; // for .collect
use hyper::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};
use tower::ServiceExt; // for .oneshot

use wb_communications_mcp::clients::wb::WbClient;
use wb_communications_mcp::infra::boot::service_factory;
use wb_communications_mcp::infra::credentials::{ApiKey, Credentials};
use wb_communications_mcp::infra::http_app::build_app;

fn app_against(server: &httpmock::MockServer, credentials: Credentials) -> Router {
    let client = WbClient::new(server.base_url(), server.base_url()).unwrap();
    build_app(service_factory(client, Arc::new(credentials)))
}

fn mcp_request(session_id: Option<&str>, body: &Value) -> Request<axum::body::Body> {
    let mut b = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(id) = session_id {
        b = b.header("MCP-Session-Id", id);
    }
    b.body(axum::body::Body::from(body.to_string())).unwrap()
}

/// Pull the JSON-RPC response out of an SSE (or plain JSON) body.
async fn rpc_response(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let s = String::from_utf8_lossy(&bytes);
    s.lines()
        .filter_map(|line| line.strip_prefix("data:").map(str::trim))
        .filter_map(|d| serde_json::from_str::<Value>(d).ok())
        .find(|v| v.get("result").is_some() || v.get("error").is_some())
        .or_else(|| serde_json::from_str(&s).ok())
        .expect("no JSON-RPC response in body")
}

/// initialize + notifications/initialized; returns the session id.
async fn open_session(app: &Router) -> String {
    let init = json!({
        "jsonrpc":"2.0","id":1,"method":"initialize",
        "params":{ "protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0.1"} }
    });
    let init_res = app.clone().oneshot(mcp_request(None, &init)).await.unwrap();
    assert!(init_res.status().is_success());
    let session_id = init_res
        .headers()
        .get("MCP-Session-Id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    let info = rpc_response(init_res).await;
    assert!(info["result"]["capabilities"]["tools"].is_object());

    let initialized = json!({"jsonrpc":"2.0","method":"notifications/initialized","params":{}});
    let res = app.clone().oneshot(mcp_request(Some(&session_id), &initialized)).await.unwrap();
    assert_eq!(res.status(), StatusCode::ACCEPTED);
    session_id
}

async fn call_tool(app: &Router, session_id: &str, id: u32, name: &str, arguments: Value) -> Value {
    let call = json!({
        "jsonrpc":"2.0","id":id,"method":"tools/call",
        "params": {"name": name, "arguments": arguments}
    });
    let res = timeout(Duration::from_secs(20), app.clone().oneshot(mcp_request(Some(session_id), &call)))
        .await
        .unwrap()
        .unwrap();
    assert!(res.status().is_success());
    rpc_response(res).await
}

#[tokio::test]
async fn lists_all_tools_with_generated_schemas() {
    let server = httpmock::MockServer::start();
    let app = app_against(&server, Credentials::new(ApiKey::new("tok"), None));
    let session_id = open_session(&app).await;

    let list = json!({"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}});
    let res = timeout(Duration::from_secs(20), app.clone().oneshot(mcp_request(Some(&session_id), &list)))
        .await
        .unwrap()
        .unwrap();
    assert!(res.status().is_success());
    let v = rpc_response(res).await;
    let tools = v["result"]["tools"].as_array().expect("tools array");
    assert_eq!(tools.len(), 14);

    let questions = tools.iter().find(|t| t["name"] == "getQuestions").expect("getQuestions listed");
    let schema = &questions["inputSchema"];
    assert_eq!(schema["type"], "object");
    assert!(schema["properties"]["take"].is_object());
    let required: Vec<&str> = schema["required"].as_array().unwrap().iter().filter_map(Value::as_str).collect();
    assert!(required.contains(&"isAnswered"));
    assert!(required.contains(&"take"));
}

#[tokio::test]
async fn calls_feedback_by_id_end_to_end() {
    let server = httpmock::MockServer::start();
    let feedback = json!({
        "id": "abc123",
        "text": "Works as described",
        "pros": null,
        "cons": null,
        "productValuation": 4,
        "createdDate": "2024-05-20T08:15:30Z",
        "answer": null,
        "state": "none",
        "photoLinks": null,
        "video": null,
        "wasViewed": false,
        "isAbleReturnProductOrders": null,
        "returnProductOrdersDate": null,
        "bables": null,
        "parentFeedbackId": null,
        "childFeedbackId": null
    });
    let m = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/api/v1/feedback")
            .query_param("id", "abc123")
            .header("authorization", "tok");
        then.status(200).json_body(json!({
            "data": feedback.clone(),
            "error": false,
            "errorText": "",
            "additionalErrors": null
        }));
    });

    let app = app_against(&server, Credentials::new(ApiKey::new("tok"), None));
    let session_id = open_session(&app).await;
    let v = call_tool(&app, &session_id, 3, "getFeedbackById", json!({"id": "abc123"})).await;
    m.assert();

    assert_eq!(v["result"]["isError"], json!(false));
    let text = v["result"]["content"][0]["text"].as_str().expect("text content");
    let body: Value = serde_json::from_str(text).unwrap();
    assert_eq!(body["data"], feedback);
}

#[tokio::test]
async fn out_of_range_argument_is_rejected_before_the_network() {
    let server = httpmock::MockServer::start();
    let m = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });
    let app = app_against(&server, Credentials::new(ApiKey::new("tok"), None));
    let session_id = open_session(&app).await;
    let v = call_tool(
        &app,
        &session_id,
        4,
        "getQuestions",
        json!({"isAnswered": false, "take": 10001, "skip": 0}),
    )
    .await;
    m.assert_hits(0);
    assert_eq!(v["error"]["code"], -32602);
}
