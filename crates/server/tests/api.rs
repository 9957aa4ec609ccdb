use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    server::router(engine::Engine::new())
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn create_group(app: &Router, name: &str) -> String {
    let (status, body) = send(app, "POST", "/groups", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn add_member(app: &Router, group_id: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        &format!("/groups/{group_id}/members"),
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn group_crud_roundtrip() {
    let app = app();
    let group_id = create_group(&app, "Bangkok Trip").await;

    let (status, body) = send(&app, "GET", &format!("/groups/{group_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bangkok Trip");
    assert_eq!(body["members"], json!([]));
    assert_eq!(body["expenses"], json!([]));

    let (status, body) = send(&app, "GET", "/groups", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "DELETE", &format!("/groups/{group_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/groups/{group_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_group_name_is_unprocessable() {
    let app = app();
    let (status, body) = send(&app, "POST", "/groups", Some(json!({ "name": "   " }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn unknown_group_is_not_found_everywhere() {
    let app = app();
    let missing = uuid::Uuid::new_v4();

    for uri in [
        format!("/groups/{missing}"),
        format!("/groups/{missing}/members"),
        format!("/groups/{missing}/expenses"),
        format!("/groups/{missing}/balances"),
        format!("/groups/{missing}/settlements"),
    ] {
        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
    }
}

#[tokio::test]
async fn balances_and_settlements_for_equal_split() {
    let app = app();
    let group_id = create_group(&app, "Dinner").await;
    let alice = add_member(&app, &group_id, "Alice").await;
    let bob = add_member(&app, &group_id, "Bob").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/groups/{group_id}/expenses"),
        Some(json!({
            "description": "Thai food",
            "amount": "100.00",
            "payer_id": alice,
            "participant_ids": [alice, bob],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", &format!("/groups/{group_id}/balances"), None).await;
    assert_eq!(status, StatusCode::OK);
    let balances = body.as_array().unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0]["member_name"], "Alice");
    assert_eq!(balances[0]["total_paid"], "100.00");
    assert_eq!(balances[0]["total_owed"], "50.00");
    assert_eq!(balances[0]["net_balance"], "50.00");
    assert_eq!(balances[1]["net_balance"], "-50.00");

    let (status, body) = send(
        &app,
        "GET",
        &format!("/groups/{group_id}/settlements"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction_count"], 1);
    let settlement = &body["settlements"][0];
    assert_eq!(settlement["from_member_id"], bob.as_str());
    assert_eq!(settlement["from_member_name"], "Bob");
    assert_eq!(settlement["to_member_id"], alice.as_str());
    assert_eq!(settlement["amount"], "50.00");
}

#[tokio::test]
async fn settlements_for_empty_group_are_empty() {
    let app = app();
    let group_id = create_group(&app, "Quiet").await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/groups/{group_id}/settlements"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["group_name"], "Quiet");
    assert_eq!(body["settlements"], json!([]));
    assert_eq!(body["transaction_count"], 0);
}

#[tokio::test]
async fn invalid_expense_is_unprocessable() {
    let app = app();
    let group_id = create_group(&app, "Dinner").await;
    let alice = add_member(&app, &group_id, "Alice").await;
    let outsider = uuid::Uuid::new_v4();

    // Unknown payer.
    let (status, _) = send(
        &app,
        "POST",
        &format!("/groups/{group_id}/expenses"),
        Some(json!({
            "description": "Thai food",
            "amount": "100.00",
            "payer_id": outsider,
            "participant_ids": [alice],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Non-positive amount.
    let (status, _) = send(
        &app,
        "POST",
        &format!("/groups/{group_id}/expenses"),
        Some(json!({
            "description": "nothing",
            "amount": "0.00",
            "payer_id": alice,
            "participant_ids": [alice],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn member_with_expenses_cannot_be_deleted() {
    let app = app();
    let group_id = create_group(&app, "Dinner").await;
    let alice = add_member(&app, &group_id, "Alice").await;
    let bob = add_member(&app, &group_id, "Bob").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/groups/{group_id}/expenses"),
        Some(json!({
            "description": "Thai food",
            "amount": "60.00",
            "payer_id": alice,
            "participant_ids": [bob],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let expense_id = body["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/groups/{group_id}/members/{bob}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // After removing the expense the member can go.
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/groups/{group_id}/expenses/{expense_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/groups/{group_id}/members/{bob}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn expenses_are_listed_and_fetchable() {
    let app = app();
    let group_id = create_group(&app, "Dinner").await;
    let alice = add_member(&app, &group_id, "Alice").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/groups/{group_id}/expenses"),
        Some(json!({
            "description": "Snacks",
            "amount": "12.30",
            "payer_id": alice,
            "participant_ids": [alice],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let expense_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["amount"], "12.30");

    let (status, body) = send(&app, "GET", &format!("/groups/{group_id}/expenses"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/groups/{group_id}/expenses/{expense_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Snacks");
}
