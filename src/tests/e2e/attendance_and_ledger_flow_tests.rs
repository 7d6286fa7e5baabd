use crate::modules::attendance::use_cases::track_session::handler::AttendanceSession;
use crate::shell::http::router;
use crate::tests::fixtures::shell::{TestApp, json_body, signed_out_app};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

async fn start_session(app: &TestApp) -> AttendanceSession {
    AttendanceSession::start(
        app.state.identity.clone(),
        app.state.reconciler.clone(),
        app.state.ledger.clone(),
    )
    .await
}

async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(json_body(body)),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn sign_in_and_wait(router: &Router, user_id: &str) {
    let (status, _) = call(router, "POST", "/auth/sign-in", Some(json!({"user_id": user_id}))).await;
    assert_eq!(status, StatusCode::OK);
    for _ in 0..100 {
        let (_, projects) = call(router, "GET", "/projects", None).await;
        if projects.as_array().is_some_and(|p| !p.is_empty()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("projects never loaded for {user_id}");
}

#[tokio::test]
async fn registers_attendance_and_hours_for_a_day() {
    let app = signed_out_app();
    let session = start_session(&app).await;
    let router = router(app.state.clone());

    sign_in_and_wait(&router, "user-fixed-0001").await;

    let (_, notice) = call(
        &router,
        "POST",
        "/attendance/toggle",
        Some(json!({"date": "2024-06-10", "work_type": "office"})),
    )
    .await;
    assert_eq!(notice["message"], "Attendance registered as office.");
    let (_, day) = call(&router, "GET", "/attendance?date=2024-06-10", None).await;
    assert_eq!(day["is_attendance"], true);
    assert_eq!(day["work_type"], "office");

    call(&router, "POST", "/ledger/load", Some(json!({"date": "2024-06-10"}))).await;
    call(&router, "POST", "/ledger/rows", None).await;
    call(&router, "POST", "/ledger/rows", None).await;
    let (_, ledger) = call(&router, "PATCH", "/ledger/rows/1", Some(json!({"hours": 2.5}))).await;
    assert_eq!(ledger["total_hours"], 3.5);
    let (status, notice) = call(&router, "POST", "/ledger/save", None).await;
    assert_eq!(status, StatusCode::OK, "{notice}");

    let (_, stats) = call(&router, "GET", "/stats/monthly?date=2024-06-20", None).await;
    assert_eq!(stats["total_hours"], 3.5);

    let (_, reloaded) = call(&router, "POST", "/ledger/load", Some(json!({"date": "2024-06-10"}))).await;
    let entries = reloaded["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|entry| entry["id"]["state"] == "persisted"));

    session.stop().await;
}

#[tokio::test]
async fn keeps_users_apart_across_sign_in_and_sign_out() {
    let app = signed_out_app();
    let session = start_session(&app).await;
    let router = router(app.state.clone());

    sign_in_and_wait(&router, "user-fixed-0001").await;
    call(
        &router,
        "POST",
        "/attendance/toggle",
        Some(json!({"date": "2024-06-10", "work_type": "home"})),
    )
    .await;
    call(&router, "POST", "/ledger/load", Some(json!({"date": "2024-06-10"}))).await;
    call(&router, "POST", "/ledger/rows", None).await;
    call(&router, "POST", "/ledger/save", None).await;

    let (status, _) = call(&router, "POST", "/auth/sign-out", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, notice) = call(&router, "GET", "/attendance/days", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(notice["kind"], "signed_out");

    sign_in_and_wait(&router, "someone-else").await;
    for _ in 0..100 {
        if app.state.ledger.lock().await.day().is_none() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let (_, days) = call(&router, "GET", "/attendance/days", None).await;
    assert_eq!(days["days"], json!([]));
    let (_, ledger) = call(&router, "GET", "/ledger", None).await;
    assert_eq!(ledger["entries"], json!([]));
    let (status, _) = call(&router, "POST", "/ledger/save", None).await;
    assert_eq!(status, StatusCode::CONFLICT, "no day loaded for this user");
    let (_, stats) = call(&router, "GET", "/stats/monthly?date=2024-06-10", None).await;
    assert_eq!(stats["total_hours"], 0.0);

    assert_eq!(app.entries.rows().await.len(), 1);
    assert_eq!(app.attendance.rows().await.len(), 1);
    session.stop().await;
}
