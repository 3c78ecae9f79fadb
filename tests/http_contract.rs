use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use placehub::{
    application::{place_service::PlaceService, user_service::UserService},
    build_router,
    infrastructure::InMemoryStore,
    state::AppState,
    transaction::TransactionManager,
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let store = Arc::new(InMemoryStore::new());
    let transactions = Arc::new(TransactionManager::new(store.clone()));
    let place_service = Arc::new(PlaceService::new(
        store.clone(),
        store.clone(),
        transactions,
    ));
    let user_service = Arc::new(UserService::new(store));

    build_router(AppState::new(place_service, user_service))
}

async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request handled");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collected")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

async fn signup(app: &Router, email: &str) -> String {
    let (status, created) = request_json(
        app.clone(),
        post(
            "/api/users/signup",
            json!({
                "name": "Sung Ahn",
                "email": email,
                "password": "testers"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    created
        .get("id")
        .and_then(Value::as_str)
        .expect("user id")
        .to_string()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = request_json(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("status").and_then(Value::as_str), Some("ok"));
}

#[tokio::test]
async fn signup_and_login_flow() {
    let app = app();

    let (status, created) = request_json(
        app.clone(),
        post(
            "/api/users/signup",
            json!({
                "name": "Sung Ahn",
                "email": "test@test.com",
                "password": "testers"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created.get("email").and_then(Value::as_str),
        Some("test@test.com")
    );
    assert!(created.get("password").is_none());
    assert_eq!(created.get("places"), Some(&json!([])));

    let (status, problem) = request_json(
        app.clone(),
        post(
            "/api/users/signup",
            json!({
                "name": "Sung Ahn",
                "email": "test@test.com",
                "password": "testers"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(problem.get("message").and_then(Value::as_str).is_some());

    let (status, body) = request_json(
        app.clone(),
        post(
            "/api/users/login",
            json!({ "email": "test@test.com", "password": "testers" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("logged in")
    );

    let (status, problem) = request_json(
        app,
        post(
            "/api/users/login",
            json!({ "email": "test@test.com", "password": "nope" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(problem.get("message").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn place_lifecycle_keeps_owner_linkage_consistent() {
    let app = app();
    let owner_id = signup(&app, "test@test.com").await;

    let (status, created) = request_json(
        app.clone(),
        post(
            "/api/places",
            json!({
                "title": "Empire State Building",
                "description": "One of the most famous sky scrapers in the world!",
                "address": "20 W 34th St, New York, NY 10001",
                "location": { "lat": 40.7484405, "lng": -73.9878584 },
                "creator": owner_id
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created.get("creator").and_then(Value::as_str),
        Some(owner_id.as_str())
    );
    let place_id = created
        .get("id")
        .and_then(Value::as_str)
        .expect("place id")
        .to_string();

    let (status, fetched) = request_json(app.clone(), get(&format!("/api/places/{place_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fetched.get("title").and_then(Value::as_str),
        Some("Empire State Building")
    );

    let (status, listed) =
        request_json(app.clone(), get(&format!("/api/places/user/{owner_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    // The owner's side of the linkage is visible through the users listing.
    let (status, users) = request_json(app.clone(), get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        users[0].get("places"),
        Some(&json!([place_id.as_str()]))
    );

    let (status, updated) = request_json(
        app.clone(),
        Request::builder()
            .method("PATCH")
            .uri(format!("/api/places/{place_id}"))
            .header("content-type", "application/json")
            .body(Body::from(json!({ "title": "Empire State" }).to_string()))
            .expect("valid request"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated.get("title").and_then(Value::as_str),
        Some("Empire State")
    );

    let (status, body) = request_json(
        app.clone(),
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/places/{place_id}"))
            .body(Body::empty())
            .expect("valid request"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("deleted place")
    );

    let (status, _) = request_json(app.clone(), get(&format!("/api/places/{place_id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request_json(app.clone(), get(&format!("/api/places/user/{owner_id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, users) = request_json(app, get("/api/users")).await;
    assert_eq!(users[0].get("places"), Some(&json!([])));
}

#[tokio::test]
async fn create_place_rejects_bad_input_and_unknown_owner() {
    let app = app();
    let owner_id = signup(&app, "test@test.com").await;

    let (status, problem) = request_json(
        app.clone(),
        post(
            "/api/places",
            json!({
                "title": "   ",
                "description": "One of the most famous sky scrapers in the world!",
                "address": "20 W 34th St, New York, NY 10001",
                "creator": owner_id
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(problem.get("message").and_then(Value::as_str).is_some());

    let (status, problem) = request_json(
        app.clone(),
        post(
            "/api/places",
            json!({
                "title": "Empire State Building",
                "description": "One of the most famous sky scrapers in the world!",
                "address": "20 W 34th St, New York, NY 10001",
                "creator": uuid::Uuid::new_v4()
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(problem.get("message").and_then(Value::as_str).is_some());

    // An id that never parses is as absent as one that was never assigned.
    let (status, _) = request_json(app, get("/api/places/p1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_place_rejects_blank_title() {
    let app = app();
    let owner_id = signup(&app, "test@test.com").await;

    let (status, created) = request_json(
        app.clone(),
        post(
            "/api/places",
            json!({
                "title": "Empire State Building",
                "description": "One of the most famous sky scrapers in the world!",
                "address": "20 W 34th St, New York, NY 10001",
                "creator": owner_id
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let place_id = created.get("id").and_then(Value::as_str).expect("place id");

    let (status, problem) = request_json(
        app,
        Request::builder()
            .method("PATCH")
            .uri(format!("/api/places/{place_id}"))
            .header("content-type", "application/json")
            .body(Body::from(json!({ "title": " " }).to_string()))
            .expect("valid request"),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(problem.get("message").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn geocode_stub_fills_missing_location() {
    let app = app();
    let owner_id = signup(&app, "test@test.com").await;

    let (status, created) = request_json(
        app,
        post(
            "/api/places",
            json!({
                "title": "Best Choice painting",
                "description": "Hire a Professional Painter!",
                "address": "6 Towner Drive Knoxfield, VIC 3180",
                "creator": owner_id
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("location").and_then(|l| l.get("lat")).is_some());
}
