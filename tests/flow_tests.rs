// tests/flow_tests.rs - Registration, login and catalog loading flows
//
// Drives the screen logic end to end against a stub server, checking the
// messages each screen ends up showing and what lands in the token store.

mod common;

use catalog_portal::web_app::auth::{
    log_in, register, FormState, SubmitOutcome, LOGIN_FAILURE_FALLBACK, LOGIN_MISSING_TOKEN,
    LOGIN_SUCCESS_MESSAGE, REGISTER_FAILURE_FALLBACK, REGISTER_SUCCESS_FALLBACK,
};
use catalog_portal::web_app::catalog::{
    load_catalog, Catalog, FETCH_FAILURE_FALLBACK, UNEXPECTED_FORMAT,
};
use catalog_portal::web_app::entry::{EntryEvent, EntryView};
use catalog_portal::web_app::model::Credentials;
use catalog_portal::web_app::session::Session;

fn jane() -> Credentials {
    Credentials::new("jane@example.com", "hunter2")
}

// ===== Registration =====

#[tokio::test]
async fn test_registration_success_switches_view_once() {
    let (mut server, api) = common::stub_api().await;
    let mock = server
        .mock("POST", "/auth/signup")
        .with_status(200)
        .with_body(r#"{"message":"Welcome aboard"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut view = EntryView::default();
    let mut callbacks = 0;

    let outcome = register(&api, &jane()).await;
    if outcome.is_success() {
        callbacks += 1;
        view = view.transition(EntryEvent::RegistrationSucceeded);
    }

    mock.assert_async().await;
    assert_eq!(callbacks, 1);
    assert_eq!(view, EntryView::LoggingIn);
    assert_eq!(outcome, SubmitOutcome::Succeeded { message: "Welcome aboard".to_string() });
}

#[tokio::test]
async fn test_registration_success_without_message_uses_fallback() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("POST", "/auth/signup")
        .with_status(201)
        .with_body("")
        .create_async()
        .await;

    let mut state = FormState::default();
    state.apply(&register(&api, &jane()).await);

    assert_eq!(state.message, REGISTER_SUCCESS_FALLBACK);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_registration_plain_text_success_still_switches_view() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("POST", "/auth/signup")
        .with_status(201)
        .with_header("content-type", "text/plain")
        .with_body("Created")
        .create_async()
        .await;

    let mut view = EntryView::default();
    let mut callbacks = 0;

    let outcome = register(&api, &jane()).await;
    if outcome.is_success() {
        callbacks += 1;
        view = view.transition(EntryEvent::RegistrationSucceeded);
    }

    assert_eq!(callbacks, 1);
    assert_eq!(view, EntryView::LoggingIn);
    assert_eq!(
        outcome,
        SubmitOutcome::Succeeded { message: REGISTER_SUCCESS_FALLBACK.to_string() }
    );
}

#[tokio::test]
async fn test_login_plain_text_success_reports_missing_token() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("OK")
        .create_async()
        .await;

    let session = Session::in_memory();
    let outcome = log_in(&api, &session, &jane()).await;

    assert_eq!(outcome, SubmitOutcome::Failed { error: LOGIN_MISSING_TOKEN.to_string() });
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn test_registration_failure_never_switches_view() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("POST", "/auth/signup")
        .with_status(400)
        .with_body(r#"{"message":"Email already registered"}"#)
        .create_async()
        .await;

    let mut state = FormState {
        message: "stale".to_string(),
        error: None,
    };
    let outcome = register(&api, &jane()).await;
    state.apply(&outcome);

    assert!(!outcome.is_success());
    assert_eq!(state.error.as_deref(), Some("Email already registered"));
    assert_eq!(state.message, "");
}

#[tokio::test]
async fn test_registration_failure_without_message_uses_fallback() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("POST", "/auth/signup")
        .with_status(500)
        .create_async()
        .await;

    let outcome = register(&api, &jane()).await;

    assert_eq!(outcome, SubmitOutcome::Failed { error: REGISTER_FAILURE_FALLBACK.to_string() });
}

// ===== Login =====

#[tokio::test]
async fn test_login_persists_token_used_by_catalog() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(r#"{"token":"abc123","message":"ok"}"#)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_body(r#"{"user":{"sub":"jane@example.com"}}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/products")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_body(common::sample_products_json())
        .create_async()
        .await;

    let session = Session::in_memory();
    let outcome = log_in(&api, &session, &jane()).await;

    assert_eq!(outcome, SubmitOutcome::Succeeded { message: LOGIN_SUCCESS_MESSAGE.to_string() });
    assert_eq!(session.token().as_deref(), Some("abc123"));

    let snapshot = load_catalog(&api, &session).await;
    me.assert_async().await;
    assert_eq!(snapshot.user_email.as_deref(), Some("jane@example.com"));
    assert_eq!(snapshot.products.len(), 2);
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn test_login_without_token_stores_nothing() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(r#"{"message":"ok"}"#)
        .create_async()
        .await;

    let session = Session::in_memory();
    let outcome = log_in(&api, &session, &jane()).await;

    assert_eq!(outcome, SubmitOutcome::Failed { error: LOGIN_MISSING_TOKEN.to_string() });
    assert!(session.token().is_none());
}

#[tokio::test]
async fn test_login_failure_keeps_previous_token() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(r#"{"message":"Invalid credentials"}"#)
        .create_async()
        .await;

    let session = Session::in_memory();
    session.set_token("previous");

    let mut state = FormState::default();
    state.begin();
    state.apply(&log_in(&api, &session, &jane()).await);

    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(state.message, "");
    assert_eq!(session.token().as_deref(), Some("previous"));
}

#[tokio::test]
async fn test_login_failure_without_message_uses_fallback() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("POST", "/auth/login")
        .with_status(503)
        .create_async()
        .await;

    let outcome = log_in(&api, &Session::in_memory(), &jane()).await;

    assert_eq!(outcome, SubmitOutcome::Failed { error: LOGIN_FAILURE_FALLBACK.to_string() });
}

// ===== Catalog loading =====

#[tokio::test]
async fn test_catalog_object_response_is_reported() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("GET", "/api/me")
        .with_status(200)
        .with_body(r#"{"user":{"sub":"jane@example.com"}}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_body(r#"{"items":[]}"#)
        .create_async()
        .await;

    let session = Session::in_memory();
    session.set_token("abc123");
    let snapshot = load_catalog(&api, &session).await;

    assert_eq!(snapshot.error.as_deref(), Some(UNEXPECTED_FORMAT));
    assert!(snapshot.products.is_empty());
    assert_eq!(snapshot.user_email.as_deref(), Some("jane@example.com"));
}

#[tokio::test]
async fn test_identity_failure_skips_product_fetch() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("GET", "/api/me")
        .with_status(401)
        .with_body(r#"{"message":"Token expired"}"#)
        .create_async()
        .await;
    let products = server
        .mock("GET", "/api/products")
        .expect(0)
        .create_async()
        .await;

    let session = Session::in_memory();
    session.set_token("stale");
    let snapshot = load_catalog(&api, &session).await;

    products.assert_async().await;
    assert_eq!(snapshot.error.as_deref(), Some("Token expired"));
    assert!(snapshot.user_email.is_none());
    assert!(snapshot.products.is_empty());
}

#[tokio::test]
async fn test_product_failure_uses_fallback_message() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("GET", "/api/me")
        .with_status(200)
        .with_body(r#"{"user":{"sub":"jane@example.com"}}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/products")
        .with_status(500)
        .create_async()
        .await;

    let session = Session::in_memory();
    session.set_token("abc123");
    let snapshot = load_catalog(&api, &session).await;

    assert_eq!(snapshot.error.as_deref(), Some(FETCH_FAILURE_FALLBACK));
}

#[tokio::test]
async fn test_loaded_products_feed_the_catalog_view() {
    let (mut server, api) = common::stub_api().await;
    server
        .mock("GET", "/api/me")
        .with_status(200)
        .with_body(r#"{"user":{"sub":"jane@example.com"}}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_body(common::sample_products_json())
        .create_async()
        .await;

    let session = Session::in_memory();
    session.set_token("abc123");
    let snapshot = load_catalog(&api, &session).await;

    let mut catalog = Catalog::new(snapshot.products);
    catalog.set_query("shoe");

    let visible = catalog.visible();
    assert_eq!(catalog.total_pages(), 1);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 1);
    assert_eq!(visible[0].price_display(), "$9.99");
}
