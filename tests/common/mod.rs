/// Shared helpers for the HTTP integration tests.
use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App, Error};
use board_service::{handlers, AppState};
use serde_json::{json, Value};

/// Build a service instance over a fresh, isolated state.
pub async fn init_app() -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>
{
    test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new()))
            .configure(handlers::configure),
    )
    .await
}

/// Create a post through the API and return its JSON representation.
pub async fn create_post<S>(app: &S, body: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/post")
            .set_json(json!({ "body": body }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

/// Create a comment through the API and return its JSON representation.
pub async fn create_comment<S>(app: &S, body: &str, post_id: i64) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/comment")
            .set_json(json!({ "body": body, "post_id": post_id }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}
