mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{create_comment, create_post, init_app};
use serde_json::{json, Value};

#[actix_web::test]
async fn create_comment_returns_record_with_first_id() {
    let app = init_app().await;

    let post = create_post(&app, "Test post").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/comment")
            .set_json(json!({ "body": "Test comment", "post_id": post["id"] }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(
        created,
        json!({ "id": 0, "body": "Test comment", "post_id": 0 })
    );
}

#[actix_web::test]
async fn comment_ids_are_independent_of_post_ids() {
    let app = init_app().await;

    // Several posts first, so the comment sequence visibly starts over.
    create_post(&app, "First post").await;
    create_post(&app, "Second post").await;
    create_post(&app, "Third post").await;

    let first = create_comment(&app, "first comment", 2).await;
    let second = create_comment(&app, "second comment", 2).await;

    assert_eq!(first["id"], 0);
    assert_eq!(second["id"], 1);
}

#[actix_web::test]
async fn create_comment_without_post_id_is_rejected() {
    let app = init_app().await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/comment")
            .set_json(json!({ "body": "Test comment" }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn create_comment_with_non_integer_post_id_is_rejected() {
    let app = init_app().await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/comment")
            .set_json(json!({ "body": "Test comment", "post_id": "zero" }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn comments_on_post_without_comments_are_empty() {
    let app = init_app().await;

    create_post(&app, "Test post").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/post/0/comment").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn comments_are_filtered_by_post() {
    let app = init_app().await;

    create_post(&app, "First post").await;
    create_post(&app, "Second post").await;

    let on_first = create_comment(&app, "on the first post", 0).await;
    create_comment(&app, "on the second post", 1).await;
    let also_on_first = create_comment(&app, "back to the first post", 0).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/post/0/comment").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed, json!([on_first, also_on_first]));
}

#[actix_web::test]
async fn comment_may_reference_missing_post() {
    let app = init_app().await;

    // Creation does not check that the referenced post exists; the comment
    // is stored and later retrievable under that reference.
    let dangling = create_comment(&app, "nobody home", 999).await;
    assert_eq!(dangling["post_id"], 999);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/post/999/comment").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed, json!([dangling]));
}

#[actix_web::test]
async fn list_comments_with_non_integer_post_id_is_rejected() {
    let app = init_app().await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/post/not-a-number/comment")
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
