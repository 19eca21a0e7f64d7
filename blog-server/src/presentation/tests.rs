use std::sync::Arc;

use actix_web::{App, test, web};
use serde_json::{Value, json};

use crate::application::post_service::PostService;
use crate::data::memory::InMemoryPostRepository;
use crate::presentation::handlers;
use crate::presentation::middleware::RequestIdMiddleware;

/// Each test gets its own empty in-memory store.
fn routes(cfg: &mut web::ServiceConfig) {
    let service = PostService::new(Arc::new(InMemoryPostRepository::new()));
    cfg.app_data(web::Data::new(service))
        .service(handlers::post::list_posts)
        .service(handlers::post::get_post)
        .service(handlers::post::create_post)
        .service(handlers::post::update_post)
        .service(handlers::post::delete_post);
}

#[actix_web::test]
async fn create_then_get_returns_the_identical_record() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({"title": "Hello", "content": "World", "author": "Jungyu"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["content"], "World");
    assert_eq!(created["author"], "Jungyu");
    assert_eq!(created["createdAt"], created["updatedAt"]);
    let post_id = created["postId"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn create_with_an_empty_field_is_rejected() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({"title": "", "content": "World", "author": "Jungyu"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Title, content, and author cannot be empty");
}

#[actix_web::test]
async fn list_on_an_empty_store_is_an_empty_array() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn update_replaces_fields_and_preserves_created_at() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({"title": "Hello", "content": "World", "author": "Jungyu"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let post_id = created["postId"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{post_id}"))
        .set_json(json!({"title": "Hello 2", "content": "World 2", "author": "Jungyu"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "Hello 2");
    assert_eq!(updated["postId"], created["postId"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[actix_web::test]
async fn update_on_an_unknown_id_is_404() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", uuid::Uuid::new_v4()))
        .set_json(json!({"title": "x", "content": "y", "author": "z"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn a_supplied_request_id_is_echoed_on_the_response() {
    let app = test::init_service(App::new().wrap(RequestIdMiddleware).configure(routes)).await;

    let req = test::TestRequest::get()
        .uri("/posts")
        .insert_header(("x-request-id", "req-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "req-42"
    );
}

#[actix_web::test]
async fn a_request_id_is_generated_when_the_caller_sends_none() {
    let app = test::init_service(App::new().wrap(RequestIdMiddleware).configure(routes)).await;

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;

    let generated = resp
        .headers()
        .get("x-request-id")
        .expect("generated request id")
        .to_str()
        .unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[actix_web::test]
async fn delete_then_get_is_404_and_delete_is_idempotent() {
    let app = test::init_service(App::new().configure(routes)).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({"title": "Hello", "content": "World", "author": "Jungyu"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let post_id = created["postId"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("not found"));

    // Deleting an already-deleted post is 404, not a crash.
    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
