use crate::application::post_service::PostService;
use crate::domain::error::StoreError;
use crate::presentation::dto::{CreatePostRequest, UpdatePostRequest};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::info;
use uuid::Uuid;

#[get("/posts")]
pub async fn list_posts(
    req: HttpRequest,
    service: web::Data<PostService>,
) -> Result<HttpResponse, StoreError> {
    let posts = service.list_posts().await?;

    info!(
        request_id = %request_id(&req),
        count = posts.len(),
        "posts listed"
    );

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/posts/{post_id}")]
pub async fn get_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, StoreError> {
    let post_id = path.into_inner();
    let post = service.get_post(post_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post_id,
        "post retrieved"
    );

    Ok(HttpResponse::Ok().json(post))
}

#[post("/posts")]
pub async fn create_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, StoreError> {
    let payload = payload.into_inner();
    let post = service
        .create_post(payload.title, payload.content, payload.author)
        .await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.post_id,
        "post created"
    );

    Ok(HttpResponse::Created().json(post))
}

#[put("/posts/{post_id}")]
pub async fn update_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    payload: web::Json<UpdatePostRequest>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, StoreError> {
    let post_id = path.into_inner();
    let payload = payload.into_inner();
    let post = service
        .update_post(post_id, payload.title, payload.content, payload.author)
        .await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post_id,
        "post updated"
    );

    Ok(HttpResponse::Ok().json(post))
}

#[delete("/posts/{post_id}")]
pub async fn delete_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, StoreError> {
    let post_id = path.into_inner();
    service.delete_post(post_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post_id,
        "post deleted"
    );

    Ok(HttpResponse::NoContent().finish())
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<crate::presentation::middleware::RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
