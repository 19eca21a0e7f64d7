mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer, web};
use tracing::warn;

use crate::application::post_service::PostService;
use crate::data::memory::InMemoryPostRepository;
use crate::data::post_repository::{PostRepository, PostgresPostRepository};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database::{create_pool, ensure_schema};
use crate::infrastructure::logging::init_logging;
use crate::presentation::handlers;
use crate::presentation::middleware::RequestIdMiddleware;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");

    let repo: Arc<dyn PostRepository> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url)
                .await
                .expect("failed to connect to database");
            ensure_schema(&pool)
                .await
                .expect("failed to prepare schema");
            Arc::new(PostgresPostRepository::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, using the in-memory store");
            Arc::new(InMemoryPostRepository::new())
        }
    };

    let post_service = PostService::new(repo);
    let config_data = config.clone();

    HttpServer::new(move || {
        let cors = build_cors(&config_data);
        App::new()
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .wrap(cors)
            .app_data(web::Data::new(post_service.clone()))
            .service(handlers::post::list_posts)
            .service(handlers::post::get_post)
            .service(handlers::post::create_post)
            .service(handlers::post::update_post)
            .service(handlers::post::delete_post)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .max_age(3600);

    for origin in &config.cors_origins {
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
