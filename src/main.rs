//! Server entrypoint for the taskbook API.
//!
//! Startup order: environment (`.env` honoured), tracing subscriber,
//! connection pool, idempotent schema bootstrap, HTTP server.

use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use mockable::DefaultClock;
use std::sync::Arc;
use taskbook::config::ServerConfig;
use taskbook::http;
use taskbook::todo::adapters::sqlite::{SqliteTodoRepository, build_pool, ensure_schema};
use taskbook::todo::services::TodoService;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[actix_web::main]
async fn main() -> Result<(), BoxError> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let pool = build_pool(&config.database_path)?;
    ensure_schema(&pool)?;

    let service = TodoService::new(
        Arc::new(SqliteTodoRepository::new(pool)),
        Arc::new(DefaultClock),
    );
    let app_data = web::Data::new(service);

    tracing::info!(host = %config.host, port = config.port, "todo API listening");

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .app_data(http::json_config())
            .configure(http::configure)
            .default_service(web::route().to(http::fallback_not_found))
            .wrap(middleware::Logger::default())
    })
    .bind((config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
