//! The main entry point for the Actix-web HTTP server.

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use api_server::config::AppConfig;
use api_server::handlers;
use api_server::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration once; everything downstream receives it explicitly
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Cinelog API server on {}:{}",
        config.host,
        config.port
    );

    // Uploaded pictures are served back from this directory
    std::fs::create_dir_all(&config.uploads_dir)?;

    // Build application state
    let state = AppState::new(&config).await;
    let uploads_dir = config.uploads_dir.clone();

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(state.tokens.clone()))
            .configure(handlers::configure_routes)
            .service(Files::new("/uploads", uploads_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,cinelog_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
