use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};

use zenjournal::config;
use zenjournal::db;
use zenjournal::quotes::{QuoteRetriever, ZenQuotesClient};
use zenjournal::routes;
use zenjournal::services::{BiographyService, FixedWindowLimiter, MoodService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load configuration
    let config = config::Config::from_env().map_err(|e| {
        log::error!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!("Starting Zenjournal server on {}:{}", config.host, config.port);

    if config.mood.api_key.is_none() {
        log::warn!("MOOD_API_KEY not set, mood analysis will report itself unconfigured");
    }

    // Create database pool and apply migrations
    let db_pool = db::create_pool(&config.database).await.map_err(|e| {
        log::error!("Database pool error: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    db::run_migrations(&db_pool).await.map_err(|e| {
        log::error!("Migration error: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    // Shared state: all of it process-local. Scaled-out instances keep
    // separate caches and rate-limit windows.
    let retriever = web::Data::new(QuoteRetriever::new(
        Box::new(ZenQuotesClient::new(&config.quotes)),
        config.quotes.cache_ttl,
        config.quotes.batch_limit,
    ));
    let limiter = web::Data::new(FixedWindowLimiter::new(
        config.rate_limit.window,
        config.rate_limit.max_requests,
    ));
    let mood_service = web::Data::new(MoodService::new(&config.mood));
    let biography_service = web::Data::new(BiographyService::new(&config.wiki));

    let host = config.host.clone();
    let port = config.port;

    let server = HttpServer::new(move || {
        // Permissive CORS: the journal UI may be served from any origin
        // and the API carries no cookies or credentials.
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            // Share pool and service state with all handlers
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(retriever.clone())
            .app_data(limiter.clone())
            .app_data(mood_service.clone())
            .app_data(biography_service.clone())
            // Middleware
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .wrap(cors)
            // Health check routes
            .configure(routes::health::configure)
            // API routes
            .configure(routes::quotes::configure)
            .configure(routes::analyze::configure)
            .configure(routes::journal::configure)
            .configure(routes::biography::configure)
    })
    .bind((host.as_str(), port))?
    .shutdown_timeout(30)
    .run();

    // Spawn graceful shutdown handler
    let server_handle = server.handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        log::info!("Shutdown signal received, stopping server...");
        server_handle.stop(true).await;
    });

    server.await
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                log::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
