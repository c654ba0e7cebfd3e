use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod models;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    pub store: Arc<NoteStore>,
}

/// Root route handler
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Hello World!</h1>")
}

/// Fallback for requests matching neither an API route nor a static asset
pub async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "unknown endpoint"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    // Serve static files only if the dist directory exists
    let static_dir = if std::path::Path::new(&config.static_dir).exists() {
        config.static_dir.clone()
    } else {
        log::warn!(
            "Static dir {} not found - static file serving disabled",
            config.static_dir
        );
        String::new()
    };

    let store = Arc::new(NoteStore::with_seed_notes());

    log::info!("notes-backend v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Server running on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let mut app = App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
            .route("/", web::get().to(index))
            // Unknown-endpoint fallback applies only after API and static
            // routing both miss
            .default_service(web::route().to(unknown_endpoint));

        if !static_dir.is_empty() {
            app = app.service(
                Files::new("/", static_dir.clone())
                    .index_file("index.html")
                    .default_handler(web::to(unknown_endpoint)),
            );
        }

        app
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
