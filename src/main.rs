use actix_web::HttpServer;
use bloglist_api::{BlogStore, UserStore, create_app_with_state};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize structured logging (control verbosity with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3003);

    // The stores are shared across all workers; everything else is
    // rebuilt inside the app factory.
    let blogs = BlogStore::new();
    let users = UserStore::new();

    tracing::info!(port, "Starting bloglist API server");

    HttpServer::new(move || create_app_with_state(blogs.clone(), users.clone()))
        .bind(("127.0.0.1", port))?
        .run()
        .await
}
