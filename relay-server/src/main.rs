use relay_server::adapters::http::HttpServer;
use relay_server::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();
    let config = Config::from_env();
    tracing::info!(app_name = %config.app_name, "loaded configuration");
    let http_server = HttpServer::new(config)
        .await
        .expect("Failed to create HTTP server");
    http_server.run().await.expect("Failed to run HTTP server");
}
