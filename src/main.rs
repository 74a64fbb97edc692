use pustok_server_lib::api::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = server::start().await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
