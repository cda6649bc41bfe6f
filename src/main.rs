use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use branch_portal::config::SiteConfig;
use branch_portal::io::ReqwestHttpClient;
use branch_portal::routes::create_routes;
use branch_portal::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("branch_portal=info,tower_http=info")),
        )
        .init();

    let config = SiteConfig::from_env().expect("Invalid configuration");
    tracing::info!(
        api = %config.api_base_url,
        offset = %config.display_offset,
        "Configuration loaded"
    );

    let addr = config.bind_addr;
    let state = AppState::new(config, Arc::new(ReqwestHttpClient::new()));
    let app = create_routes(state);

    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
