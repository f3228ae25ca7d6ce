use std::sync::Arc;

use relay::config::RelayConfig;
use relay::qa_client::QaClient;
use relay::{build_app, AppState};

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = RelayConfig::default();

    let state = Arc::new(AppState {
        qa_client: QaClient::new(config.downstream_url.clone()),
    });

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .unwrap();
    println!("Relay listening on {}", listener.local_addr().unwrap());
    log::info!("Forwarding questions to {}", config.downstream_url);
    axum::serve(listener, app).await.unwrap();
}
