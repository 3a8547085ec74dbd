//! Order Service 入口

use storefront_bootstrap::run_http;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_http("config", |config, health| async move {
        info!("Initializing Order Service...");
        order_service::build_app(&config, &health).await
    })
    .await
}
