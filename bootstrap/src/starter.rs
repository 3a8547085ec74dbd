//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;

use axum::{Router, middleware};
use metrics_exporter_prometheus::PrometheusHandle;
use storefront_config::AppConfig;
use storefront_errors::AppResult;
use storefront_telemetry::install_metrics_recorder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::{HealthChecker, health_routes};
use crate::request_metrics::track_metrics;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 这是所有微服务的统一入口点。它负责：
/// 1. 加载 `.env` 与配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder
/// 4. 调用用户提供的闭包构建业务路由，闭包可向 `HealthChecker` 注册组件
/// 5. 合并运维端点并启动服务器，处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use storefront_bootstrap::run_http;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http("config", |config, health| async move {
///         Ok(my_service::build_router(&config))
///     }).await
/// }
/// ```
pub async fn run_http<F, Fut>(
    config_dir: &str,
    app_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig, HealthChecker) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    dotenvy::dotenv().ok();
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config)?;

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics
    let metrics = install_metrics_recorder()?;

    // 4. 构建业务路由
    let health = HealthChecker::new();
    let app = app_builder(config.clone(), health.clone()).await?;
    let app = with_operational_routes(app, health, metrics);

    // 5. 启动服务器
    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}

/// 合并运维端点，并挂载 metrics 与 trace 中间件
pub fn with_operational_routes(
    app: Router,
    health: HealthChecker,
    metrics: PrometheusHandle,
) -> Router {
    app.merge(health_routes(health, metrics))
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
}
