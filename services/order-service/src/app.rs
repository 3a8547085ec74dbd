//! 组合根

use std::sync::Arc;

use axum::Router;
use storefront_bootstrap::HealthChecker;
use storefront_config::AppConfig;
use storefront_errors::AppResult;
use tracing::info;

use crate::api;
use crate::infrastructure::persistence::build_repository;

/// 构建订单服务路由
///
/// 订单仓储同时注册为 readiness 检查组件
pub async fn build_app(config: &AppConfig, health: &HealthChecker) -> AppResult<Router> {
    let repository = Arc::new(build_repository(config.store.seed)?);
    health.register(repository.clone()).await;

    info!(seeded = config.store.seed, "Order repository initialized");

    Ok(api::router(repository))
}
