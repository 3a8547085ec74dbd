//! 组合根

use std::sync::Arc;

use axum::Router;
use storefront_bootstrap::HealthChecker;
use storefront_config::AppConfig;
use storefront_errors::AppResult;
use tracing::info;

use crate::api;
use crate::infrastructure::persistence::build_repository;

/// 创建仓储、注册健康检查并构建业务路由
pub async fn build_app(config: &AppConfig, health: &HealthChecker) -> AppResult<Router> {
    let repository = Arc::new(build_repository(config.store.seed)?);
    health.register(repository.clone()).await;

    info!(seeded = config.store.seed, "Repository initialized");

    Ok(api::router(repository))
}
