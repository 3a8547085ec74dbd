//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use storefront_ports::HealthIndicator;
use tokio::sync::RwLock;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 健康检查器
#[derive(Clone, Default)]
pub struct HealthChecker {
    indicators: Arc<RwLock<Vec<Arc<dyn HealthIndicator>>>>,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册参与 readiness 检查的组件
    pub async fn register(&self, indicator: Arc<dyn HealthIndicator>) {
        self.indicators.write().await.push(indicator);
    }

    /// 执行存活检查（liveness）
    ///
    /// 只检查服务是否在运行，不检查依赖
    pub async fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 执行就绪检查（readiness）
    ///
    /// 检查所有已注册组件
    pub async fn readiness(&self) -> HealthStatus {
        let indicators = self.indicators.read().await.clone();
        let mut status = HealthStatus::healthy();

        for indicator in indicators {
            let check = match indicator.check().await {
                Ok(message) => ComponentHealth::healthy(indicator.name(), message),
                Err(e) => ComponentHealth::unhealthy(indicator.name(), e),
            };
            status.add_check(check);
        }

        status
    }
}

#[derive(Clone)]
struct HealthState {
    checker: HealthChecker,
    metrics: PrometheusHandle,
}

/// 运维端点路由
pub fn health_routes(checker: HealthChecker, metrics: PrometheusHandle) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(HealthState { checker, metrics })
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.liveness().await;
    (StatusCode::OK, Json(status))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        state.metrics.render(),
    )
}
