//! 健康检查 trait 定义

use async_trait::async_trait;

/// 可参与 readiness 检查的组件
#[async_trait]
pub trait HealthIndicator: Send + Sync {
    /// 组件名称
    fn name(&self) -> &str;

    /// 检查组件状态，失败时返回原因
    async fn check(&self) -> Result<Option<String>, String>;
}
