//! 内存存储健康检查

use async_trait::async_trait;
use storefront_domain_core::Entity;
use storefront_ports::{HealthIndicator, Repository};

use crate::InMemoryRepository;

#[async_trait]
impl<T: Entity> HealthIndicator for InMemoryRepository<T> {
    fn name(&self) -> &str {
        T::KIND
    }

    async fn check(&self) -> Result<Option<String>, String> {
        let count = self.count().await.map_err(|e| e.to_string())?;
        Ok(Some(format!("{} entities", count)))
    }
}
