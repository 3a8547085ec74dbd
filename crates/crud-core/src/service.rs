//! 服务层
//!
//! 纯委托层：不做校验、不做转换，仓储错误原样向上传播

use std::sync::Arc;

use async_trait::async_trait;
use storefront_domain_core::{Entity, EntityId};
use storefront_errors::AppResult;
use storefront_ports::Repository;
use tracing::debug;

/// 实体服务接口
#[async_trait]
pub trait EntityService<T: Entity>: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<T>>;

    async fn get(&self, id: EntityId) -> AppResult<Option<T>>;

    /// 返回带有最终 ID 的实体
    async fn add(&self, entity: T) -> AppResult<T>;

    /// ID 不存在时返回 `false`
    async fn update(&self, entity: T) -> AppResult<bool>;

    /// ID 不存在时返回 `false`
    async fn delete(&self, id: EntityId) -> AppResult<bool>;
}

/// 基于仓储的默认服务实现
pub struct CrudService<T: Entity> {
    repository: Arc<dyn Repository<T>>,
}

impl<T: Entity> CrudService<T> {
    pub fn new(repository: Arc<dyn Repository<T>>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<T: Entity> EntityService<T> for CrudService<T> {
    async fn get_all(&self) -> AppResult<Vec<T>> {
        debug!(kind = T::KIND, "get_all");
        self.repository.find_all().await
    }

    async fn get(&self, id: EntityId) -> AppResult<Option<T>> {
        debug!(kind = T::KIND, id, "get");
        self.repository.find_by_id(id).await
    }

    async fn add(&self, entity: T) -> AppResult<T> {
        debug!(kind = T::KIND, "add");
        self.repository.insert(entity).await
    }

    async fn update(&self, entity: T) -> AppResult<bool> {
        debug!(kind = T::KIND, id = entity.id(), "update");
        self.repository.update(entity).await
    }

    async fn delete(&self, id: EntityId) -> AppResult<bool> {
        debug!(kind = T::KIND, id, "delete");
        self.repository.delete(id).await
    }
}
