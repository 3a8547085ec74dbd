//! Repository trait 定义

use async_trait::async_trait;
use storefront_domain_core::{Entity, EntityId};
use storefront_errors::AppResult;

/// 实体仓储 trait
///
/// 仓储是实体集合的唯一持有者，也是唯一允许修改已存储实体的组件。
/// 查询类操作用 `None` 表示不存在；更新、删除用 `false` 表示不存在，均不视为错误。
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// 按插入顺序返回全部实体
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<T>>;

    /// 插入实体，按 [`Entity::ID_POLICY`] 分配 ID
    ///
    /// ID 已存在时返回 `AppError::Conflict`，存储保持不变。
    async fn insert(&self, entity: T) -> AppResult<T>;

    /// 覆盖同 ID 实体的全部非主键字段
    async fn update(&self, entity: T) -> AppResult<bool>;

    /// 删除实体
    async fn delete(&self, id: EntityId) -> AppResult<bool>;

    /// 统计总数
    async fn count(&self) -> AppResult<usize>;
}
