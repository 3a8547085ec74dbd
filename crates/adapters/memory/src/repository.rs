//! 内存实现的 Repository

use async_trait::async_trait;
use storefront_domain_core::{Entity, EntityId, next_id};
use storefront_errors::{AppError, AppResult};
use storefront_ports::Repository;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// 基于 `Vec` 的内存仓储
///
/// 所有 读-改-写 序列（分配 ID + 冲突检查 + 写入、查找 + 覆盖、查找 + 删除）
/// 都在同一个写锁内完成，并发插入不会产生重复 ID。
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// 以给定数据初始化，保留数据自带的 ID
    ///
    /// 数据中存在重复 ID 时返回 `AppError::Conflict`。
    pub fn with_items(items: Vec<T>) -> AppResult<Self> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.id() == item.id()) {
                return Err(conflict::<T>(item.id()));
            }
        }

        Ok(Self {
            items: RwLock::new(items),
        })
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn conflict<T: Entity>(id: EntityId) -> AppError {
    AppError::conflict(format!("{} with id {} already exists.", T::KIND, id))
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<T>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn insert(&self, mut entity: T) -> AppResult<T> {
        let mut items = self.items.write().await;

        if T::ID_POLICY.should_assign(entity.id()) {
            let id = next_id(items.iter().map(Entity::id)).ok_or_else(|| {
                AppError::internal(format!("{} id space exhausted", T::KIND))
            })?;
            entity.set_id(id);
        }

        if items.iter().any(|item| item.id() == entity.id()) {
            warn!(kind = T::KIND, id = entity.id(), "Rejected insert with duplicate id");
            return Err(conflict::<T>(entity.id()));
        }

        debug!(kind = T::KIND, id = entity.id(), "Inserted entity");
        items.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> AppResult<bool> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(existing) => {
                existing.apply_update(entity);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: EntityId) -> AppResult<bool> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id() == id) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.items.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_domain_core::IdPolicy;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: EntityId,
        label: String,
    }

    impl Entity for Widget {
        const KIND: &'static str = "Widget";
        const ID_POLICY: IdPolicy = IdPolicy::AssignIfUnset;

        fn id(&self) -> EntityId {
            self.id
        }

        fn set_id(&mut self, id: EntityId) {
            self.id = id;
        }

        fn apply_update(&mut self, changes: Self) {
            self.label = changes.label;
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        id: EntityId,
        seat: i32,
    }

    impl Entity for Ticket {
        const KIND: &'static str = "Ticket";
        const ID_POLICY: IdPolicy = IdPolicy::AlwaysAssign;

        fn id(&self) -> EntityId {
            self.id
        }

        fn set_id(&mut self, id: EntityId) {
            self.id = id;
        }

        fn apply_update(&mut self, changes: Self) {
            self.seat = changes.seat;
        }
    }

    fn widget(id: EntityId, label: &str) -> Widget {
        Widget {
            id,
            label: label.to_string(),
        }
    }

    fn seeded() -> InMemoryRepository<Widget> {
        InMemoryRepository::with_items(vec![widget(1, "a"), widget(2, "b"), widget(3, "c")])
            .unwrap()
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = seeded();
        repo.insert(widget(0, "d")).await.unwrap();

        let ids: Vec<_> = repo.find_all().await.unwrap().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = seeded();
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(widget(2, "b")));
        assert_eq!(repo.find_by_id(96).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_assigns_max_plus_one() {
        let repo = InMemoryRepository::with_items(vec![widget(10, "x"), widget(4, "y")]).unwrap();

        let created = repo.insert(widget(0, "z")).await.unwrap();
        assert_eq!(created.id, 11);
    }

    #[tokio::test]
    async fn test_insert_into_empty_starts_at_one() {
        let repo = InMemoryRepository::<Widget>::new();

        let created = repo.insert(widget(0, "first")).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_insert_keeps_caller_id_when_unique() {
        let repo = seeded();

        let created = repo.insert(widget(69, "explicit")).await.unwrap();
        assert_eq!(created.id, 69);
        assert_eq!(repo.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_conflicts_and_leaves_store_unchanged() {
        let repo = seeded();
        let before = repo.find_all().await.unwrap();

        let err = repo.insert(widget(1, "dup")).await.unwrap_err();
        assert_eq!(err, AppError::conflict("Widget with id 1 already exists."));
        assert_eq!(repo.find_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_insert_exhausted_id_space() {
        let repo = InMemoryRepository::with_items(vec![widget(EntityId::MAX, "last")]).unwrap();

        let err = repo.insert(widget(0, "overflow")).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_always_assign_overwrites_caller_id() {
        let repo = InMemoryRepository::with_items(vec![
            Ticket { id: 1, seat: 1 },
            Ticket { id: 2, seat: 2 },
        ])
        .unwrap();

        let created = repo.insert(Ticket { id: 1, seat: 9 }).await.unwrap();
        assert_eq!(created, Ticket { id: 3, seat: 9 });
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let repo = seeded();

        assert!(repo.update(widget(2, "updated")).await.unwrap());
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(widget(2, "updated")));
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_missing_returns_false() {
        let repo = seeded();
        let before = repo.find_all().await.unwrap();

        assert!(!repo.update(widget(42, "ghost")).await.unwrap());
        assert_eq!(repo.find_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = seeded();

        assert!(repo.delete(2).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.find_all().await.unwrap().iter().all(|w| w.id != 2));

        assert!(!repo.delete(2).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[test]
    fn test_with_items_rejects_duplicates() {
        let result = InMemoryRepository::with_items(vec![widget(1, "a"), widget(1, "b")]);
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let repo = Arc::new(InMemoryRepository::<Widget>::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert(widget(0, &i.to_string())).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    }
}
