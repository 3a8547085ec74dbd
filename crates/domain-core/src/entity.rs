//! 实体基础 trait

/// 实体 ID
pub type EntityId = i32;

/// 未设置的 ID；插入时由仓储分配
pub const UNSET_ID: EntityId = 0;

/// 插入时的 ID 分配策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// 总是由服务端分配，忽略调用方传入的 ID
    AlwaysAssign,
    /// 仅在调用方未设置 ID（为 0）时分配；已设置的 ID 必须唯一
    AssignIfUnset,
}

impl IdPolicy {
    /// 给定调用方传入的 ID，判断是否需要由服务端分配
    pub fn should_assign(self, requested: EntityId) -> bool {
        match self {
            Self::AlwaysAssign => true,
            Self::AssignIfUnset => requested == UNSET_ID,
        }
    }
}

/// 实体 trait
pub trait Entity: Clone + Send + Sync + 'static {
    /// 实体名称，用于日志和错误消息
    const KIND: &'static str;

    const ID_POLICY: IdPolicy;

    fn id(&self) -> EntityId;

    fn set_id(&mut self, id: EntityId);

    /// 用 `changes` 覆盖除 ID 以外的全部字段
    fn apply_update(&mut self, changes: Self);
}

/// 下一个可分配的 ID：现有最大 ID + 1，集合为空时为 1
///
/// 最大 ID 已是 `EntityId::MAX` 时返回 `None`。
pub fn next_id<I>(ids: I) -> Option<EntityId>
where
    I: IntoIterator<Item = EntityId>,
{
    match ids.into_iter().max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id(Vec::new()), Some(1));
    }

    #[test]
    fn test_next_id_uses_max_not_count() {
        assert_eq!(next_id(vec![1, 7, 3]), Some(8));
    }

    #[test]
    fn test_next_id_exhausted() {
        assert_eq!(next_id(vec![EntityId::MAX]), None);
    }

    #[test]
    fn test_id_policy() {
        assert!(IdPolicy::AlwaysAssign.should_assign(UNSET_ID));
        assert!(IdPolicy::AlwaysAssign.should_assign(42));
        assert!(IdPolicy::AssignIfUnset.should_assign(UNSET_ID));
        assert!(!IdPolicy::AssignIfUnset.should_assign(42));
    }
}
