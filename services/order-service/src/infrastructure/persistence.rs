//! 订单存储

use storefront_adapter_memory::InMemoryRepository;
use storefront_errors::AppResult;

use crate::domain::Order;

/// 示例数据
pub fn seed_orders() -> Vec<Order> {
    (1..=3).map(|n| Order::new(n, n).with_id(n)).collect()
}

/// 创建订单仓储，`seed` 为 true 时写入示例数据
pub fn build_repository(seed: bool) -> AppResult<InMemoryRepository<Order>> {
    if seed {
        InMemoryRepository::with_items(seed_orders())
    } else {
        Ok(InMemoryRepository::new())
    }
}
