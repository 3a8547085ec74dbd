//! 商品存储

use rust_decimal::Decimal;
use storefront_adapter_memory::InMemoryRepository;
use storefront_errors::AppResult;

use crate::domain::Product;

/// 示例数据
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("Product 1", Decimal::from(100)).with_id(1),
        Product::new("Product 2", Decimal::from(200)).with_id(2),
        Product::new("Product 3", Decimal::from(300)).with_id(3),
    ]
}

/// 创建商品仓储，`seed` 为 true 时写入示例数据
pub fn build_repository(seed: bool) -> AppResult<InMemoryRepository<Product>> {
    if seed {
        InMemoryRepository::with_items(seed_products())
    } else {
        Ok(InMemoryRepository::new())
    }
}
