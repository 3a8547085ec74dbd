//! API layer - REST 路由

use std::sync::Arc;

use axum::Router;
use storefront_crud_core::{CrudRouter, CrudService, EntityService};
use storefront_ports::Repository;

use crate::domain::Product;

pub const BASE_PATH: &str = "/api/product";

/// 构建 `/api/product` 路由；商品列表为空时返回 404
pub fn router(repository: Arc<dyn Repository<Product>>) -> Router {
    let service: Arc<dyn EntityService<Product>> = Arc::new(CrudService::new(repository));

    CrudRouter::new(BASE_PATH, service)
        .not_found_when_empty()
        .into_router()
}
