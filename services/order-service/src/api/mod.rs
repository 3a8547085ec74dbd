//! API layer - REST 路由

use std::sync::Arc;

use axum::Router;
use storefront_crud_core::{CrudRouter, CrudService, EntityService};
use storefront_ports::Repository;

use crate::domain::Order;

pub const BASE_PATH: &str = "/api/order";

/// 构建 `/api/order` 路由
pub fn router(repository: Arc<dyn Repository<Order>>) -> Router {
    let service: Arc<dyn EntityService<Order>> = Arc::new(CrudService::new(repository));
    CrudRouter::new(BASE_PATH, service).into_router()
}
