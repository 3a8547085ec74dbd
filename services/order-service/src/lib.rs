//! Order Service - 订单服务

pub mod api;
pub mod domain;
pub mod infrastructure;

mod app;

pub use app::build_app;
