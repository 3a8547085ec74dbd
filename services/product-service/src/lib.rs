//! Product Service - 商品目录
//!
//! 基于内存存储的商品 CRUD 服务

pub mod api;
pub mod domain;
pub mod infrastructure;

mod app;

pub use app::build_app;
