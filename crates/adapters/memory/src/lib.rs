//! storefront-adapter-memory - 进程内存储适配器
//!
//! 数据只存活于进程生命周期内

mod health;
mod repository;

pub use repository::*;
