//! ports - 抽象 trait 层
//!
//! 定义存储与健康检查的抽象接口，具体实现位于 adapters

mod health;
mod repository;

pub use health::*;
pub use repository::*;
