//! Book Context - 书籍限界上下文
//!
//! 职责:
//! - 书籍聚合管理
//! - 未读 -> 已读 状态迁移

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Book;
pub use errors::BookError;
pub use value_objects::Title;
