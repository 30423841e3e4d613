//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Book Context: 书籍管理

pub mod book;

pub use book::{Book, BookError, Title};
