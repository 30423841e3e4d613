//! Memory Layer - In-Memory State Management
//!
//! 实现 BookRegistryPort，书籍只保存在进程内存中

mod book_registry;

pub use book_registry::InMemoryBookRegistry;
