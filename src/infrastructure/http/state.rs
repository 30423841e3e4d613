//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateBookHandler, DeleteBookHandler, MarkBookReadHandler,
    // Query handlers
    GetBookHandler, ListBooksHandler,
    // Ports
    BookRegistryPort,
};
use crate::infrastructure::memory::InMemoryBookRegistry;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub registry: Arc<dyn BookRegistryPort>,

    // ========== Command Handlers ==========
    pub create_book_handler: CreateBookHandler,
    pub mark_book_read_handler: MarkBookReadHandler,
    pub delete_book_handler: DeleteBookHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub list_books_handler: ListBooksHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(registry: Arc<dyn BookRegistryPort>) -> Self {
        Self {
            registry: registry.clone(),

            create_book_handler: CreateBookHandler::new(registry.clone()),
            mark_book_read_handler: MarkBookReadHandler::new(registry.clone()),
            delete_book_handler: DeleteBookHandler::new(registry.clone()),

            get_book_handler: GetBookHandler::new(registry.clone()),
            list_books_handler: ListBooksHandler::new(registry),
        }
    }

    /// 使用空的内存注册表
    pub fn in_memory() -> Self {
        Self::new(InMemoryBookRegistry::new().arc())
    }
}
