//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, MarkBookRead};
use crate::application::error::ApplicationError;
use crate::application::ports::BookRegistryPort;
use crate::domain::{Book, Title};

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
///
/// 先在领域层构造 Book 完成校验，再写入注册表
pub struct CreateBookHandler {
    registry: Arc<dyn BookRegistryPort>,
}

impl CreateBookHandler {
    pub fn new(registry: Arc<dyn BookRegistryPort>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, command: CreateBook) -> Result<Book, ApplicationError> {
        let title = Title::new(command.title)?;
        let book = Book::new(title, command.author, command.pages, command.text)?;

        self.registry.create(book.clone())?;

        tracing::info!(
            title = %book.title(),
            author = %book.author(),
            pages = book.pages(),
            "Book created"
        );

        Ok(book)
    }
}

// ============================================================================
// MarkBookRead
// ============================================================================

/// MarkBookRead Handler
pub struct MarkBookReadHandler {
    registry: Arc<dyn BookRegistryPort>,
}

impl MarkBookReadHandler {
    pub fn new(registry: Arc<dyn BookRegistryPort>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, command: MarkBookRead) -> Result<Book, ApplicationError> {
        let book = self.registry.mark_read(&command.title)?;

        tracing::info!(
            title = %book.title(),
            read_at = ?book.read_at(),
            "Book read"
        );

        Ok(book)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    registry: Arc<dyn BookRegistryPort>,
}

impl DeleteBookHandler {
    pub fn new(registry: Arc<dyn BookRegistryPort>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        self.registry.delete(&command.title)?;

        tracing::info!(title = %command.title, "Book deleted");

        Ok(())
    }
}
