//! Book Query Handlers

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::BookRegistryPort;
use crate::application::queries::{GetBook, ListBooks, ReadFilter};
use crate::domain::Book;

/// GetBook Handler
pub struct GetBookHandler {
    registry: Arc<dyn BookRegistryPort>,
}

impl GetBookHandler {
    pub fn new(registry: Arc<dyn BookRegistryPort>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, query: GetBook) -> Result<Book, ApplicationError> {
        Ok(self.registry.get(&query.title)?)
    }
}

/// ListBooks Handler
pub struct ListBooksHandler {
    registry: Arc<dyn BookRegistryPort>,
}

impl ListBooksHandler {
    pub fn new(registry: Arc<dyn BookRegistryPort>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, query: ListBooks) -> HashMap<String, Book> {
        match query.filter {
            ReadFilter::All => self.registry.list_all(),
            ReadFilter::Read => self.registry.list_read(),
            ReadFilter::Unread => self.registry.list_unread(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Title;
    use crate::infrastructure::memory::InMemoryBookRegistry;

    fn seeded_registry() -> Arc<InMemoryBookRegistry> {
        let registry = InMemoryBookRegistry::new().arc();
        for title in ["Dune", "Emma", "Ulysses"] {
            let book = Book::new(Title::new(title).unwrap(), "someone", 100, "text").unwrap();
            registry.create(book).unwrap();
        }
        registry.mark_read("Emma").unwrap();
        registry
    }

    #[test]
    fn test_list_books_by_filter() {
        let handler = ListBooksHandler::new(seeded_registry());

        let all = handler.handle(ListBooks::default());
        let read = handler.handle(ListBooks {
            filter: ReadFilter::Read,
        });
        let unread = handler.handle(ListBooks {
            filter: ReadFilter::Unread,
        });

        assert_eq!(all.len(), 3);
        assert_eq!(read.keys().collect::<Vec<_>>(), vec!["Emma"]);
        assert_eq!(unread.len(), 2);
        assert!(!unread.contains_key("Emma"));
    }

    #[test]
    fn test_get_book_not_found() {
        let handler = GetBookHandler::new(seeded_registry());

        let result = handler.handle(GetBook {
            title: "Missing".to_string(),
        });

        assert_eq!(result, Err(ApplicationError::not_found("book", "Missing")));
    }
}
