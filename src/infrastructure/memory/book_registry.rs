//! In-Memory Book Registry Implementation

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::application::ports::{BookRegistryPort, RegistryError};
use crate::domain::Book;

/// 内存书籍注册表
///
/// 整张表由一把读写锁保护：读操作共享，写操作独占，
/// 检查与修改在同一把写锁内完成
pub struct InMemoryBookRegistry {
    books: RwLock<HashMap<String, Book>>,
}

impl InMemoryBookRegistry {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn snapshot_where(&self, predicate: impl Fn(&Book) -> bool) -> HashMap<String, Book> {
        self.books
            .read()
            .iter()
            .filter(|(_, book)| predicate(book))
            .map(|(title, book)| (title.clone(), book.clone()))
            .collect()
    }
}

impl Default for InMemoryBookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRegistryPort for InMemoryBookRegistry {
    fn create(&self, book: Book) -> Result<(), RegistryError> {
        let title = book.title().as_str().to_string();

        match self.books.write().entry(title) {
            Entry::Occupied(entry) => Err(RegistryError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                tracing::debug!(title = %entry.key(), "Book inserted");
                entry.insert(book);
                Ok(())
            }
        }
    }

    fn get(&self, title: &str) -> Result<Book, RegistryError> {
        self.books
            .read()
            .get(title)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(title.to_string()))
    }

    fn list_all(&self) -> HashMap<String, Book> {
        self.books.read().clone()
    }

    fn list_unread(&self) -> HashMap<String, Book> {
        self.snapshot_where(|book| !book.is_read())
    }

    fn list_read(&self) -> HashMap<String, Book> {
        self.snapshot_where(Book::is_read)
    }

    fn mark_read(&self, title: &str) -> Result<Book, RegistryError> {
        let mut books = self.books.write();
        let book = books
            .get_mut(title)
            .ok_or_else(|| RegistryError::NotFound(title.to_string()))?;

        if book.mark_read() {
            tracing::debug!(title = %title, "Book marked as read");
        } else {
            tracing::debug!(title = %title, "Book already read");
        }

        Ok(book.clone())
    }

    fn delete(&self, title: &str) -> Result<(), RegistryError> {
        self.books
            .write()
            .remove(title)
            .map(|_| {
                tracing::debug!(title = %title, "Book removed");
            })
            .ok_or_else(|| RegistryError::NotFound(title.to_string()))
    }

    fn len(&self) -> usize {
        self.books.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Title;
    use std::thread;

    fn book(title: &str) -> Book {
        Book::new(Title::new(title).unwrap(), "Herbert", 412, "...").unwrap()
    }

    #[test]
    fn test_book_lifecycle() {
        let registry = InMemoryBookRegistry::new();

        // Create
        assert!(registry.create(book("Dune")).is_ok());
        assert!(registry.create(book("Emma")).is_ok());

        // Get
        let dune = registry.get("Dune").unwrap();
        assert!(!dune.is_read());
        assert_eq!(registry.get("Emma").unwrap().title().as_str(), "Emma");

        // Mark read
        let dune = registry.mark_read("Dune").unwrap();
        assert!(dune.is_read());
        assert_eq!(registry.get("Dune").unwrap(), dune);

        // Delete
        assert!(registry.delete("Dune").is_ok());
        assert_eq!(
            registry.get("Dune"),
            Err(RegistryError::NotFound("Dune".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_create_keeps_first_record() {
        let registry = InMemoryBookRegistry::new();
        let first = book("Dune");
        registry.create(first.clone()).unwrap();

        let second = Book::new(Title::new("Dune").unwrap(), "Someone else", 1, "x").unwrap();
        assert_eq!(
            registry.create(second),
            Err(RegistryError::AlreadyExists("Dune".to_string()))
        );
        assert_eq!(registry.get("Dune").unwrap(), first);
    }

    #[test]
    fn test_missing_title_leaves_state_unchanged() {
        let registry = InMemoryBookRegistry::new();
        registry.create(book("Dune")).unwrap();
        let before = registry.list_all();

        let missing = Err(RegistryError::NotFound("Emma".to_string()));
        assert_eq!(registry.get("Emma").map(|_| ()), missing);
        assert_eq!(registry.mark_read("Emma").map(|_| ()), missing);
        assert_eq!(registry.delete("Emma"), missing);

        assert_eq!(registry.list_all(), before);
    }

    #[test]
    fn test_read_and_unread_partition_all() {
        let registry = InMemoryBookRegistry::new();
        for title in ["A", "B", "C", "D"] {
            registry.create(book(title)).unwrap();
        }
        registry.mark_read("B").unwrap();
        registry.mark_read("D").unwrap();

        let read = registry.list_read();
        let unread = registry.list_unread();

        assert_eq!(read.len() + unread.len(), registry.list_all().len());
        assert!(read.contains_key("B") && read.contains_key("D"));
        assert!(unread.contains_key("A") && unread.contains_key("C"));
        assert!(read.values().all(|b| b.read_at().is_some()));
        assert!(unread.values().all(|b| b.read_at().is_none()));
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let registry = InMemoryBookRegistry::new();
        registry.create(book("Dune")).unwrap();

        let first = registry.mark_read("Dune").unwrap();
        let second = registry.mark_read("Dune").unwrap();

        assert_eq!(first.read_at(), second.read_at());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let registry = InMemoryBookRegistry::new();
        registry.create(book("Dune")).unwrap();

        let mut snapshot = registry.list_all();
        snapshot.clear();

        assert_eq!(registry.len(), 1);
        registry.mark_read("Dune").unwrap();
        assert!(registry.list_unread().is_empty());
    }

    #[test]
    fn test_concurrent_create_same_title() {
        let registry = InMemoryBookRegistry::new().arc();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.create(book("Dune")))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let created = results.iter().filter(|r| r.is_ok()).count();
        let rejected = results
            .iter()
            .filter(|r| matches!(r, Err(RegistryError::AlreadyExists(_))))
            .count();

        assert_eq!(created, 1);
        assert_eq!(rejected, 15);
        assert_eq!(registry.len(), 1);
    }
}
