//! Book Context - Aggregate Root

use chrono::{DateTime, Utc};

use super::{BookError, Title};

/// Book 聚合根
///
/// 不变量:
/// - `read_at` 存在当且仅当 `read` 为 true
/// - `created_at` 只在构造时赋值
/// - `read_at` 不早于 `created_at`
///
/// 只能经由 [`Book::new`] 构造，对外的 JSON 形态见 HTTP 层的 `BookResponse`
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: Title,
    author: String,
    pages: u32,
    text: String,
    read: bool,
    created_at: DateTime<Utc>,
    read_at: Option<DateTime<Utc>>,
}

impl Book {
    /// 创建未读书籍
    ///
    /// 正文为空或页数为 0 时返回 [`BookError::EmptyBook`]
    pub fn new(
        title: Title,
        author: impl Into<String>,
        pages: u32,
        text: impl Into<String>,
    ) -> Result<Self, BookError> {
        let text = text.into();
        if text.is_empty() || pages == 0 {
            return Err(BookError::EmptyBook);
        }

        Ok(Self {
            title,
            author: author.into(),
            pages,
            text,
            read: false,
            created_at: Utc::now(),
            read_at: None,
        })
    }

    /// 标记为已读
    ///
    /// 已读的书保持原有的 `read_at` 不变；返回是否发生了状态迁移
    pub fn mark_read(&mut self) -> bool {
        if self.read {
            return false;
        }

        // 系统时钟回拨时也保证 read_at >= created_at
        let now = Utc::now().max(self.created_at);
        self.read = true;
        self.read_at = Some(now);
        true
    }

    // Getters
    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        self.read_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new(Title::new("Dune").unwrap(), "Herbert", 412, "...").unwrap()
    }

    #[test]
    fn test_book_creation() {
        let book = dune();

        assert_eq!(book.title().as_str(), "Dune");
        assert_eq!(book.author(), "Herbert");
        assert_eq!(book.pages(), 412);
        assert!(!book.is_read());
        assert!(book.read_at().is_none());
    }

    #[test]
    fn test_empty_text_rejected() {
        let result = Book::new(Title::new("Dune").unwrap(), "Herbert", 412, "");
        assert_eq!(result, Err(BookError::EmptyBook));
    }

    #[test]
    fn test_zero_pages_rejected() {
        let result = Book::new(Title::new("Dune").unwrap(), "Herbert", 0, "...");
        assert_eq!(result, Err(BookError::EmptyBook));
    }

    #[test]
    fn test_mark_read_sets_timestamp() {
        let mut book = dune();

        assert!(book.mark_read());
        assert!(book.is_read());

        let read_at = book.read_at().expect("read_at should be set");
        assert!(read_at >= book.created_at());
    }

    #[test]
    fn test_mark_read_twice_keeps_first_timestamp() {
        let mut book = dune();
        book.mark_read();
        let first = book.read_at();

        assert!(!book.mark_read());
        assert_eq!(book.read_at(), first);
    }
}
