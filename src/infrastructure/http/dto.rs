//! Data Transfer Objects
//!
//! 字段名沿用既有客户端的大写形式，请求体同时接受小写字段名

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Book;

// ============================================================================
// Requests
// ============================================================================

/// POST /books
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    #[serde(rename = "Title", alias = "title", default)]
    pub title: String,
    #[serde(rename = "Author", alias = "author", default)]
    pub author: String,
    #[serde(rename = "Pages", alias = "pages", default)]
    pub pages: u32,
    #[serde(rename = "Text", alias = "text", default)]
    pub text: String,
}

/// PATCH /books/{title}
#[derive(Debug, Deserialize)]
pub struct ReadBookRequest {
    #[serde(rename = "Read", alias = "read", default)]
    pub read: Option<bool>,
}

/// GET /books?readed=...
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksParams {
    pub readed: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BookResponse {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Pages")]
    pub pages: u32,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Readed")]
    pub read: bool,
    #[serde(rename = "Addtime")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "ReadedAt")]
    pub read_at: Option<DateTime<Utc>>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            title: book.title().as_str().to_string(),
            author: book.author().to_string(),
            pages: book.pages(),
            text: book.text().to_string(),
            read: book.is_read(),
            created_at: book.created_at(),
            read_at: book.read_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Title;

    #[test]
    fn test_create_request_accepts_both_casings() {
        let upper: CreateBookRequest = serde_json::from_str(
            r#"{"Title":"Dune","Author":"Herbert","Pages":412,"Text":"..."}"#,
        )
        .unwrap();
        let lower: CreateBookRequest = serde_json::from_str(
            r#"{"title":"Dune","author":"Herbert","pages":412,"text":"..."}"#,
        )
        .unwrap();

        assert_eq!(upper.title, lower.title);
        assert_eq!(upper.pages, lower.pages);
    }

    #[test]
    fn test_read_request_without_field() {
        let req: ReadBookRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.read, None);
    }

    #[test]
    fn test_unread_book_serializes_null_read_time() {
        let book = Book::new(Title::new("Dune").unwrap(), "Herbert", 412, "...").unwrap();
        let json = serde_json::to_value(BookResponse::from(book)).unwrap();

        assert_eq!(json["Title"], "Dune");
        assert_eq!(json["Readed"], false);
        assert!(json["ReadedAt"].is_null());
        assert!(json["Addtime"].is_string());
    }
}
