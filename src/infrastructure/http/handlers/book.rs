//! Book HTTP Handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::application::{
    ApplicationError, CreateBook, DeleteBook, GetBook, ListBooks, MarkBookRead, ReadFilter,
};
use crate::infrastructure::http::dto::{
    BookResponse, CreateBookRequest, ListBooksParams, ReadBookRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 书名 -> 记录，按书名排序输出
pub type BookMapResponse = BTreeMap<String, BookResponse>;

/// POST /books
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let Json(req) = payload?;

    let command = CreateBook {
        title: req.title,
        author: req.author,
        pages: req.pages,
        text: req.text,
    };

    let book = state.create_book_handler.handle(command)?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// GET /books/{title}
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Path(title) = path?;

    let book = state.get_book_handler.handle(GetBook { title })?;

    Ok(Json(BookResponse::from(book)))
}

/// GET /books[?readed=true|false]
///
/// 其他取值等同于不带参数，返回全部书籍
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListBooksParams>, QueryRejection>,
) -> Result<Json<BookMapResponse>, ApiError> {
    let Query(params) = query?;

    let filter = match params.readed.as_deref() {
        Some("true") => ReadFilter::Read,
        Some("false") => ReadFilter::Unread,
        _ => ReadFilter::All,
    };

    let books = state.list_books_handler.handle(ListBooks { filter });

    Ok(Json(
        books
            .into_iter()
            .map(|(title, book)| (title, BookResponse::from(book)))
            .collect(),
    ))
}

/// PATCH /books/{title}
///
/// 只支持 `{"Read": true}`，缺少字段或为 false 时返回 400 且不修改记录
pub async fn read_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<ReadBookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Path(title) = path?;
    let Json(req) = payload?;

    match req.read {
        Some(true) => {}
        Some(false) => {
            return Err(ApplicationError::validation("a book cannot be marked as unread").into())
        }
        None => return Err(ApplicationError::validation("field Read is required").into()),
    }

    let book = state
        .mark_book_read_handler
        .handle(MarkBookRead { title })?;

    Ok(Json(BookResponse::from(book)))
}

/// DELETE /books/{title}
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(title) = path?;

    state.delete_book_handler.handle(DeleteBook { title })?;

    Ok(StatusCode::NO_CONTENT)
}
