//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("invalid title: {0}")]
    InvalidTitle(&'static str),

    #[error("book is empty")]
    EmptyBook,
}
