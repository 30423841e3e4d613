//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（BookRegistryPort）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{CreateBookHandler, DeleteBookHandler, MarkBookReadHandler},
    CreateBook, DeleteBook, MarkBookRead,
};

pub use error::ApplicationError;

pub use ports::{BookRegistryPort, RegistryError};

pub use queries::{
    handlers::{GetBookHandler, ListBooksHandler},
    GetBook, ListBooks, ReadFilter,
};
