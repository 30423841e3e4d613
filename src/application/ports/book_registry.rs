//! Book Registry Port - 书籍注册表
//!
//! 定义注册表的抽象接口，具体实现在 infrastructure/memory 层

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::Book;

/// Book Registry 错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("book not found: {0}")]
    NotFound(String),

    #[error("book already in library: {0}")]
    AlreadyExists(String),
}

/// Book Registry Port
///
/// 以书名为键保存所有书籍。每个操作对并发调用者都是原子的，
/// 列表操作返回独立快照，修改快照不影响注册表。
pub trait BookRegistryPort: Send + Sync {
    /// 新增书籍，书名已存在时返回 `AlreadyExists`
    fn create(&self, book: Book) -> Result<(), RegistryError>;

    /// 按书名获取
    fn get(&self, title: &str) -> Result<Book, RegistryError>;

    /// 所有书籍的快照
    fn list_all(&self) -> HashMap<String, Book>;

    /// 未读书籍的快照
    fn list_unread(&self) -> HashMap<String, Book>;

    /// 已读书籍的快照
    fn list_read(&self) -> HashMap<String, Book>;

    /// 标记为已读并返回更新后的记录
    fn mark_read(&self, title: &str) -> Result<Book, RegistryError>;

    /// 按书名删除
    fn delete(&self, title: &str) -> Result<(), RegistryError>;

    /// 当前书籍数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
