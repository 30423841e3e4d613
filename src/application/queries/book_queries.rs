//! Book Queries

/// 获取单本书查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub title: String,
}

/// 列表过滤条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

/// 列出书籍查询
#[derive(Debug, Clone, Default)]
pub struct ListBooks {
    pub filter: ReadFilter,
}
