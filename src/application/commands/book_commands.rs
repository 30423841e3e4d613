//! Book Commands

/// 创建书籍命令
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub text: String,
}

/// 标记已读命令
#[derive(Debug, Clone)]
pub struct MarkBookRead {
    pub title: String,
}

/// 删除书籍命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub title: String,
}
