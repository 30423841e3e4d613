//! Bookshelf - 内存书架追踪服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 书籍聚合与已读状态迁移
//!
//! 应用层 (application/):
//! - Ports: BookRegistryPort
//! - Commands: CreateBook, MarkBookRead, DeleteBook
//! - Queries: GetBook, ListBooks
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: InMemoryBookRegistry（读写锁保护的书名索引）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
