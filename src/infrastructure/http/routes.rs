//! HTTP Routes
//!
//! API Endpoints:
//! - /books            POST    新增书籍
//! - /books            GET     列出书籍（?readed=true|false 过滤）
//! - /books/:title     GET     获取单本书
//! - /books/:title     PATCH   标记已读
//! - /books/:title     DELETE  删除书籍
//! - /ping             GET     健康检查
//!
//! 未知路径返回 404，已知路径上的其他方法返回 405，均带统一错误体

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/ping",
            get(handlers::ping).fallback(handlers::method_not_allowed),
        )
        .merge(book_routes())
        .fallback(handlers::not_found)
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/books",
            get(handlers::list_books)
                .post(handlers::create_book)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/books/:title",
            get(handlers::get_book)
                .patch(handlers::read_book)
                .delete(handlers::delete_book)
                .fallback(handlers::method_not_allowed),
        )
}
