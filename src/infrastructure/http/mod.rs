//! HTTP Layer - RESTful API
//!
//! 把请求翻译为命令/查询，再把结果或错误映射为 HTTP 响应

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
