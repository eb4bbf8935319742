//! # tienda-api
//!
//! 基于 Axum + SQLx 的产品与用户 CRUD 服务：
//! - `app`：路由、共享状态，以及产品、用户两个资源的处理器/服务/模型
//! - `core`：错误类型、请求体校验、响应结构和中间件
//! - `infrastructure`：数据库句柄、请求级会话和日志
//! - `config`：TOML 配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use config::Config;
pub use crate::core::error::CoreError;
pub use infrastructure::database::DatabaseManager;
