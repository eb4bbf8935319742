//! 基础设施层：数据库、请求会话和日志

pub mod database;
pub mod logger;
pub mod session;
