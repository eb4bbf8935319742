//! 核心层：错误、响应、请求提取和中间件

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
