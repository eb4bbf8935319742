//! 用户资源与登录

pub mod handler;
pub mod model;
pub mod service;
