//! 请求级数据库会话

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection};
use std::ops::{Deref, DerefMut};

use super::database::DatabaseManager;
use crate::core::error::CoreError;

/// 每个请求独占的一条连接。
///
/// 作为处理器参数提取；请求结束时无论成功或出错都会随析构归还连接池。
/// 写操作在这条连接上开启事务并提交一次。
pub struct DbSession(PoolConnection<Sqlite>);

impl DbSession {
    pub fn new(conn: PoolConnection<Sqlite>) -> Self {
        Self(conn)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    DatabaseManager: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let db = DatabaseManager::from_ref(state);
        let conn = db.acquire().await?;
        Ok(Self::new(conn))
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
