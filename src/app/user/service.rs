//! 用户业务服务

use sqlx::{Connection, SqliteConnection};
use tracing::{info, warn};

use super::model::{CreateUserRequest, LoginRequest, User};
use crate::core::error::CoreError;

const NOT_FOUND: &str = "User not found";

#[derive(Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// 不检查用户名是否重复
    pub async fn create_user(
        &self,
        conn: &mut SqliteConnection,
        request: &CreateUserRequest,
    ) -> Result<User, CoreError> {
        let mut tx = conn.begin().await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO usuario (username, password) VALUES (?, ?) \
             RETURNING id, username, password",
        )
        .bind(&request.username)
        .bind(&request.password)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Created user: {} ({})", user.username, user.id);
        Ok(user)
    }

    pub async fn get_user(&self, conn: &mut SqliteConnection, id: i64) -> Result<User, CoreError> {
        sqlx::query_as::<_, User>("SELECT id, username, password FROM usuario WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND.to_string()))
    }

    /// 表为空时返回空数组
    pub async fn list_users(&self, conn: &mut SqliteConnection) -> Result<Vec<User>, CoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, password FROM usuario")
            .fetch_all(&mut *conn)
            .await?;
        Ok(users)
    }

    pub async fn delete_user(&self, conn: &mut SqliteConnection, id: i64) -> Result<(), CoreError> {
        let mut tx = conn.begin().await?;

        let result = sqlx::query("DELETE FROM usuario WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(NOT_FOUND.to_string()));
        }

        tx.commit().await?;

        info!("Deleted user: {}", id);
        Ok(())
    }

    /// 明文逐字比较用户名和密码（区分大小写）。
    ///
    /// 这只是占位实现，不构成安全边界：没有哈希、限流或令牌。
    pub async fn login(
        &self,
        conn: &mut SqliteConnection,
        request: &LoginRequest,
    ) -> Result<User, CoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM usuario WHERE username = ? AND password = ? LIMIT 1",
        )
        .bind(&request.username)
        .bind(&request.password)
        .fetch_optional(&mut *conn)
        .await?;

        match user {
            Some(user) => {
                info!("Login succeeded for user {}", user.id);
                Ok(user)
            }
            None => {
                warn!("Login rejected for username '{}'", request.username);
                Err(CoreError::Unauthorized("Invalid credentials".to_string()))
            }
        }
    }
}
