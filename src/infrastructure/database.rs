//! 数据库基础设施

use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite,
};
use std::{str::FromStr, time::Duration};
use tracing::info;

use crate::config::DatabaseConfig;

/// 建表语句，启动时执行，表已存在时不做任何事
const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS producto (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        rank INTEGER NOT NULL,
        image TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_producto_name ON producto (name)",
    r#"
    CREATE TABLE IF NOT EXISTS usuario (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username VARCHAR(50) NOT NULL,
        password VARCHAR(255) NOT NULL
    )
    "#,
];

/// 持有连接池的数据库句柄，启动时创建一次，通过路由状态注入处理器
#[derive(Clone)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds));

        // 内存库随连接一起消失，只能固定使用一条长期连接
        pool_options = if config.is_in_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        info!(
            "Connected to database (in_memory = {}, max_connections = {})",
            config.is_in_memory(),
            if config.is_in_memory() { 1 } else { config.max_connections }
        );

        Ok(Self { pool })
    }

    /// 创建缺失的表
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("Database tables ready: producto, usuario");
        Ok(())
    }

    /// 从连接池取出一条连接，归还由 `PoolConnection` 的析构完成
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
        self.pool.acquire().await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
