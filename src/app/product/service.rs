//! 产品业务服务

use sqlx::{Connection, SqliteConnection};
use tracing::info;

use super::model::Product;
use crate::core::error::CoreError;

const NOT_FOUND: &str = "Product not found";

/// 产品服务，每个方法只执行一次查询或一次写入
#[derive(Clone, Default)]
pub struct ProductService {
    empty_list_not_found: bool,
}

impl ProductService {
    pub fn new(empty_list_not_found: bool) -> Self {
        Self {
            empty_list_not_found,
        }
    }

    /// 插入调用方给定 id 的产品，主键冲突返回 `Conflict`
    pub async fn create_product(
        &self,
        conn: &mut SqliteConnection,
        product: &Product,
    ) -> Result<Product, CoreError> {
        let mut tx = conn.begin().await?;

        let created = sqlx::query_as::<_, Product>(
            "INSERT INTO producto (id, name, price, rank, image) VALUES (?, ?, ?, ?, ?) \
             RETURNING id, name, price, rank, image",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.rank)
        .bind(&product.image)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| match CoreError::from(err) {
            CoreError::Conflict(_) => {
                CoreError::Conflict(format!("Product with id '{}' already exists", product.id))
            }
            other => other,
        })?;

        tx.commit().await?;

        info!("Created product: {}", created.id);
        Ok(created)
    }

    pub async fn get_product(
        &self,
        conn: &mut SqliteConnection,
        id: &str,
    ) -> Result<Product, CoreError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, rank, image FROM producto WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| CoreError::NotFound(NOT_FOUND.to_string()))
    }

    /// 按存储默认顺序返回全部产品
    pub async fn list_products(
        &self,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<Product>, CoreError> {
        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, price, rank, image FROM producto")
                .fetch_all(&mut *conn)
                .await?;

        if products.is_empty() && self.empty_list_not_found {
            return Err(CoreError::NotFound("No products registered".to_string()));
        }

        Ok(products)
    }

    /// 覆盖除主键外的全部字段
    pub async fn update_product(
        &self,
        conn: &mut SqliteConnection,
        product: &Product,
    ) -> Result<Product, CoreError> {
        let mut tx = conn.begin().await?;

        let updated = sqlx::query_as::<_, Product>(
            "UPDATE producto SET name = ?, price = ?, rank = ?, image = ? WHERE id = ? \
             RETURNING id, name, price, rank, image",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.rank)
        .bind(&product.image)
        .bind(&product.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| CoreError::NotFound(NOT_FOUND.to_string()))?;

        tx.commit().await?;

        info!("Updated product: {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_product(
        &self,
        conn: &mut SqliteConnection,
        id: &str,
    ) -> Result<(), CoreError> {
        let mut tx = conn.begin().await?;

        let result = sqlx::query("DELETE FROM producto WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(NOT_FOUND.to_string()));
        }

        tx.commit().await?;

        info!("Deleted product: {}", id);
        Ok(())
    }
}
