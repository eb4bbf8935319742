//! 产品数据模型

use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

/// 产品记录，同时用作创建请求体和响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Product {
    #[validate(length(min = 1, max = 255, message = "id must be between 1 and 255 characters"))]
    pub id: String,

    #[serde(alias = "nom")]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,

    #[serde(alias = "pre")]
    pub price: f64,

    #[serde(alias = "rang", deserialize_with = "deserialize_rank")]
    pub rank: i64,

    #[serde(alias = "img")]
    #[validate(length(max = 255, message = "image must be at most 255 characters"))]
    pub image: String,
}

/// 更新请求：除主键外整条覆盖。
///
/// 请求体里的 `id` 可有可无，以路径中的 id 为准，这里的值被丢弃。
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(alias = "nom")]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,

    #[serde(alias = "pre")]
    pub price: f64,

    #[serde(alias = "rang", deserialize_with = "deserialize_rank")]
    pub rank: i64,

    #[serde(alias = "img")]
    #[validate(length(max = 255, message = "image must be at most 255 characters"))]
    pub image: String,
}

/// 排名接受整数，也接受没有小数部分的浮点数（如 `3.0`）
fn deserialize_rank<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rank {
        Int(i64),
        Float(f64),
    }

    match Rank::deserialize(deserializer)? {
        Rank::Int(value) => Ok(value),
        Rank::Float(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        Rank::Float(value) => Err(de::Error::custom(format!(
            "rank must be a whole number, got {}",
            value
        ))),
    }
}

impl UpdateProductRequest {
    /// 以路径 id 作为主键生成替换后的记录
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            rank: self.rank,
            image: self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_field_names() {
        let product: Product = serde_json::from_str(
            r#"{"id": "p-1", "nom": "Lapiz", "pre": 1.5, "rang": 3, "img": "lapiz.png"}"#,
        )
        .unwrap();

        assert_eq!(product.name, "Lapiz");
        assert_eq!(product.price, 1.5);
        assert_eq!(product.rank, 3);
        assert_eq!(product.image, "lapiz.png");
    }

    #[test]
    fn path_id_wins_over_body_id() {
        let request: UpdateProductRequest = serde_json::from_str(
            r#"{"id": "other", "name": "Goma", "price": 0.5, "rank": 1, "image": ""}"#,
        )
        .unwrap();

        let product = request.into_product("p-9".to_string());
        assert_eq!(product.id, "p-9");
        assert_eq!(product.name, "Goma");
    }

    #[test]
    fn rank_accepts_whole_floats_only() {
        let product: Product = serde_json::from_str(
            r#"{"id": "p-2", "name": "Regla", "price": 2.0, "rank": 3.0, "image": ""}"#,
        )
        .unwrap();
        assert_eq!(product.rank, 3);

        let result: Result<UpdateProductRequest, _> = serde_json::from_str(
            r#"{"name": "Regla", "price": 2.0, "rang": 3.5, "image": ""}"#,
        );
        assert!(result.is_err());

        let result: Result<Product, _> = serde_json::from_str(
            r#"{"id": "p-2", "name": "Regla", "price": 2.0, "rank": "3", "image": ""}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_id_is_rejected() {
        let product = Product {
            id: String::new(),
            name: "x".to_string(),
            price: 1.0,
            rank: 1,
            image: String::new(),
        };
        assert!(product.validate().is_err());
    }
}
