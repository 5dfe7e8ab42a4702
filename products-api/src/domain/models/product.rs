use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 由存储层在创建时分配，之后不可变
    #[schema(example = "0b9d3c36-5f1e-4a57-9a51-2f3d1f0f8c11")]
    pub id: String,
    #[schema(example = "iPhone 9")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = 549.0)]
    pub price: f64,
    #[schema(example = 12.96)]
    pub discount_percentage: f64,
    #[schema(example = 4.69)]
    pub rating: f64,
    #[schema(example = 94)]
    pub stock: i32,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
}

/// 待写入的商品，`id` 由存储层生成
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    #[validate(range(min = 0, message = "stock cannot be negative"))]
    pub stock: i32,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
}

impl NewProduct {
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            stock: self.stock,
            brand: self.brand,
            category: self.category,
            thumbnail: self.thumbnail,
            images: self.images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewProduct {
        NewProduct {
            title: "Laptop".to_string(),
            description: None,
            price: 999.0,
            discount_percentage: 5.0,
            rating: 4.5,
            stock: 3,
            brand: Some("Acme".to_string()),
            category: None,
            thumbnail: None,
            images: vec![],
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let product = sample().into_product("p-1".to_string());
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], "p-1");
        assert_eq!(value["discountPercentage"], 5.0);
        assert!(value.get("discount_percentage").is_none());
        assert_eq!(value["description"], serde_json::Value::Null);
    }

    #[test]
    fn rejects_empty_title_and_negative_amounts() {
        assert!(sample().validate().is_ok());

        let mut product = sample();
        product.title = String::new();
        product.price = -1.0;
        product.stock = -2;

        let errors = product.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("stock"));
    }
}
