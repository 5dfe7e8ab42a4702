use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::models::product::{NewProduct, Product};
use crate::domain::services::product_service::ProductService;
use crate::error::AppError;
use crate::server::AppState;
use crate::utils::numeric::{coerce_f64, coerce_i64};
use crate::utils::pagination::{Paginated, PaginationParams};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    /// 商品总数，不受分页影响
    pub total: u64,
    pub limit: u32,
    pub skip: u64,
}

impl From<Paginated<Product>> for ProductListResponse {
    fn from(page: Paginated<Product>) -> Self {
        Self {
            products: page.items,
            total: page.total,
            limit: page.limit,
            skip: page.skip,
        }
    }
}

/// 数字字段既可以是 JSON 数字，也可以是数字字符串（如 `"9.99"`）。
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[schema(example = "iPhone 9")]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = f64, example = 549)]
    pub price: Option<Value>,
    #[schema(value_type = f64, example = 12.96)]
    pub discount_percentage: Option<Value>,
    #[schema(value_type = f64, example = 4.69)]
    pub rating: Option<Value>,
    #[schema(value_type = i32, example = 94)]
    pub stock: Option<Value>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Option<Vec<String>>,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> Result<NewProduct, AppError> {
        let price = required_f64(self.price.as_ref(), "price")?;
        let discount_percentage =
            required_f64(self.discount_percentage.as_ref(), "discountPercentage")?;
        let rating = required_f64(self.rating.as_ref(), "rating")?;
        let stock = required_i64(self.stock.as_ref(), "stock")?;
        let stock = i32::try_from(stock)
            .map_err(|_| AppError::Validation(format!("stock is out of range: {}", stock)))?;

        let new_product = NewProduct {
            title: self.title.unwrap_or_default(),
            description: self.description,
            price,
            discount_percentage,
            rating,
            stock,
            brand: self.brand,
            category: self.category,
            thumbnail: self.thumbnail,
            images: self.images.unwrap_or_default(),
        };
        new_product.validate()?;

        Ok(new_product)
    }
}

fn required_f64(value: Option<&Value>, field: &str) -> Result<f64, AppError> {
    let value = value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))?;
    coerce_f64(value).ok_or_else(|| AppError::Validation(format!("{} must be a number", field)))
}

fn required_i64(value: Option<&Value>, field: &str) -> Result<i64, AppError> {
    let value = value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))?;
    coerce_i64(value).ok_or_else(|| AppError::Validation(format!("{} must be an integer", field)))
}

/// 分页获取商品列表
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(PaginationParams),
    responses(
        (status = 200, description = "A page of products and the total count", body = ProductListResponse)
    )
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ProductListResponse>, AppError> {
    let product_service = ProductService::new(state.products.clone());

    // 按键值对读取，重复或多余的参数不会让请求失败
    let page = PaginationParams::from_pairs(pairs).resolve(&state.config.products);
    let paginated_products = product_service.list_products(page).await?;

    Ok(Json(ProductListResponse::from(paginated_products)))
}

/// 按 id 获取单个商品，不存在时返回 `null`
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product, or null when no product has this id", body = Product)
    )
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Product>>, AppError> {
    let product_service = ProductService::new(state.products.clone());

    let product = product_service.get_product(&id).await?;

    Ok(Json(product))
}

/// 创建商品
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "The created product", body = Product),
        (status = 400, description = "Malformed body or invalid field values")
    )
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Json(payload) = payload?;
    let new_product = payload.into_new_product()?;

    let product_service = ProductService::new(state.products.clone());

    let product = product_service.create_product(new_product).await?;

    Ok(Json(product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateProductRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let new_product = request(json!({
            "title": "T",
            "price": "9.99",
            "discountPercentage": 10,
            "rating": "4.5",
            "stock": "5",
            "images": ["a.jpg", "b.jpg"]
        }))
        .into_new_product()
        .unwrap();

        assert_eq!(new_product.price, 9.99);
        assert_eq!(new_product.discount_percentage, 10.0);
        assert_eq!(new_product.rating, 4.5);
        assert_eq!(new_product.stock, 5);
        assert_eq!(new_product.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(new_product.brand, None);
    }

    #[test]
    fn unparsable_number_is_a_validation_error() {
        let result = request(json!({
            "title": "T",
            "price": "cheap",
            "discountPercentage": 0,
            "rating": 0,
            "stock": 1
        }))
        .into_new_product();

        match result {
            Err(AppError::Validation(message)) => assert_eq!(message, "price must be a number"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_fields_are_validation_errors() {
        let result = request(json!({ "title": "T" })).into_new_product();
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = request(json!({
            "price": 1,
            "discountPercentage": 0,
            "rating": 0,
            "stock": 1
        }))
        .into_new_product();
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn stock_outside_i32_is_rejected() {
        let result = request(json!({
            "title": "T",
            "price": 1,
            "discountPercentage": 0,
            "rating": 0,
            "stock": "3000000000"
        }))
        .into_new_product();

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
