#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;
use uuid::Uuid;

use products_api::config::Config;
use products_api::domain::models::product::{NewProduct, Product};
use products_api::domain::repositories::product_repository::ProductRepository;
use products_api::error::AppError;
use products_api::utils::pagination::PageRequest;
use products_api::{create_app, AppState};

/// 内存实现，按插入顺序保存
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_page(&self, page: PageRequest) -> Result<Vec<Product>, AppError> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.products.read().await.len() as u64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, AppError> {
        let product = product.into_product(Uuid::new_v4().to_string());
        self.products.write().await.push(product.clone());
        Ok(product)
    }
}

/// 所有操作都返回数据库错误
pub struct UnavailableProductRepository;

#[async_trait]
impl ProductRepository for UnavailableProductRepository {
    async fn find_page(&self, _page: PageRequest) -> Result<Vec<Product>, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn count(&self) -> Result<u64, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Product>, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _product: NewProduct) -> Result<Product, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn app_with(repository: Arc<dyn ProductRepository>) -> Router {
    create_app(AppState {
        config: Config::default(),
        products: repository,
    })
}

pub fn sample_product(title: &str) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: Some(format!("{title} description")),
        price: 10.5,
        discount_percentage: 2.5,
        rating: 4.2,
        stock: 7,
        brand: Some("Acme".to_string()),
        category: Some("misc".to_string()),
        thumbnail: Some(format!("https://cdn.example.com/{title}.jpg")),
        images: vec![format!("https://cdn.example.com/{title}-1.jpg")],
    }
}

/// 预先写入 `count` 个商品
pub async fn seeded_repository(count: usize) -> Arc<InMemoryProductRepository> {
    let repository = Arc::new(InMemoryProductRepository::default());
    for i in 0..count {
        repository
            .insert(sample_product(&format!("product-{i}")))
            .await
            .unwrap();
    }
    repository
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}
