use std::sync::Arc;

use crate::domain::models::product::{NewProduct, Product};
use crate::domain::repositories::product_repository::ProductRepository;
use crate::error::AppError;
use crate::utils::pagination::{PageRequest, Paginated};

pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// 分页查询与总数统计是两次独立读取，并发执行，不保证同一快照。
    pub async fn list_products(&self, page: PageRequest) -> Result<Paginated<Product>, AppError> {
        let (products, total) = tokio::try_join!(
            self.repository.find_page(page),
            self.repository.count()
        )?;

        tracing::debug!(
            limit = page.limit,
            skip = page.skip,
            returned = products.len(),
            total,
            "listed products"
        );

        Ok(Paginated {
            items: products,
            total,
            limit: page.limit,
            skip: page.skip,
        })
    }

    pub async fn get_product(&self, id: &str) -> Result<Option<Product>, AppError> {
        let product = self.repository.find_by_id(id).await?;

        if product.is_none() {
            tracing::debug!(id, "product not found");
        }

        Ok(product)
    }

    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let product = self.repository.insert(new_product).await?;

        tracing::info!(id = %product.id, title = %product.title, "product created");

        Ok(product)
    }
}
