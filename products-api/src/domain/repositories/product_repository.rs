use async_trait::async_trait;

use crate::domain::models::product::{NewProduct, Product};
use crate::error::AppError;
use crate::utils::pagination::PageRequest;

/// 商品存储。实现方只负责读写，不做业务校验。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 按插入顺序跳过 `skip` 条后最多返回 `limit` 条。
    async fn find_page(&self, page: PageRequest) -> Result<Vec<Product>, AppError>;

    /// 全表记录数，不受分页影响。
    async fn count(&self) -> Result<u64, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError>;

    /// 写入新商品并返回存储后的结果（包含生成的 `id`）。
    async fn insert(&self, product: NewProduct) -> Result<Product, AppError>;
}
