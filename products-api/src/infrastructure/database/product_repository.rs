use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, MySqlPool};
use uuid::Uuid;

use crate::domain::models::product::{NewProduct, Product};
use crate::domain::repositories::product_repository::ProductRepository;
use crate::error::AppError;
use crate::utils::pagination::PageRequest;

const PRODUCT_COLUMNS: &str = r#"
    id, title, description, price, discount_percentage, rating, stock,
    brand, category, thumbnail, images
"#;

/// `seq` 为自增列，按它排序即为插入顺序
const FIND_PAGE_SQL: &str = "ORDER BY seq LIMIT ? OFFSET ?";

#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    title: String,
    description: Option<String>,
    price: f64,
    discount_percentage: f64,
    rating: f64,
    stock: i32,
    brand: Option<String>,
    category: Option<String>,
    thumbnail: Option<String>,
    images: Json<Vec<String>>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            discount_percentage: row.discount_percentage,
            rating: row.rating,
            stock: row.stock,
            brand: row.brand,
            category: row.category,
            thumbnail: row.thumbnail,
            images: row.images.0,
        }
    }
}

#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_page(&self, page: PageRequest) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products {FIND_PAGE_SQL}");

        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?");

        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, AppError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO products
                (id, title, description, price, discount_percentage, rating, stock,
                 brand, category, thumbnail, images)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
            .bind(&id)
            .bind(&product.title)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.discount_percentage)
            .bind(product.rating)
            .bind(product.stock)
            .bind(&product.brand)
            .bind(&product.category)
            .bind(&product.thumbnail)
            .bind(Json(&product.images))
            .execute(&self.pool)
            .await?;

        // 回读一次，返回数据库实际保存的值
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Product {} missing after insert", id)))
    }
}
