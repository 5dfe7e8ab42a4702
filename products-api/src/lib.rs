//! 商品 REST 服务：分页列表、按 id 查询、创建，附带 Swagger UI 接口文档。
//!
//! | 路由 | 说明 |
//! |------|------|
//! | `GET /` | 欢迎信息 |
//! | `GET /health` | 存活检查 |
//! | `GET /api-docs` | Swagger UI，原始文档在 `/api-docs/openapi.json` |
//! | `GET /products?limit=&skip=` | 分页列表 |
//! | `GET /products/{id}` | 单个商品，不存在时为 `null` |
//! | `POST /products` | 创建商品 |

pub mod api;
pub mod config;
pub mod docs;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod server;
pub mod utils;

pub use error::AppError;
pub use server::{create_app, AppState};
