use std::sync::Arc;

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::Config as SwaggerConfig;

use crate::api::{home, products};
use crate::domain::models::product::Product;
use crate::error::AppError;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// 页面里的静态资源都是相对路径，`/api-docs` 不带斜杠访问时需要指定基准地址
const BASE_HREF: &str = "<base href=\"/api-docs/\">";

/// 由各 handler 上的 `#[utoipa::path]` 注解生成的 OpenAPI 3 文档
#[derive(OpenApi)]
#[openapi(
    info(
        title = "My API",
        version = "1.0.0",
        description = "A simple products API"
    ),
    paths(
        home::welcome,
        home::health,
        products::list_products,
        products::get_product,
        products::create_product,
    ),
    components(
        schemas(
            Product,
            products::ProductListResponse,
            products::CreateProductRequest,
            home::WelcomeMessage,
        )
    ),
    tags(
        (name = "products", description = "Product catalogue: list, lookup and create"),
        (name = "home", description = "Service landing and liveness")
    )
)]
pub struct ApiDoc;

/// Swagger UI 直接挂在 `/api-docs`（不做重定向），资源文件在 `/api-docs/*`。
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let config = Arc::new(SwaggerConfig::from(OPENAPI_JSON_PATH));

    Router::new()
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .route(DOCS_PATH, get(swagger_index))
        .route("/api-docs/", get(swagger_index))
        .route("/api-docs/{*file}", get(swagger_file))
        .layer(Extension(config))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_index(Extension(config): Extension<Arc<SwaggerConfig<'static>>>) -> Response {
    serve_swagger_file("", config)
}

async fn swagger_file(
    Path(file): Path<String>,
    Extension(config): Extension<Arc<SwaggerConfig<'static>>>,
) -> Response {
    serve_swagger_file(&file, config)
}

fn serve_swagger_file(file: &str, config: Arc<SwaggerConfig<'static>>) -> Response {
    match utoipa_swagger_ui::serve(file, config) {
        Ok(Some(swagger_file)) => {
            let body = if file.is_empty() || file == "index.html" {
                String::from_utf8_lossy(&swagger_file.bytes)
                    .replacen("<head>", &format!("<head>\n    {}", BASE_HREF), 1)
                    .into_bytes()
            } else {
                swagger_file.bytes.into_owned()
            };
            ([(header::CONTENT_TYPE, swagger_file.content_type)], body).into_response()
        }
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => AppError::Internal(format!("Failed to serve Swagger UI: {}", e)).into_response(),
    }
}
