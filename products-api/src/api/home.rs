use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeMessage {
    #[schema(example = "Welcome to the API")]
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses((status = 200, description = "Fixed welcome payload", body = WelcomeMessage))
)]
pub async fn welcome() -> Json<WelcomeMessage> {
    Json(WelcomeMessage {
        message: "Welcome to the API".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "home",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health() -> &'static str {
    "OK"
}
