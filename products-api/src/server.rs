use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{home, products};
use crate::config::Config;
use crate::docs;
use crate::domain::repositories::product_repository::ProductRepository;

/// 请求间共享的依赖。存储客户端通过这里注入，生命周期由 `main` 管理。
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: Arc<dyn ProductRepository>,
}

pub fn create_app(state: AppState) -> Router {
    let app_state = Arc::new(state);

    let home_routes = Router::new()
        .route("/", get(home::welcome))
        .route("/health", get(home::health));

    Router::new()
        .merge(home_routes)
        .nest("/products", products::routes())
        .merge(docs::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(app_state)
}

/// Ctrl+C 或 SIGTERM 触发优雅停机
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
