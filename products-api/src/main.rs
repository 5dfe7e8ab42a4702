use std::sync::Arc;

use products_api::config::Config;
use products_api::error::AppError;
use products_api::infrastructure::database::mysql::init_mysql;
use products_api::infrastructure::database::product_repository::MySqlProductRepository;
use products_api::logging::init_logging;
use products_api::server::{self, create_app, AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    init_logging(&config.logging)?;

    tracing::info!(environment = %config.server.environment, "Starting products API");

    // 初始化数据库连接
    let db_pool = init_mysql(&config.database).await?;

    // 创建应用状态
    let app_state = AppState {
        config: config.clone(),
        products: Arc::new(MySqlProductRepository::new(db_pool.clone())),
    };

    // 创建并启动服务器
    let app = create_app(app_state);
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", &addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("Database pool closed, bye");

    Ok(())
}
