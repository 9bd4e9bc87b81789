//! Splitter - 姓名批量拆分服务
//!
//! 启动顺序：配置 -> 日志 -> 存储 -> 示例数据 -> HTTP 服务

use std::sync::Arc;

use splitter::application::{BatchRepositoryPort, SeedExampleBatch, SeedExampleBatchHandler};
use splitter::config::{load_config, print_config, AppConfig, StorageBackend};
use splitter::infrastructure::http::{AppState, HttpServer, ServerConfig, StaticMount};
use splitter::infrastructure::memory::InMemoryBatchRepository;
use splitter::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteBatchRepository,
};

/// 按配置创建历史存储
async fn build_batch_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn BatchRepositoryPort>> {
    match config.database.backend {
        StorageBackend::Sqlite => {
            // 确保数据目录存在
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            let repo: Arc<dyn BatchRepositoryPort> = Arc::new(SqliteBatchRepository::new(pool));
            Ok(repo)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory history; batches are lost on restart");
            let repo: Arc<dyn BatchRepositoryPort> = InMemoryBatchRepository::new().arc();
            Ok(repo)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.default_filter())),
        )
        .init();

    tracing::info!("Splitter - name splitting service v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let batch_repo = build_batch_repository(&config).await?;

    // 首次启动时写入示例批次
    if config.history.seed_example {
        SeedExampleBatchHandler::new(batch_repo.clone())
            .handle(SeedExampleBatch)
            .await?;
    }

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    if config.server.static_files.enabled {
        server_config = server_config.with_static_mount(StaticMount {
            dir: config.server.static_files.dir.clone(),
            path: config.server.static_files.path.clone(),
        });
    }

    let server = HttpServer::new(server_config, AppState::new(batch_repo));

    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
