//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, StorageBackend};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// API 路由前缀，静态资源不能挂在其下
const API_PREFIX: &str = "/api";

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `SPLITTER_SERVER__PORT=8080`
/// - `SPLITTER_DATABASE__BACKEND=memory`
/// - `SPLITTER_DATABASE__PATH=/data/splitter.db`
/// - `SPLITTER_HISTORY__SEED_EXAMPLE=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索工作目录下的 config.toml / config.local.toml
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "web")?
        .set_default("server.static_files.path", "/")?
        .set_default("database.backend", "sqlite")?
        .set_default("database.path", "data/splitter.db")?
        .set_default("database.max_connections", 5)?
        .set_default("history.seed_example", true)?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），前缀 SPLITTER_，层级分隔符 __
    builder = builder.add_source(
        Environment::with_prefix("SPLITTER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Request body limit cannot be 0".to_string(),
        ));
    }

    validate_static_path(&config.server.static_files.path)?;

    if config.database.backend == StorageBackend::Sqlite {
        if config.database.path.is_empty() {
            return Err(ConfigError::ValidationError(
                "Database path cannot be empty".to_string(),
            ));
        }

        if config.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "Database max_connections cannot be 0".to_string(),
            ));
        }
    }

    Ok(())
}

/// 静态资源前缀必须以 `/` 开头，且不能占用 `/api`
fn validate_static_path(path: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "Static files path must start with '/': {}",
            path
        )));
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed == API_PREFIX || trimmed.starts_with(&format!("{}/", API_PREFIX)) {
        return Err(ConfigError::ValidationError(format!(
            "Static files path cannot be under {}: {}",
            API_PREFIX, path
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body: {} bytes", config.server.max_body_bytes);
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {:?} at {}",
            config.server.static_files.dir,
            config.server.static_files.path
        );
    }
    tracing::info!("History Backend: {}", config.database.backend.as_str());
    if config.database.backend == StorageBackend::Sqlite {
        tracing::info!("Database: {}", config.database.path);
        tracing::info!("Database Max Connections: {}", config.database.max_connections);
    }
    tracing::info!("Seed Example Batch: {}", config.history.seed_example);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_path() {
        let mut config = AppConfig::default();
        config.database.path = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_memory_backend_ignores_db_path() {
        let mut config = AppConfig::default();
        config.database.backend = StorageBackend::Memory;
        config.database.path = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("splitter.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            port = 8080

            [database]
            backend = "memory"

            [history]
            seed_example = false
            "#,
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert!(!config.history.seed_example);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("splitter.toml");
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();

        let result = load_config_from_path(Some(&path));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_static_path_validation() {
        assert!(validate_static_path("/").is_ok());
        assert!(validate_static_path("/ui").is_ok());
        assert!(validate_static_path("/apidocs").is_ok());

        assert!(validate_static_path("ui").is_err());
        assert!(validate_static_path("").is_err());
        assert!(validate_static_path("/api").is_err());
        assert!(validate_static_path("/api/").is_err());
        assert!(validate_static_path("/api/ui").is_err());
    }

    #[test]
    fn test_load_rejects_relative_static_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("splitter.toml");
        std::fs::write(
            &path,
            "[server.static_files]\nenabled = true\npath = \"ui\"\n",
        )
        .unwrap();

        let result = load_config_from_path(Some(&path));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_rejects_static_path_under_api() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("splitter.toml");
        std::fs::write(
            &path,
            "[server.static_files]\nenabled = true\npath = \"/api/ui\"\n",
        )
        .unwrap();

        let result = load_config_from_path(Some(&path));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let result = load_config_from_path(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
