//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::CONTENT_TYPE;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::status_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 静态前端资源挂载
#[derive(Debug, Clone)]
pub struct StaticMount {
    /// 资源目录，未命中的路径回退到其中的 index.html
    pub dir: PathBuf,
    /// URL 前缀，"/" 表示根路径托管
    pub path: String,
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub static_mount: Option<StaticMount>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_body_bytes: 1024 * 1024,
            static_mount: None,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn with_static_mount(mut self, mount: StaticMount) -> Self {
        self.static_mount = Some(mount);
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    fn build_router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600));

        let mut router = create_routes();

        if let Some(mount) = &self.config.static_mount {
            let index = mount.dir.join("index.html");
            let serve_dir = ServeDir::new(&mount.dir).fallback(ServeFile::new(index));

            info!(dir = %mount.dir.display(), path = %mount.path, "Serving static files");

            router = if mount.path == "/" {
                router.fallback_service(serve_dir)
            } else {
                router.nest_service(&mount.path, serve_dir)
            };
        }

        router
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(middleware::from_fn(status_logging_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let addr = self.config.addr();

        let listener = TcpListener::bind(&addr).await?;
        info!("HTTP server listening on {}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryBatchRepository;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn state() -> AppState {
        AppState::new(InMemoryBatchRepository::new().arc())
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(ServerConfig::new("127.0.0.1", 8080).addr(), "127.0.0.1:8080");
        assert_eq!(ServerConfig::default().addr(), "0.0.0.0:5000");
    }

    #[tokio::test]
    async fn test_body_limit_rejects_large_payload() {
        let config = ServerConfig::default().with_max_body_bytes(64);
        let router = HttpServer::new(config, state()).build_router();

        let names = "x".repeat(256);
        let request = Request::builder()
            .method("POST")
            .uri("/api/process")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::json!({ "names": names }).to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_static_fallback_serves_index() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>splitter</h1>").unwrap();

        let config = ServerConfig::default().with_static_mount(StaticMount {
            dir: dir.path().to_path_buf(),
            path: "/".to_string(),
        });
        let router = HttpServer::new(config, state()).build_router();

        let request = Request::builder().uri("/history/3").body(Body::empty()).unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>splitter</h1>");

        let request = Request::builder().uri("/api/ping").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
