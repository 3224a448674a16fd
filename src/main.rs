//! 主程序入口模块
//!
//! 负责服务器配置和启动

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},                 // 跨域
    trace::TraceLayer,                      // 请求级日志
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 日志订阅系统
mod api;
mod view;

/// 服务监听地址
const BIND_ADDR: &str = "127.0.0.1:8080";

/// 主异步函数，使用tokio运行时
#[tokio::main]
async fn main() {
    // 初始化日志追踪
    tracing_subscriber::registry()
        .with( // 过滤规则: 默认显示debug级别
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer()) // 输出格式
        .init(); // 初始化

    // axum
    let app = Router::new()
        .merge(api::welcome::factory_welcome_router())
        .merge(api::heartbeat::factory_heartbeat_router())
        .layer(TraceLayer::new_for_http())
        .layer( // 演示服务，跨域全放开
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    let listener = tokio::net::TcpListener::bind(BIND_ADDR) // 绑定TCP监听端口
        .await
        .unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap(); // 启动HTTP服务器
}
