//! 用于心跳检测的API
//!
//! 运维探活面，只读，不参与欢迎页语义

use axum::{
    http::StatusCode,                   // HTTP状态码
    response::{IntoResponse, Json},     // 响应转换trait、JSON响应
    routing::get,                       // HTTP方法路由
    Router,                             // 路由器
};
use once_cell::sync::Lazy;              // 线程安全只初始化一次
use serde::Serialize;                   // JSON序列化
use std::time::Instant;                 // 进程内时钟
use uuid::Uuid;                         // 生成唯一id

/// 进程启动时刻
///
/// 在路由工厂里强制初始化，使运行时长从启动算起而非首个请求
static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);
/// 实例id，每次启动重新生成
static INSTANCE_ID: Lazy<Uuid> = Lazy::new(Uuid::new_v4);

/// 心跳响应载荷
#[derive(Debug, Serialize)]
struct Heartbeat {
    status: &'static str,   // 固定 "alive"
    timestamp: String,      // RFC3339 本地时间
    instance: Uuid,         // 本次启动的实例id
    uptime_secs: u64,       // 进程运行秒数
}

/// 心跳路由
pub fn factory_heartbeat_router() -> Router {
    // 启动即计时
    Lazy::force(&STARTED_AT);
    Lazy::force(&INSTANCE_ID);

    let app = Router::new()
        .route("/heartbeat", get(get_heartbeat));
    app
}

/// GET /heartbeat, 心跳检测
///
/// 返回一些服务器信息，如:
/// - 服务器时间
/// - 实例id与运行时长
pub async fn get_heartbeat() -> impl IntoResponse {
    tracing::debug!("GET /heartbeat");

    let resp = Heartbeat {
        status: "alive",
        timestamp: chrono::Local::now().to_rfc3339(), // 本地时间
        instance: *INSTANCE_ID,
        uptime_secs: STARTED_AT.elapsed().as_secs(),
    };
    (StatusCode::OK, Json(resp))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt; // oneshot

    use super::*;

    #[tokio::test]
    async fn heartbeat_reports_alive() {
        let app = factory_heartbeat_router();
        let resp = app
            .oneshot(Request::builder().uri("/heartbeat").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload["status"], "alive");
        assert!(payload["instance"].is_string());
        assert!(payload["uptime_secs"].is_u64());
    }
}
