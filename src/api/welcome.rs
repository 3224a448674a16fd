//! 欢迎页 API
//!
//! API接口设计：
//!
//! - `GET /`: 返回欢迎页(HTML视图)，视图模型固定携带 `Gitlab` 属性

use axum::{
    response::Html,                     // HTML响应
    routing::{get},                     // HTTP方法路由
    Router,                             // 路由器
};

use crate::view::{model::ViewModel, render};

/// 模型属性键 (固定标识)
pub const WELCOME_ATTR: &str = "Gitlab";
/// 欢迎语，属性值 (包含 "DevOps")
const WELCOME_TEXT: &str = "Welcome to DevOps";
/// 页面标题
const PAGE_TITLE: &str = "DevOps Sample";

/// 欢迎页路由
pub fn factory_welcome_router() -> Router {
    let app = Router::new()
        .route("/", get(get_welcome));
    app
}

/// 构造本次请求的视图模型
///
/// 每次调用新建，不读写任何共享状态 (重复请求内容一致)
fn welcome_model() -> ViewModel {
    let mut model = ViewModel::new();
    model.insert(WELCOME_ATTR, WELCOME_TEXT);
    model
}

/// GET / 欢迎页
pub async fn get_welcome() -> Html<String> {
    tracing::debug!("GET /");
    let model = welcome_model();
    Html(render::render_page(PAGE_TITLE, &model))
}
