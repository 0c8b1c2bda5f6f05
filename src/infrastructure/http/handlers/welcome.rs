//! Welcome Handler
//!
//! 根路径的静态欢迎载荷，兼作健康检查

use axum::Json;
use serde::Serialize;

/// 欢迎响应
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Welcome endpoint
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Courses API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
