//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /                                                  GET   欢迎载荷（健康检查）
//! - /api/courses                                       GET   课程列表（sort_by + domain 过滤，上限 100）
//! - /api/courses                                       POST  创建课程
//! - /api/courses/{course_id}                           GET   课程详情
//! - /api/courses/{course_id}/chapters/{identifier}     GET   章节（索引或名称）
//! - /api/courses/{course_id}/rate-chapter              POST  章节评分
//! - /api/courses/{course_id}/ratings                   GET   课程评分汇总

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::welcome))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/courses", course_routes())
}

/// Course 路由
fn course_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_courses).post(handlers::create_course))
        .route("/:course_id", get(handlers::get_course))
        .route(
            "/:course_id/chapters/:chapter_identifier",
            get(handlers::get_chapter),
        )
        .route("/:course_id/rate-chapter", post(handlers::rate_chapter))
        .route("/:course_id/ratings", get(handlers::get_course_ratings))
}
