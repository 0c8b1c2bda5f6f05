//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateCourseHandler, RateChapterHandler,
    // Query handlers
    GetChapterHandler, GetCourseHandler, GetCourseRatingsHandler, ListCoursesHandler,
    // Ports
    CourseRepositoryPort,
};

/// 应用状态
///
/// 每个请求由独立任务处理；状态内不含可变共享数据，
/// 唯一共享资源是注入的仓储端口背后的连接池。
pub struct AppState {
    // ========== Ports ==========
    pub course_repo: Arc<dyn CourseRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_course_handler: CreateCourseHandler,
    pub rate_chapter_handler: RateChapterHandler,

    // ========== Query Handlers ==========
    pub list_courses_handler: ListCoursesHandler,
    pub get_course_handler: GetCourseHandler,
    pub get_chapter_handler: GetChapterHandler,
    pub get_course_ratings_handler: GetCourseRatingsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self {
            course_repo: course_repo.clone(),

            // Command handlers
            create_course_handler: CreateCourseHandler::new(course_repo.clone()),
            rate_chapter_handler: RateChapterHandler::new(course_repo.clone()),

            // Query handlers
            list_courses_handler: ListCoursesHandler::new(course_repo.clone()),
            get_course_handler: GetCourseHandler::new(course_repo.clone()),
            get_chapter_handler: GetChapterHandler::new(course_repo.clone()),
            get_course_ratings_handler: GetCourseRatingsHandler::new(course_repo),
        }
    }
}
