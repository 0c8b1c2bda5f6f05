//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CourseRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Course commands
    ChapterInput,
    CreateCourse,
    RateChapter,
    // Handlers
    handlers::{CreateCourseHandler, RateChapterHandler},
};

pub use error::ApplicationError;

pub use ports::{
    CourseRepositoryPort, RepositoryError, SortMode, MAX_COURSE_RESULTS,
};

pub use queries::{
    // Course queries
    GetChapter,
    GetCourse,
    GetCourseRatings,
    ListCourses,
    // Handlers
    handlers::{
        GetChapterHandler, GetCourseHandler, GetCourseRatingsHandler, ListCoursesHandler,
        RatingSummary,
    },
};
