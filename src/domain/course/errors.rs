//! Course Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("无效的课程 ID: {0}")]
    InvalidId(String),

    #[error("无效的课程名称: {0}")]
    InvalidName(String),

    #[error("无效的章节: {0}")]
    InvalidChapter(String),
}
