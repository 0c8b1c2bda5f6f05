//! Course Context - 课程限界上下文
//!
//! 职责:
//! - 课程聚合与内嵌章节管理
//! - 章节选择器（索引或名称）的解析规则
//! - 评分计数值对象

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{Course, NewCourse};
pub use entities::Chapter;
pub use errors::CourseError;
pub use value_objects::{
    ChapterSelector, CourseId, CourseName, RatingCounters, RatingVote, COURSE_ID_LEN,
};
