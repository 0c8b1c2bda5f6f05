//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Course Context: 课程与内嵌章节管理

pub mod course;

pub use course::{
    Chapter, ChapterSelector, Course, CourseError, CourseId, CourseName, NewCourse,
    RatingCounters, RatingVote,
};
