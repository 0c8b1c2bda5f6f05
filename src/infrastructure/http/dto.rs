//! Data Transfer Objects
//!
//! 跨 handler 共享的响应结构。成功响应直接返回 JSON 主体，
//! 错误统一走 `error::ErrorResponse`。

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Chapter, Course};

/// 课程响应（含存储分配的 ID）
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub domain: Vec<String>,
    pub chapters: Vec<ChapterResponse>,
    pub ratings: RatingsBody,
}

impl CourseResponse {
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            name: course.name().to_string(),
            date: course.date(),
            description: course.description().to_string(),
            domain: course.domain_tags().to_vec(),
            chapters: course.chapters().iter().map(ChapterResponse::from).collect(),
            ratings: RatingsBody {
                positive: course.ratings().positive(),
                negative: course.ratings().negative(),
            },
        }
    }
}

/// 章节响应
#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub name: String,
    pub text: String,
    pub positive_ratings: u32,
    pub negative_ratings: u32,
}

impl From<&Chapter> for ChapterResponse {
    fn from(chapter: &Chapter) -> Self {
        Self {
            name: chapter.name().to_string(),
            text: chapter.text().to_string(),
            positive_ratings: chapter.positive_ratings(),
            negative_ratings: chapter.negative_ratings(),
        }
    }
}

/// 课程级评分计数
#[derive(Debug, Serialize)]
pub struct RatingsBody {
    pub positive: u32,
    pub negative: u32,
}
