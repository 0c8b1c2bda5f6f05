//! Course Commands

use chrono::{DateTime, Utc};

use crate::domain::{ChapterSelector, CourseId, RatingCounters, RatingVote};

/// 创建课程命令（完整课程载荷）
#[derive(Debug, Clone)]
pub struct CreateCourse {
    pub name: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub domain: Vec<String>,
    pub chapters: Vec<ChapterInput>,
    /// 载荷未给出时显式落为 {0, 0}
    pub ratings: Option<RatingCounters>,
}

/// 创建载荷中的章节字段
#[derive(Debug, Clone)]
pub struct ChapterInput {
    pub name: String,
    pub text: String,
    pub positive_ratings: u32,
    pub negative_ratings: u32,
}

/// 章节评分命令
#[derive(Debug, Clone)]
pub struct RateChapter {
    pub course_id: CourseId,
    pub selector: ChapterSelector,
    pub vote: RatingVote,
}
