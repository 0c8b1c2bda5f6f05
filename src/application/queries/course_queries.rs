//! Course Queries

use crate::application::ports::SortMode;
use crate::domain::{ChapterSelector, CourseId};

/// 列出课程查询（可选领域标签过滤 + 排序方式）
#[derive(Debug, Clone)]
pub struct ListCourses {
    pub sort: SortMode,
    pub domain: Option<String>,
}

/// 获取课程详情查询
#[derive(Debug, Clone)]
pub struct GetCourse {
    pub course_id: CourseId,
}

/// 获取章节查询（索引或名称选择器）
#[derive(Debug, Clone)]
pub struct GetChapter {
    pub course_id: CourseId,
    pub selector: ChapterSelector,
}

/// 获取课程评分汇总查询
#[derive(Debug, Clone)]
pub struct GetCourseRatings {
    pub course_id: CourseId,
}
