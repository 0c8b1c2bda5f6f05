//! Repository Ports - 出站端口
//!
//! 定义课程持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Course, CourseId, NewCourse, RatingVote};

/// 列表查询的结果上限（固定，无分页游标）
pub const MAX_COURSE_RESULTS: usize = 100;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 课程列表的排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// 按名称升序（区分大小写）
    Alphabetical,
    /// 按创建日期降序（最新在前）
    Date,
    /// 按派生评分分值降序；无分值的课程排在最后
    Rating,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Alphabetical => "alphabetical",
            SortMode::Date => "date",
            SortMode::Rating => "rating",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "alphabetical" => Some(SortMode::Alphabetical),
            "date" => Some(SortMode::Date),
            "rating" => Some(SortMode::Rating),
            _ => None,
        }
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::Alphabetical
    }
}

/// Course Repository Port
#[async_trait]
pub trait CourseRepositoryPort: Send + Sync {
    /// 插入新课程，由存储分配 ID 并返回落成的聚合
    ///
    /// 名称与既有课程冲突时返回 `RepositoryError::Duplicate`。
    async fn insert(&self, new: NewCourse) -> Result<Course, RepositoryError>;

    /// 根据 ID 查找课程
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, RepositoryError>;

    /// 根据名称精确查找课程（创建时的唯一性预检）
    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, RepositoryError>;

    /// 按可选领域标签过滤、按排序方式返回课程，至多 MAX_COURSE_RESULTS 条
    async fn list(
        &self,
        domain: Option<&str>,
        sort: SortMode,
    ) -> Result<Vec<Course>, RepositoryError>;

    /// 对课程级计数器做存储端原子 +1
    ///
    /// 返回 false 表示课程不存在。累加必须由存储执行，调用方不得读改写。
    async fn increment_rating(
        &self,
        id: &CourseId,
        vote: RatingVote,
    ) -> Result<bool, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_roundtrip() {
        for mode in [SortMode::Alphabetical, SortMode::Date, SortMode::Rating] {
            assert_eq!(SortMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(SortMode::from_str("popularity"), None);
        assert_eq!(SortMode::default(), SortMode::Alphabetical);
    }
}
