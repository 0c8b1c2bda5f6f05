//! Course Context - Aggregate Root

use chrono::{DateTime, Utc};

use super::{Chapter, ChapterSelector, CourseId, CourseName, RatingCounters};

/// 待创建课程（尚未获得存储分配的 ID）
///
/// 评分计数在创建时显式落为默认值，而非读取时惰性补齐。
#[derive(Debug, Clone)]
pub struct NewCourse {
    name: CourseName,
    date: DateTime<Utc>,
    description: String,
    domain: Vec<String>,
    chapters: Vec<Chapter>,
    ratings: RatingCounters,
    rating_score: Option<f64>,
}

impl NewCourse {
    pub fn new(
        name: CourseName,
        date: DateTime<Utc>,
        description: String,
        domain: Vec<String>,
        chapters: Vec<Chapter>,
    ) -> Self {
        Self {
            name,
            date,
            description,
            domain,
            chapters,
            ratings: RatingCounters::default(),
            rating_score: None,
        }
    }

    /// 携带载荷中给出的初始计数
    pub fn with_ratings(mut self, ratings: RatingCounters) -> Self {
        self.ratings = ratings;
        self
    }

    /// 携带种子数据中的派生评分分值（rating 排序键）
    pub fn with_rating_score(mut self, score: f64) -> Self {
        self.rating_score = Some(score);
        self
    }

    pub fn name(&self) -> &CourseName {
        &self.name
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn domain_tags(&self) -> &[String] {
        &self.domain
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn ratings(&self) -> RatingCounters {
        self.ratings
    }

    pub fn rating_score(&self) -> Option<f64> {
        self.rating_score
    }
}

/// Course 聚合根
///
/// 不变量:
/// - ID 由存储分配，创建后不可变
/// - 章节序列的顺序即语义（位置索引是合法查找键），创建后不重排
/// - 课程级评分计数仅通过存储端原子累加变更
#[derive(Debug, Clone)]
pub struct Course {
    id: CourseId,
    name: CourseName,
    date: DateTime<Utc>,
    description: String,
    domain: Vec<String>,
    chapters: Vec<Chapter>,
    ratings: RatingCounters,
    rating_score: Option<f64>,
}

impl Course {
    /// 以存储分配的 ID 落成新课程
    pub fn from_new(id: CourseId, new: NewCourse) -> Self {
        Self {
            id,
            name: new.name,
            date: new.date,
            description: new.description,
            domain: new.domain,
            chapters: new.chapters,
            ratings: new.ratings,
            rating_score: new.rating_score,
        }
    }

    /// 从持久化状态重建聚合
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: CourseId,
        name: CourseName,
        date: DateTime<Utc>,
        description: String,
        domain: Vec<String>,
        chapters: Vec<Chapter>,
        ratings: RatingCounters,
        rating_score: Option<f64>,
    ) -> Self {
        Self {
            id,
            name,
            date,
            description,
            domain,
            chapters,
            ratings,
            rating_score,
        }
    }

    /// 按选择器解析章节（见 ChapterSelector 的优先级规则）
    pub fn resolve_chapter(&self, selector: &ChapterSelector) -> Option<&Chapter> {
        selector.resolve(&self.chapters)
    }

    // Getters
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn name(&self) -> &CourseName {
        &self.name
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn domain_tags(&self) -> &[String] {
        &self.domain
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn ratings(&self) -> RatingCounters {
        self.ratings
    }

    pub fn rating_score(&self) -> Option<f64> {
        self.rating_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        let new = NewCourse::new(
            CourseName::new("Algebra").unwrap(),
            "2023-01-01T00:00:00Z".parse().unwrap(),
            "线性代数入门".to_string(),
            vec!["math".to_string()],
            vec![
                Chapter::new("Intro", "第一章").unwrap(),
                Chapter::new("Sets", "第二章").unwrap(),
            ],
        );
        Course::from_new(CourseId::generate(), new)
    }

    #[test]
    fn test_new_course_defaults() {
        let course = sample_course();
        assert_eq!(course.ratings(), RatingCounters::default());
        assert!(course.rating_score().is_none());
        assert_eq!(course.chapter_count(), 2);
    }

    #[test]
    fn test_resolve_chapter_through_aggregate() {
        let course = sample_course();
        let by_index = course.resolve_chapter(&ChapterSelector::Index(1)).unwrap();
        assert_eq!(by_index.name(), "Sets");

        let by_name = course
            .resolve_chapter(&ChapterSelector::Name("Intro".to_string()))
            .unwrap();
        assert_eq!(by_name.name(), "Intro");

        assert!(course.resolve_chapter(&ChapterSelector::Index(2)).is_none());
    }
}
