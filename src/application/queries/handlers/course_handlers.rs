//! Course Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CourseRepositoryPort;
use crate::application::queries::{GetChapter, GetCourse, GetCourseRatings, ListCourses};
use crate::domain::{Chapter, Course};

/// 课程评分汇总（读取时派生，不落库）
#[derive(Debug, Clone)]
pub struct RatingSummary {
    pub course_id: String,
    pub positive: u32,
    pub negative: u32,
    pub total: u64,
}

/// ListCourses Handler
pub struct ListCoursesHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl ListCoursesHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, query: ListCourses) -> Result<Vec<Course>, ApplicationError> {
        let courses = self
            .course_repo
            .list(query.domain.as_deref(), query.sort)
            .await?;
        Ok(courses)
    }
}

/// GetCourse Handler
pub struct GetCourseHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl GetCourseHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, query: GetCourse) -> Result<Course, ApplicationError> {
        self.course_repo
            .find_by_id(&query.course_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Course", query.course_id.as_str()))
    }
}

/// GetChapter Handler
pub struct GetChapterHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl GetChapterHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, query: GetChapter) -> Result<Chapter, ApplicationError> {
        let course = self
            .course_repo
            .find_by_id(&query.course_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Course", query.course_id.as_str()))?;

        course
            .resolve_chapter(&query.selector)
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("Chapter", query.selector.to_string()))
    }
}

/// GetCourseRatings Handler
pub struct GetCourseRatingsHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl GetCourseRatingsHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, query: GetCourseRatings) -> Result<RatingSummary, ApplicationError> {
        let course = self
            .course_repo
            .find_by_id(&query.course_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Course", query.course_id.as_str()))?;

        let ratings = course.ratings();
        Ok(RatingSummary {
            course_id: course.id().to_string(),
            positive: ratings.positive(),
            negative: ratings.negative(),
            total: ratings.total(),
        })
    }
}
