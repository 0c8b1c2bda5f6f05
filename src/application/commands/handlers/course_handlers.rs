//! Course Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateCourse, RateChapter};
use crate::application::error::ApplicationError;
use crate::application::ports::{CourseRepositoryPort, RepositoryError};
use crate::domain::{Chapter, Course, CourseName, NewCourse};

// ============================================================================
// CreateCourse
// ============================================================================

/// CreateCourse Handler - 名称唯一性预检后落库
pub struct CreateCourseHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl CreateCourseHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, command: CreateCourse) -> Result<Course, ApplicationError> {
        let name = CourseName::new(command.name)?;

        let chapters = command
            .chapters
            .into_iter()
            .map(|c| Chapter::with_ratings(c.name, c.text, c.positive_ratings, c.negative_ratings))
            .collect::<Result<Vec<_>, _>>()?;

        // 唯一性仅在创建时强制（不存在课程更新路径）
        if self.course_repo.find_by_name(name.as_str()).await?.is_some() {
            return Err(ApplicationError::business_rule(format!(
                "Course with this name already exists: {}",
                name
            )));
        }

        let mut new = NewCourse::new(
            name,
            command.date,
            command.description,
            command.domain,
            chapters,
        );
        if let Some(ratings) = command.ratings {
            new = new.with_ratings(ratings);
        }

        // 唯一索引兜底并发窗口内的重名插入
        let course = match self.course_repo.insert(new).await {
            Ok(course) => course,
            Err(RepositoryError::Duplicate(msg)) => {
                return Err(ApplicationError::business_rule(msg))
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            course_id = %course.id(),
            name = %course.name(),
            chapters = course.chapter_count(),
            "Course created"
        );

        Ok(course)
    }
}

// ============================================================================
// RateChapter
// ============================================================================

/// RateChapter Handler
///
/// 章节解析仅用于校验存在性；计数累加落在课程级计数器上，
/// 由存储端原子执行。章节内嵌计数不随评分变化。
pub struct RateChapterHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl RateChapterHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, command: RateChapter) -> Result<(), ApplicationError> {
        let course = self
            .course_repo
            .find_by_id(&command.course_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found("Course", command.course_id.as_str())
            })?;

        if course.resolve_chapter(&command.selector).is_none() {
            return Err(ApplicationError::not_found(
                "Chapter",
                command.selector.to_string(),
            ));
        }

        let updated = self
            .course_repo
            .increment_rating(&command.course_id, command.vote)
            .await?;
        if !updated {
            // 存在性检查与累加之间课程被移除的窗口
            return Err(ApplicationError::not_found(
                "Course",
                command.course_id.as_str(),
            ));
        }

        tracing::info!(
            course_id = %command.course_id,
            chapter = %command.selector,
            vote = command.vote.as_str(),
            "Chapter rated"
        );

        Ok(())
    }
}
