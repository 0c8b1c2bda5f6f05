//! Course HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{ChapterInput, CreateCourse, GetCourse, ListCourses, SortMode};
use crate::domain::{CourseId, RatingCounters};
use crate::infrastructure::http::dto::CourseResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub sort_by: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub domain: Vec<String>,
    #[serde(default)]
    pub chapters: Vec<ChapterPayload>,
    pub ratings: Option<RatingsPayload>,
}

#[derive(Debug, Deserialize)]
pub struct ChapterPayload {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub positive_ratings: u32,
    #[serde(default)]
    pub negative_ratings: u32,
}

#[derive(Debug, Deserialize)]
pub struct RatingsPayload {
    #[serde(default)]
    pub positive: u32,
    #[serde(default)]
    pub negative: u32,
}

/// 边界处解析课程 ID：必须恰好 24 个十六进制字符，否则不做任何查找
pub(super) fn parse_course_id(raw: &str) -> Result<CourseId, ApiError> {
    CourseId::parse(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// 边界处解析排序方式：非法值在进入查询前被拒绝
fn parse_sort_mode(raw: Option<&str>) -> Result<SortMode, ApiError> {
    match raw {
        None => Ok(SortMode::default()),
        Some(value) => SortMode::from_str(value).ok_or_else(|| {
            ApiError::UnprocessableEntity(format!("Invalid sort_by value: {}", value))
        }),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取课程列表（可选领域标签过滤，最多 100 条）
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListCoursesQuery>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let sort = parse_sort_mode(params.sort_by.as_deref())?;

    let query = ListCourses {
        sort,
        domain: params.domain,
    };
    let courses = state.list_courses_handler.handle(query).await?;

    Ok(Json(
        courses.iter().map(CourseResponse::from_course).collect(),
    ))
}

/// 获取课程详情
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course_id = parse_course_id(&course_id)?;

    let course = state
        .get_course_handler
        .handle(GetCourse { course_id })
        .await?;

    Ok(Json(CourseResponse::from_course(&course)))
}

/// 创建课程（完整载荷；重名以 400 拒绝）
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let command = CreateCourse {
        name: req.name,
        date: req.date,
        description: req.description,
        domain: req.domain,
        chapters: req
            .chapters
            .into_iter()
            .map(|c| ChapterInput {
                name: c.name,
                text: c.text,
                positive_ratings: c.positive_ratings,
                negative_ratings: c.negative_ratings,
            })
            .collect(),
        ratings: req
            .ratings
            .map(|r| RatingCounters::new(r.positive, r.negative)),
    };

    let course = state.create_course_handler.handle(command).await?;

    Ok(Json(CourseResponse::from_course(&course)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_mode() {
        assert_eq!(parse_sort_mode(None).unwrap(), SortMode::Alphabetical);
        assert_eq!(parse_sort_mode(Some("date")).unwrap(), SortMode::Date);
        assert!(matches!(
            parse_sort_mode(Some("popularity")),
            Err(ApiError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_parse_course_id_boundary() {
        assert!(parse_course_id(&"a".repeat(24)).is_ok());
        assert!(matches!(
            parse_course_id("not-an-id"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
