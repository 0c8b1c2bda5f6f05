//! Rating HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::course::parse_course_id;
use crate::application::{GetCourseRatings, RateChapter};
use crate::domain::{ChapterSelector, RatingVote};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RateChapterRequest {
    pub chapter_index: Option<usize>,
    pub chapter_name: Option<String>,
    pub rating: bool,
}

impl RateChapterRequest {
    /// 选择器基数规则：chapter_index / chapter_name 必须恰好给出一个
    fn selector(&self) -> Result<ChapterSelector, ApiError> {
        match (self.chapter_index, self.chapter_name.as_deref()) {
            (Some(index), None) => Ok(ChapterSelector::Index(index)),
            (None, Some(name)) => Ok(ChapterSelector::Name(name.to_string())),
            (None, None) => Err(ApiError::BadRequest(
                "Either chapter_index or chapter_name must be provided".to_string(),
            )),
            (Some(_), Some(_)) => Err(ApiError::BadRequest(
                "Only one of chapter_index or chapter_name may be provided".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RateChapterResponse {
    pub msg: String,
}

#[derive(Debug, Serialize)]
pub struct CourseRatingsResponse {
    pub course_id: String,
    pub ratings: RatingTotals,
}

#[derive(Debug, Serialize)]
pub struct RatingTotals {
    pub positive: u32,
    pub negative: u32,
    pub total: u64,
}

// ============================================================================
// Handlers
// ============================================================================

/// 提交章节评分
pub async fn rate_chapter(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
    Json(req): Json<RateChapterRequest>,
) -> Result<Json<RateChapterResponse>, ApiError> {
    let course_id = parse_course_id(&course_id)?;
    let selector = req.selector()?;
    let vote = RatingVote::from_bool(req.rating);

    state
        .rate_chapter_handler
        .handle(RateChapter {
            course_id,
            selector,
            vote,
        })
        .await?;

    Ok(Json(RateChapterResponse {
        msg: "Rating updated successfully".to_string(),
    }))
}

/// 读取课程评分汇总（total 为读取时派生）
pub async fn get_course_ratings(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseRatingsResponse>, ApiError> {
    let course_id = parse_course_id(&course_id)?;

    let summary = state
        .get_course_ratings_handler
        .handle(GetCourseRatings { course_id })
        .await?;

    Ok(Json(CourseRatingsResponse {
        course_id: summary.course_id,
        ratings: RatingTotals {
            positive: summary.positive,
            negative: summary.negative,
            total: summary.total,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(index: Option<usize>, name: Option<&str>) -> RateChapterRequest {
        RateChapterRequest {
            chapter_index: index,
            chapter_name: name.map(|s| s.to_string()),
            rating: true,
        }
    }

    #[test]
    fn test_selector_requires_exactly_one() {
        assert_eq!(
            request(Some(2), None).selector().unwrap(),
            ChapterSelector::Index(2)
        );
        assert_eq!(
            request(None, Some("Intro")).selector().unwrap(),
            ChapterSelector::Name("Intro".to_string())
        );
        assert!(matches!(
            request(None, None).selector(),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            request(Some(2), Some("Intro")).selector(),
            Err(ApiError::BadRequest(_))
        ));
    }
}
