//! Chapter HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::course::parse_course_id;
use crate::application::GetChapter;
use crate::domain::ChapterSelector;
use crate::infrastructure::http::dto::ChapterResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取章节
///
/// 标识符为纯数字时按位置索引解析，否则按名称精确匹配
/// （因此名为数字串的章节无法通过名称命中）。
pub async fn get_chapter(
    State(state): State<Arc<AppState>>,
    Path((course_id, chapter_identifier)): Path<(String, String)>,
) -> Result<Json<ChapterResponse>, ApiError> {
    let course_id = parse_course_id(&course_id)?;
    let selector = ChapterSelector::parse(&chapter_identifier);

    let chapter = state
        .get_chapter_handler
        .handle(GetChapter {
            course_id,
            selector,
        })
        .await?;

    Ok(Json(ChapterResponse::from(&chapter)))
}
