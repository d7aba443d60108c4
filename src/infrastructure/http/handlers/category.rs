//! Category HTTP Handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{ListCategories, ListQuestionsByCategory};
use crate::infrastructure::http::dto::{
    category_map, ApiResponse, CategoriesResponse, QuestionListResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<CategoriesResponse>>, ApiError> {
    let categories = state
        .list_categories_handler
        .handle(ListCategories)
        .await
        .map_err(ApiError::not_found_from)?;

    Ok(Json(ApiResponse::success(CategoriesResponse {
        categories: category_map(categories),
    })))
}

/// GET /categories/:category_id/questions
pub async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    category_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<QuestionListResponse>>, ApiError> {
    let Path(category_id) = category_id.map_err(|e| ApiError::NotFound(e.body_text()))?;

    let questions = state
        .list_questions_by_category_handler
        .handle(ListQuestionsByCategory { category_id })
        .await
        .map_err(ApiError::from_category_lookup)?;

    Ok(Json(ApiResponse::success(QuestionListResponse::new(questions))))
}
