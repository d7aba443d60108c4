//! Quiz HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::NextQuizQuestion;
use crate::domain::QuizCategory;
use crate::infrastructure::http::dto::{ApiResponse, QuizRequest, QuizResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<QuizResponse>>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::Unprocessable(e.body_text()))?;

    let category_id = req
        .quiz_category
        .and_then(|c| c.id)
        .ok_or_else(|| ApiError::Unprocessable("quiz_category.id is required".to_string()))?;

    let query = NextQuizQuestion {
        category: QuizCategory::from_id(category_id),
        previous_questions: req.previous_questions.unwrap_or_default(),
    };

    let question = state
        .next_quiz_question_handler
        .handle(query)
        .await
        .map_err(ApiError::unprocessable_from)?;

    Ok(Json(ApiResponse::success(QuizResponse {
        question: question.map(Into::into),
    })))
}
