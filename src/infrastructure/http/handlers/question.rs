//! Question HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::application::{CreateQuestion, DeleteQuestion, ListQuestions, SearchQuestions};
use crate::infrastructure::http::dto::{
    category_map, AddedQuestionResponse, ApiResponse, CreateOrSearchRequest,
    DeletedQuestionResponse, QuestionDto, QuestionListResponse, QuestionPageResponse,
    QuestionsQuery,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /questions 的两种响应
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateOrSearchResponse {
    Added(AddedQuestionResponse),
    Found(QuestionListResponse),
}

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    params: Option<Query<QuestionsQuery>>,
) -> Result<Json<ApiResponse<QuestionPageResponse>>, ApiError> {
    let page = params
        .map(|Query(q)| q.page_number())
        .unwrap_or(1);

    let result = state
        .list_questions_handler
        .handle(ListQuestions { page })
        .await
        .map_err(ApiError::not_found_from)?;

    Ok(Json(ApiResponse::success(QuestionPageResponse {
        questions: result.questions.into_iter().map(QuestionDto::from).collect(),
        total_questions: result.total_questions,
        categories: category_map(result.categories),
        current_category: None,
    })))
}

/// DELETE /questions/:question_id
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<DeletedQuestionResponse>>, ApiError> {
    let Path(question_id) = question_id.map_err(|e| ApiError::NotFound(e.body_text()))?;

    let result = state
        .delete_question_handler
        .handle(DeleteQuestion { question_id })
        .await
        .map_err(ApiError::not_found_from)?;

    Ok(Json(ApiResponse::success(DeletedQuestionResponse {
        deleted_question: result.question.into(),
        total_questions: result.total_questions,
    })))
}

/// POST /questions
///
/// 带 `searchTerm` 时搜索，否则新增题目
pub async fn create_or_search_questions(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateOrSearchRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CreateOrSearchResponse>>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::Unprocessable(e.body_text()))?;

    if let Some(term) = req.search_term {
        let questions = state
            .search_questions_handler
            .handle(SearchQuestions { term })
            .await
            .map_err(ApiError::unprocessable_from)?;

        return Ok(Json(ApiResponse::success(CreateOrSearchResponse::Found(
            QuestionListResponse::new(questions),
        ))));
    }

    let command = CreateQuestion {
        question: req.question,
        answer: req.answer,
        category: req.category,
        difficulty: req.difficulty,
    };

    let result = state
        .create_question_handler
        .handle(command)
        .await
        .map_err(ApiError::unprocessable_from)?;

    Ok(Json(ApiResponse::success(CreateOrSearchResponse::Added(
        AddedQuestionResponse {
            added_question: result.question.into(),
            total_questions: result.total_questions,
        },
    ))))
}
