//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                               GET     健康检查
//! - /categories                         GET     列出所有分类
//! - /categories/:category_id/questions  GET     某分类下的题目
//! - /questions                          GET     分页列出题目（?page=N）
//! - /questions                          POST    新增题目 / 按 searchTerm 搜索
//! - /questions/:question_id             DELETE  删除题目
//! - /quizzes                            POST    抽取下一道测验题

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(category_routes())
        .merge(question_routes())
        .route("/quizzes", post(handlers::next_quiz_question))
        .fallback(handlers::route_not_found)
}

/// Category 路由
fn category_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(handlers::list_category_questions),
        )
}

/// Question 路由
fn question_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_or_search_questions),
        )
        .route("/questions/:question_id", delete(handlers::delete_question))
}
