//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateQuestionHandler, DeleteQuestionHandler,
    // Query handlers
    ListCategoriesHandler, ListQuestionsByCategoryHandler, ListQuestionsHandler,
    NextQuizQuestionHandler, SearchQuestionsHandler,
    // Ports
    CategoryRepositoryPort, QuestionRepositoryPort,
};

/// 应用状态
///
/// 不持有请求间的可变状态，仓储内部各自持有连接池
pub struct AppState {
    // ========== Ports ==========
    pub question_repo: Arc<dyn QuestionRepositoryPort>,
    pub category_repo: Arc<dyn CategoryRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_question_handler: CreateQuestionHandler,
    pub delete_question_handler: DeleteQuestionHandler,

    // ========== Query Handlers ==========
    pub list_categories_handler: ListCategoriesHandler,
    pub list_questions_handler: ListQuestionsHandler,
    pub search_questions_handler: SearchQuestionsHandler,
    pub list_questions_by_category_handler: ListQuestionsByCategoryHandler,
    pub next_quiz_question_handler: NextQuizQuestionHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            // Ports
            question_repo: question_repo.clone(),
            category_repo: category_repo.clone(),

            // Command handlers
            create_question_handler: CreateQuestionHandler::new(question_repo.clone()),
            delete_question_handler: DeleteQuestionHandler::new(question_repo.clone()),

            // Query handlers
            list_categories_handler: ListCategoriesHandler::new(category_repo.clone()),
            list_questions_handler: ListQuestionsHandler::new(
                question_repo.clone(),
                category_repo.clone(),
            ),
            search_questions_handler: SearchQuestionsHandler::new(question_repo.clone()),
            list_questions_by_category_handler: ListQuestionsByCategoryHandler::new(
                category_repo.clone(),
                question_repo.clone(),
            ),
            next_quiz_question_handler: NextQuizQuestionHandler::new(question_repo),
        }
    }
}
