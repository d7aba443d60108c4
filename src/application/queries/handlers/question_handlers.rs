//! Question Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    CategoryRecord, CategoryRepositoryPort, QuestionRecord, QuestionRepositoryPort,
};
use crate::application::queries::{ListQuestions, SearchQuestions};
use crate::domain::Page;

// ============================================================================
// Response DTOs
// ============================================================================

/// 一页题目及上下文
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<QuestionRecord>,
    pub total_questions: u64,
    pub categories: Vec<CategoryRecord>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListQuestions Handler
pub struct ListQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListQuestionsHandler {
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    /// 页码越界（包括小于 1）时返回 NotFound
    pub async fn handle(&self, query: ListQuestions) -> Result<QuestionPage, ApplicationError> {
        let page = Page::new(query.page)
            .ok_or_else(|| ApplicationError::not_found("Page", query.page.to_string()))?;

        let questions = self
            .question_repo
            .find_page(page.offset(), page.limit())
            .await?;
        if questions.is_empty() {
            return Err(ApplicationError::not_found("Page", page.to_string()));
        }

        let total_questions = self.question_repo.count().await?;
        let categories = self.category_repo.find_all().await?;

        Ok(QuestionPage {
            questions,
            total_questions,
            categories,
        })
    }
}

/// SearchQuestions Handler
pub struct SearchQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl SearchQuestionsHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    /// 无匹配时返回空列表，不视为错误
    pub async fn handle(
        &self,
        query: SearchQuestions,
    ) -> Result<Vec<QuestionRecord>, ApplicationError> {
        let questions = self.question_repo.search(&query.term).await?;
        tracing::debug!(term = %query.term, matches = questions.len(), "Questions searched");
        Ok(questions)
    }
}
