//! Category Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    CategoryRecord, CategoryRepositoryPort, QuestionRecord, QuestionRepositoryPort,
};
use crate::application::queries::{ListCategories, ListQuestionsByCategory};
use crate::domain::is_known_category;

/// ListCategories Handler
pub struct ListCategoriesHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    /// 没有任何分类时返回 NotFound
    pub async fn handle(
        &self,
        _query: ListCategories,
    ) -> Result<Vec<CategoryRecord>, ApplicationError> {
        let categories = self.category_repo.find_all().await?;
        if categories.is_empty() {
            return Err(ApplicationError::not_found("Category", "no categories"));
        }
        Ok(categories)
    }
}

/// ListQuestionsByCategory Handler
pub struct ListQuestionsByCategoryHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl ListQuestionsByCategoryHandler {
    pub fn new(
        category_repo: Arc<dyn CategoryRepositoryPort>,
        question_repo: Arc<dyn QuestionRepositoryPort>,
    ) -> Self {
        Self {
            category_repo,
            question_repo,
        }
    }

    /// 分类合法但没有题目时返回空列表
    pub async fn handle(
        &self,
        query: ListQuestionsByCategory,
    ) -> Result<Vec<QuestionRecord>, ApplicationError> {
        let category_count = self.category_repo.count().await?;
        if !is_known_category(query.category_id, category_count) {
            return Err(ApplicationError::InvalidCategory(query.category_id));
        }

        let questions = self.question_repo.find_by_category(query.category_id).await?;
        Ok(questions)
    }
}
