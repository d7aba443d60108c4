//! Question Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateQuestion, DeleteQuestion};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewQuestion, QuestionRecord, QuestionRepositoryPort};

/// 写操作结果：受影响的题目及操作后的题目总数
#[derive(Debug, Clone)]
pub struct QuestionMutation {
    pub question: QuestionRecord,
    pub total_questions: u64,
}

// ============================================================================
// CreateQuestion
// ============================================================================

/// CreateQuestion Handler
pub struct CreateQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl CreateQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(
        &self,
        command: CreateQuestion,
    ) -> Result<QuestionMutation, ApplicationError> {
        let question = command
            .question
            .ok_or_else(|| ApplicationError::validation("question is required"))?;
        let answer = command
            .answer
            .ok_or_else(|| ApplicationError::validation("answer is required"))?;

        // category 不校验是否存在
        let new_question = NewQuestion {
            question,
            answer,
            category: command.category,
            difficulty: command.difficulty,
        };

        let question = self.question_repo.insert(&new_question).await?;
        let total_questions = self.question_repo.count().await?;

        tracing::info!(
            question_id = question.id,
            category = ?question.category,
            total_questions,
            "Question created"
        );

        Ok(QuestionMutation {
            question,
            total_questions,
        })
    }
}

// ============================================================================
// DeleteQuestion
// ============================================================================

/// DeleteQuestion Handler
pub struct DeleteQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl DeleteQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(
        &self,
        command: DeleteQuestion,
    ) -> Result<QuestionMutation, ApplicationError> {
        let question_id = command.question_id;

        let question = self
            .question_repo
            .delete(question_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Question", question_id.to_string()))?;

        let total_questions = self.question_repo.count().await?;

        tracing::info!(question_id, total_questions, "Question deleted");

        Ok(QuestionMutation {
            question,
            total_questions,
        })
    }
}
