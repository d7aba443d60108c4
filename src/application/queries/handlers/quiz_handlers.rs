//! Quiz Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{QuestionRecord, QuestionRepositoryPort};
use crate::application::queries::NextQuizQuestion;
use crate::domain::{pick_unseen, QuizCategory};

/// NextQuizQuestion Handler
pub struct NextQuizQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl NextQuizQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    /// 所有候选题都出过时返回 None
    pub async fn handle(
        &self,
        query: NextQuizQuestion,
    ) -> Result<Option<QuestionRecord>, ApplicationError> {
        let candidates = match query.category {
            QuizCategory::Any => self.question_repo.find_all().await?,
            QuizCategory::Specific(id) => self.question_repo.find_by_category(id).await?,
        };

        let picked = pick_unseen(
            candidates,
            &query.previous_questions,
            |q| q.id,
            &mut rand::thread_rng(),
        );

        tracing::debug!(
            category = query.category.id(),
            previous = query.previous_questions.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "Quiz question drawn"
        );

        Ok(picked)
    }
}
