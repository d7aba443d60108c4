//! Quiz Queries

use crate::domain::QuizCategory;

/// 抽取下一道测验题
#[derive(Debug, Clone)]
pub struct NextQuizQuestion {
    pub category: QuizCategory,
    /// 已出过的题目 id
    pub previous_questions: Vec<i64>,
}
