//! Trivia Context - 题库限界上下文
//!
//! 职责:
//! - 题目分页规则
//! - 分类编号校验
//! - 测验抽题

mod quiz;
mod value_objects;

pub use quiz::pick_unseen;
pub use value_objects::{is_known_category, Page, QuizCategory, QUESTIONS_PER_PAGE};
