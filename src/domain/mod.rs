//! 领域层 - Trivia 限界上下文
//!
//! 只包含纯逻辑（分页、测验分类、抽题），不依赖任何 IO

pub mod trivia;

pub use trivia::{is_known_category, pick_unseen, Page, QuizCategory, QUESTIONS_PER_PAGE};
