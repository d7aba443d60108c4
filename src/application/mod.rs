//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Question / Category Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CreateQuestion,
    DeleteQuestion,
    // Handlers
    handlers::{CreateQuestionHandler, DeleteQuestionHandler, QuestionMutation},
};

pub use error::ApplicationError;

pub use ports::{
    CategoryRecord, CategoryRepositoryPort, NewQuestion, QuestionRecord, QuestionRepositoryPort,
    RepositoryError,
};

pub use queries::{
    // Category queries
    ListCategories,
    ListQuestionsByCategory,
    // Question queries
    ListQuestions,
    SearchQuestions,
    // Quiz queries
    NextQuizQuestion,
    // Handlers
    handlers::{
        ListCategoriesHandler, ListQuestionsByCategoryHandler, ListQuestionsHandler,
        NextQuizQuestionHandler, QuestionPage, SearchQuestionsHandler,
    },
};
