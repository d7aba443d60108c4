//! Repository Ports - 出站端口
//!
//! 定义题库持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Category Repository
// ============================================================================

/// 分类实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub id: i64,
    /// 分类名称，对应表中的 `type` 列
    pub kind: String,
}

/// Category Repository Port
///
/// 分类通过本 API 只读
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// 获取所有分类（按 id 升序）
    async fn find_all(&self) -> Result<Vec<CategoryRecord>, RepositoryError>;

    /// 分类总数
    async fn count(&self) -> Result<u64, RepositoryError>;
}

// ============================================================================
// Question Repository
// ============================================================================

/// 题目实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// 待插入的题目，id 由数据库生成
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// Question Repository Port
///
/// 所有列表查询均按 id 升序
#[async_trait]
pub trait QuestionRepositoryPort: Send + Sync {
    /// 插入题目，返回带生成 id 的记录
    async fn insert(&self, question: &NewQuestion) -> Result<QuestionRecord, RepositoryError>;

    /// 删除题目，返回被删除的记录；不存在时返回 None
    async fn delete(&self, id: i64) -> Result<Option<QuestionRecord>, RepositoryError>;

    /// 分页获取题目
    async fn find_page(&self, offset: u64, limit: u64)
        -> Result<Vec<QuestionRecord>, RepositoryError>;

    /// 获取所有题目
    async fn find_all(&self) -> Result<Vec<QuestionRecord>, RepositoryError>;

    /// 获取某分类下的所有题目
    async fn find_by_category(&self, category: i64)
        -> Result<Vec<QuestionRecord>, RepositoryError>;

    /// 题干包含 term 的题目（不区分大小写）
    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>, RepositoryError>;

    /// 题目总数
    async fn count(&self) -> Result<u64, RepositoryError>;
}
