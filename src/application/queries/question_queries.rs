//! Question Queries

/// 分页列出题目查询
#[derive(Debug, Clone)]
pub struct ListQuestions {
    /// 页码，从 1 开始
    pub page: i64,
}

/// 按题干搜索题目查询
#[derive(Debug, Clone)]
pub struct SearchQuestions {
    pub term: String,
}
