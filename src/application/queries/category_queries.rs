//! Category Queries

/// 列出所有分类查询
#[derive(Debug, Clone)]
pub struct ListCategories;

/// 获取某分类下所有题目查询
#[derive(Debug, Clone)]
pub struct ListQuestionsByCategory {
    pub category_id: i64,
}
