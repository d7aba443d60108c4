//! Question Commands

/// 新增题目命令
///
/// question 与 answer 必填；category 与 difficulty 不做存在性或范围校验
#[derive(Debug, Clone, Default)]
pub struct CreateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// 删除题目命令
#[derive(Debug, Clone)]
pub struct DeleteQuestion {
    pub question_id: i64,
}
