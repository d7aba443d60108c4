//! Data Transfer Objects

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::application::{CategoryRecord, QuestionRecord};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一成功响应：`success: true` 与业务字段平铺在同一层
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// Category DTOs
// ============================================================================

/// id → 分类名称；JSON 中 id 序列化为字符串键
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<CategoryRecord>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

// ============================================================================
// Question DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDto {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl From<QuestionRecord> for QuestionDto {
    fn from(record: QuestionRecord) -> Self {
        Self {
            id: record.id,
            question: record.question,
            answer: record.answer,
            category: record.category,
            difficulty: record.difficulty,
        }
    }
}

/// GET /questions 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsQuery {
    pub page: Option<String>,
}

impl QuestionsQuery {
    /// 缺省或非数字时为第 1 页；超出 i64 范围的数字饱和到边界
    pub fn page_number(&self) -> i64 {
        self.page.as_deref().map_or(1, parse_page)
    }
}

fn parse_page(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(page) = raw.parse() {
        return page;
    }
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 1;
    }
    if negative {
        i64::MIN
    } else {
        i64::MAX
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub current_category: Option<i64>,
}

impl QuestionListResponse {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        let questions: Vec<QuestionDto> = questions.into_iter().map(QuestionDto::from).collect();
        Self {
            total_questions: questions.len() as u64,
            questions,
            current_category: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedQuestionResponse {
    pub deleted_question: QuestionDto,
    pub total_questions: u64,
}

#[derive(Debug, Serialize)]
pub struct AddedQuestionResponse {
    pub added_question: QuestionDto,
    pub total_questions: u64,
}

/// POST /questions 请求体
///
/// 带 `searchTerm` 时为搜索，否则为新增
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrSearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub difficulty: Option<i64>,
}

// ============================================================================
// Quiz DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QuizCategoryDto {
    #[serde(deserialize_with = "lenient_int")]
    pub id: Option<i64>,
}

/// POST /quizzes 请求体
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategoryDto>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<QuestionDto>,
}

// ============================================================================
// Helpers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// 接受 JSON 整数或数字字符串（前端以字符串传分类 id）
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(n)) => Ok(Some(n)),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid integer: {:?}", s))),
    }
}
