//! Trivia Context - Value Objects

use serde::{Deserialize, Serialize};

/// 每页题目数
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 页码（从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page(u64);

impl Page {
    /// 页码小于 1 时返回 None
    pub fn new(number: i64) -> Option<Self> {
        u64::try_from(number).ok().filter(|n| *n >= 1).map(Self)
    }

    pub fn first() -> Self {
        Self(1)
    }

    /// 本页第一条记录的偏移量
    pub fn offset(&self) -> u64 {
        (self.0 - 1).saturating_mul(QUESTIONS_PER_PAGE as u64)
    }

    pub fn limit(&self) -> u64 {
        QUESTIONS_PER_PAGE as u64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 测验分类
///
/// id 为 0 表示不限分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    Any,
    Specific(i64),
}

impl QuizCategory {
    pub fn from_id(id: i64) -> Self {
        if id == 0 {
            Self::Any
        } else {
            Self::Specific(id)
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Any => 0,
            Self::Specific(id) => *id,
        }
    }
}

/// 分类编号是否落在 `1..=category_count` 内
///
/// 按数量而不是按实际存在的 id 判断，分类 id 被假定为连续分配
pub fn is_known_category(id: i64, category_count: u64) -> bool {
    id >= 1 && (id as u64) <= category_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_rejects_non_positive() {
        assert!(Page::new(0).is_none());
        assert!(Page::new(-3).is_none());
        assert_eq!(Page::new(1), Some(Page::first()));
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(Page::first().offset(), 0);
        assert_eq!(Page::new(3).unwrap().offset(), 20);
        assert_eq!(Page::new(3).unwrap().limit(), 10);
    }

    #[test]
    fn test_page_offset_saturates() {
        let page = Page::new(i64::MAX).unwrap();
        assert!(page.offset() > 0);
    }

    #[test]
    fn test_quiz_category_zero_means_any() {
        assert_eq!(QuizCategory::from_id(0), QuizCategory::Any);
        assert_eq!(QuizCategory::from_id(4), QuizCategory::Specific(4));
        assert_eq!(QuizCategory::from_id(4).id(), 4);
    }

    #[test]
    fn test_is_known_category() {
        assert!(!is_known_category(0, 3));
        assert!(is_known_category(1, 3));
        assert!(is_known_category(3, 3));
        assert!(!is_known_category(4, 3));
        assert!(!is_known_category(-1, 3));
        assert!(!is_known_category(1, 0));
    }
}
