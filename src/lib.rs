//! Trivia - 问答题库 API
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Trivia Context: 分页、分类校验、测验抽题
//!
//! 应用层 (application/):
//! - Ports: Question / Category Repository
//! - Commands: 新增、删除题目
//! - Queries: 分类、分页、搜索、按分类、测验
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
