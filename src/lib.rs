//! Curso - 课程 CRUD API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Course Context: 课程与内嵌章节管理（章节选择器、评分计数）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（CourseRepository）
//! - Commands: CQRS 命令处理器（创建课程、章节评分）
//! - Queries: CQRS 查询处理器（列表、详情、章节、评分汇总）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储（JSON 列内嵌章节，课程级计数原子累加）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
