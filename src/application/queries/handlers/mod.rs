//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod course_handlers;

pub use course_handlers::*;
