//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod course_handlers;

pub use course_handlers::*;
