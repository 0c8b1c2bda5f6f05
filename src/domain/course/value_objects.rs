//! Course Context - Value Objects

use std::fmt::Write as _;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entities::Chapter;
use super::errors::CourseError;

/// 课程 ID 的固定长度（十六进制字符数）
pub const COURSE_ID_LEN: usize = 24;

/// 课程唯一标识
///
/// 由存储层在插入时分配：4 字节 Unix 时间戳 + 8 字节随机数，
/// 十六进制编码后恰好 24 个字符，与种子数据中的历史 ID 同构。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    /// 生成新的课程 ID
    pub fn generate() -> Self {
        let seconds = Utc::now().timestamp().max(0) as u32;
        let noise = Uuid::new_v4();

        let mut id = format!("{:08x}", seconds);
        for byte in &noise.as_bytes()[..8] {
            let _ = write!(id, "{:02x}", byte);
        }
        Self(id)
    }

    /// 解析外部传入的课程 ID
    ///
    /// 边界校验：必须恰好 24 个十六进制字符。
    pub fn parse(raw: &str) -> Result<Self, CourseError> {
        if raw.len() != COURSE_ID_LEN || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CourseError::InvalidId(raw.to_string()));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 课程名称
///
/// 不变量: 1~100 个字符，创建时唯一性由存储层保证。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseName(String);

impl CourseName {
    pub fn new(name: impl Into<String>) -> Result<Self, CourseError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CourseError::InvalidName("课程名称不能为空".to_string()));
        }
        if name.chars().count() > 100 {
            return Err(CourseError::InvalidName(
                "课程名称长度不能超过100字符".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 评分计数器
///
/// 不变量: positive/negative 均为非负计数；total 为派生值，不落库。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCounters {
    positive: u32,
    negative: u32,
}

impl RatingCounters {
    pub fn new(positive: u32, negative: u32) -> Self {
        Self { positive, negative }
    }

    pub fn positive(&self) -> u32 {
        self.positive
    }

    pub fn negative(&self) -> u32 {
        self.negative
    }

    /// 总评分数（读取时计算，不持久化）
    pub fn total(&self) -> u64 {
        u64::from(self.positive) + u64::from(self.negative)
    }
}

/// 单次评分的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingVote {
    Positive,
    Negative,
}

impl RatingVote {
    /// 请求体中 rating=true 表示好评
    pub fn from_bool(positive: bool) -> Self {
        if positive {
            RatingVote::Positive
        } else {
            RatingVote::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingVote::Positive => "positive",
            RatingVote::Negative => "negative",
        }
    }
}

/// 章节选择器 - 位置索引或精确名称
///
/// 优先级规则: 纯数字标识符一律按索引解释，即使存在以同一数字串
/// 命名的章节（该章节因此无法通过名称命中，属已知且可复现的行为）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterSelector {
    /// 零起始的位置索引
    Index(usize),
    /// 精确名称（区分大小写）
    Name(String),
}

impl ChapterSelector {
    /// 从路径中的章节标识符解析选择器
    pub fn parse(identifier: &str) -> Self {
        if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
            // 超出 usize 的数字串必然越界，归一为不可命中的索引
            ChapterSelector::Index(identifier.parse().unwrap_or(usize::MAX))
        } else {
            ChapterSelector::Name(identifier.to_string())
        }
    }

    /// 在章节序列中解析出目标章节
    ///
    /// 索引仅在 `0 <= i < len` 时有效；名称取首个精确匹配。只读，无副作用。
    pub fn resolve<'a>(&self, chapters: &'a [Chapter]) -> Option<&'a Chapter> {
        match self {
            ChapterSelector::Index(index) => chapters.get(*index),
            ChapterSelector::Name(name) => chapters.iter().find(|c| c.name() == name),
        }
    }
}

impl std::fmt::Display for ChapterSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChapterSelector::Index(index) => write!(f, "{}", index),
            ChapterSelector::Name(name) => write!(f, "{}", name),
        }
    }
}
