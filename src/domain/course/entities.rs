//! Course Context - Entities

use serde::{Deserialize, Serialize};

use super::errors::CourseError;

/// 章节 - 课程内嵌的内容单元
///
/// 不变量:
/// - name 为 1~100 个字符（课程内唯一仅为约定，不强制）
/// - text 不可为空
/// - 评分计数默认为 0
///
/// 章节没有独立身份，随所属课程整体序列化存储。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 章节名称
    name: String,
    /// 章节正文
    text: String,
    /// 好评计数
    #[serde(default)]
    positive_ratings: u32,
    /// 差评计数
    #[serde(default)]
    negative_ratings: u32,
}

impl Chapter {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Result<Self, CourseError> {
        Self::with_ratings(name, text, 0, 0)
    }

    /// 创建携带既有计数的章节（种子数据、完整创建载荷）
    pub fn with_ratings(
        name: impl Into<String>,
        text: impl Into<String>,
        positive_ratings: u32,
        negative_ratings: u32,
    ) -> Result<Self, CourseError> {
        let name = name.into();
        if name.is_empty() || name.chars().count() > 100 {
            return Err(CourseError::InvalidChapter(
                "章节名称必须为1~100个字符".to_string(),
            ));
        }

        let text = text.into();
        if text.is_empty() {
            return Err(CourseError::InvalidChapter("章节正文不能为空".to_string()));
        }

        Ok(Self {
            name,
            text,
            positive_ratings,
            negative_ratings,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn positive_ratings(&self) -> u32 {
        self.positive_ratings
    }

    pub fn negative_ratings(&self) -> u32 {
        self.negative_ratings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_creation() {
        let chapter = Chapter::new("Intro", "第一章正文").unwrap();
        assert_eq!(chapter.name(), "Intro");
        assert_eq!(chapter.positive_ratings(), 0);
        assert_eq!(chapter.negative_ratings(), 0);
    }

    #[test]
    fn test_chapter_validation() {
        assert!(Chapter::new("", "正文").is_err());
        assert!(Chapter::new("名".repeat(101), "正文").is_err());
        assert!(Chapter::new("Intro", "").is_err());
    }

    #[test]
    fn test_chapter_json_shape() {
        // 嵌入式存储的序列化形状；缺省计数在反序列化时补 0
        let chapter: Chapter =
            serde_json::from_str(r#"{"name":"Intro","text":"正文"}"#).unwrap();
        assert_eq!(chapter.positive_ratings(), 0);

        let json = serde_json::to_value(&chapter).unwrap();
        assert_eq!(json["name"], "Intro");
        assert_eq!(json["negative_ratings"], 0);
    }
}
