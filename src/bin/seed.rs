//! Seed - 一次性批量导入课程数据
//!
//! 读取 JSON 数组形式的课程记录（路径取第一个命令行参数，
//! 默认 courses.json），经领域校验后批量插入。
//! 索引由幂等迁移负责，重复执行不报错。
//!
//! 用法: `seed [courses.json]`

use chrono::{DateTime, Utc};
use serde::Deserialize;

use curso::application::ports::CourseRepositoryPort;
use curso::config::load_config;
use curso::domain::{Chapter, CourseName, NewCourse, RatingCounters};
use curso::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteCourseRepository,
};

/// 种子文件中的课程记录
#[derive(Debug, Deserialize)]
struct SeedCourse {
    name: String,
    date: DateTime<Utc>,
    description: String,
    #[serde(default)]
    domain: Vec<String>,
    #[serde(default)]
    chapters: Vec<SeedChapter>,
    #[serde(default)]
    ratings: SeedRatings,
}

#[derive(Debug, Deserialize)]
struct SeedChapter {
    name: String,
    text: String,
    #[serde(default)]
    positive_ratings: u32,
    #[serde(default)]
    negative_ratings: u32,
}

#[derive(Debug, Default, Deserialize)]
struct SeedRatings {
    #[serde(default)]
    positive: u32,
    #[serde(default)]
    negative: u32,
    /// rating 排序使用的派生分值；API 自身不写入该字段
    average_rating: Option<f64>,
}

fn build_course(seed: SeedCourse) -> anyhow::Result<NewCourse> {
    let name = CourseName::new(seed.name)?;
    let chapters = seed
        .chapters
        .into_iter()
        .map(|c| Chapter::with_ratings(c.name, c.text, c.positive_ratings, c.negative_ratings))
        .collect::<Result<Vec<_>, _>>()?;

    let mut new = NewCourse::new(name, seed.date, seed.description, seed.domain, chapters)
        .with_ratings(RatingCounters::new(
            seed.ratings.positive,
            seed.ratings.negative,
        ));
    if let Some(score) = seed.ratings.average_rating {
        new = new.with_rating_score(score);
    }
    Ok(new)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "courses.json".to_string());

    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let raw = tokio::fs::read_to_string(&path).await?;
    let seeds: Vec<SeedCourse> = serde_json::from_str(&raw)?;
    let total = seeds.len();

    let repo = SqliteCourseRepository::new(pool);

    let mut inserted = 0usize;
    for seed in seeds {
        let name = seed.name.clone();
        let new = build_course(seed)?;
        match repo.insert(new).await {
            Ok(course) => {
                tracing::info!(course_id = %course.id(), name = %course.name(), "Course seeded");
                inserted += 1;
            }
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Course skipped");
            }
        }
    }

    tracing::info!(inserted, total, "Database initialized and courses added");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_course_from_seed_record() {
        let raw = r#"
        {
            "name": "Algebra",
            "date": "2023-01-01T00:00:00Z",
            "description": "线性代数入门",
            "domain": ["math"],
            "chapters": [{"name": "Intro", "text": "第一章"}],
            "ratings": {"positive": 4, "negative": 1, "average_rating": 4.2}
        }
        "#;
        let seed: SeedCourse = serde_json::from_str(raw).unwrap();
        let new = build_course(seed).unwrap();

        assert_eq!(new.name().as_str(), "Algebra");
        assert_eq!(new.ratings().positive(), 4);
        assert_eq!(new.rating_score(), Some(4.2));
        assert_eq!(new.chapters().len(), 1);
    }

    #[test]
    fn test_missing_ratings_default_to_zero() {
        let raw = r#"
        {
            "name": "Biology",
            "date": "2024-01-01T00:00:00Z",
            "description": "生物学基础"
        }
        "#;
        let seed: SeedCourse = serde_json::from_str(raw).unwrap();
        let new = build_course(seed).unwrap();

        assert_eq!(new.ratings().total(), 0);
        assert!(new.rating_score().is_none());
        assert!(new.chapters().is_empty());
    }
}
