//! SQLite Course Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    CourseRepositoryPort, RepositoryError, SortMode, MAX_COURSE_RESULTS,
};
use crate::domain::{
    Chapter, Course, CourseId, CourseName, NewCourse, RatingCounters, RatingVote,
};

/// SQLite Course Repository
pub struct SqliteCourseRepository {
    pool: DbPool,
}

impl SqliteCourseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const COURSE_COLUMNS: &str =
    "id, name, date, description, domain, chapters, rating_positive, rating_negative, rating_score";

#[derive(FromRow)]
struct CourseRow {
    id: String,
    name: String,
    date: String,
    description: String,
    domain: String,
    chapters: String,
    rating_positive: i64,
    rating_negative: i64,
    rating_score: Option<f64>,
}

impl TryFrom<CourseRow> for Course {
    type Error = RepositoryError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let id = CourseId::parse(&row.id)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let name = CourseName::new(row.name)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let date = DateTime::parse_from_rfc3339(&row.date)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
            .with_timezone(&Utc);
        let domain: Vec<String> = serde_json::from_str(&row.domain)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let chapters: Vec<Chapter> = serde_json::from_str(&row.chapters)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let ratings = RatingCounters::new(
            row.rating_positive.max(0) as u32,
            row.rating_negative.max(0) as u32,
        );

        Ok(Course::restore(
            id,
            name,
            date,
            row.description,
            domain,
            chapters,
            ratings,
            row.rating_score,
        ))
    }
}

/// 排序子句：全部以 id 升序收尾，保证结果确定
fn order_clause(sort: SortMode) -> &'static str {
    match sort {
        SortMode::Alphabetical => "name ASC, id ASC",
        SortMode::Date => "date DESC, id ASC",
        // 无分值视为最低，排在所有有分值的课程之后
        SortMode::Rating => "rating_score IS NULL ASC, rating_score DESC, id ASC",
    }
}

#[async_trait]
impl CourseRepositoryPort for SqliteCourseRepository {
    async fn insert(&self, new: NewCourse) -> Result<Course, RepositoryError> {
        let id = CourseId::generate();
        let domain_json = serde_json::to_string(new.domain_tags())
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let chapters_json = serde_json::to_string(new.chapters())
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO courses (id, name, date, description, domain, chapters, rating_positive, rating_negative, rating_score)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.as_str())
        .bind(new.name().as_str())
        .bind(new.date().to_rfc3339())
        .bind(new.description())
        .bind(&domain_json)
        .bind(&chapters_json)
        .bind(i64::from(new.ratings().positive()))
        .bind(i64::from(new.ratings().negative()))
        .bind(new.rating_score())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicate(
                format!("Course with this name already exists: {}", new.name()),
            ),
            _ => RepositoryError::DatabaseError(e.to_string()),
        })?;

        Ok(Course::from_new(id, new))
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, RepositoryError> {
        let query = format!("SELECT {} FROM courses WHERE id = ?", COURSE_COLUMNS);
        let row: Option<CourseRow> = sqlx::query_as(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Course::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, RepositoryError> {
        let query = format!("SELECT {} FROM courses WHERE name = ?", COURSE_COLUMNS);
        let row: Option<CourseRow> = sqlx::query_as(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Course::try_from).transpose()
    }

    async fn list(
        &self,
        domain: Option<&str>,
        sort: SortMode,
    ) -> Result<Vec<Course>, RepositoryError> {
        // 上限在查询内强制，绝不事后截断
        let rows: Vec<CourseRow> = match domain {
            Some(tag) => {
                let query = format!(
                    r#"
                    SELECT {} FROM courses
                    WHERE EXISTS (
                        SELECT 1 FROM json_each(courses.domain)
                        WHERE json_each.value = ?
                    )
                    ORDER BY {} LIMIT ?
                    "#,
                    COURSE_COLUMNS,
                    order_clause(sort),
                );
                sqlx::query_as(&query)
                    .bind(tag)
                    .bind(MAX_COURSE_RESULTS as i64)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {} FROM courses ORDER BY {} LIMIT ?",
                    COURSE_COLUMNS,
                    order_clause(sort),
                );
                sqlx::query_as(&query)
                    .bind(MAX_COURSE_RESULTS as i64)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn increment_rating(
        &self,
        id: &CourseId,
        vote: RatingVote,
    ) -> Result<bool, RepositoryError> {
        // 累加由存储端单条语句原子执行，并发评分不丢更新
        let query = match vote {
            RatingVote::Positive => {
                "UPDATE courses SET rating_positive = rating_positive + 1 WHERE id = ?"
            }
            RatingVote::Negative => {
                "UPDATE courses SET rating_negative = rating_negative + 1 WHERE id = ?"
            }
        };

        let result = sqlx::query(query)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn test_repo() -> SqliteCourseRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteCourseRepository::new(pool)
    }

    fn new_course(name: &str, date: &str, tags: &[&str]) -> NewCourse {
        NewCourse::new(
            CourseName::new(name).unwrap(),
            date.parse().unwrap(),
            format!("{} 的描述", name),
            tags.iter().map(|t| t.to_string()).collect(),
            vec![
                Chapter::new("Intro", "第一章").unwrap(),
                Chapter::new("Sets", "第二章").unwrap(),
            ],
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_roundtrips() {
        let repo = test_repo().await;
        let created = repo
            .insert(new_course("Algebra", "2023-01-01T00:00:00Z", &["math"]))
            .await
            .unwrap();
        assert_eq!(created.id().as_str().len(), 24);

        let found = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(found.name().as_str(), "Algebra");
        assert_eq!(found.date(), created.date());
        assert_eq!(found.domain_tags(), &["math".to_string()]);
        assert_eq!(found.chapters().len(), 2);
        assert_eq!(found.chapters()[1].name(), "Sets");
        assert_eq!(found.ratings(), RatingCounters::default());
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = test_repo().await;
        let id = CourseId::parse(&"a".repeat(24)).unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
        assert!(repo.find_by_name("Nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name_maps_to_duplicate_error() {
        let repo = test_repo().await;
        repo.insert(new_course("Algebra", "2023-01-01T00:00:00Z", &[]))
            .await
            .unwrap();
        let err = repo
            .insert(new_course("Algebra", "2024-01-01T00:00:00Z", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_list_sort_modes() {
        let repo = test_repo().await;
        repo.insert(new_course("Biology", "2024-01-01T00:00:00Z", &["bio"]))
            .await
            .unwrap();
        repo.insert(
            new_course("Algebra", "2023-01-01T00:00:00Z", &["math"]).with_rating_score(4.5),
        )
        .await
        .unwrap();
        repo.insert(
            new_course("Chemistry", "2022-06-15T00:00:00Z", &["chem"]).with_rating_score(3.0),
        )
        .await
        .unwrap();

        let names = |courses: &[Course]| -> Vec<String> {
            courses.iter().map(|c| c.name().to_string()).collect()
        };

        let alpha = repo.list(None, SortMode::Alphabetical).await.unwrap();
        assert_eq!(names(&alpha), vec!["Algebra", "Biology", "Chemistry"]);

        let by_date = repo.list(None, SortMode::Date).await.unwrap();
        assert_eq!(names(&by_date), vec!["Biology", "Algebra", "Chemistry"]);

        // 分值降序，无分值的 Biology 排在最后
        let by_rating = repo.list(None, SortMode::Rating).await.unwrap();
        assert_eq!(names(&by_rating), vec!["Algebra", "Chemistry", "Biology"]);
    }

    #[tokio::test]
    async fn test_list_domain_filter_exact_match() {
        let repo = test_repo().await;
        repo.insert(new_course("Algebra", "2023-01-01T00:00:00Z", &["math", "logic"]))
            .await
            .unwrap();
        repo.insert(new_course("Biology", "2024-01-01T00:00:00Z", &["bio"]))
            .await
            .unwrap();

        let math = repo
            .list(Some("math"), SortMode::Alphabetical)
            .await
            .unwrap();
        assert_eq!(math.len(), 1);
        assert_eq!(math[0].name().as_str(), "Algebra");

        // 精确字符串匹配，前缀不命中
        let partial = repo.list(Some("mat"), SortMode::Alphabetical).await.unwrap();
        assert!(partial.is_empty());
    }

    #[tokio::test]
    async fn test_list_caps_at_max_results() {
        let repo = test_repo().await;
        for i in 0..(MAX_COURSE_RESULTS + 5) {
            repo.insert(new_course(
                &format!("Course {:03}", i),
                "2024-01-01T00:00:00Z",
                &["bulk"],
            ))
            .await
            .unwrap();
        }

        let listed = repo.list(None, SortMode::Alphabetical).await.unwrap();
        assert_eq!(listed.len(), MAX_COURSE_RESULTS);

        let filtered = repo.list(Some("bulk"), SortMode::Date).await.unwrap();
        assert_eq!(filtered.len(), MAX_COURSE_RESULTS);
    }

    #[tokio::test]
    async fn test_increment_rating_is_monotonic() {
        let repo = test_repo().await;
        let created = repo
            .insert(new_course("Algebra", "2023-01-01T00:00:00Z", &[]))
            .await
            .unwrap();

        for _ in 0..3 {
            assert!(repo
                .increment_rating(created.id(), RatingVote::Positive)
                .await
                .unwrap());
        }
        for _ in 0..2 {
            assert!(repo
                .increment_rating(created.id(), RatingVote::Negative)
                .await
                .unwrap());
        }

        let course = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(course.ratings().positive(), 3);
        assert_eq!(course.ratings().negative(), 2);
        assert_eq!(course.ratings().total(), 5);
    }

    #[tokio::test]
    async fn test_increment_rating_missing_course() {
        let repo = test_repo().await;
        let id = CourseId::parse(&"b".repeat(24)).unwrap();
        let updated = repo.increment_rating(&id, RatingVote::Positive).await.unwrap();
        assert!(!updated);
    }
}
