//! SQLite Question Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    NewQuestion, QuestionRecord, QuestionRepositoryPort, RepositoryError,
};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite Question Repository
pub struct SqliteQuestionRepository {
    pool: DbPool,
}

impl SqliteQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: Option<i64>,
    difficulty: Option<i64>,
}

impl From<QuestionRow> for QuestionRecord {
    fn from(row: QuestionRow) -> Self {
        QuestionRecord {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

/// 不区分大小写的子串匹配（Unicode 大小写折叠）
///
/// `needle` 需已转为小写
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl QuestionRepositoryPort for SqliteQuestionRepository {
    async fn insert(&self, question: &NewQuestion) -> Result<QuestionRecord, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(QuestionRecord {
            id: result.last_insert_rowid(),
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        })
    }

    async fn delete(&self, id: i64) -> Result<Option<QuestionRecord>, RepositoryError> {
        // 查询与删除放在同一事务中；提前返回时事务随 drop 回滚
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let row: Option<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions WHERE id = ?",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(Some(QuestionRecord::from(row)))
    }

    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<QuestionRecord>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions ORDER BY id LIMIT ? OFFSET ?",
            QUESTION_COLUMNS
        ))
        .bind(to_sql_int(limit))
        .bind(to_sql_int(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(QuestionRecord::from).collect())
    }

    async fn find_all(&self) -> Result<Vec<QuestionRecord>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions ORDER BY id",
            QUESTION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(QuestionRecord::from).collect())
    }

    async fn find_by_category(
        &self,
        category: i64,
    ) -> Result<Vec<QuestionRecord>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions WHERE category = ? ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(QuestionRecord::from).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>, RepositoryError> {
        // SQLite 的 LIKE 只折叠 ASCII 大小写，匹配在内存中完成
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions ORDER BY id",
            QUESTION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let needle = term.to_lowercase();
        Ok(rows
            .into_iter()
            .filter(|row| contains_folded(&row.question, &needle))
            .map(QuestionRecord::from)
            .collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        u64::try_from(count).map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }
}
