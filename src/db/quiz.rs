use chrono::Utc;
use color_eyre::Result;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use ulid::Ulid;

use super::models::{timestamp, QuestionRow, QuizRow};
use super::Db;
use crate::models::{NewQuestion, NewQuiz, Question, Quiz, QuizSummary};
use crate::options;

impl Db {
    /// Insert a quiz with all its questions atomically in a transaction.
    pub async fn create_quiz(&self, quiz: NewQuiz) -> Result<Quiz> {
        let id = Ulid::new().to_string();
        let created_at = timestamp(Utc::now().timestamp_millis())?;
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO quizzes (id, title, created_at) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&quiz.title)
            .bind(created_at.timestamp_millis())
            .execute(&mut *tx)
            .await?;

        let questions = insert_questions(&mut tx, &id, &quiz.questions).await?;

        tx.commit().await?;

        tracing::info!(quiz_id = %id, questions = questions.len(), "new quiz created");
        Ok(Quiz {
            id,
            title: quiz.title,
            created_at,
            questions,
        })
    }

    /// Newest first. Quizzes created within the same millisecond fall back to
    /// insertion order.
    pub async fn quizzes(&self) -> Result<Vec<QuizSummary>> {
        let quizzes = sqlx::query_as::<_, QuizSummary>(
            r#"
            SELECT
              quizzes.id AS id,
              quizzes.title AS title,
              COUNT(questions.id) AS question_count
            FROM
              quizzes
              LEFT JOIN questions ON questions.quiz_id = quizzes.id
            GROUP BY
              quizzes.id
            ORDER BY
              quizzes.created_at DESC,
              quizzes.rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    pub async fn quiz(&self, id: &str) -> Result<Option<Quiz>> {
        // Both reads share one snapshot so a concurrent update is seen whole or not at all.
        let mut tx = self.pool.begin().await?;

        let Some(row) = sqlx::query_as::<_, QuizRow>(
            "SELECT id, title, created_at FROM quizzes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, text, type, options FROM questions WHERE quiz_id = ? ORDER BY position",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let questions = rows
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Quiz {
            id: row.id,
            title: row.title,
            created_at: timestamp(row.created_at)?,
            questions,
        }))
    }

    /// Replace the title and the whole question set in one transaction.
    /// Returns `None` without touching anything when the quiz does not exist.
    pub async fn update_quiz(&self, id: &str, quiz: NewQuiz) -> Result<Option<Quiz>> {
        let mut tx = self.pool.begin().await?;

        // Writing first takes the write lock up front, so concurrent updates queue
        // behind each other instead of failing to upgrade a read snapshot.
        let created_at: Option<i64> =
            sqlx::query_scalar("UPDATE quizzes SET title = ? WHERE id = ? RETURNING created_at")
                .bind(&quiz.title)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(created_at) = created_at else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM questions WHERE quiz_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let questions = insert_questions(&mut tx, id, &quiz.questions).await?;

        tx.commit().await?;

        tracing::info!(quiz_id = %id, questions = questions.len(), "quiz updated");
        Ok(Some(Quiz {
            id: id.to_string(),
            title: quiz.title,
            created_at: timestamp(created_at)?,
            questions,
        }))
    }

    /// Questions go with the quiz through `ON DELETE CASCADE`.
    pub async fn delete_quiz(&self, id: &str) -> Result<bool> {
        let deleted = sqlx::query("DELETE FROM quizzes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected()
            > 0;

        if deleted {
            tracing::info!(quiz_id = %id, "quiz deleted");
        }
        Ok(deleted)
    }
}

/// Six bound parameters per row.
const INSERT_CHUNK_ROWS: usize = 1000;

/// Batch insert in submission order; every question gets a fresh id.
async fn insert_questions(
    conn: &mut SqliteConnection,
    quiz_id: &str,
    questions: &[NewQuestion],
) -> Result<Vec<Question>> {
    let inserted: Vec<Question> = questions
        .iter()
        .map(|q| Question {
            id: Ulid::new().to_string(),
            text: q.text().to_string(),
            kind: q.kind(),
            options: q.options().map(<[String]>::to_vec),
        })
        .collect();

    if inserted.is_empty() {
        return Ok(inserted);
    }

    // One statement per chunk keeps the bound parameters under SQLite's limit.
    for (chunk_idx, chunk) in inserted.chunks(INSERT_CHUNK_ROWS).enumerate() {
        let offset = chunk_idx * INSERT_CHUNK_ROWS;
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO questions (id, quiz_id, position, text, type, options) ",
        );
        builder.push_values(chunk.iter().enumerate(), |mut row, (i, q)| {
            row.push_bind(q.id.clone())
                .push_bind(quiz_id.to_string())
                .push_bind((offset + i) as i64)
                .push_bind(q.text.clone())
                .push_bind(q.kind.as_str())
                .push_bind(q.options.as_deref().map(options::encode));
        });
        builder.build().execute(&mut *conn).await?;
    }

    Ok(inserted)
}
