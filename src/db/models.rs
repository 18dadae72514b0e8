// Database row structs

use chrono::{DateTime, Utc};
use color_eyre::{eyre::OptionExt, Result};

use crate::models::{Question, QuestionType};
use crate::options;

#[derive(sqlx::FromRow)]
pub struct QuizRow {
    pub id: String,
    pub title: String,
    pub created_at: i64,
}

#[derive(sqlx::FromRow)]
pub struct QuestionRow {
    pub id: String,
    pub text: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub options: Option<String>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = color_eyre::Report;

    fn try_from(row: QuestionRow) -> Result<Self> {
        let kind = row.kind.parse::<QuestionType>()?;
        let options = options::decode_column(row.options.as_deref())?;

        Ok(Question {
            id: row.id,
            text: row.text,
            kind,
            options,
        })
    }
}

/// `created_at` is stored as Unix milliseconds.
pub fn timestamp(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_eyre("stored timestamp is out of range")
}
