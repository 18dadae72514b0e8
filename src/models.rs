use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    Boolean,
    Input,
    Checkbox,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Boolean => "BOOLEAN",
            QuestionType::Input => "INPUT",
            QuestionType::Checkbox => "CHECKBOX",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown question type: {0}")]
pub struct UnknownQuestionType(pub String);

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOOLEAN" => Ok(QuestionType::Boolean),
            "INPUT" => Ok(QuestionType::Input),
            "CHECKBOX" => Ok(QuestionType::Checkbox),
            other => Err(UnknownQuestionType(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /quizzes` and `PATCH /quizzes/{id}` as it arrives on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuestionPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPayload {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl From<&Quiz> for QuizPayload {
    fn from(quiz: &Quiz) -> Self {
        Self {
            title: quiz.title.clone(),
            questions: quiz
                .questions
                .iter()
                .map(|q| QuestionPayload {
                    text: q.text.clone(),
                    kind: q.kind,
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validated input
// ---------------------------------------------------------------------------

/// A quiz that passed boundary validation and can be written as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuiz {
    pub title: String,
    pub questions: Vec<NewQuestion>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewQuestion {
    Boolean { text: String },
    Input { text: String },
    Checkbox { text: String, options: Vec<String> },
}

impl NewQuestion {
    pub fn text(&self) -> &str {
        match self {
            NewQuestion::Boolean { text }
            | NewQuestion::Input { text }
            | NewQuestion::Checkbox { text, .. } => text,
        }
    }

    pub fn kind(&self) -> QuestionType {
        match self {
            NewQuestion::Boolean { .. } => QuestionType::Boolean,
            NewQuestion::Input { .. } => QuestionType::Input,
            NewQuestion::Checkbox { .. } => QuestionType::Checkbox,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            NewQuestion::Checkbox { options, .. } => Some(options),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// One entry of `GET /quizzes`: no question bodies, just the count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub question_count: i64,
}
