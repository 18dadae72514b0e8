use std::future::Future;

use color_eyre::Result;

use crate::db::Db;
use crate::models::{NewQuiz, Quiz, QuizPayload, QuizSummary};
use crate::validation::ValidationError;

// ---------------------------------------------------------------------------
// QuizRepository trait (the service only sees what it needs from storage)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuizRepository: Send + Sync {
    fn create_quiz(&self, quiz: NewQuiz) -> impl Future<Output = Result<Quiz>> + Send;

    fn quizzes(&self) -> impl Future<Output = Result<Vec<QuizSummary>>> + Send;

    fn quiz(&self, id: &str) -> impl Future<Output = Result<Option<Quiz>>> + Send;

    fn update_quiz(
        &self,
        id: &str,
        quiz: NewQuiz,
    ) -> impl Future<Output = Result<Option<Quiz>>> + Send;

    fn delete_quiz(&self, id: &str) -> impl Future<Output = Result<bool>> + Send;
}

impl QuizRepository for Db {
    fn create_quiz(&self, quiz: NewQuiz) -> impl Future<Output = Result<Quiz>> + Send {
        Db::create_quiz(self, quiz)
    }

    fn quizzes(&self) -> impl Future<Output = Result<Vec<QuizSummary>>> + Send {
        Db::quizzes(self)
    }

    fn quiz(&self, id: &str) -> impl Future<Output = Result<Option<Quiz>>> + Send {
        Db::quiz(self, id)
    }

    fn update_quiz(
        &self,
        id: &str,
        quiz: NewQuiz,
    ) -> impl Future<Output = Result<Option<Quiz>>> + Send {
        Db::update_quiz(self, id, quiz)
    }

    fn delete_quiz(&self, id: &str) -> impl Future<Output = Result<bool>> + Send {
        Db::delete_quiz(self, id)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("quiz {0} not found")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(color_eyre::Report),
}

impl From<color_eyre::Report> for QuizError {
    fn from(err: color_eyre::Report) -> Self {
        QuizError::Storage(err)
    }
}

// ---------------------------------------------------------------------------
// QuizService
// ---------------------------------------------------------------------------

/// Validates payloads before anything reaches the repository.
pub struct QuizService<R: QuizRepository = Db> {
    repo: R,
}

impl<R: QuizRepository + Clone> Clone for QuizService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R: QuizRepository> QuizService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: QuizPayload) -> Result<Quiz, QuizError> {
        let quiz = NewQuiz::try_from(payload)?;
        Ok(self.repo.create_quiz(quiz).await?)
    }

    pub async fn list(&self) -> Result<Vec<QuizSummary>, QuizError> {
        Ok(self.repo.quizzes().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Quiz, QuizError> {
        self.repo
            .quiz(id)
            .await?
            .ok_or_else(|| QuizError::NotFound(id.to_string()))
    }

    pub async fn update(&self, id: &str, payload: QuizPayload) -> Result<Quiz, QuizError> {
        let quiz = NewQuiz::try_from(payload)?;
        self.repo
            .update_quiz(id, quiz)
            .await?
            .ok_or_else(|| QuizError::NotFound(id.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), QuizError> {
        if self.repo.delete_quiz(id).await? {
            Ok(())
        } else {
            Err(QuizError::NotFound(id.to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
