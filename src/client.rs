//! Typed HTTP client for the quiz API.
//!
//! Nothing here assumes success: every call checks the status and turns a
//! non-success response into [`ClientError::Status`] carrying the server's
//! message. [`QuizListView`] only changes its local list after the server has
//! confirmed the change.

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::models::{Quiz, QuizPayload, QuizSummary};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
    #[error("base url {0} cannot carry a path")]
    NotABase(Url),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Where the API lives. Always passed in explicitly.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::NotABase(base_url));
        }
        Ok(Self { base_url })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct QuizClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl QuizClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn list(&self) -> Result<Vec<QuizSummary>, ClientError> {
        let resp = self.http.get(self.endpoint(&[])?).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Quiz, ClientError> {
        let resp = self.http.get(self.endpoint(&[id])?).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn create(&self, payload: &QuizPayload) -> Result<Quiz, ClientError> {
        let resp = self
            .http
            .post(self.endpoint(&[])?)
            .json(payload)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn update(&self, id: &str, payload: &QuizPayload) -> Result<Quiz, ClientError> {
        let resp = self
            .http
            .patch(self.endpoint(&[id])?)
            .json(payload)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.http.delete(self.endpoint(&[id])?).send().await?;
        check(resp).await?;
        Ok(())
    }

    /// `<base>/quizzes[/<segment>...]`, with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::NotABase(self.config.base_url.clone()))?
            .pop_if_empty()
            .push("quizzes")
            .extend(segments);
        Ok(url)
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    tracing::debug!(%status, %message, "quiz api request failed");

    Err(ClientError::Status { status, message })
}

/// Local copy of the quiz list, as a front end would hold it.
#[derive(Debug, Default)]
pub struct QuizListView {
    quizzes: Vec<QuizSummary>,
}

impl QuizListView {
    pub async fn load(client: &QuizClient) -> Result<Self, ClientError> {
        Ok(Self {
            quizzes: client.list().await?,
        })
    }

    pub fn quizzes(&self) -> &[QuizSummary] {
        &self.quizzes
    }

    /// Replaces the list only when the fetch succeeds.
    pub async fn refresh(&mut self, client: &QuizClient) -> Result<(), ClientError> {
        self.quizzes = client.list().await?;
        Ok(())
    }

    /// Removes the entry once the server confirms the delete.
    pub async fn delete(&mut self, client: &QuizClient, id: &str) -> Result<(), ClientError> {
        client.delete(id).await?;
        self.quizzes.retain(|q| q.id != id);
        Ok(())
    }
}
