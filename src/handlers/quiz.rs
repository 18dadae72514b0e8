use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    extractors::JsonBody,
    models::{Quiz, QuizPayload, QuizSummary},
    names,
    rejections::AppError,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZZES_URL, get(list_quizzes).post(create_quiz))
        .route(
            names::QUIZ_URL,
            get(get_quiz).patch(update_quiz).delete(delete_quiz),
        )
}

async fn create_quiz(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<QuizPayload>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = state.quizzes.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        [(LOCATION, names::quiz_url(&quiz.id))],
        Json(quiz),
    ))
}

async fn list_quizzes(State(state): State<AppState>) -> Result<Json<Vec<QuizSummary>>, AppError> {
    Ok(Json(state.quizzes.list().await?))
}

async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Quiz>, AppError> {
    Ok(Json(state.quizzes.get(&id).await?))
}

async fn update_quiz(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<QuizPayload>,
) -> Result<Json<Quiz>, AppError> {
    Ok(Json(state.quizzes.update(&id, payload).await?))
}

async fn delete_quiz(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.quizzes.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
