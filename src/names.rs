pub const QUIZZES_URL: &str = "/quizzes";
pub const QUIZ_URL: &str = "/quizzes/{id}";
pub const HEALTH_URL: &str = "/health";

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:3001";
pub const DEFAULT_LOG_FILTER: &str = "quizdesk=debug,tower_http=info";

pub fn quiz_url(id: &str) -> String {
    format!("{QUIZZES_URL}/{id}")
}
