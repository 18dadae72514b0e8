#![allow(dead_code)]

use quizdesk::db::Db;
use quizdesk::models::{NewQuestion, NewQuiz, QuestionPayload, QuestionType, QuizPayload};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("quizdesk_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover files from previous runs
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
    let url = format!("sqlite://{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

pub fn input(text: &str) -> NewQuestion {
    NewQuestion::Input {
        text: text.to_string(),
    }
}

pub fn checkbox(text: &str, options: &[&str]) -> NewQuestion {
    NewQuestion::Checkbox {
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

pub fn new_quiz(title: &str, questions: Vec<NewQuestion>) -> NewQuiz {
    NewQuiz {
        title: title.to_string(),
        questions,
    }
}

pub fn make_questions(n: usize) -> Vec<NewQuestion> {
    (0..n)
        .map(|i| match i % 3 {
            0 => NewQuestion::Boolean {
                text: format!("Question {}", i + 1),
            },
            1 => input(&format!("Question {}", i + 1)),
            _ => checkbox(&format!("Question {}", i + 1), &["A", "B", "C"]),
        })
        .collect()
}

pub fn geo_payload() -> QuizPayload {
    QuizPayload {
        title: "Geo".to_string(),
        questions: vec![QuestionPayload {
            text: "Capital of France?".to_string(),
            kind: QuestionType::Input,
            options: None,
        }],
    }
}
