//! Boundary validation: turns a wire payload into a [`NewQuiz`].

use crate::models::{NewQuestion, NewQuiz, QuestionPayload, QuestionType, QuizPayload};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("a quiz needs at least one question")]
    NoQuestions,
    #[error("question {0}: text is required")]
    MissingText(usize),
    #[error("question {0}: CHECKBOX questions need at least one option")]
    MissingOptions(usize),
    #[error("question {0}: option {1} is blank")]
    BlankOption(usize, usize),
    #[error("question {0}: only CHECKBOX questions may carry options, got {1}")]
    UnexpectedOptions(usize, QuestionType),
}

impl TryFrom<QuizPayload> for NewQuiz {
    type Error = ValidationError;

    fn try_from(payload: QuizPayload) -> Result<Self, Self::Error> {
        let title = payload.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        if payload.questions.is_empty() {
            return Err(ValidationError::NoQuestions);
        }

        let questions = payload
            .questions
            .into_iter()
            .enumerate()
            .map(|(idx, q)| question(idx, q))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewQuiz {
            title: title.to_string(),
            questions,
        })
    }
}

fn question(idx: usize, payload: QuestionPayload) -> Result<NewQuestion, ValidationError> {
    let text = payload.text.trim().to_string();
    if text.is_empty() {
        return Err(ValidationError::MissingText(idx));
    }

    // `null` and `[]` both mean "no options".
    let options = payload.options.unwrap_or_default();

    match payload.kind {
        QuestionType::Checkbox => {
            if options.is_empty() {
                return Err(ValidationError::MissingOptions(idx));
            }
            if let Some(blank) = options.iter().position(|o| o.trim().is_empty()) {
                return Err(ValidationError::BlankOption(idx, blank));
            }
            Ok(NewQuestion::Checkbox { text, options })
        }
        kind if !options.is_empty() => Err(ValidationError::UnexpectedOptions(idx, kind)),
        QuestionType::Boolean => Ok(NewQuestion::Boolean { text }),
        QuestionType::Input => Ok(NewQuestion::Input { text }),
    }
}
