// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;

use crate::session::QuizSession;

// --- App State ---

pub struct AppState {
    pub session: Mutex<Option<QuizSession>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            session: Mutex::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

// --- Data Models ---

/// A question as it appears in an uploaded file, before the answer key is
/// resolved. Every field is best-effort: missing or oddly-typed values
/// degrade during normalization instead of failing the parse.
#[derive(Deserialize, Debug)]
pub struct RawQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, rename = "correctOption")]
    pub correct_option: Value,
    #[serde(default, rename = "correctIndex")]
    pub correct_index: Value,
}

/// Canonical question: the answer key is fully resolved to an in-range
/// index before it enters a session, and is never re-validated after.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: usize,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub incorrect: u32,
}

/// One scoring answer event, newest last. In-memory counterpart of an
/// attempt-log row; cleared on restart.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub question_id: usize,
    pub selected: usize,
    pub correct: bool,
    pub answered_at: DateTime<Utc>,
}

/// Payload of the `answer-evaluated` event.
#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvaluated {
    pub question_id: usize,
    pub correct: bool,
}

/// A non-fatal data-quality issue found while resolving an answer key.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeWarning {
    pub question_id: usize,
    pub question: String,
    pub message: String,
}

// --- Frontend Views ---

/// Render-ready view of the session, rebuilt after every mutating command.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuizSnapshot {
    pub current: Option<Question>,
    pub selected_option: Option<usize>,
    pub is_answered: bool,
    pub score: Score,
    pub remaining: usize,
    pub total: usize,
    pub progress: u32,
    pub is_active: bool,
    pub is_complete: bool,
}

/// Returned by `load_quiz`: the fresh snapshot plus any data-quality
/// warnings produced while normalizing the file.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoadOutcome {
    pub warnings: Vec<NormalizeWarning>,
    pub snapshot: QuizSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The frontend reads these names verbatim; a rename here breaks it.
    #[test]
    fn frontend_facing_types_serialize_as_camel_case() {
        let question = Question {
            id: 3,
            question: "q".to_string(),
            options: vec!["a".to_string()],
            correct_index: 0,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert!(json.get("correctIndex").is_some());

        let record = AttemptRecord {
            question_id: 3,
            selected: 1,
            correct: false,
            answered_at: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("questionId").is_some());
        assert!(json.get("answeredAt").is_some());
    }

    #[test]
    fn raw_question_accepts_the_documented_field_names() {
        let raw: RawQuestion = serde_json::from_str(
            r#"{"question": "q", "options": ["a"], "correctOption": 2, "correctIndex": 1}"#,
        )
        .unwrap();

        assert_eq!(raw.question, "q");
        assert_eq!(raw.correct_option, Value::from(2));
        assert_eq!(raw.correct_index, Value::from(1));
    }
}
