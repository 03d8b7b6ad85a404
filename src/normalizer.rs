// src/normalizer.rs

use log::warn;
use serde_json::Value;

use crate::constants::*;
use crate::models::{NormalizeWarning, Question, RawQuestion};

/// Resolves every uploaded question into canonical form. Total over any
/// parsed input: a bad or ambiguous answer key degrades to the first
/// option with a warning instead of failing the load. Ids follow the
/// input order; shuffling is the caller's job.
pub fn normalize(raw: Vec<RawQuestion>) -> (Vec<Question>, Vec<NormalizeWarning>) {
    let mut questions = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();

    for (id, item) in raw.into_iter().enumerate() {
        let correct_index = match resolve_correct_index(&item) {
            Ok(index) => index,
            Err(message) => {
                warn!("{} (question: \"{}\")", message, item.question);
                warnings.push(NormalizeWarning {
                    question_id: id,
                    question: item.question.clone(),
                    message,
                });
                DEFAULT_CORRECT_INDEX
            }
        };

        questions.push(Question {
            id,
            question: item.question,
            options: item.options,
            correct_index,
        });
    }

    (questions, warnings)
}

/// Resolution policy, in priority order:
/// 1. `correctOption` as a 1-based number in [1,4]. Out-of-range numbers
///    fall through to the remaining rules rather than erroring.
/// 2. `correctOption` as text matching one of the options (both sides
///    trimmed and lower-cased).
/// 3. `correctIndex` as a 0-based number in [0,3].
/// 4. Otherwise ambiguous: the caller defaults to the first option.
fn resolve_correct_index(item: &RawQuestion) -> Result<usize, String> {
    if let Some(n) = integral(&item.correct_option) {
        if (CORRECT_OPTION_MIN..=CORRECT_OPTION_MAX).contains(&n) {
            return Ok(n as usize - 1);
        }
    }

    if let Some(text) = item.correct_option.as_str() {
        let needle = text.trim().to_lowercase();
        return match item
            .options
            .iter()
            .position(|opt| opt.trim().to_lowercase() == needle)
        {
            Some(index) => Ok(index),
            None => Err(format!(
                "Could not find matching option for \"{}\". Defaulting to first option.",
                text
            )),
        };
    }

    if let Some(n) = integral(&item.correct_index) {
        if (CORRECT_INDEX_MIN..=CORRECT_INDEX_MAX).contains(&n) {
            return Ok(n as usize);
        }
    }

    Err("Invalid correct option/index. Defaulting to first option.".to_string())
}

/// Whole-number JSON values only; anything else is "not a number" as far
/// as the answer key is concerned.
fn integral(value: &Value) -> Option<f64> {
    let n = value.as_f64()?;
    (n.fract() == 0.0).then_some(n)
}
