// src/session.rs

use std::collections::VecDeque;

use chrono::Utc;
use log::{debug, info};
use rand::Rng;

use crate::constants::PROGRESS_SCALE;
use crate::models::{AnswerEvaluated, AttemptRecord, Question, QuizSnapshot, Score};
use crate::shuffle::shuffle;

/// One quiz run: the full shuffled question set, the FIFO queue of
/// questions not yet answered correctly, and the answer-in-progress state.
///
/// Invariant: every question here carries a resolved in-range answer key;
/// nothing below re-validates it.
pub struct QuizSession {
    all_questions: Vec<Question>,
    queue: VecDeque<Question>,
    current: Option<Question>,
    selected_option: Option<usize>,
    is_answered: bool,
    score: Score,
    is_complete: bool,
    attempts: Vec<AttemptRecord>,
}

// --- Public Interface ---

impl QuizSession {
    /// Starts a fresh run over an already-normalized question set.
    pub fn start<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Self {
        let shuffled = shuffle(&questions, rng);
        info!("Starting quiz with {} questions", shuffled.len());

        let mut session = QuizSession {
            queue: shuffled.iter().cloned().collect(),
            all_questions: shuffled,
            current: None,
            selected_option: None,
            is_answered: false,
            score: Score::default(),
            is_complete: false,
            attempts: Vec::new(),
        };
        session.advance();
        session
    }

    /// Records an answer for the question on screen and returns the
    /// evaluation. `None` once the question is already answered (the
    /// second click of a double-click changes nothing) or when no
    /// question is on screen.
    pub fn select_option(&mut self, index: usize) -> Option<AnswerEvaluated> {
        if self.is_answered {
            debug!("Ignoring repeated answer for the current question");
            return None;
        }
        let (question_id, correct_index) = match &self.current {
            Some(question) => (question.id, question.correct_index),
            None => return None,
        };

        let correct = index == correct_index;
        self.selected_option = Some(index);
        if correct {
            self.score.correct += 1;
        } else {
            self.score.incorrect += 1;
        }
        self.attempts.push(AttemptRecord {
            question_id,
            selected: index,
            correct,
            answered_at: Utc::now(),
        });
        self.is_answered = true;

        // Retire the head; an incorrect answer re-enters at the tail for
        // another attempt later.
        if let Some(question) = self.queue.pop_front() {
            if !correct {
                self.queue.push_back(question);
            }
        }

        info!(
            "Question {} answered {} ({} correct / {} incorrect, {} left)",
            question_id,
            if correct { "correctly" } else { "incorrectly" },
            self.score.correct,
            self.score.incorrect,
            self.queue.len()
        );

        Some(AnswerEvaluated {
            question_id,
            correct,
        })
    }

    /// User-triggered advance; only meaningful once the question on
    /// screen has been answered.
    pub fn next_question(&mut self) {
        if !self.is_answered {
            return;
        }
        self.advance();
    }

    /// Reshuffles the full set into a fresh queue and zeroes the run.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        info!("Restarting quiz ({} questions)", self.all_questions.len());
        self.queue = shuffle(&self.all_questions, rng).into();
        self.score = Score::default();
        self.attempts.clear();
        self.is_complete = false;
        self.advance();
    }

    /// Reshuffles the not-yet-mastered questions mid-run. When a question
    /// is on screen, the new head replaces it, abandoning whatever was in
    /// progress.
    pub fn shuffle_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let reshuffled = shuffle(self.queue.make_contiguous(), rng);
        self.queue = reshuffled.into();

        if self.current.is_some() {
            if let Some(head) = self.queue.front() {
                debug!("Queue reshuffled; question {} is now on screen", head.id);
                self.current = Some(head.clone());
            }
        }
    }

    /// Percent of the full set no longer waiting in the queue.
    pub fn progress(&self) -> u32 {
        let total = self.all_questions.len();
        if total == 0 {
            return 0;
        }
        let done = total - self.queue.len();
        ((done as f64 / total as f64) * PROGRESS_SCALE).floor() as u32
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Render-ready view for the presentation layer.
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            current: self.current.clone(),
            selected_option: self.selected_option,
            is_answered: self.is_answered,
            score: self.score,
            remaining: self.queue.len(),
            total: self.all_questions.len(),
            progress: self.progress(),
            is_active: !self.is_complete,
            is_complete: self.is_complete,
        }
    }
}

// --- Internal State Transitions ---

impl QuizSession {
    /// Moves the head of the queue onto the screen, or completes the quiz
    /// once the queue has drained.
    fn advance(&mut self) {
        match self.queue.front() {
            Some(head) => {
                debug!("Serving question {} ({} in queue)", head.id, self.queue.len());
                self.current = Some(head.clone());
                self.selected_option = None;
                self.is_answered = false;
            }
            None => {
                info!(
                    "Queue drained. Quiz complete: {} correct / {} incorrect",
                    self.score.correct, self.score.incorrect
                );
                self.current = None;
                self.selected_option = None;
                self.is_answered = false;
                self.is_complete = true;
            }
        }
    }
}
