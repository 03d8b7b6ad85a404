// src/constants.rs

// --- Question Shape ---
pub const OPTION_COUNT: usize = 4;

// 1-based `correctOption` range accepted from uploaded files.
pub const CORRECT_OPTION_MIN: f64 = 1.0;
pub const CORRECT_OPTION_MAX: f64 = 4.0;

// 0-based `correctIndex` range accepted from uploaded files.
pub const CORRECT_INDEX_MIN: f64 = 0.0;
pub const CORRECT_INDEX_MAX: f64 = 3.0;

// Fallback when an answer key cannot be resolved.
pub const DEFAULT_CORRECT_INDEX: usize = 0;

// --- Progress ---
pub const PROGRESS_SCALE: f64 = 100.0;
