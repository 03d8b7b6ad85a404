// src/lib.rs

pub mod constants;
pub mod models;
pub mod normalizer;
pub mod session;
pub mod shuffle;

use log::{error, info};
use tauri::{AppHandle, Emitter, Manager, State};

use crate::models::{AppState, AttemptRecord, LoadOutcome, QuizSnapshot, RawQuestion};
use crate::session::QuizSession;

#[tauri::command]
fn load_quiz(state: State<AppState>, json: String) -> Result<LoadOutcome, String> {
    let raw: Vec<RawQuestion> = serde_json::from_str(&json).map_err(|e| {
        error!("Error parsing uploaded file: {}", e);
        format!("Invalid JSON file: {}", e)
    })?;

    let (questions, warnings) = normalizer::normalize(raw);
    let session = QuizSession::start(questions, &mut rand::thread_rng());
    let snapshot = session.snapshot();

    // Replace the previous session only once the new one is fully built,
    // so a failed upload leaves it untouched.
    *state.session.lock().unwrap() = Some(session);

    Ok(LoadOutcome { warnings, snapshot })
}

#[tauri::command]
fn select_option(
    app: AppHandle,
    state: State<AppState>,
    index: usize,
) -> Result<QuizSnapshot, String> {
    let mut guard = state.session.lock().unwrap();
    let session = guard.as_mut().ok_or("No quiz loaded")?;

    if let Some(evaluated) = session.select_option(index) {
        // Fire-and-forget; the frontend reacts with the answer sound.
        let _ = app.emit("answer-evaluated", evaluated);
    }

    Ok(session.snapshot())
}

#[tauri::command]
fn next_question(state: State<AppState>) -> Result<QuizSnapshot, String> {
    let mut guard = state.session.lock().unwrap();
    let session = guard.as_mut().ok_or("No quiz loaded")?;
    session.next_question();
    Ok(session.snapshot())
}

#[tauri::command]
fn restart_quiz(state: State<AppState>) -> Result<QuizSnapshot, String> {
    let mut guard = state.session.lock().unwrap();
    let session = guard.as_mut().ok_or("No quiz loaded")?;
    session.restart(&mut rand::thread_rng());
    Ok(session.snapshot())
}

#[tauri::command]
fn shuffle_remaining(state: State<AppState>) -> Result<QuizSnapshot, String> {
    let mut guard = state.session.lock().unwrap();
    let session = guard.as_mut().ok_or("No quiz loaded")?;
    session.shuffle_remaining(&mut rand::thread_rng());
    Ok(session.snapshot())
}

#[tauri::command]
fn get_snapshot(state: State<AppState>) -> Result<QuizSnapshot, String> {
    let guard = state.session.lock().unwrap();
    let session = guard.as_ref().ok_or("No quiz loaded")?;
    Ok(session.snapshot())
}

#[tauri::command]
fn get_attempt_history(state: State<AppState>) -> Result<Vec<AttemptRecord>, String> {
    let guard = state.session.lock().unwrap();
    let session = guard.as_ref().ok_or("No quiz loaded")?;
    Ok(session.attempts().to_vec())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting MCQ Cram backend...");
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            app.manage(AppState::new());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            load_quiz,
            select_option,
            next_question,
            restart_quiz,
            shuffle_remaining,
            get_snapshot,
            get_attempt_history
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
