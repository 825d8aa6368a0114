//! TUI runner - main loop, key handling, and background generation tasks.
//!
//! Generations run on spawned tokio tasks and report back over an unbounded
//! channel, so the draw/event loop never blocks on the network. Only one
//! generation is in flight at a time, enforced by the app's `pending` flag.

use crate::{App, AppMode, EditField, Event, EventHandler, Submission};
use atelier_core::{Asset, SourceImage};
use atelier_error::{AtelierResult, TuiError, TuiErrorKind, TuiResult};
use atelier_studio::{AccessGate, Studio, user_message};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc;
use tracing::warn;

type TaskOutcome = Result<Asset, String>;

/// Run the TUI.
///
/// # Arguments
///
/// * `studio` - Orchestrator, or None when the credential is missing
///   (the UI then runs with generation disabled)
/// * `passphrase` - Shared secret for the access gate
pub async fn run_tui(studio: Option<Studio>, passphrase: &str) -> TuiResult<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    let backend_impl = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_impl).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;

    // Create app state
    let mut app = App::new(AccessGate::new(passphrase), studio.is_some());
    let events = EventHandler::new(250);
    let (tx, mut rx) = mpsc::unbounded_channel::<TaskOutcome>();

    // Main loop
    while !app.should_quit {
        // Finished generations arrive over the channel.
        while let Ok(outcome) = rx.try_recv() {
            match outcome {
                Ok(asset) => app.finish_generation(asset),
                Err(message) => app.fail_generation(message),
            }
        }

        terminal
            .draw(|f| crate::ui::draw(f, &app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        if let Ok(Some(event)) = events.next() {
            handle_event(&mut app, studio.as_ref(), &tx, event);
        }
    }

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;

    Ok(())
}

/// Handle a single event.
fn handle_event(
    app: &mut App,
    studio: Option<&Studio>,
    tx: &mpsc::UnboundedSender<TaskOutcome>,
    event: Event,
) {
    let Event::Key(key) = event else {
        return;
    };
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global bindings
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Any key dismisses the error modal.
    if app.error.is_some() {
        app.error = None;
        return;
    }

    match app.mode {
        AppMode::Locked => match key.code {
            KeyCode::Enter => app.try_unlock(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Esc => app.quit(),
            KeyCode::Char(c) => app.type_char(c),
            _ => {}
        },
        AppMode::Form => match key.code {
            KeyCode::Tab | KeyCode::Down => app.focus_next_field(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous_field(),
            KeyCode::Left => app.cycle_focused(false),
            KeyCode::Right => app.cycle_focused(true),
            KeyCode::PageUp => app.select_previous(),
            KeyCode::PageDown => app.select_next(),
            KeyCode::Enter => {
                if let Some(submission) = app.submit_generation() {
                    spawn_submission(app, studio, tx, submission);
                }
            }
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.open_viewer()
            }
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(c) => app.type_char(c),
            KeyCode::Esc => app.quit(),
            _ => {}
        },
        AppMode::Viewer => match key.code {
            KeyCode::Tab => {
                app.edit.focused = match app.edit.focused {
                    None => Some(EditField::Positive),
                    Some(EditField::Positive) => Some(EditField::Negative),
                    Some(EditField::Negative) => Some(EditField::Positive),
                };
            }
            KeyCode::PageUp => app.select_previous(),
            KeyCode::PageDown => app.select_next(),
            KeyCode::Enter => {
                if let Some(submission) = app.submit_edit() {
                    spawn_submission(app, studio, tx, submission);
                }
            }
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(c) => app.type_char(c),
            KeyCode::Esc => app.back_to_studio(),
            _ => {}
        },
    }
}

/// Spawn a generation task for the submission, reporting over the channel.
fn spawn_submission(
    app: &mut App,
    studio: Option<&Studio>,
    tx: &mpsc::UnboundedSender<TaskOutcome>,
    submission: Submission,
) {
    let Some(studio) = studio.cloned() else {
        // Unreachable while api_configured mirrors studio presence.
        warn!("Submission built without a configured studio");
        app.fail_generation("Generation is disabled: missing API key".to_string());
        return;
    };

    let tx = tx.clone();
    tokio::spawn(async move {
        let editing = matches!(submission, Submission::Edit { .. });
        let outcome = run_submission(&studio, submission).await.map_err(|e| {
            let prefix = if editing { "Editing failed" } else { "Generation failed" };
            format!("{}: {}", prefix, user_message(&e))
        });
        let _ = tx.send(outcome);
    });
}

async fn run_submission(studio: &Studio, submission: Submission) -> AtelierResult<Asset> {
    match submission {
        Submission::Image {
            source_path,
            prompt,
            options,
        } => {
            let source = SourceImage::from_path(&source_path)?;
            studio.generate_image(source, &prompt, &options).await
        }
        Submission::Video {
            source_path,
            prompt,
            options,
        } => {
            let source = SourceImage::from_path(&source_path)?;
            studio.generate_video(source, &prompt, &options).await
        }
        Submission::Edit {
            asset,
            positive,
            negative,
        } => studio.edit(&asset, &positive, &negative).await,
    }
}
