//! Tally CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`tally_engine`] (application state) and [`tally_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! # Event loop
//!
//! Single-threaded and synchronous: each key event is handled to completion
//! before the next is read.
//!
//! 1. Render frame
//! 2. Poll for input with a frame timeout
//! 3. Dispatch the key event to the engine
//! 4. Drain the tone queue into the tone sink
//! 5. Persist the theme flag if it was toggled
//! 6. Check for quit
//!
//! The tone sink and config persistence are fire-and-forget collaborators;
//! their failures are logged and never affect engine state.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tally_engine::{App, TallyConfig, Theme, Tone, ToneSink};
use tally_tui::{draw, handle_key};

const FRAME_TIMEOUT: Duration = Duration::from_millis(50);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let candidates = log_file_candidates();
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.tally/logs/tally.log
    if let Some(config_path) = TallyConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("tally.log"));
    }

    // Fallback: ./.tally/logs/tally.log (useful in constrained environments)
    candidates.push(PathBuf::from(".tally").join("logs").join("tally.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode and the alternate screen. On drop, both are restored so
/// the terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Tone playback via the terminal bell.
///
/// The bell cannot honor frequency or duration, so those are logged and the
/// bell rung as-is. All IO errors are swallowed: audio unavailability must
/// never surface to the user or affect engine state.
struct TerminalBell;

impl ToneSink for TerminalBell {
    fn play(&mut self, tone: Tone) {
        tracing::debug!(
            frequency_hz = tone.frequency_hz,
            duration_ms = tone.duration_ms,
            "tone"
        );
        let mut out = stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let theme = match TallyConfig::load() {
        Ok(Some(config)) => config.theme().unwrap_or_default(),
        Ok(None) => Theme::default(),
        Err(err) => {
            tracing::warn!("Falling back to default theme: {err}");
            Theme::default()
        }
    };

    let mut app = App::new(theme);
    let mut session = TerminalSession::new()?;
    run_app(&mut session.terminal, &mut app, &mut TerminalBell)
}

fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tones: &mut dyn ToneSink,
) -> Result<()>
where
    B: ratatui::backend::Backend,
{
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(FRAME_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    handle_key(app, key);
                }
                // Resize and other events just trigger the redraw above.
                _ => {}
            }
        }

        if let Some(tone) = app.take_tone() {
            tones.play(tone);
        }

        if app.take_theme_dirty()
            && let Err(err) = TallyConfig::persist_theme(app.theme())
        {
            tracing::warn!("Failed to persist theme: {err}");
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
