//! Core engine for Tally - calculator state machine and session state.
//!
//! This crate contains the pure [`Calculator`] reducer and the [`App`]
//! session state machine without TUI dependencies. Rendering and key
//! mapping live in `tally-tui`; IO collaborators (tone sink, config
//! persistence) are driven by the binary's run loop.

mod app;
mod calculator;
mod config;
mod tones;

pub use app::{App, InputMode, PaletteKind};
pub use calculator::Calculator;
pub use config::{AppConfig, ConfigError, TallyConfig};
pub use tones::{Tone, ToneSink};

// Re-export the data model so downstream crates depend on one surface.
pub use tally_types::{
    AngleUnit, HISTORY_CAPACITY, HistoryEntry, MemoryOp, OperatorKind, ScientificFn, Tape, Theme,
    UiOptions, format_number, parse_display,
};
