//! Core data types for Tally.
//!
//! Pure data with no IO, no ratatui dependency. Used by both the engine
//! (state ownership) and the tui (rendering/input).

mod history;
mod number;
mod ops;
mod ui;

pub use history::{HISTORY_CAPACITY, HistoryEntry, Tape};
pub use number::{format_number, parse_display};
pub use ops::{AngleUnit, MemoryOp, OperatorKind, ScientificFn};
pub use ui::{Theme, UiOptions};
