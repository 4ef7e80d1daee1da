//! Session state machine.
//!
//! [`App`] wraps the pure [`Calculator`] with everything the presentation
//! layer owns: input modes, the function/memory palettes, UI flags (theme,
//! sound, scientific mode, history panel), the tone queue, and the quit
//! flag. The engine performs no IO; the run loop drains the tone queue into
//! a sink and persists the theme when it is marked dirty.

use tally_types::{AngleUnit, MemoryOp, OperatorKind, ScientificFn, Tape, Theme, UiOptions};

use crate::calculator::Calculator;
use crate::tones::{self, Tone};

/// Which input surface currently has the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// The keypad: digits, operators, and session toggles.
    #[default]
    Keypad,
    /// A selection palette is open over the keypad.
    Palette(PaletteKind),
}

/// Which palette is open. Both are reachable only in scientific mode,
/// matching the original widget's button gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Function,
    Memory,
}

impl PaletteKind {
    /// Number of selectable entries.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Self::Function => ScientificFn::all().len(),
            Self::Memory => MemoryOp::all().len(),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Application session state: the calculator plus presentation flags.
#[derive(Debug)]
pub struct App {
    calc: Calculator,
    mode: InputMode,
    palette_index: usize,
    theme: Theme,
    theme_dirty: bool,
    sound_enabled: bool,
    scientific_mode: bool,
    show_history: bool,
    queued_tone: Option<Tone>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            calc: Calculator::new(),
            mode: InputMode::Keypad,
            palette_index: 0,
            theme,
            theme_dirty: false,
            sound_enabled: true,
            scientific_mode: false,
            show_history: false,
            queued_tone: None,
            should_quit: false,
        }
    }

    // === Read surface for the renderer ===

    #[must_use]
    pub fn display(&self) -> &str {
        self.calc.display()
    }

    #[must_use]
    pub fn pending(&self) -> Option<(f64, OperatorKind)> {
        self.calc.pending()
    }

    #[must_use]
    pub fn memory(&self) -> f64 {
        self.calc.memory()
    }

    #[must_use]
    pub fn tape(&self) -> &Tape {
        self.calc.tape()
    }

    #[must_use]
    pub fn angle_unit(&self) -> AngleUnit {
        self.calc.angle_unit()
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    #[must_use]
    pub fn scientific_mode(&self) -> bool {
        self.scientific_mode
    }

    #[must_use]
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions { theme: self.theme }
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // === Run-loop drains ===

    /// Take the queued feedback tone, if any. Drained once per frame.
    pub fn take_tone(&mut self) -> Option<Tone> {
        self.queued_tone.take()
    }

    /// True once after each theme toggle; the run loop persists the flag.
    pub fn take_theme_dirty(&mut self) -> bool {
        std::mem::take(&mut self.theme_dirty)
    }

    fn queue_tone(&mut self, tone: Tone) {
        if self.sound_enabled {
            self.queued_tone = Some(tone);
        }
    }

    // === Keypad events ===

    pub fn press_digit(&mut self, d: u8) {
        self.queue_tone(tones::DIGIT);
        self.calc.digit(d);
    }

    pub fn press_decimal(&mut self) {
        self.queue_tone(tones::DECIMAL);
        self.calc.decimal();
    }

    pub fn press_operator(&mut self, op: OperatorKind) {
        self.queue_tone(tones::OPERATOR);
        self.calc.operator(op);
    }

    pub fn press_equals(&mut self) {
        self.queue_tone(tones::EQUALS);
        self.calc.equals();
    }

    pub fn press_clear(&mut self) {
        self.queue_tone(tones::CLEAR);
        self.calc.clear();
    }

    pub fn press_backspace(&mut self) {
        self.queue_tone(tones::BACKSPACE);
        self.calc.backspace();
    }

    /// Apply a scientific function directly (palette confirm path).
    pub fn apply_scientific(&mut self, f: ScientificFn) {
        self.queue_tone(tones::SCIENTIFIC);
        self.calc.scientific(f);
    }

    /// Apply a memory operation directly (palette confirm path).
    pub fn apply_memory(&mut self, m: MemoryOp) {
        self.queue_tone(tones::MEMORY);
        self.calc.memory_op(m);
    }

    // === Session toggles ===

    pub fn toggle_theme(&mut self) {
        self.queue_tone(tones::THEME);
        self.theme = self.theme.toggle();
        self.theme_dirty = true;
    }

    /// Toggle sound. Turning it on plays a confirmation tone; turning it
    /// off is silent (the original only beeped on unmute).
    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        if self.sound_enabled {
            self.queue_tone(tones::SOUND_ON);
        }
    }

    /// Gate for the scientific keys and palettes; engine state is untouched.
    pub fn toggle_scientific_mode(&mut self) {
        self.scientific_mode = !self.scientific_mode;
    }

    pub fn toggle_history_panel(&mut self) {
        self.show_history = !self.show_history;
    }

    pub fn clear_history(&mut self) {
        self.queue_tone(tones::HISTORY_CLEAR);
        self.calc.clear_tape();
    }

    /// Flip the trig angle unit. Offered only while scientific mode is on.
    pub fn toggle_angle_unit(&mut self) {
        if self.scientific_mode {
            self.calc.set_angle_unit(self.calc.angle_unit().toggle());
        }
    }

    // === Palettes ===

    /// Open a selection palette. Ignored outside scientific mode.
    pub fn open_palette(&mut self, kind: PaletteKind) {
        if self.scientific_mode {
            self.mode = InputMode::Palette(kind);
            self.palette_index = 0;
        }
    }

    pub fn palette_move_up(&mut self) {
        if let InputMode::Palette(_) = self.mode {
            self.palette_index = self.palette_index.saturating_sub(1);
        }
    }

    pub fn palette_move_down(&mut self) {
        if let InputMode::Palette(kind) = self.mode {
            self.palette_index = (self.palette_index + 1).min(kind.len() - 1);
        }
    }

    /// Move the highlight to `index`. Returns whether the index was valid
    /// for the open palette; out-of-range indices leave the highlight alone.
    pub fn palette_set_index(&mut self, index: usize) -> bool {
        if let InputMode::Palette(kind) = self.mode
            && index < kind.len()
        {
            self.palette_index = index;
            return true;
        }
        false
    }

    /// Apply the highlighted entry and return to the keypad.
    pub fn palette_confirm(&mut self) {
        let InputMode::Palette(kind) = self.mode else {
            return;
        };
        match kind {
            PaletteKind::Function => {
                if let Some(&f) = ScientificFn::all().get(self.palette_index) {
                    self.apply_scientific(f);
                }
            }
            PaletteKind::Memory => {
                if let Some(&m) = MemoryOp::all().get(self.palette_index) {
                    self.apply_memory(m);
                }
            }
        }
        self.mode = InputMode::Keypad;
    }

    /// Close the palette without applying anything.
    pub fn palette_cancel(&mut self) {
        self.mode = InputMode::Keypad;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_are_queued_per_event_kind() {
        let mut app = App::new(Theme::Dark);
        app.press_digit(5);
        assert_eq!(app.take_tone().unwrap().frequency_hz, 200);
        app.press_equals();
        assert_eq!(app.take_tone().unwrap().frequency_hz, 400);
        app.press_clear();
        assert_eq!(app.take_tone().unwrap().frequency_hz, 150);
        // Drained: no tone left.
        assert!(app.take_tone().is_none());
    }

    #[test]
    fn muted_sound_queues_nothing() {
        let mut app = App::new(Theme::Dark);
        app.toggle_sound();
        assert!(app.take_tone().is_none());
        app.press_digit(1);
        app.press_equals();
        assert!(app.take_tone().is_none());
        // Unmute beeps once.
        app.toggle_sound();
        assert_eq!(app.take_tone().unwrap().frequency_hz, 300);
    }

    #[test]
    fn theme_toggle_marks_dirty_once() {
        let mut app = App::new(Theme::Dark);
        assert!(!app.take_theme_dirty());
        app.toggle_theme();
        assert_eq!(app.theme(), Theme::Light);
        assert!(app.take_theme_dirty());
        assert!(!app.take_theme_dirty());
    }

    #[test]
    fn palettes_require_scientific_mode() {
        let mut app = App::new(Theme::Dark);
        app.open_palette(PaletteKind::Function);
        assert_eq!(app.input_mode(), InputMode::Keypad);
        app.toggle_scientific_mode();
        app.open_palette(PaletteKind::Function);
        assert_eq!(app.input_mode(), InputMode::Palette(PaletteKind::Function));
    }

    #[test]
    fn palette_confirm_applies_and_returns_to_keypad() {
        let mut app = App::new(Theme::Dark);
        app.toggle_scientific_mode();
        app.press_digit(9);
        app.open_palette(PaletteKind::Function);
        // Sqrt is the sixth entry.
        assert!(app.palette_set_index(5));
        app.palette_confirm();
        assert_eq!(app.display(), "3");
        assert_eq!(app.input_mode(), InputMode::Keypad);
    }

    #[test]
    fn palette_navigation_clamps() {
        let mut app = App::new(Theme::Dark);
        app.toggle_scientific_mode();
        app.open_palette(PaletteKind::Memory);
        app.palette_move_up();
        assert_eq!(app.palette_index(), 0);
        for _ in 0..20 {
            app.palette_move_down();
        }
        assert_eq!(app.palette_index(), MemoryOp::all().len() - 1);
    }

    #[test]
    fn palette_set_index_rejects_out_of_range() {
        let mut app = App::new(Theme::Dark);
        app.toggle_scientific_mode();
        app.open_palette(PaletteKind::Memory);
        app.palette_move_down();
        assert!(!app.palette_set_index(MemoryOp::all().len()));
        // The highlight is untouched and the palette stays open.
        assert_eq!(app.palette_index(), 1);
        assert_eq!(app.input_mode(), InputMode::Palette(PaletteKind::Memory));
    }

    #[test]
    fn palette_cancel_applies_nothing() {
        let mut app = App::new(Theme::Dark);
        app.toggle_scientific_mode();
        app.press_digit(9);
        app.open_palette(PaletteKind::Function);
        app.palette_cancel();
        assert_eq!(app.display(), "9");
        assert_eq!(app.input_mode(), InputMode::Keypad);
    }

    #[test]
    fn angle_unit_toggle_gated_by_scientific_mode() {
        let mut app = App::new(Theme::Dark);
        app.toggle_angle_unit();
        assert_eq!(app.angle_unit(), AngleUnit::Radian);
        app.toggle_scientific_mode();
        app.toggle_angle_unit();
        assert_eq!(app.angle_unit(), AngleUnit::Degree);
    }

    #[test]
    fn memory_palette_round_trip() {
        let mut app = App::new(Theme::Dark);
        app.toggle_scientific_mode();
        app.press_digit(4);
        app.press_digit(2);
        app.apply_memory(MemoryOp::Store);
        app.apply_memory(MemoryOp::Clear);
        app.apply_memory(MemoryOp::Recall);
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn clear_history_empties_tape_only() {
        let mut app = App::new(Theme::Dark);
        app.press_digit(2);
        app.press_operator(OperatorKind::Add);
        app.press_digit(2);
        app.press_equals();
        assert_eq!(app.tape().len(), 1);
        app.clear_history();
        assert!(app.tape().is_empty());
        assert_eq!(app.display(), "4");
    }
}
