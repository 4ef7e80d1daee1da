//! Key handling for the Tally TUI.
//!
//! Maps crossterm key events onto `App` methods per input mode. The core
//! bindings follow the widget's keyboard contract (digits, `.`, `+ - * /`,
//! `Enter`/`=`, `Esc`/`c`, `Backspace`); session toggles and the palettes
//! use single letters shown in the status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use tally_engine::{App, InputMode, OperatorKind, PaletteKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Handle press + repeat events (ignore releases).
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }

    match app.input_mode() {
        InputMode::Keypad => handle_keypad(app, key),
        InputMode::Palette(_) => handle_palette(app, key),
    }
}

fn handle_keypad(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.press_digit(c as u8 - b'0');
        }
        KeyCode::Char('.') => app.press_decimal(),
        KeyCode::Char('+') => app.press_operator(OperatorKind::Add),
        KeyCode::Char('-') => app.press_operator(OperatorKind::Subtract),
        KeyCode::Char('*') => app.press_operator(OperatorKind::Multiply),
        KeyCode::Char('/') => app.press_operator(OperatorKind::Divide),
        KeyCode::Char('^') => app.press_operator(OperatorKind::Power),
        KeyCode::Char('%') => app.press_operator(OperatorKind::Modulo),
        KeyCode::Enter | KeyCode::Char('=') => app.press_equals(),
        KeyCode::Esc | KeyCode::Char('c' | 'C') => app.press_clear(),
        KeyCode::Backspace => app.press_backspace(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('a') => app.toggle_sound(),
        KeyCode::Char('s') => app.toggle_scientific_mode(),
        KeyCode::Char('h') => app.toggle_history_panel(),
        KeyCode::Char('H') => app.clear_history(),
        // Gated inside App: no-ops outside scientific mode.
        KeyCode::Char('r') => app.toggle_angle_unit(),
        KeyCode::Char('f') => app.open_palette(PaletteKind::Function),
        KeyCode::Char('m') => app.open_palette(PaletteKind::Memory),
        _ => {}
    }
}

fn handle_palette(app: &mut App, key: KeyEvent) {
    match key.code {
        // Cancel and return to the keypad
        KeyCode::Esc => app.palette_cancel(),
        KeyCode::Enter => app.palette_confirm(),
        KeyCode::Up | KeyCode::Char('k') => app.palette_move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.palette_move_down(),
        // Direct selection with number keys: 1-9 then 0 for the tenth entry.
        // A digit past the end of the palette selects nothing and must not
        // confirm the highlighted entry.
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c as usize - '0' as usize;
            let index = if digit == 0 { 9 } else { digit - 1 };
            if app.palette_set_index(index) {
                app.palette_confirm();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tally_engine::{AngleUnit, Theme};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for &code in codes {
            handle_key(app, key(code));
        }
    }

    #[test]
    fn typing_a_sum() {
        let mut app = App::new(Theme::Dark);
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Char('+'),
                KeyCode::Char('3'),
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.display(), "15");
    }

    #[test]
    fn star_and_slash_map_to_multiply_and_divide() {
        let mut app = App::new(Theme::Dark);
        press(
            &mut app,
            &[
                KeyCode::Char('8'),
                KeyCode::Char('*'),
                KeyCode::Char('4'),
                KeyCode::Char('/'),
                KeyCode::Char('2'),
                KeyCode::Char('='),
            ],
        );
        assert_eq!(app.display(), "16");
    }

    #[test]
    fn escape_and_c_clear() {
        let mut app = App::new(Theme::Dark);
        press(&mut app, &[KeyCode::Char('7'), KeyCode::Esc]);
        assert_eq!(app.display(), "0");
        press(&mut app, &[KeyCode::Char('7'), KeyCode::Char('c')]);
        assert_eq!(app.display(), "0");
        press(&mut app, &[KeyCode::Char('7'), KeyCode::Char('C')]);
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn backspace_key() {
        let mut app = App::new(Theme::Dark);
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Backspace],
        );
        assert_eq!(app.display(), "1");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(Theme::Dark);
        let mut release = key(KeyCode::Char('5'));
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn q_requests_quit() {
        let mut app = App::new(Theme::Dark);
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }

    #[test]
    fn palette_flow_via_keys() {
        let mut app = App::new(Theme::Dark);
        press(&mut app, &[KeyCode::Char('s'), KeyCode::Char('9')]);
        // 'f' opens the function palette; entry 6 is √.
        press(&mut app, &[KeyCode::Char('f'), KeyCode::Char('6')]);
        assert_eq!(app.display(), "3");
        assert_eq!(app.input_mode(), InputMode::Keypad);
    }

    #[test]
    fn out_of_range_digit_in_palette_applies_nothing() {
        let mut app = App::new(Theme::Dark);
        press(
            &mut app,
            &[
                KeyCode::Char('s'),
                KeyCode::Char('4'),
                KeyCode::Char('2'),
            ],
        );
        // Store 42 via the palette (5 = MS), then reopen it and press a
        // digit past its 5 entries: the highlighted MC must not fire and
        // wipe the register, and the palette stays open.
        press(&mut app, &[KeyCode::Char('m'), KeyCode::Char('5')]);
        assert_eq!(app.memory(), 42.0);
        press(&mut app, &[KeyCode::Char('m'), KeyCode::Char('9')]);
        assert_eq!(app.memory(), 42.0);
        assert_eq!(app.input_mode(), InputMode::Palette(PaletteKind::Memory));
    }

    #[test]
    fn caret_and_percent_map_to_power_and_modulo() {
        let mut app = App::new(Theme::Dark);
        press(
            &mut app,
            &[
                KeyCode::Char('2'),
                KeyCode::Char('^'),
                KeyCode::Char('1'),
                KeyCode::Char('0'),
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.display(), "1024");
        press(
            &mut app,
            &[
                KeyCode::Char('%'),
                KeyCode::Char('1'),
                KeyCode::Char('0'),
                KeyCode::Char('0'),
                KeyCode::Char('='),
            ],
        );
        assert_eq!(app.display(), "24");
    }

    #[test]
    fn r_toggles_angle_unit_only_in_scientific_mode() {
        let mut app = App::new(Theme::Dark);
        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.angle_unit(), AngleUnit::Radian);
        press(&mut app, &[KeyCode::Char('s'), KeyCode::Char('r')]);
        assert_eq!(app.angle_unit(), AngleUnit::Degree);
        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.angle_unit(), AngleUnit::Radian);
    }

    #[test]
    fn esc_in_palette_cancels_without_clearing() {
        let mut app = App::new(Theme::Dark);
        press(&mut app, &[KeyCode::Char('s'), KeyCode::Char('9')]);
        press(&mut app, &[KeyCode::Char('f'), KeyCode::Esc]);
        assert_eq!(app.display(), "9");
    }

    #[test]
    fn palette_keys_gated_outside_scientific_mode() {
        let mut app = App::new(Theme::Dark);
        press(&mut app, &[KeyCode::Char('f')]);
        assert_eq!(app.input_mode(), InputMode::Keypad);
        press(&mut app, &[KeyCode::Char('m')]);
        assert_eq!(app.input_mode(), InputMode::Keypad);
    }

    #[test]
    fn theme_and_sound_toggles() {
        let mut app = App::new(Theme::Dark);
        press(&mut app, &[KeyCode::Char('t')]);
        assert_eq!(app.theme(), Theme::Light);
        press(&mut app, &[KeyCode::Char('a')]);
        assert!(!app.sound_enabled());
    }

    #[test]
    fn history_clear_key() {
        let mut app = App::new(Theme::Dark);
        press(
            &mut app,
            &[
                KeyCode::Char('2'),
                KeyCode::Char('+'),
                KeyCode::Char('2'),
                KeyCode::Enter,
                KeyCode::Char('H'),
            ],
        );
        assert!(app.tape().is_empty());
    }
}
