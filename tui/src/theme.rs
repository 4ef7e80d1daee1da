//! Color themes for the Tally TUI.
//!
//! Two palettes, selected by the persisted theme flag: a dark default and a
//! light variant for bright terminals.

use ratatui::style::Color;

use tally_engine::{Theme, UiOptions};

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_popup: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub operator_key: Color,
    pub function_key: Color,
    pub memory_key: Color,
    pub equals_key: Color,
    pub clear_key: Color,
    pub warning: Color,
}

impl Palette {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            bg: Color::Rgb(24, 24, 32),
            bg_panel: Color::Rgb(34, 34, 44),
            bg_popup: Color::Rgb(48, 48, 62),
            border: Color::Rgb(90, 90, 114),
            text_primary: Color::Rgb(222, 218, 196),
            text_secondary: Color::Rgb(186, 180, 150),
            text_muted: Color::Rgb(120, 118, 110),
            accent: Color::Rgb(130, 170, 220),
            operator_key: Color::Rgb(255, 160, 102),
            function_key: Color::Rgb(152, 187, 108),
            memory_key: Color::Rgb(160, 135, 200),
            equals_key: Color::Rgb(126, 156, 216),
            clear_key: Color::Rgb(240, 100, 105),
            warning: Color::Rgb(230, 195, 132),
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            bg: Color::Rgb(246, 242, 230),
            bg_panel: Color::Rgb(236, 230, 214),
            bg_popup: Color::Rgb(226, 220, 204),
            border: Color::Rgb(160, 150, 130),
            text_primary: Color::Rgb(50, 48, 44),
            text_secondary: Color::Rgb(90, 86, 76),
            text_muted: Color::Rgb(140, 134, 120),
            accent: Color::Rgb(50, 100, 170),
            operator_key: Color::Rgb(190, 95, 20),
            function_key: Color::Rgb(70, 130, 50),
            memory_key: Color::Rgb(110, 70, 160),
            equals_key: Color::Rgb(40, 90, 170),
            clear_key: Color::Rgb(180, 50, 55),
            warning: Color::Rgb(150, 110, 30),
        }
    }
}

/// Select the palette for the current frame's options.
#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    match options.theme {
        Theme::Dark => Palette::dark(),
        Theme::Light => Palette::light(),
    }
}
