//! TUI rendering for Tally using ratatui.

mod input;
mod theme;

pub use input::handle_key;
pub use theme::{Palette, palette};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use tally_engine::{App, InputMode, MemoryOp, PaletteKind, ScientificFn, format_number};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = theme::palette(app.ui_options());

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let history_height = if app.show_history() {
        u16::try_from(app.tape().len().max(1)).unwrap_or(u16::MAX) + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),              // Header badges
            Constraint::Length(history_height), // History panel (optional)
            Constraint::Length(4),              // Display
            Constraint::Min(9),                 // Keypad
            Constraint::Length(1),              // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, &palette, chunks[0]);
    if app.show_history() {
        draw_history(frame, app, &palette, chunks[1]);
    }
    draw_display(frame, app, &palette, chunks[2]);
    draw_keypad(frame, app, &palette, chunks[3]);
    draw_status_bar(frame, app, &palette, chunks[4]);

    if let InputMode::Palette(kind) = app.input_mode() {
        draw_palette_popup(frame, app, &palette, kind, chunks[3]);
    }
}

fn draw_header(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "Tally",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    if app.scientific_mode() {
        spans.push(Span::styled("SCI", Style::default().fg(palette.function_key)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            app.angle_unit().badge(),
            Style::default().fg(palette.accent),
        ));
        spans.push(Span::raw(" "));
    }

    if app.sound_enabled() {
        spans.push(Span::styled("♪", Style::default().fg(palette.text_muted)));
    } else {
        spans.push(Span::styled("muted", Style::default().fg(palette.warning)));
    }

    if app.memory() != 0.0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("M: {}", format_number(app.memory())),
            Style::default().fg(palette.memory_key),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_history(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(" History ", Style::default().fg(palette.text_secondary)))
        .style(Style::default().bg(palette.bg_panel));

    let lines: Vec<Line> = if app.tape().is_empty() {
        vec![Line::from(Span::styled(
            "No calculations yet",
            Style::default().fg(palette.text_muted),
        ))]
    } else {
        app.tape()
            .iter_newest_first()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        entry.expression.clone(),
                        Style::default().fg(palette.text_secondary),
                    ),
                    Span::styled(" = ", Style::default().fg(palette.text_muted)),
                    Span::styled(
                        entry.result.clone(),
                        Style::default().fg(palette.text_primary),
                    ),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_display(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel));

    let inner_width = area.width.saturating_sub(3) as usize;

    let pending_line = match app.pending() {
        Some((left, op)) => Line::from(Span::styled(
            format!("{} {}", format_number(left), op.symbol()),
            Style::default().fg(palette.text_muted),
        )),
        None => Line::default(),
    };

    let display_line = Line::from(Span::styled(
        fit_right(app.display(), inner_width),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(
        Paragraph::new(vec![pending_line, display_line])
            .alignment(Alignment::Right)
            .block(block),
        area,
    );
}

fn draw_keypad(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.scientific_mode() {
        lines.push(keypad_row(
            &["sin", "cos", "tan", "log", "ln"],
            palette.function_key,
        ));
        lines.push(keypad_row(
            &["√", "x²", "^", "1/x", "n!"],
            palette.function_key,
        ));
        lines.push(keypad_row(&["π", "e", "|x|", "mod"], palette.function_key));
        lines.push(keypad_row(
            &["MC", "MR", "M+", "M-", "MS"],
            palette.memory_key,
        ));
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        cell("C", palette.clear_key),
        cell("⌫", palette.operator_key),
        cell("÷", palette.operator_key),
    ]));
    for row in [["7", "8", "9", "×"], ["4", "5", "6", "-"], ["1", "2", "3", "+"]] {
        let mut spans: Vec<Span> = row[..3]
            .iter()
            .map(|label| cell(label, palette.text_primary))
            .collect();
        spans.push(cell(row[3], palette.operator_key));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(vec![
        cell("0", palette.text_primary),
        cell(".", palette.text_primary),
        cell("=", palette.equals_key),
    ]));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn keypad_row(labels: &[&str], color: ratatui::style::Color) -> Line<'static> {
    Line::from(
        labels
            .iter()
            .map(|label| cell(label, color))
            .collect::<Vec<_>>(),
    )
}

fn cell(label: &str, color: ratatui::style::Color) -> Span<'static> {
    Span::styled(format!("{label:^5}"), Style::default().fg(color))
}

fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let help = match app.input_mode() {
        InputMode::Keypad => {
            if app.scientific_mode() {
                "q quit · t theme · a sound · s basic · r rad/deg · f functions · m memory · h history"
            } else {
                "q quit · t theme · a sound · s scientific · h history · H clear history"
            }
        }
        InputMode::Palette(_) => "↑/↓ select · Enter apply · 1-9,0 direct · Esc cancel",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(palette.text_muted))),
        area,
    );
}

fn draw_palette_popup(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    kind: PaletteKind,
    around: Rect,
) {
    let (title, labels): (&str, Vec<&'static str>) = match kind {
        PaletteKind::Function => (
            " Functions ",
            ScientificFn::all().iter().map(|f| f.label()).collect(),
        ),
        PaletteKind::Memory => (
            " Memory ",
            MemoryOp::all().iter().map(|m| m.label()).collect(),
        ),
    };

    let height = u16::try_from(labels.len()).unwrap_or(u16::MAX) + 2;
    let area = centered_rect(24, height, around);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .title(Span::styled(title, Style::default().fg(palette.text_primary)))
        .style(Style::default().bg(palette.bg_popup));

    let lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            // Direct-select hints: 1-9 for the first nine, 0 for the tenth.
            let hint = match i {
                0..=8 => format!("{} ", i + 1),
                9 => "0 ".to_string(),
                _ => "  ".to_string(),
            };
            let style = if i == app.palette_index() {
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_primary)
            };
            Line::from(vec![
                Span::styled(hint, Style::default().fg(palette.text_muted)),
                Span::styled((*label).to_string(), style),
            ])
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Center a fixed-size rect inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Fit text into `max_width` columns, keeping the rightmost characters.
///
/// The display grows to the right, so when it overflows the panel the least
/// significant digits are the ones worth keeping visible.
fn fit_right(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1); // room for the ellipsis
    let mut kept = 0usize;
    let mut width = 0usize;
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        kept += 1;
    }
    let tail: String = text.chars().skip(text.chars().count() - kept).collect();
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_right_passes_through_short_text() {
        assert_eq!(fit_right("12345", 10), "12345");
    }

    #[test]
    fn fit_right_keeps_least_significant_digits() {
        assert_eq!(fit_right("1234567890", 6), "…67890");
    }

    #[test]
    fn fit_right_handles_tiny_widths() {
        assert_eq!(fit_right("1234567890", 1), "…");
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = centered_rect(24, 14, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
