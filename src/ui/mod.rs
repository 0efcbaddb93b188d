// ellipsis_chips — A terminal chip row with "+N more" overflow collapsing
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod chips;
mod header;
mod input;
mod layout;
pub mod theme;

pub use chips::ChipRow;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

/// Horizontal inset of the chip row, per side.
const CHIP_ROW_PAD: u16 = 1;

const FOOTER_PAD: u16 = 2;

/// Width the chip container lays out against for a terminal `width` columns wide.
pub fn chip_content_width(width: u16) -> u16 {
    width.saturating_sub(CHIP_ROW_PAD * 2)
}

pub fn render(frame: &mut Frame, app: &App) {
    let frame_area = frame.area();
    let chip_rows = app.chip_list.host().style().max_height.unwrap_or(1);
    let areas = layout::compute(frame_area, app.show_header, chip_rows);

    // Header bar (toggleable via Ctrl+H)
    if areas.header.height > 0 {
        header::render(frame, areas.header, app);
        render_separator(frame, areas.header_sep);
    }

    let chip_area = Rect {
        x: areas.chips.x + CHIP_ROW_PAD,
        width: chip_content_width(areas.chips.width),
        ..areas.chips
    };
    frame.render_widget(ChipRow::new(app.chip_list.host()), chip_area);
    render_separator(frame, areas.chips_sep);

    render_collapsed(frame, areas.body, app);

    render_separator(frame, areas.input_sep);
    input::render(frame, areas.input, app);

    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area, app);
    }
}

/// List the labels currently collapsed into the indicator.
fn render_collapsed(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    if app.chip_list.last_outcome().is_none() {
        return;
    }
    let collapsed: Vec<&String> = app
        .chip_list
        .host()
        .chips()
        .iter()
        .zip(app.labels())
        .filter(|(chip, _)| !chip.display.is_visible())
        .map(|(_, label)| label)
        .collect();
    if collapsed.is_empty() {
        return;
    }

    let mut spans = vec![Span::styled("Collapsed: ", Style::default().fg(theme::DIM))];
    for (idx, label) in collapsed.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(", ", Style::default().fg(theme::DIM)));
        }
        spans.push(Span::styled(label.as_str(), Style::default().fg(Color::White)));
    }

    let padded = Rect {
        x: area.x + FOOTER_PAD,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }), padded);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };

    let line = if let Some(err) = &app.layout_error {
        Line::from(Span::styled(format!("Layout error: {err}"), Style::default().fg(theme::STATUS_ERROR)))
    } else {
        let key = Style::default().fg(Color::White);
        let dim = Style::default().fg(theme::DIM);
        Line::from(vec![
            Span::styled("Enter", key),
            Span::styled(" add  ", dim),
            Span::styled("Bksp", key),
            Span::styled(" remove  ", dim),
            Span::styled("^R", key),
            Span::styled(" reverse  ", dim),
            Span::styled("^L", key),
            Span::styled(" clear  ", dim),
            Span::styled("^H", key),
            Span::styled(" header  ", dim),
            Span::styled("Esc", key),
            Span::styled(" quit", dim),
        ])
    };
    frame.render_widget(Paragraph::new(line), padded);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(area.width as usize);
    let line = Line::from(Span::styled(sep_str, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}
