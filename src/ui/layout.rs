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

use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub header_sep: Rect,
    /// The chip container, clipped to its max height.
    pub chips: Rect,
    pub chips_sep: Rect,
    /// Lists the labels collapsed into the indicator.
    pub body: Rect,
    pub input_sep: Rect,
    pub input: Rect,
    pub footer: Option<Rect>,
}

pub fn compute(area: Rect, show_header: bool, chip_rows: u16) -> AppLayout {
    let chip_rows = chip_rows.max(1);
    let header_height = u16::from(show_header);
    let zero = Rect::new(area.x, area.y, area.width, 0);

    if area.height < 8 {
        // Ultra-compact: chips and input only
        let [chips, body, input] = Layout::vertical([
            Constraint::Length(chip_rows),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        AppLayout {
            header: zero,
            header_sep: zero,
            chips,
            chips_sep: Rect::new(area.x, chips.bottom(), area.width, 0),
            body,
            input_sep: Rect::new(area.x, input.y, area.width, 0),
            input,
            footer: None,
        }
    } else {
        let [header, header_sep, chips, chips_sep, body, input_sep, input, footer] =
            Layout::vertical([
                Constraint::Length(header_height),
                Constraint::Length(header_height),
                Constraint::Length(chip_rows),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);
        AppLayout { header, header_sep, chips, chips_sep, body, input_sep, input, footer: Some(footer) }
    }
}
