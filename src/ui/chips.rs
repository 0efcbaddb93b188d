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

use crate::chips::{CHIP_PADDING, ChipTree};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

/// Draws the displayed chips of a [`ChipTree`] left to right, followed by
/// the indicator when it is shown. Hidden nodes take no space.
pub struct ChipRow<'a> {
    tree: &'a ChipTree,
}

impl<'a> ChipRow<'a> {
    pub fn new(tree: &'a ChipTree) -> Self {
        Self { tree }
    }
}

impl Widget for ChipRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.tree.style().max_height.map_or(area.height, |max| area.height.min(max));
        if rows == 0 || area.width == 0 {
            return;
        }

        let chip_style = Style::default().fg(theme::CHIP_FG).bg(theme::CHIP_BG);
        let mut x = area.x;
        let right = area.right();

        for chip in self.tree.visible_chips() {
            x = x.saturating_add(chip.margin_left);
            x = draw_pill(buf, x, area.y, right, &chip.label, chip_style);
        }

        if let Some(indicator) = self.tree.indicator().filter(|i| i.display.is_visible()) {
            let style = Style::default()
                .fg(theme::INDICATOR_FG)
                .bg(theme::INDICATOR_BG)
                .add_modifier(Modifier::BOLD);
            x = x.saturating_add(indicator.margin_left);
            draw_pill(buf, x, area.y, right, indicator.text.as_deref().unwrap_or_default(), style);
        }
    }
}

/// Draw `label` with padding starting at `x`, clipped at `right`. Returns the
/// column after the pill.
fn draw_pill(buf: &mut Buffer, x: u16, y: u16, right: u16, label: &str, style: Style) -> u16 {
    if x >= right {
        return x;
    }
    let pad = " ".repeat(usize::from(CHIP_PADDING));
    let text = format!("{pad}{label}{pad}");
    let max_width = usize::from(right - x);
    let (end, _) = buf.set_stringn(x, y, &text, max_width, style);
    end
}
