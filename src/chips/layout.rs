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

use super::host::{ChipHost, Display};
use crate::i18n::{ELLIPSIS_TEXT_KEY, LabelLookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("chip container has no ellipsis indicator element")]
    MissingIndicator,
    #[error("ellipsis indicator has no text element")]
    MissingEllipsisText,
}

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOutcome {
    pub visible: usize,
    pub hidden: usize,
    /// Width budget for chips. Negative when the indicator alone overflows.
    pub available_width: i32,
    pub used_width: i32,
}

impl LayoutOutcome {
    pub fn indicator_visible(&self) -> bool {
        self.hidden > 0
    }
}

/// Decide which chips fit next to the indicator and update the host.
///
/// The indicator is shown with the full label count before measuring so its
/// width is reserved, then corrected to the hidden count (and hidden when
/// nothing overflowed). Each chip is checked on its own against the space
/// left, so a narrow chip after a wide hidden one can still be shown.
///
/// The indicator's left margin is applied to every chip as well.
pub fn adjust_chips<H, L>(
    host: &mut H,
    labels: &[String],
    lookup: &L,
) -> Result<LayoutOutcome, LayoutError>
where
    H: ChipHost + ?Sized,
    L: LabelLookup + ?Sized,
{
    let indicator = host.query_indicator().ok_or(LayoutError::MissingIndicator)?;
    let ellipsis_text = host.query_ellipsis_text().ok_or(LayoutError::MissingEllipsisText)?;
    let chip_nodes = host.query_chips();
    let total = labels.len();

    host.set_display(indicator, Display::InlineFlex);
    host.set_text(ellipsis_text, &lookup.instant(ELLIPSIS_TEXT_KEY, total));

    let margin = i32::from(host.margin_left(indicator));
    let available_width = i32::from(host.content_width())
        - (i32::from(host.offset_width(indicator)) + margin);
    let mut used_width = 0;
    let mut visible = 0;

    for chip in chip_nodes {
        host.set_display(chip, Display::InlineFlex);
        let width = i32::from(host.offset_width(chip)) + margin;
        // Also bounded by the label count in case the host rendered extra nodes.
        if used_width + width <= available_width && visible < total {
            visible += 1;
            used_width += width;
        } else {
            host.set_display(chip, Display::None);
        }
    }

    let hidden = total - visible;
    host.set_text(ellipsis_text, &lookup.instant(ELLIPSIS_TEXT_KEY, hidden));
    if visible == total {
        host.set_display(indicator, Display::None);
    }

    Ok(LayoutOutcome { visible, hidden, available_width, used_width })
}
