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

use super::input::InputState;
use crate::chips::{ChipTree, EllipsisChipList, LayoutError, LayoutOutcome, Trigger, Viewport};
use crate::i18n::Catalog;
use ratatui::layout::Size;

pub type ChipList = EllipsisChipList<ChipTree, Catalog>;

pub struct App {
    pub chip_list: ChipList,
    pub viewport: Viewport,
    pub input: InputState,
    pub should_quit: bool,
    pub show_header: bool,
    /// Last layout failure, shown in the footer until the next good pass.
    pub layout_error: Option<String>,
}

impl App {
    pub fn new(labels: Vec<String>, catalog: Catalog, size: Size, max_height: u16) -> Self {
        let viewport = Viewport::new(size);
        let tree = ChipTree::new(crate::ui::chip_content_width(size.width));
        let chip_list = EllipsisChipList::attach_with_max_height(tree, catalog, &viewport, max_height);
        let mut app = Self {
            chip_list,
            viewport,
            input: InputState::new(),
            should_quit: false,
            show_header: true,
            layout_error: None,
        };
        app.set_labels(labels);
        app
    }

    /// Hand a new label list to the chip row and re-render its chip nodes.
    /// Layout follows on the next loop turn.
    pub fn set_labels(&mut self, labels: Vec<String>) -> bool {
        if !self.chip_list.set_chips(labels) {
            return false;
        }
        let current = self.chip_list.chips().to_vec();
        self.chip_list.host_mut().sync_labels(&current);
        true
    }

    pub fn labels(&self) -> &[String] {
        self.chip_list.chips()
    }

    pub fn push_label(&mut self, label: String) -> bool {
        let mut labels = self.labels().to_vec();
        labels.push(label);
        self.set_labels(labels)
    }

    pub fn pop_label(&mut self) -> bool {
        let mut labels = self.labels().to_vec();
        if labels.pop().is_none() {
            return false;
        }
        self.set_labels(labels)
    }

    pub fn reverse_labels(&mut self) -> bool {
        let mut labels = self.labels().to_vec();
        labels.reverse();
        self.set_labels(labels)
    }

    pub fn clear_labels(&mut self) -> bool {
        self.set_labels(Vec::new())
    }

    /// Reflow the chip container to the new terminal width, then announce
    /// the resize to everything subscribed to the viewport.
    pub fn handle_resize(&mut self, size: Size) {
        self.chip_list.host_mut().set_content_width(crate::ui::chip_content_width(size.width));
        self.viewport.notify_resize(size);
    }

    pub fn run_trigger(&mut self, trigger: Trigger) {
        let result = self.chip_list.dispatch(trigger);
        record_pass(&mut self.layout_error, trigger, result);
    }

    /// Run every layout trigger that is already queued.
    pub fn run_pending_triggers(&mut self) -> usize {
        let layout_error = &mut self.layout_error;
        self.chip_list.drain(|trigger, result| record_pass(layout_error, trigger, result))
    }

    /// Minimal `App` for tests: demo labels, 80x24, nothing laid out yet.
    #[doc(hidden)]
    pub fn test_default() -> Self {
        let labels = crate::config::DEMO_LABELS.iter().map(|l| (*l).to_owned()).collect();
        Self::new(labels, Catalog::builtin(), Size::new(80, 24), crate::chips::MAX_HEIGHT)
    }
}

/// Keep the footer error in step with the latest layout pass.
fn record_pass(
    layout_error: &mut Option<String>,
    trigger: Trigger,
    result: Result<Option<LayoutOutcome>, LayoutError>,
) {
    match result {
        Ok(_) => *layout_error = None,
        Err(err) => {
            tracing::warn!(?trigger, "chip layout failed: {err}");
            *layout_error = Some(err.to_string());
        }
    }
}
