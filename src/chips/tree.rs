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

use super::host::{ChipHost, ContainerStyle, Display};
use unicode_width::UnicodeWidthStr;

/// Cells of padding on each side of a chip label.
pub const CHIP_PADDING: u16 = 1;

/// Gap left of every chip and of the indicator.
pub const CHIP_GAP: u16 = 1;

/// Handle into a [`ChipTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Chip(usize),
    Indicator,
    EllipsisText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipNode {
    pub label: String,
    pub display: Display,
    pub margin_left: u16,
}

impl ChipNode {
    fn new(label: &str) -> Self {
        Self { label: label.to_owned(), display: Display::InlineFlex, margin_left: CHIP_GAP }
    }

    pub fn rendered_width(&self) -> u16 {
        if self.display.is_visible() { padded_width(&self.label) } else { 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorNode {
    pub display: Display,
    pub margin_left: u16,
    /// Content of the nested text element; `None` when the template left it out.
    pub text: Option<String>,
}

impl IndicatorNode {
    pub fn rendered_width(&self) -> u16 {
        match (&self.text, self.display) {
            (Some(text), Display::InlineFlex) => padded_width(text),
            (None, Display::InlineFlex) => CHIP_PADDING * 2,
            (_, Display::None) => 0,
        }
    }
}

/// In-memory chip container rendered by the terminal UI.
///
/// Chips are re-created by [`ChipTree::sync_labels`] whenever the label list
/// changes, the same way a template re-renders its child elements. The
/// indicator starts hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipTree {
    chips: Vec<ChipNode>,
    indicator: Option<IndicatorNode>,
    content_width: u16,
    style: ContainerStyle,
}

impl ChipTree {
    pub fn new(content_width: u16) -> Self {
        Self {
            chips: Vec::new(),
            indicator: Some(IndicatorNode {
                display: Display::None,
                margin_left: CHIP_GAP,
                text: Some(String::new()),
            }),
            content_width,
            style: ContainerStyle::default(),
        }
    }

    /// A container whose template forgot the indicator element.
    pub fn without_indicator(content_width: u16) -> Self {
        Self { indicator: None, ..Self::new(content_width) }
    }

    /// A container whose indicator has no nested text element.
    pub fn without_ellipsis_text(content_width: u16) -> Self {
        let mut tree = Self::new(content_width);
        if let Some(indicator) = tree.indicator.as_mut() {
            indicator.text = None;
        }
        tree
    }

    /// Re-render one chip node per label, all initially displayed.
    pub fn sync_labels(&mut self, labels: &[String]) {
        self.chips = labels.iter().map(|label| ChipNode::new(label)).collect();
    }

    pub fn set_content_width(&mut self, width: u16) {
        self.content_width = width;
    }

    pub fn chips(&self) -> &[ChipNode] {
        &self.chips
    }

    pub fn visible_chips(&self) -> impl Iterator<Item = &ChipNode> {
        self.chips.iter().filter(|chip| chip.display.is_visible())
    }

    pub fn indicator(&self) -> Option<&IndicatorNode> {
        self.indicator.as_ref()
    }

    pub fn indicator_visible(&self) -> bool {
        self.indicator.as_ref().is_some_and(|i| i.display.is_visible())
    }

    pub fn indicator_text(&self) -> Option<&str> {
        self.indicator.as_ref().and_then(|i| i.text.as_deref())
    }

    pub fn style(&self) -> ContainerStyle {
        self.style
    }
}

impl ChipHost for ChipTree {
    type Node = NodeRef;

    fn query_indicator(&self) -> Option<NodeRef> {
        self.indicator.as_ref().map(|_| NodeRef::Indicator)
    }

    fn query_ellipsis_text(&self) -> Option<NodeRef> {
        self.indicator.as_ref().and_then(|i| i.text.as_ref()).map(|_| NodeRef::EllipsisText)
    }

    fn query_chips(&self) -> Vec<NodeRef> {
        (0..self.chips.len()).map(NodeRef::Chip).collect()
    }

    fn content_width(&self) -> u16 {
        self.content_width
    }

    fn offset_width(&self, node: NodeRef) -> u16 {
        match node {
            NodeRef::Chip(idx) => self.chips.get(idx).map_or(0, ChipNode::rendered_width),
            NodeRef::Indicator => self.indicator.as_ref().map_or(0, IndicatorNode::rendered_width),
            NodeRef::EllipsisText => match &self.indicator {
                Some(IndicatorNode { display: Display::InlineFlex, text: Some(text), .. }) => {
                    text_width(text)
                }
                _ => 0,
            },
        }
    }

    fn margin_left(&self, node: NodeRef) -> u16 {
        match node {
            NodeRef::Chip(idx) => self.chips.get(idx).map_or(0, |chip| chip.margin_left),
            NodeRef::Indicator => self.indicator.as_ref().map_or(0, |i| i.margin_left),
            NodeRef::EllipsisText => 0,
        }
    }

    fn set_display(&mut self, node: NodeRef, display: Display) {
        match node {
            NodeRef::Chip(idx) => {
                if let Some(chip) = self.chips.get_mut(idx) {
                    chip.display = display;
                }
            }
            NodeRef::Indicator => {
                if let Some(indicator) = self.indicator.as_mut() {
                    indicator.display = display;
                }
            }
            // The text element is always displayed inside its indicator.
            NodeRef::EllipsisText => {}
        }
    }

    fn set_text(&mut self, node: NodeRef, text: &str) {
        match node {
            NodeRef::Chip(idx) => {
                if let Some(chip) = self.chips.get_mut(idx) {
                    text.clone_into(&mut chip.label);
                }
            }
            NodeRef::EllipsisText => {
                if let Some(slot) = self.indicator.as_mut().and_then(|i| i.text.as_mut()) {
                    text.clone_into(slot);
                }
            }
            NodeRef::Indicator => {}
        }
    }

    fn apply_container_style(&mut self, style: ContainerStyle) {
        self.style = style;
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

fn padded_width(text: &str) -> u16 {
    text_width(text).saturating_add(CHIP_PADDING * 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn new_tree_has_hidden_indicator() {
        let tree = ChipTree::new(40);
        assert!(!tree.indicator_visible());
        assert_eq!(tree.offset_width(NodeRef::Indicator), 0);
        assert_eq!(tree.indicator_text(), Some(""));
    }

    #[test]
    fn sync_labels_renders_visible_chips() {
        let mut tree = ChipTree::new(40);
        tree.sync_labels(&labels(&["alpha", "beta"]));
        assert_eq!(tree.query_chips(), vec![NodeRef::Chip(0), NodeRef::Chip(1)]);
        assert_eq!(tree.visible_chips().count(), 2);
        assert_eq!(tree.offset_width(NodeRef::Chip(0)), 7);
        assert_eq!(tree.offset_width(NodeRef::Chip(1)), 6);
    }

    #[test]
    fn sync_labels_replaces_previous_nodes() {
        let mut tree = ChipTree::new(40);
        tree.sync_labels(&labels(&["a", "b", "c"]));
        tree.set_display(NodeRef::Chip(0), Display::None);
        tree.sync_labels(&labels(&["x"]));
        assert_eq!(tree.chips().len(), 1);
        assert_eq!(tree.chips()[0].display, Display::InlineFlex);
    }

    #[test]
    fn hidden_nodes_measure_zero() {
        let mut tree = ChipTree::new(40);
        tree.sync_labels(&labels(&["alpha"]));
        tree.set_display(NodeRef::Chip(0), Display::None);
        assert_eq!(tree.offset_width(NodeRef::Chip(0)), 0);
    }

    #[test]
    fn wide_characters_use_display_width() {
        let mut tree = ChipTree::new(40);
        tree.sync_labels(&labels(&["日本"]));
        assert_eq!(tree.offset_width(NodeRef::Chip(0)), 6);
    }

    #[test]
    fn indicator_width_follows_text() {
        let mut tree = ChipTree::new(40);
        tree.set_display(NodeRef::Indicator, Display::InlineFlex);
        tree.set_text(NodeRef::EllipsisText, "+3 more");
        assert_eq!(tree.offset_width(NodeRef::Indicator), 9);
        assert_eq!(tree.offset_width(NodeRef::EllipsisText), 7);
        assert_eq!(tree.margin_left(NodeRef::Indicator), CHIP_GAP);
    }

    #[test]
    fn missing_elements_are_not_queryable() {
        assert_eq!(ChipTree::without_indicator(10).query_indicator(), None);
        assert_eq!(ChipTree::without_indicator(10).query_ellipsis_text(), None);
        let tree = ChipTree::without_ellipsis_text(10);
        assert_eq!(tree.query_indicator(), Some(NodeRef::Indicator));
        assert_eq!(tree.query_ellipsis_text(), None);
    }

    #[test]
    fn out_of_range_chip_is_ignored() {
        let mut tree = ChipTree::new(10);
        tree.set_display(NodeRef::Chip(3), Display::None);
        assert_eq!(tree.offset_width(NodeRef::Chip(3)), 0);
        assert_eq!(tree.margin_left(NodeRef::Chip(3)), 0);
    }
}
