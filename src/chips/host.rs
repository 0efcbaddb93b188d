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

//! The surface the layout pass reads from and writes to.
//!
//! A [`ChipHost`] is the container that owns the chip nodes. The layout code
//! never touches a concrete tree directly: it queries nodes, measures them and
//! toggles their display through this trait, so tests can substitute a host
//! with fixed geometry.

use std::fmt::Debug;

/// Default maximum height of the chip container, in rows.
pub const MAX_HEIGHT: u16 = 1;

/// Display mode of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    InlineFlex,
    None,
}

impl Display {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::InlineFlex)
    }
}

/// What happens to content taller than the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    /// Clip and scroll when needed.
    Auto,
}

/// Inline style of the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerStyle {
    pub max_height: Option<u16>,
    pub overflow: Overflow,
}

impl ContainerStyle {
    /// Fixed max height with scrollable overflow, so overflowing chips never
    /// push the surrounding layout around.
    pub fn bounded(max_height: u16) -> Self {
        Self { max_height: Some(max_height), overflow: Overflow::Auto }
    }
}

/// Node queries, geometry and style mutation for a chip container.
pub trait ChipHost {
    /// Handle to a node inside the host.
    type Node: Copy + Debug;

    /// The "+N more" indicator element, if the host rendered one.
    fn query_indicator(&self) -> Option<Self::Node>;

    /// The text element inside the indicator.
    fn query_ellipsis_text(&self) -> Option<Self::Node>;

    /// All chip elements in render order, excluding the indicator.
    fn query_chips(&self) -> Vec<Self::Node>;

    /// Inner width of the container.
    fn content_width(&self) -> u16;

    /// Rendered width of a node. Hidden nodes measure zero.
    fn offset_width(&self, node: Self::Node) -> u16;

    /// Computed left margin of a node.
    fn margin_left(&self, node: Self::Node) -> u16;

    fn set_display(&mut self, node: Self::Node, display: Display);

    fn set_text(&mut self, node: Self::Node, text: &str);

    fn apply_container_style(&mut self, style: ContainerStyle);
}
