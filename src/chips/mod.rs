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

//! Chip row layout: show the chips that fit, collapse the rest behind a
//! "+N more" indicator.

mod controller;
mod host;
mod layout;
mod tree;
mod viewport;

pub use controller::{EllipsisChipList, Trigger};
pub use host::{ChipHost, ContainerStyle, Display, MAX_HEIGHT, Overflow};
pub use layout::{LayoutError, LayoutOutcome, adjust_chips};
pub use tree::{CHIP_GAP, CHIP_PADDING, ChipNode, ChipTree, IndicatorNode, NodeRef};
pub use viewport::Viewport;
