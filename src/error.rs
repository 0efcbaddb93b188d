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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Chip labels could not be loaded")]
    LabelsUnreadable,
    #[error("Translation catalog could not be loaded")]
    CatalogUnreadable,
    #[error("Terminal is not available")]
    TerminalUnavailable,
}

impl AppError {
    pub const LABELS_UNREADABLE_EXIT_CODE: i32 = 20;
    pub const CATALOG_UNREADABLE_EXIT_CODE: i32 = 21;
    pub const TERMINAL_UNAVAILABLE_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LabelsUnreadable => Self::LABELS_UNREADABLE_EXIT_CODE,
            Self::CatalogUnreadable => Self::CATALOG_UNREADABLE_EXIT_CODE,
            Self::TerminalUnavailable => Self::TERMINAL_UNAVAILABLE_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::LabelsUnreadable => {
                "Could not read the labels file. It must be a JSON array of strings."
            }
            Self::CatalogUnreadable => {
                "Could not read the translation catalog. It must be a JSON object keyed by locale."
            }
            Self::TerminalUnavailable => "Could not query the terminal size. Run from a TTY.",
        }
    }
}
