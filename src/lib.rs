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

pub mod app;
pub mod chips;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chips-rs", about = "Terminal chip row that collapses overflow into \"+N more\"")]
pub struct Cli {
    /// Chip labels, in display order (a demo set is used when none are given)
    pub labels: Vec<String>,

    /// Read labels from a JSON array of strings
    #[arg(long, value_name = "PATH", conflicts_with = "labels")]
    pub labels_file: Option<PathBuf>,

    /// Translation catalog (JSON) layered over the built-in English strings
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Locale for the "+N more" indicator text
    #[arg(long, default_value = i18n::DEFAULT_LOCALE)]
    pub locale: String,

    /// Maximum height of the chip container, in rows
    #[arg(long, value_name = "ROWS", default_value_t = chips::MAX_HEIGHT)]
    pub max_height: u16,

    /// Write tracing diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then `info`)
    #[arg(long, value_name = "FILTER", requires = "log_file")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long, requires = "log_file")]
    pub log_append: bool,
}
