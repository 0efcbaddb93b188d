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

//! Resolve the startup labels and translation catalog from the command line.

use crate::Cli;
use crate::error::AppError;
use crate::i18n::Catalog;
use std::path::Path;

/// Shown when no labels are passed on the command line.
pub const DEMO_LABELS: &[&str] = &[
    "temperature",
    "humidity",
    "pressure",
    "battery-level",
    "signal-strength",
    "firmware-version",
    "uptime",
    "door-open",
];

pub fn resolve_labels(cli: &Cli) -> anyhow::Result<Vec<String>> {
    if let Some(path) = cli.labels_file.as_deref() {
        return read_labels_file(path);
    }
    if cli.labels.is_empty() {
        return Ok(DEMO_LABELS.iter().map(|label| (*label).to_owned()).collect());
    }
    Ok(cli.labels.clone())
}

pub fn read_labels_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let labels_error =
        |detail: String| anyhow::Error::new(AppError::LabelsUnreadable).context(detail);

    let json = std::fs::read_to_string(path)
        .map_err(|e| labels_error(format!("failed to read {}: {e}", path.display())))?;
    let labels: Vec<String> = serde_json::from_str(&json)
        .map_err(|e| labels_error(format!("invalid labels in {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), count = labels.len(), "labels loaded");
    Ok(labels)
}

pub fn build_catalog(cli: &Cli) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::builtin().with_locale(cli.locale.clone());
    if let Some(path) = cli.catalog.as_deref() {
        catalog.load_file(path).map_err(|e| {
            anyhow::Error::new(AppError::CatalogUnreadable).context(e.to_string())
        })?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{ELLIPSIS_TEXT_KEY, LabelLookup as _};
    use clap::Parser as _;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    fn app_error(err: &anyhow::Error) -> Option<AppError> {
        err.chain().find_map(|cause| cause.downcast_ref::<AppError>().cloned())
    }

    fn json_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn positional_labels_keep_order() {
        let cli = Cli::parse_from(["chips-rs", "b", "a", "c"]);
        assert_eq!(resolve_labels(&cli).unwrap(), vec!["b", "a", "c"]);
    }

    #[test]
    fn no_labels_uses_demo_set() {
        let cli = Cli::parse_from(["chips-rs"]);
        assert_eq!(resolve_labels(&cli).unwrap().len(), DEMO_LABELS.len());
    }

    #[test]
    fn labels_file_is_read() {
        let file = json_file(r#"["x", "y"]"#);
        let cli = Cli::parse_from(["chips-rs", "--labels-file", file.path().to_str().unwrap()]);
        assert_eq!(resolve_labels(&cli).unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn bad_labels_file_maps_to_app_error() {
        let file = json_file(r#"{"not": "a list"}"#);
        let err = read_labels_file(file.path()).unwrap_err();
        assert_eq!(app_error(&err), Some(AppError::LabelsUnreadable));
    }

    #[test]
    fn labels_file_conflicts_with_positional() {
        let parsed = Cli::try_parse_from(["chips-rs", "a", "--labels-file", "x.json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn catalog_uses_requested_locale() {
        let file = json_file(r#"{"de": {"ellipsis-chips-text": "+{count} weitere"}}"#);
        let cli = Cli::parse_from([
            "chips-rs",
            "--locale",
            "de",
            "--catalog",
            file.path().to_str().unwrap(),
        ]);
        let catalog = build_catalog(&cli).unwrap();
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 2), "+2 weitere");
    }

    #[test]
    fn unreadable_catalog_maps_to_app_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let cli = Cli::parse_from(["chips-rs", "--catalog", missing.to_str().unwrap()]);
        let err = build_catalog(&cli).unwrap_err();
        assert_eq!(app_error(&err), Some(AppError::CatalogUnreadable));
    }

    #[test]
    fn max_height_defaults_to_one_row() {
        let cli = Cli::parse_from(["chips-rs"]);
        assert_eq!(cli.max_height, 1);
        assert_eq!(cli.locale, "en");
    }
}
