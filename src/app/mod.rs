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

mod events;
mod input;
mod state;

pub use events::handle_terminal_event;
pub use input::InputState;
pub use state::{App, ChipList};

use crate::Cli;
use crate::error::AppError;
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use ratatui::layout::Size;

pub fn create_app(cli: &Cli) -> anyhow::Result<App> {
    let labels = crate::config::resolve_labels(cli)?;
    let catalog = crate::config::build_catalog(cli)?;
    let (width, height) = crossterm::terminal::size()
        .map_err(|e| anyhow::Error::new(AppError::TerminalUnavailable).context(e.to_string()))?;
    tracing::info!(labels = labels.len(), locale = catalog.locale(), width, height, "app created");
    Ok(App::new(labels, catalog, Size::new(width, height), cli.max_height))
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Enable bracketed paste (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableBracketedPaste);

    let mut events = EventStream::new();

    loop {
        // Phase 1: layout for the labels the template just rendered, then draw
        app.run_pending_triggers();
        terminal.draw(|f| crate::ui::render(f, app))?;

        // Phase 2: wait for a terminal event or a layout trigger
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                handle_terminal_event(app, event);
            }
            Some(trigger) = app.chip_list.next_trigger() => {
                app.run_trigger(trigger);
            }
            else => {
                app.should_quit = true;
            }
        }

        // Phase 3: drain remaining terminal events (non-blocking)
        while let Some(Some(Ok(event))) = events.next().now_or_never() {
            handle_terminal_event(app, event);
        }

        if app.should_quit {
            break;
        }
    }

    app.chip_list.teardown();

    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableBracketedPaste);
    ratatui::restore();

    Ok(())
}
