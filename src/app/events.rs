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

use super::App;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Size;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => app.input.insert_str(&text),
        Event::Resize(width, height) => app.handle_resize(Size::new(width, height)),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (KeyCode::Esc, _) => app.should_quit = true,
        (KeyCode::Char('r'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.reverse_labels();
        }
        (KeyCode::Char('h'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.show_header = !app.show_header;
        }
        (KeyCode::Char('l'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.clear_labels();
        }
        (KeyCode::Enter, _) => {
            if let Some(label) = app.input.take_label() {
                app.push_label(label);
            }
        }
        // Backspace on an empty prompt removes the last chip.
        (KeyCode::Backspace, _) if app.input.is_empty() => {
            app.pop_label();
        }
        (KeyCode::Backspace, _) => app.input.delete_char_before(),
        (KeyCode::Delete, _) => app.input.delete_char_after(),
        (KeyCode::Left, _) => app.input.move_left(),
        (KeyCode::Right, _) => app.input.move_right(),
        (KeyCode::Home, _) => app.input.move_home(),
        (KeyCode::End, _) => app.input.move_end(),
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => app.input.insert_char(c),
        _ => {}
    }
}
