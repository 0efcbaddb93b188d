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

use ratatui::layout::Size;
use tokio::sync::broadcast;

/// Buffered resize events per subscriber before it starts lagging.
const RESIZE_CAPACITY: usize = 16;

/// The terminal window: current size plus a stream of resize events.
#[derive(Debug)]
pub struct Viewport {
    size: Size,
    tx: broadcast::Sender<Size>,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        let (tx, _) = broadcast::channel(RESIZE_CAPACITY);
        Self { size, tx }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Size> {
        self.tx.subscribe()
    }

    /// Record the new size and notify subscribers. Returns how many
    /// subscribers were notified.
    pub fn notify_resize(&mut self, size: Size) -> usize {
        self.size = size;
        let delivered = self.tx.send(size).unwrap_or(0);
        tracing::trace!(width = size.width, height = size.height, delivered, "viewport resized");
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resize_without_subscribers_updates_size() {
        let mut viewport = Viewport::new(Size::new(80, 24));
        assert_eq!(viewport.notify_resize(Size::new(100, 30)), 0);
        assert_eq!(viewport.size(), Size::new(100, 30));
    }

    #[test]
    fn subscribers_receive_each_resize() {
        let mut viewport = Viewport::new(Size::new(80, 24));
        let mut rx = viewport.subscribe();
        assert_eq!(viewport.subscriber_count(), 1);

        viewport.notify_resize(Size::new(60, 24));
        viewport.notify_resize(Size::new(40, 24));
        assert_eq!(rx.try_recv().unwrap(), Size::new(60, 24));
        assert_eq!(rx.try_recv().unwrap(), Size::new(40, 24));

        drop(rx);
        assert_eq!(viewport.subscriber_count(), 0);
    }
}
