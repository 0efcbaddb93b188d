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

use super::host::{ChipHost, ContainerStyle, MAX_HEIGHT};
use super::layout::{LayoutError, LayoutOutcome, adjust_chips};
use super::viewport::Viewport;
use crate::i18n::LabelLookup;
use ratatui::layout::Size;
use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;

/// Why a layout pass was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The label list changed; chip nodes exist by the time this is observed.
    ChipsChanged,
    Resize,
}

/// Keeps a chip row's visible prefix and "+N more" indicator in sync with
/// the label list and the viewport width.
///
/// Label changes are not laid out immediately: [`set_chips`] queues a
/// [`Trigger::ChipsChanged`] that is only handed out by [`next_trigger`] on a
/// later turn of the event loop, after the chip nodes for the new list have
/// been rendered. Resize events from the [`Viewport`] are handed out the same
/// way. Every trigger gets its own full pass; nothing is coalesced.
///
/// [`set_chips`]: EllipsisChipList::set_chips
/// [`next_trigger`]: EllipsisChipList::next_trigger
pub struct EllipsisChipList<H, L> {
    host: H,
    lookup: L,
    chips: Option<Vec<String>>,
    deferred_tx: mpsc::UnboundedSender<Trigger>,
    deferred_rx: mpsc::UnboundedReceiver<Trigger>,
    resize_rx: Option<broadcast::Receiver<Size>>,
    destroy: CancellationToken,
    last_outcome: Option<LayoutOutcome>,
}

impl<H: ChipHost, L: LabelLookup> EllipsisChipList<H, L> {
    pub fn attach(host: H, lookup: L, viewport: &Viewport) -> Self {
        Self::attach_with_max_height(host, lookup, viewport, MAX_HEIGHT)
    }

    pub fn attach_with_max_height(
        mut host: H,
        lookup: L,
        viewport: &Viewport,
        max_height: u16,
    ) -> Self {
        host.apply_container_style(ContainerStyle::bounded(max_height));
        let (deferred_tx, deferred_rx) = mpsc::unbounded_channel();
        tracing::info!(max_height, "chip list attached");
        Self {
            host,
            lookup,
            chips: None,
            deferred_tx,
            deferred_rx,
            resize_rx: Some(viewport.subscribe()),
            destroy: CancellationToken::new(),
            last_outcome: None,
        }
    }

    /// Replace the label list. Returns `false` and schedules nothing when
    /// `chips` equals the current list.
    pub fn set_chips(&mut self, chips: Vec<String>) -> bool {
        if self.chips.as_ref() == Some(&chips) {
            return false;
        }
        tracing::debug!(count = chips.len(), "chip labels changed");
        self.chips = Some(chips);
        if self.deferred_tx.send(Trigger::ChipsChanged).is_err() {
            tracing::warn!("deferred layout queue closed");
        }
        true
    }

    /// Current labels; empty until the first assignment.
    pub fn chips(&self) -> &[String] {
        self.chips.as_deref().unwrap_or_default()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn last_outcome(&self) -> Option<LayoutOutcome> {
        self.last_outcome
    }

    /// Wait for the next trigger. Resolves to `None` once torn down.
    pub async fn next_trigger(&mut self) -> Option<Trigger> {
        tokio::select! {
            biased;
            () = self.destroy.cancelled() => None,
            Some(trigger) = self.deferred_rx.recv() => Some(trigger),
            resized = recv_resize(&mut self.resize_rx) => resized,
        }
    }

    /// Non-blocking variant of [`next_trigger`](Self::next_trigger).
    pub fn try_next_trigger(&mut self) -> Option<Trigger> {
        if self.is_torn_down() {
            return None;
        }
        if let Ok(trigger) = self.deferred_rx.try_recv() {
            return Some(trigger);
        }
        let received = self.resize_rx.as_mut()?.try_recv();
        match received {
            Ok(_) => Some(Trigger::Resize),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "resize events lagged");
                Some(Trigger::Resize)
            }
            Err(broadcast::error::TryRecvError::Closed) => {
                self.resize_rx = None;
                None
            }
            Err(broadcast::error::TryRecvError::Empty) => None,
        }
    }

    /// Run the layout pass for `trigger`. Does nothing after teardown.
    pub fn dispatch(&mut self, trigger: Trigger) -> Result<Option<LayoutOutcome>, LayoutError> {
        if self.is_torn_down() {
            tracing::trace!(?trigger, "trigger after teardown ignored");
            return Ok(None);
        }
        self.adjust_chips().map(Some)
    }

    /// Dispatch every trigger that is already queued, handing each result to
    /// `on_pass`. Returns how many ran.
    pub fn drain<F>(&mut self, mut on_pass: F) -> usize
    where
        F: FnMut(Trigger, Result<Option<LayoutOutcome>, LayoutError>),
    {
        let mut ran = 0;
        while let Some(trigger) = self.try_next_trigger() {
            on_pass(trigger, self.dispatch(trigger));
            ran += 1;
        }
        ran
    }

    fn adjust_chips(&mut self) -> Result<LayoutOutcome, LayoutError> {
        let labels = self.chips.as_deref().unwrap_or_default();
        let outcome = adjust_chips(&mut self.host, labels, &self.lookup)?;
        tracing::debug!(
            visible = outcome.visible,
            hidden = outcome.hidden,
            available = outcome.available_width,
            used = outcome.used_width,
            "chips adjusted"
        );
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

}

impl<H, L> EllipsisChipList<H, L> {
    pub fn is_torn_down(&self) -> bool {
        self.destroy.is_cancelled()
    }

    /// Stop listening for resize events. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.destroy.is_cancelled() {
            return;
        }
        self.destroy.cancel();
        self.resize_rx = None;
        tracing::info!("chip list torn down");
    }
}

impl<H, L> Drop for EllipsisChipList<H, L> {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn recv_resize(rx: &mut Option<broadcast::Receiver<Size>>) -> Option<Trigger> {
    loop {
        let Some(receiver) = rx.as_mut() else {
            return std::future::pending().await;
        };
        let received = receiver.recv().await;
        match received {
            Ok(_) => return Some(Trigger::Resize),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "resize events lagged");
                return Some(Trigger::Resize);
            }
            Err(broadcast::error::RecvError::Closed) => *rx = None,
        }
    }
}
