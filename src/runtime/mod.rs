//! Single-threaded interaction runtime.
//!
//! [`Console`] owns the [`PageState`] and is the only mutator of it. User
//! gestures and asynchronous completions all funnel through one unbounded
//! mpsc queue, mirroring a UI event loop: submitting a decision spawns a
//! network task whose completion is posted back as an event, and every
//! settlement spawns an independent, un-cancelable timer that posts a
//! clear-all for the flash area.
//!
//! Because the timers are independent, an earlier settlement's clear can
//! blank a later settlement's message before its own timer fires. That race
//! is part of the observable behavior; clears are idempotent so the late
//! timer is harmless.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::approval::{DecisionTransport, Verdict};
use crate::errors::ActionError;
use crate::page::controls::ApprovalControl;
use crate::page::flash::{FlashKind, GENERIC_FAILURE_TEXT};
use crate::page::listing::RowId;
use crate::page::PageState;

/// Interval between a settlement and the clear-all it schedules.
pub const DEFAULT_FLASH_CLEAR: Duration = Duration::from_millis(1500);

/// Everything the runtime reacts to asynchronously.
#[derive(Debug)]
pub enum UiEvent {
    /// A submitted decision completed (or failed). Posted by the network
    /// task; `row` is the listing row the triggering control belonged to.
    ApprovalSettled {
        row: RowId,
        result: Result<Verdict, ActionError>,
    },
    /// A scheduled clear-all of the flash area came due.
    FlashExpired,
}

pub struct Console {
    pub state: PageState,
    transport: Arc<dyn DecisionTransport>,
    flash_clear: Duration,
    tx: UnboundedSender<UiEvent>,
    rx: UnboundedReceiver<UiEvent>,
}

impl Console {
    pub fn new(transport: Arc<dyn DecisionTransport>, flash_clear: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: PageState::new(),
            transport,
            flash_clear,
            tx,
            rx,
        }
    }

    /// Submit the decision carried by an approval control. Returns
    /// immediately; the settlement arrives later as
    /// [`UiEvent::ApprovalSettled`]. Nothing is cancelable once spawned.
    pub fn submit_approval(&self, control: &ApprovalControl, row: RowId) {
        info!(
            action = %control.action,
            user_id = %control.user_id,
            requestor_id = %control.requestor_id,
            %row,
            "approval control activated"
        );

        let transport = self.transport.clone();
        let tx = self.tx.clone();
        let ApprovalControl {
            action,
            user_id,
            requestor_id,
        } = control.clone();

        tokio::spawn(async move {
            let result = transport.submit(&action, &user_id, &requestor_id).await;
            // A closed queue means the console is gone; nothing left to update.
            let _ = tx.send(UiEvent::ApprovalSettled { row, result });
        });
    }

    /// Wait for the next event. `None` once every sender is gone.
    pub async fn next_event(&mut self) -> Option<UiEvent> {
        self.rx.recv().await
    }

    /// Apply one event to the page state.
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::ApprovalSettled { row, result } => {
                self.settle(row, result);
                self.schedule_flash_clear();
            }
            UiEvent::FlashExpired => {
                debug!("flash clear timer fired");
                self.state.flash.clear_all();
            }
        }
    }

    /// Run until the queue closes. Long-lived embeddings drive this; the
    /// CLI and the tests pump events one at a time instead.
    pub async fn run(&mut self) {
        while let Some(event) = self.next_event().await {
            self.apply(event);
        }
    }

    fn settle(&mut self, row: RowId, result: Result<Verdict, ActionError>) {
        match result {
            Ok(Verdict::Accepted { message }) => {
                let removed = self.state.listing.remove(row);
                if !removed {
                    // Double-settlement or a row removed by an earlier
                    // accepted decision; the flash still shows.
                    warn!(%row, "accepted decision for a row no longer present");
                }
                self.state.flash.append(FlashKind::Success, message);
            }
            Ok(Verdict::Declined { message }) => {
                self.state.flash.append(FlashKind::Error, message);
            }
            Err(err) => {
                warn!(%row, kind = err.kind(), error = %err, "decision failed, row left intact");
                self.state.flash.append(FlashKind::Error, GENERIC_FAILURE_TEXT);
            }
        }
    }

    /// Schedule one clear-all, independent of any already pending.
    fn schedule_flash_clear(&self) {
        let tx = self.tx.clone();
        let after = self.flash_clear;
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(UiEvent::FlashExpired);
        });
    }
}
