// src/bus.rs
//! Host-agnostic overlay event bus.
//!
//! Listeners subscribe per [`OverlayKind`] with a [`Priority`] and an
//! optional [`LogicalSide`]. `publish` walks them in priority order
//! (registration order within a priority) and threads one [`Dispatch`]
//! through all of them, carrying the event, the cancelled flag and the
//! result slot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::BusError;
use crate::overlay::{OverlayEvent, OverlayKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalSide {
    Client,
    Server,
}

/// Listener priority, `Highest` runs first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Highest,
    High,
    #[default]
    Normal,
    Low,
    Lowest,
}

/// Result slot a listener can fill in for the host to act on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventResult {
    #[default]
    Default,
    Allow,
    Deny,
}

/// The envelope handed to each listener.
#[derive(Debug)]
pub struct Dispatch {
    event: OverlayEvent,
    side: LogicalSide,
    cancelled: bool,
    result: EventResult,
}

impl Dispatch {
    fn new(event: OverlayEvent, side: LogicalSide) -> Self {
        Self {
            event,
            side,
            cancelled: false,
            result: EventResult::Default,
        }
    }

    pub fn event(&self) -> &OverlayEvent {
        &self.event
    }

    pub fn event_mut(&mut self) -> &mut OverlayEvent {
        &mut self.event
    }

    pub fn into_event(self) -> OverlayEvent {
        self.event
    }

    pub fn kind(&self) -> OverlayKind {
        self.event.kind()
    }

    pub fn side(&self) -> LogicalSide {
        self.side
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn cancel(&mut self) -> Result<(), BusError> {
        self.set_cancelled(true)
    }

    /// Set or clear the cancelled flag. Fails, leaving the flag alone, for
    /// events that cannot be cancelled.
    pub fn set_cancelled(&mut self, cancelled: bool) -> Result<(), BusError> {
        if !self.event.is_cancellable() {
            return Err(BusError::NotCancellable(self.kind()));
        }
        self.cancelled = cancelled;
        Ok(())
    }

    pub fn result(&self) -> EventResult {
        self.result
    }

    pub fn set_result(&mut self, result: EventResult) {
        self.result = result;
    }
}

pub type Listener = Arc<dyn Fn(&mut Dispatch) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    pub priority: Priority,
    /// Keep receiving the event after an earlier listener cancelled it.
    pub receive_cancelled: bool,
    /// Only run on this side; `None` runs on both.
    pub side: Option<LogicalSide>,
}

struct Subscription {
    id: ListenerId,
    kind: OverlayKind,
    opts: ListenerOptions,
    listener: Listener,
}

pub struct EventBus {
    side: LogicalSide,
    /// Kept sorted by priority, then registration order.
    listeners: RwLock<Vec<Subscription>>,
    next_id: AtomicU64,
}

impl EventBus {
    pub fn new(side: LogicalSide) -> Self {
        Self {
            side,
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn side(&self) -> LogicalSide {
        self.side
    }

    pub fn subscribe<F>(&self, kind: OverlayKind, priority: Priority, listener: F) -> ListenerId
    where
        F: Fn(&mut Dispatch) + Send + Sync + 'static,
    {
        self.subscribe_with(
            kind,
            ListenerOptions {
                priority,
                ..ListenerOptions::default()
            },
            listener,
        )
    }

    pub fn subscribe_with<F>(&self, kind: OverlayKind, opts: ListenerOptions, listener: F) -> ListenerId
    where
        F: Fn(&mut Dispatch) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut guard = self.listeners.write();
        let pos = guard.partition_point(|s| s.opts.priority <= opts.priority);
        guard.insert(
            pos,
            Subscription {
                id,
                kind,
                opts,
                listener: Arc::new(listener),
            },
        );
        debug!(?kind, priority = ?opts.priority, id = id.0, "listener subscribed");
        id
    }

    /// Remove a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut guard = self.listeners.write();
        match guard.iter().position(|s| s.id == id) {
            Some(idx) => {
                guard.remove(idx);
                debug!(id = id.0, "listener unsubscribed");
                true
            }
            None => false,
        }
    }

    pub fn listener_count(&self, kind: OverlayKind) -> usize {
        self.listeners.read().iter().filter(|s| s.kind == kind).count()
    }

    /// Run every matching listener over `event` and hand back the final
    /// envelope. The listener list is snapshotted first, so listeners may
    /// subscribe or unsubscribe while running; changes apply to the next publish.
    pub fn publish(&self, event: impl Into<OverlayEvent>) -> Dispatch {
        let mut dispatch = Dispatch::new(event.into(), self.side);
        let kind = dispatch.kind();

        let snapshot: Vec<(ListenerId, bool, Listener)> = self
            .listeners
            .read()
            .iter()
            .filter(|s| s.kind == kind && s.opts.side.map_or(true, |side| side == self.side))
            .map(|s| (s.id, s.opts.receive_cancelled, s.listener.clone()))
            .collect();

        trace!(?kind, listeners = snapshot.len(), "publishing overlay event");
        for (id, receive_cancelled, listener) in snapshot {
            if dispatch.is_cancelled() && !receive_cancelled {
                trace!(id = id.0, "skipping listener, event cancelled");
                continue;
            }
            listener(&mut dispatch);
        }

        if dispatch.is_cancelled() {
            debug!(?kind, "overlay event cancelled");
        }
        dispatch
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("side", &self.side)
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}
