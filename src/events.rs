//! Named page events with payloads
//!
//! Components that need to notify the host own an [`EventListeners`] list and
//! emit [`PageEvent`]s through it. The host (or a parent component) registers
//! plain closures; no global dispatcher is involved.

use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Events emitted by the export page components.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The export page was opened.
    Opened,
    /// The export page was closed and removed.
    Closed,
    /// The user submitted the report. The payload is opaque to this crate and
    /// passed through to the host for external persistence.
    Submitted(Value),
    /// The user asked for the help dialog.
    HelpRequested { title: String, help_text: String },
}

/// Callback registered for page events.
pub type EventCallback = Box<dyn FnMut(&PageEvent)>;

// ─────────────────────────────────────────────────────────────────────────────
// Listener List
// ─────────────────────────────────────────────────────────────────────────────

/// An observer list owned by each emitting component.
///
/// Listeners are notified in registration order. There is no unsubscribe;
/// listeners live as long as the owning component.
#[derive(Default)]
pub struct EventListeners {
    listeners: Vec<EventCallback>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn on(&mut self, callback: impl FnMut(&PageEvent) + 'static) {
        self.listeners.push(Box::new(callback));
    }

    /// Notify every listener of the event, in registration order.
    pub fn emit(&mut self, event: &PageEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
