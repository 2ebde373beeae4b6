//! Messages and events for the tab view
//!
//! [`Message`] is the input side: commands and terminal input routed into
//! a view. [`TabViewEvent`] is the output side: notifications a view
//! publishes on its [`EventBus`] after its state has changed.

use crossterm::event::{KeyEvent, MouseEvent};
use tokio::sync::broadcast;

use crate::error::CoreError;
use crate::tab::TabItemId;

/// Messages that can be routed into a tab view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Message {
    // === Navigation ===
    /// Select a specific tab item by ID
    SelectTab(TabItemId),
    /// Remove a specific tab item by ID
    CloseTab(TabItemId),
    /// Select the next enabled tab
    NextTab,
    /// Select the previous enabled tab
    PrevTab,
    /// Flip between expanded and collapsed display
    ToggleExpanded,

    // === Global ===
    /// Quit the application
    Quit,

    // === Input ===
    /// Keyboard input event
    Key(KeyEvent),
    /// Mouse input event
    Mouse(MouseEvent),
    /// Terminal resize event
    Resize(u16, u16),

    // === Custom ===
    /// Custom message for tab items
    Custom {
        /// Message type identifier
        kind: String,
        /// JSON payload
        payload: serde_json::Value,
    },

    // === Batch ===
    /// Multiple messages to process in sequence
    Batch(Vec<Message>),

    /// No operation (used for optional returns)
    #[default]
    None,
}

impl Message {
    /// Creates a custom message with the given kind and payload
    ///
    /// # Example
    ///
    /// ```
    /// use tabview_core::event::Message;
    /// use serde_json::json;
    ///
    /// let msg = Message::custom("layer-toggled", json!({"layer": "roads"}));
    /// ```
    pub fn custom<S: Into<String>>(kind: S, payload: serde_json::Value) -> Self {
        Message::Custom {
            kind: kind.into(),
            payload,
        }
    }

    /// Returns true if this is a no-op message
    pub fn is_none(&self) -> bool {
        matches!(self, Message::None)
    }

    /// Flattens nested batch messages into a single level, dropping
    /// `Message::None` entries.
    ///
    /// # Example
    ///
    /// ```
    /// use tabview_core::event::Message;
    ///
    /// let nested = Message::Batch(vec![
    ///     Message::Quit,
    ///     Message::Batch(vec![Message::NextTab, Message::None]),
    /// ]);
    /// assert_eq!(nested.flatten().len(), 2);
    /// ```
    pub fn flatten(self) -> Vec<Message> {
        match self {
            Message::Batch(msgs) => msgs.into_iter().flat_map(|m| m.flatten()).collect(),
            Message::None => vec![],
            other => vec![other],
        }
    }
}

/// Analytics action tag attached to a user-driven tab change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelAction {
    /// A different tab was chosen from the bar
    NewTabSelected,
    /// The already selected tab was clicked again
    SameTabSelected,
    /// The panel was expanded
    PanelExpanded,
    /// The panel was collapsed
    PanelCollapsed,
}

impl PanelAction {
    /// Stable name used in log records
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelAction::NewTabSelected => "new_tab_selected",
            PanelAction::SameTabSelected => "same_tab_selected",
            PanelAction::PanelExpanded => "panel_expanded",
            PanelAction::PanelCollapsed => "panel_collapsed",
        }
    }
}

impl std::fmt::Display for PanelAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notifications published by a tab view.
///
/// Every event is sent after the mutation that caused it has completed,
/// so a receiver querying the view sees the post-change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabViewEvent {
    /// A click on the bar moved the selection to another tab
    NewTabSelected {
        /// Newly selected item
        id: TabItemId,
        /// Its position in the view
        index: usize,
    },
    /// A click on the bar hit the tab that was already selected
    SameTabSelected {
        /// The selected item
        id: TabItemId,
        /// Its position in the view
        index: usize,
    },
    /// Regions of the view changed size (toolbar attached, expand/collapse)
    LayoutChanged,
}

/// Publish-subscribe channel carrying [`TabViewEvent`]s.
///
/// Built on tokio's broadcast channel: sending is synchronous and never
/// blocks, receivers may poll with `try_recv` or await `recv`.
///
/// # Example
///
/// ```
/// use tabview_core::event::{EventBus, TabViewEvent};
///
/// let bus = EventBus::new(16);
/// let mut rx = bus.subscribe();
/// bus.send(TabViewEvent::LayoutChanged).expect("one subscriber");
/// assert_eq!(rx.try_recv().ok(), Some(TabViewEvent::LayoutChanged));
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<TabViewEvent>,
}

impl EventBus {
    /// Creates a bus buffering up to `capacity` events per slow receiver
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        EventBus { sender }
    }

    /// Subscribe to events sent after this call
    pub fn subscribe(&self) -> broadcast::Receiver<TabViewEvent> {
        self.sender.subscribe()
    }

    /// Send an event to all subscribers
    ///
    /// Returns the number of receivers that received the event.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EventError` if there are no active subscribers.
    pub fn send(&self, event: TabViewEvent) -> Result<usize, CoreError> {
        self.sender
            .send(event)
            .map_err(|e| CoreError::EventError(format!("failed to send event: {}", e)))
    }

    /// Returns the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        EventBus::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_none_is_default() {
        assert!(matches!(Message::default(), Message::None));
        assert!(Message::None.is_none());
        assert!(!Message::Quit.is_none());
    }

    #[test]
    fn test_message_flatten_nested_batch() {
        let msg = Message::Batch(vec![
            Message::SelectTab(1),
            Message::Batch(vec![Message::NextTab, Message::PrevTab]),
            Message::None,
        ]);
        let flat = msg.flatten();
        assert_eq!(flat.len(), 3);
        assert!(matches!(flat[0], Message::SelectTab(1)));
    }

    #[test]
    fn test_message_custom() {
        let msg = Message::custom("layer", serde_json::json!({"key": "value"}));
        if let Message::Custom { kind, payload } = msg {
            assert_eq!(kind, "layer");
            assert_eq!(payload["key"], "value");
        } else {
            panic!("Expected Custom message");
        }
    }

    #[test]
    fn test_panel_action_names() {
        assert_eq!(PanelAction::NewTabSelected.as_str(), "new_tab_selected");
        assert_eq!(PanelAction::SameTabSelected.to_string(), "same_tab_selected");
    }

    #[test]
    fn test_event_bus_new() {
        let bus = EventBus::new(8);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_event_bus_zero_capacity_is_clamped() {
        let bus = EventBus::new(0);
        let mut rx = bus.subscribe();
        bus.send(TabViewEvent::LayoutChanged).expect("send should succeed");
        assert_eq!(rx.try_recv().ok(), Some(TabViewEvent::LayoutChanged));
    }

    #[test]
    fn test_event_bus_send_no_subscribers() {
        let bus = EventBus::new(8);
        assert!(bus.send(TabViewEvent::LayoutChanged).is_err());
    }

    #[tokio::test]
    async fn test_event_bus_broadcast_to_multiple() {
        let bus = EventBus::new(8);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let event = TabViewEvent::NewTabSelected { id: 3, index: 1 };
        let count = bus.send(event).expect("send should succeed");
        assert_eq!(count, 2);

        assert_eq!(rx1.recv().await.expect("rx1 should receive"), event);
        assert_eq!(rx2.recv().await.expect("rx2 should receive"), event);
    }

    #[test]
    fn test_event_bus_clone_shares_channel() {
        let bus1 = EventBus::new(8);
        let mut rx = bus1.subscribe();
        let bus2 = bus1.clone();
        assert_eq!(bus2.subscriber_count(), 1);

        bus2.send(TabViewEvent::SameTabSelected { id: 1, index: 0 })
            .expect("send should succeed");
        assert!(matches!(
            rx.try_recv(),
            Ok(TabViewEvent::SameTabSelected { id: 1, index: 0 })
        ));
    }

    mod flatten_props {
        use super::*;
        use proptest::prelude::*;

        fn message_tree() -> impl Strategy<Value = Message> {
            let leaf = prop_oneof![
                any::<u32>().prop_map(Message::SelectTab),
                any::<u32>().prop_map(Message::CloseTab),
                Just(Message::NextTab),
                Just(Message::Quit),
                Just(Message::None),
            ];
            leaf.prop_recursive(4, 32, 6, |inner| {
                proptest::collection::vec(inner, 0..6).prop_map(Message::Batch)
            })
        }

        fn leaves(msg: &Message, out: &mut Vec<Message>) {
            match msg {
                Message::Batch(msgs) => msgs.iter().for_each(|m| leaves(m, out)),
                Message::None => {}
                other => out.push(other.clone()),
            }
        }

        proptest! {
            #[test]
            fn flatten_yields_leaves_in_order(msg in message_tree()) {
                let mut expected = Vec::new();
                leaves(&msg, &mut expected);

                let flat = msg.flatten();
                prop_assert!(flat
                    .iter()
                    .all(|m| !matches!(m, Message::Batch(_) | Message::None)));
                prop_assert_eq!(flat, expected);
            }
        }
    }
}
