//! Tab item trait and related types.
//!
//! This module defines the [`TabItem`] trait which every piece of tab
//! content must satisfy to be hosted by a tab view.

use crate::event::{Message, PanelAction};
use ratatui::prelude::*;

/// Unique identifier for a tab item within one view.
pub type TabItemId = u32;

/// Identifier of the tab view an item is attached to.
///
/// Items hold this as a non-owning handle back to their view; it is
/// `None` until the item is appended and again after it is removed.
pub type TabViewId = u64;

/// Trait that all tab items must implement.
///
/// A tab item supplies a title for the bar, renders its own content,
/// and mirrors the selection state the owning view decides. The view
/// stays authoritative: items never select themselves.
///
/// # Thread Safety
///
/// Items are used from the UI thread only, so there is no `Send + Sync`
/// requirement.
///
/// # Example
///
/// ```ignore
/// use tabview_core::{TabItem, TabItemId, TabViewId};
/// use ratatui::prelude::*;
///
/// struct Legend {
///     id: TabItemId,
///     owner: Option<TabViewId>,
///     selected: bool,
/// }
///
/// impl TabItem for Legend {
///     fn id(&self) -> TabItemId { self.id }
///     fn title(&self) -> &str { "Legend" }
///     fn set_selected(&mut self, selected: bool) { self.selected = selected; }
///     fn tab_view(&self) -> Option<TabViewId> { self.owner }
///     fn set_tab_view(&mut self, owner: Option<TabViewId>) { self.owner = owner; }
///     fn view(&self, area: Rect, buf: &mut Buffer) {
///         // draw legend entries
///     }
/// }
/// ```
pub trait TabItem {
    /// Returns the unique identifier for this item.
    ///
    /// The ID must stay constant while the item is attached to a view.
    fn id(&self) -> TabItemId;

    /// Returns the title shown in the tab bar.
    fn title(&self) -> &str;

    /// Returns an optional icon displayed before the title.
    fn icon(&self) -> Option<&str> {
        None
    }

    /// Returns whether the item may currently be selected.
    ///
    /// After changing the value an item reports, the owning view must be
    /// told through `update_tab_item` so the bar and selection follow.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Renames the item. Items with a fixed title ignore this.
    fn set_title(&mut self, _title: &str) {}

    /// Enables or disables the item. Items that are always enabled
    /// ignore this.
    fn set_enabled(&mut self, _enabled: bool) {}

    /// Mirrors the owning view's selection onto the item.
    fn set_selected(&mut self, selected: bool);

    /// Returns the view this item is attached to, if any.
    fn tab_view(&self) -> Option<TabViewId>;

    /// Sets or clears the owner handle. Called by the view on attach
    /// and detach; items should only store the value.
    fn set_tab_view(&mut self, owner: Option<TabViewId>);

    /// Renders the item's content into the given area.
    fn view(&self, area: Rect, buf: &mut Buffer);

    /// Analytics action recorded when a user selects this item.
    fn selection_action(&self) -> PanelAction {
        PanelAction::NewTabSelected
    }

    /// Optional handler for input routed to the selected item.
    ///
    /// Return `Some(Message::None)` to swallow the input, another
    /// message to emit a follow-up, or `None` to leave it unhandled.
    fn handle_message(&mut self, _message: &Message) -> Option<Message> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestItem {
        id: TabItemId,
        title: String,
        icon: Option<String>,
        enabled: bool,
        selected: bool,
        owner: Option<TabViewId>,
    }

    impl TestItem {
        fn new(id: TabItemId, title: &str) -> Self {
            Self {
                id,
                title: title.to_string(),
                icon: None,
                enabled: true,
                selected: false,
                owner: None,
            }
        }

        fn with_icon(mut self, icon: &str) -> Self {
            self.icon = Some(icon.to_string());
            self
        }
    }

    impl TabItem for TestItem {
        fn id(&self) -> TabItemId {
            self.id
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn icon(&self) -> Option<&str> {
            self.icon.as_deref()
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_selected(&mut self, selected: bool) {
            self.selected = selected;
        }

        fn tab_view(&self) -> Option<TabViewId> {
            self.owner
        }

        fn set_tab_view(&mut self, owner: Option<TabViewId>) {
            self.owner = owner;
        }

        fn view(&self, area: Rect, buf: &mut Buffer) {
            buf.set_string(area.x, area.y, &self.title, Style::default());
        }
    }

    #[test]
    fn test_defaults() {
        let item = TestItem::new(1, "Layers");
        assert!(item.icon().is_none());
        assert!(item.is_enabled());
        assert_eq!(item.selection_action(), PanelAction::NewTabSelected);
    }

    #[test]
    fn test_default_mutators_are_no_ops() {
        let mut item = TestItem::new(1, "Layers");
        item.set_title("Legend");
        item.set_enabled(false);
        assert_eq!(item.title(), "Layers");
        assert!(item.is_enabled());
    }

    #[test]
    fn test_icon_custom() {
        let item = TestItem::new(1, "Layers").with_icon("L");
        assert_eq!(item.icon(), Some("L"));
    }

    #[test]
    fn test_owner_handle() {
        let mut item = TestItem::new(1, "Layers");
        assert!(item.tab_view().is_none());
        item.set_tab_view(Some(9));
        assert_eq!(item.tab_view(), Some(9));
        item.set_tab_view(None);
        assert!(item.tab_view().is_none());
    }

    #[test]
    fn test_selected_mirror() {
        let mut item = TestItem::new(1, "Layers");
        item.set_selected(true);
        assert!(item.selected);
        item.set_selected(false);
        assert!(!item.selected);
    }

    #[test]
    fn test_handle_message_default_unhandled() {
        let mut item = TestItem::new(1, "Layers");
        assert!(item.handle_message(&Message::Quit).is_none());
    }

    #[test]
    fn test_view_draws_into_buffer() {
        let item = TestItem::new(1, "Layers");
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        item.view(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "L");
    }

    #[test]
    fn test_tab_item_is_object_safe() {
        fn accept_item(_item: &dyn TabItem) {}
        let item = TestItem::new(1, "Layers");
        accept_item(&item);
    }
}
