//! Tab view: ordered tab items with a single selection
//!
//! The [`TabView`] owns its tab items, decides which one is selected,
//! keeps the [`TabBarState`] in step with that decision, and publishes
//! [`TabViewEvent`]s when the user picks a tab from the bar.
//!
//! # Selection rules
//!
//! - The first enabled item attached to a view without a selection
//!   becomes selected.
//! - A disabled item is never selected. Disabling or removing the
//!   selected item moves the selection to the nearest enabled item on
//!   its right, then on its left, or clears it.
//! - While collapsed the bar shows [`NO_SELECTION`]; the logical
//!   selection is kept and restored on the bar when expanded again.
//!
//! # Example
//!
//! ```ignore
//! use tabview_ui::TabView;
//! use tabview_core::TabViewConfig;
//!
//! let mut view = TabView::new(TabViewConfig::default());
//! view.append_tab_item(Box::new(layers_tab))?;
//! view.append_tab_item(Box::new(legend_tab))?;
//! let mut events = view.subscribe();
//!
//! view.click_tab(1);
//! assert!(matches!(events.try_recv(), Ok(TabViewEvent::NewTabSelected { .. })));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, StatefulWidget, Widget};
use tabview_core::{
    BorderStyle, CoreError, CoreResult, EventBus, Message, PanelAction, TabItem, TabItemId,
    TabViewConfig, TabViewEvent, TabViewId, Theme,
};
use tokio::sync::broadcast;
use tracing::{debug, info, trace};

use crate::layout::TabViewLayout;
use crate::widgets::{EditToolbar, TabBar, TabBarEvent, TabBarState, TabEntry, NO_SELECTION};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Addresses a tab item either by ID or by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabTarget {
    /// The item with this ID
    Id(TabItemId),
    /// The item at this position
    Index(usize),
}

impl From<TabItemId> for TabTarget {
    fn from(id: TabItemId) -> Self {
        TabTarget::Id(id)
    }
}

impl From<usize> for TabTarget {
    fn from(index: usize) -> Self {
        TabTarget::Index(index)
    }
}

/// Container managing tab order, selection and display state.
///
/// # Thread Safety
///
/// TabView is driven from the UI thread. Events are delivered through a
/// broadcast channel, so receivers may live elsewhere.
pub struct TabView {
    id: TabViewId,
    /// Tab items in display order
    items: Vec<Box<dyn TabItem>>,
    /// Index of the logically selected item
    selected: Option<usize>,
    expanded: bool,
    config: TabViewConfig,
    theme: Theme,
    tab_bar: TabBarState,
    events: EventBus,
    /// Set once the toolbar's first render has been announced
    toolbar_attached: bool,
}

impl TabView {
    /// Creates an empty view using the theme named in `config`
    #[must_use]
    pub fn new(config: TabViewConfig) -> Self {
        let theme = config.resolve_theme();
        Self::with_theme(config, theme)
    }

    /// Creates an empty view with an explicit theme
    #[must_use]
    pub fn with_theme(config: TabViewConfig, theme: Theme) -> Self {
        let id = NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed);
        debug!(
            "creating tab view {} (editing: {}, expanded: {})",
            id, config.enable_editing, config.expanded
        );
        TabView {
            id,
            items: Vec::new(),
            selected: None,
            expanded: config.expanded,
            events: EventBus::new(config.event_capacity),
            config,
            theme,
            tab_bar: TabBarState::new(),
            toolbar_attached: false,
        }
    }

    /// Handle items hold while attached to this view
    #[must_use]
    pub fn id(&self) -> TabViewId {
        self.id
    }

    /// Subscribe to selection and layout events
    pub fn subscribe(&self) -> broadcast::Receiver<TabViewEvent> {
        self.events.subscribe()
    }

    /// Appends an item at the end of the bar.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateTab` if an item with the same ID is
    /// already attached.
    pub fn append_tab_item(&mut self, item: Box<dyn TabItem>) -> CoreResult<TabItemId> {
        let index = self.items.len();
        self.insert_tab_item(item, index)
    }

    /// Inserts an item at `index`, clamped to the end of the bar.
    ///
    /// The current selection is kept. If nothing was selected and the new
    /// item is enabled, it becomes the selection.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateTab` if an item with the same ID is
    /// already attached.
    pub fn insert_tab_item(
        &mut self,
        mut item: Box<dyn TabItem>,
        index: usize,
    ) -> CoreResult<TabItemId> {
        let id = item.id();
        if self.index_of(id).is_some() {
            return Err(CoreError::DuplicateTab(id));
        }

        let index = index.min(self.items.len());
        item.set_tab_view(Some(self.id));
        item.set_selected(false);
        self.tab_bar.insert_tab(index, TabEntry::from_item(item.as_ref()));
        let enabled = item.is_enabled();
        self.items.insert(index, item);

        match self.selected {
            Some(sel) if sel >= index => self.selected = Some(sel + 1),
            Some(_) => {}
            None if enabled => self.set_selection(Some(index)),
            None => {}
        }
        self.sync_bar();

        debug!("tab view {}: attached tab {} at {}", self.id, id, index);
        Ok(id)
    }

    /// Detaches an item and hands it back with its owner handle cleared.
    ///
    /// If it was selected, the nearest enabled item takes over.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TabNotFound` if no such item is attached; the
    /// view is left unchanged.
    pub fn remove_tab_item(&mut self, id: TabItemId) -> CoreResult<Box<dyn TabItem>> {
        let index = self.index_of(id).ok_or(CoreError::TabNotFound(id))?;
        let was_selected = self.selected == Some(index);

        let mut item = self.items.remove(index);
        self.tab_bar.remove_tab(index);
        item.set_selected(false);
        item.set_tab_view(None);

        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        if was_selected {
            let next = self.nearest_enabled(index, index);
            self.set_selection(next);
        }
        self.sync_bar();

        debug!(
            "tab view {}: detached tab {}, selection now {:?}",
            self.id,
            id,
            self.selected_id()
        );
        Ok(item)
    }

    /// Makes the target the logical selection.
    ///
    /// Selecting the already selected item only re-asserts the item's
    /// mirror and the bar. No click events are published.
    ///
    /// # Errors
    ///
    /// `TabNotFound` / `TabIndexOutOfRange` for a missing target,
    /// `TabDisabled` if it is disabled. The selection is unchanged.
    pub fn select_tab_item(&mut self, target: impl Into<TabTarget>) -> CoreResult<()> {
        let index = self.resolve(target.into())?;
        let item = &self.items[index];
        if !item.is_enabled() {
            return Err(CoreError::TabDisabled(item.id()));
        }

        if self.selected == Some(index) {
            self.items[index].set_selected(true);
        } else {
            self.set_selection(Some(index));
        }
        self.sync_bar();
        Ok(())
    }

    /// Refreshes an item's bar entry after its title, icon or enabled
    /// state changed, and applies the selection rules.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TabNotFound` if no such item is attached.
    pub fn update_tab_item(&mut self, id: TabItemId) -> CoreResult<()> {
        let index = self.index_of(id).ok_or(CoreError::TabNotFound(id))?;
        self.refresh(index);
        Ok(())
    }

    /// Runs `f` on an attached item, then refreshes it as
    /// [`update_tab_item`](Self::update_tab_item) would.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TabNotFound` if no such item is attached.
    pub fn edit_tab_item<R>(
        &mut self,
        id: TabItemId,
        f: impl FnOnce(&mut dyn TabItem) -> R,
    ) -> CoreResult<R> {
        let index = self.index_of(id).ok_or(CoreError::TabNotFound(id))?;
        let result = f(self.items[index].as_mut());
        self.refresh(index);
        Ok(result)
    }

    /// Renames an attached item
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TabNotFound` if no such item is attached.
    pub fn set_tab_title(&mut self, id: TabItemId, title: &str) -> CoreResult<()> {
        self.edit_tab_item(id, |item| item.set_title(title))
    }

    /// Enables or disables an attached item
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TabNotFound` if no such item is attached.
    pub fn set_tab_enabled(&mut self, id: TabItemId, enabled: bool) -> CoreResult<()> {
        self.edit_tab_item(id, |item| item.set_enabled(enabled))
    }

    /// First item with exactly this title
    #[must_use]
    pub fn get_tab_item_by_title(&self, title: &str) -> Option<&dyn TabItem> {
        self.items
            .iter()
            .find(|item| item.title() == title)
            .map(|item| item.as_ref())
    }

    /// Item with this ID
    #[must_use]
    pub fn get(&self, id: TabItemId) -> Option<&dyn TabItem> {
        self.index_of(id).map(|index| self.items[index].as_ref())
    }

    /// The logically selected item, which may differ from what a
    /// collapsed bar shows
    #[must_use]
    pub fn selected_tab_item(&self) -> Option<&dyn TabItem> {
        self.selected.map(|index| self.items[index].as_ref())
    }

    /// Position of the selected item
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// ID of the selected item
    #[must_use]
    pub fn selected_id(&self) -> Option<TabItemId> {
        self.selected_tab_item().map(|item| item.id())
    }

    /// Position of the item with this ID
    #[must_use]
    pub fn index_of(&self, id: TabItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Items in display order
    pub fn tab_items(&self) -> impl Iterator<Item = &dyn TabItem> {
        self.items.iter().map(|item| item.as_ref())
    }

    /// Number of attached items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are attached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the view is expanded
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expands or collapses the view.
    ///
    /// Collapsing clears the bar's visual selection and hides the content;
    /// expanding restores the bar to the logical selection.
    pub fn set_expanded(&mut self, expanded: bool) {
        let changed = self.expanded != expanded;
        self.expanded = expanded;
        self.sync_bar();

        if changed {
            let action = if expanded {
                PanelAction::PanelExpanded
            } else {
                PanelAction::PanelCollapsed
            };
            info!(action = %action, view = self.id, "tab panel display changed");
            self.emit(TabViewEvent::LayoutChanged);
        }
    }

    /// The visual strip
    #[must_use]
    pub fn tab_bar(&self) -> &TabBarState {
        &self.tab_bar
    }

    /// Theme used for rendering
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Whether the editing toolbar is shown
    #[must_use]
    pub fn editing_enabled(&self) -> bool {
        self.config.enable_editing
    }

    /// Clicks the tab at `index` on the bar and reacts to the resulting
    /// selection request. Returns false if the bar ignored the click.
    pub fn click_tab(&mut self, index: usize) -> bool {
        match self.tab_bar.click(index) {
            Some(event) => {
                self.handle_tab_bar_event(event);
                true
            }
            None => false,
        }
    }

    /// Reacts to a selection request raised by the bar.
    ///
    /// A request for the selected tab publishes `SameTabSelected`; a
    /// request for another enabled tab moves the selection and publishes
    /// `NewTabSelected`. Never both.
    pub fn handle_tab_bar_event(&mut self, event: TabBarEvent) {
        match event {
            TabBarEvent::TabSelected(index) => self.handle_tab_bar_selected(index),
        }
    }

    /// Reacts to the bar asking for the tab at `index` to be selected.
    ///
    /// Disabled or missing tabs only restore the bar.
    pub fn handle_tab_bar_selected(&mut self, index: usize) {
        let Some((id, enabled)) = self.items.get(index).map(|i| (i.id(), i.is_enabled())) else {
            self.sync_bar();
            return;
        };
        if !enabled {
            self.sync_bar();
            return;
        }

        if self.selected == Some(index) {
            self.sync_bar();
            trace!("tab view {}: selected tab {} clicked again", self.id, id);
            self.emit(TabViewEvent::SameTabSelected { id, index });
            return;
        }

        self.set_selection(Some(index));
        let item = &self.items[index];
        info!(
            action = %item.selection_action(),
            view = self.id,
            tab = id,
            title = item.title(),
            "tab selected"
        );
        self.emit(TabViewEvent::NewTabSelected { id, index });
    }

    /// Handles a message routed to the view.
    ///
    /// Tab navigation, expand/collapse and left clicks on the bar are
    /// consumed. Anything else goes to the selected item while expanded.
    ///
    /// # Returns
    ///
    /// `None` if the message was consumed, otherwise the message (or the
    /// item's follow-up) for further processing.
    pub fn handle_message(&mut self, msg: &Message) -> Option<Message> {
        match msg {
            Message::SelectTab(id) => {
                if let Err(e) = self.select_tab_item(*id) {
                    debug!("ignoring select request: {}", e);
                }
                None
            }
            Message::CloseTab(id) => {
                if let Err(e) = self.remove_tab_item(*id) {
                    debug!("ignoring close request: {}", e);
                }
                None
            }
            Message::NextTab => {
                self.cycle(true);
                None
            }
            Message::PrevTab => {
                self.cycle(false);
                None
            }
            Message::ToggleExpanded => {
                self.set_expanded(!self.expanded);
                None
            }
            Message::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.tab_bar.tab_at(mouse.column, mouse.row) {
                    Some(index) => {
                        self.click_tab(index);
                        None
                    }
                    None => self.forward(msg),
                }
            }
            Message::Batch(_) => {
                let unhandled: Vec<Message> = msg
                    .clone()
                    .flatten()
                    .iter()
                    .filter_map(|m| self.handle_message(m))
                    .collect();
                if unhandled.is_empty() {
                    None
                } else {
                    Some(Message::Batch(unhandled))
                }
            }
            _ => self.forward(msg),
        }
    }

    /// Draws bar, toolbar (when editing) and content, top to bottom.
    ///
    /// Records the bar's hit regions for mouse routing. The first render
    /// with the toolbar publishes `LayoutChanged`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let layout = TabViewLayout::new(area, self.config.enable_editing, self.expanded);

        TabBar::new(&self.theme).render(layout.tab_bar, buf, &mut self.tab_bar);

        if let Some(toolbar_area) = layout.toolbar {
            EditToolbar::new(&self.theme)
                .hint("ctrl+e:collapse")
                .render(toolbar_area, buf);
            if !self.toolbar_attached {
                self.toolbar_attached = true;
                debug!("tab view {}: editing toolbar attached", self.id);
                self.emit(TabViewEvent::LayoutChanged);
            }
        }

        if layout.content.height > 0 {
            let block = content_block(&self.theme);
            let inner = block.inner(layout.content);
            block.render(layout.content, buf);
            if let Some(item) = self.selected_tab_item() {
                item.view(inner, buf);
            }
        }
    }

    /// Renders into a whole terminal frame
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.render(area, frame.buffer_mut());
    }

    fn resolve(&self, target: TabTarget) -> CoreResult<usize> {
        match target {
            TabTarget::Id(id) => self.index_of(id).ok_or(CoreError::TabNotFound(id)),
            TabTarget::Index(index) if index < self.items.len() => Ok(index),
            TabTarget::Index(index) => Err(CoreError::TabIndexOutOfRange {
                index,
                len: self.items.len(),
            }),
        }
    }

    fn refresh(&mut self, index: usize) {
        let entry = TabEntry::from_item(self.items[index].as_ref());
        let enabled = entry.enabled;
        self.tab_bar.update_tab(index, entry);

        if !enabled && self.selected == Some(index) {
            let next = self.nearest_enabled(index + 1, index);
            debug!(
                "tab view {}: selected tab {} disabled, moving to {:?}",
                self.id,
                self.items[index].id(),
                next
            );
            self.set_selection(next);
        } else if enabled && self.selected.is_none() {
            self.set_selection(Some(index));
        }
        self.sync_bar();
    }

    /// Moves the logical selection and the items' mirrors.
    fn set_selection(&mut self, index: Option<usize>) {
        if let Some(old) = self.selected {
            if let Some(item) = self.items.get_mut(old) {
                item.set_selected(false);
            }
        }
        self.selected = index;
        if let Some(item) = index.and_then(|i| self.items.get_mut(i)) {
            item.set_selected(true);
        }
        self.sync_bar();
    }

    /// Mirrors the logical selection onto the bar, or hides it when
    /// collapsed.
    fn sync_bar(&mut self) {
        let visual = if self.expanded {
            self.selected
        } else {
            NO_SELECTION
        };
        self.tab_bar.select_tab(visual);
    }

    /// Nearest enabled item scanning right from `right_from`, then left
    /// from just before `left_before`.
    fn nearest_enabled(&self, right_from: usize, left_before: usize) -> Option<usize> {
        (right_from..self.items.len())
            .find(|&i| self.items[i].is_enabled())
            .or_else(|| {
                (0..left_before.min(self.items.len()))
                    .rev()
                    .find(|&i| self.items[i].is_enabled())
            })
    }

    /// Steps to the next or previous enabled item, wrapping around.
    fn cycle(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let start = self
            .selected
            .unwrap_or(if forward { len - 1 } else { 0 });

        for step in 1..=len {
            let index = if forward {
                (start + step) % len
            } else {
                (start + len - step % len) % len
            };
            if self.items[index].is_enabled() {
                if self.selected != Some(index) {
                    self.handle_tab_bar_selected(index);
                }
                return;
            }
        }
    }

    fn forward(&mut self, msg: &Message) -> Option<Message> {
        if !self.expanded {
            return Some(msg.clone());
        }
        let Some(index) = self.selected else {
            return Some(msg.clone());
        };
        match self.items[index].handle_message(msg) {
            Some(Message::None) => None,
            Some(follow_up) => Some(follow_up),
            None => Some(msg.clone()),
        }
    }

    fn emit(&self, event: TabViewEvent) {
        if let Err(e) = self.events.send(event) {
            trace!("tab view {}: {:?} not delivered: {}", self.id, event, e);
        }
    }
}

impl Default for TabView {
    fn default() -> Self {
        Self::new(TabViewConfig::default())
    }
}

fn content_block(theme: &Theme) -> Block<'static> {
    let base = Style::default()
        .fg(theme.colors.foreground)
        .bg(theme.colors.background);
    let border_type = match theme.borders {
        BorderStyle::None => return Block::new().style(base),
        BorderStyle::Rounded => BorderType::Rounded,
        BorderStyle::Square => BorderType::Plain,
        BorderStyle::Double => BorderType::Double,
    };
    Block::bordered()
        .border_type(border_type)
        .border_style(Style::default().fg(theme.colors.muted))
        .style(base)
}
