//! Tab bar widget and its state
//!
//! [`TabBarState`] is the visual strip: one entry per tab item, a visual
//! selection that may be [`NO_SELECTION`], and the screen regions of the
//! last render for mouse hit testing. [`TabBar`] draws that state.
//!
//! ## Example
//!
//! ```ignore
//! use tabview_ui::widgets::{TabBar, TabBarState};
//!
//! frame.render_stateful_widget(TabBar::new(&theme), area, &mut state);
//! if let Some(index) = state.tab_at(mouse.column, mouse.row) {
//!     // route the click
//! }
//! ```

use ratatui::prelude::*;
use ratatui::widgets::StatefulWidget;
use tabview_core::{TabItem, Theme};

/// The bar shows no tab as selected.
pub const NO_SELECTION: Option<usize> = None;

/// Visual class of a tab in the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabClass {
    /// Enabled, not selected
    Normal,
    /// The visually selected tab
    Selected,
    /// Disabled; takes precedence over selection
    Disabled,
}

/// Selection request raised by the bar when a tab is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabBarEvent {
    /// The tab at this index was clicked and is now visually selected
    TabSelected(usize),
}

/// What the bar shows for one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    /// Title text
    pub title: String,
    /// Optional icon drawn before the title
    pub icon: Option<String>,
    /// Whether the tab accepts clicks
    pub enabled: bool,
}

impl TabEntry {
    /// Creates an enabled entry without an icon
    pub fn new(title: impl Into<String>) -> Self {
        TabEntry {
            title: title.into(),
            icon: None,
            enabled: true,
        }
    }

    /// Snapshot of an item's bar-facing properties
    pub fn from_item(item: &dyn TabItem) -> Self {
        TabEntry {
            title: item.title().to_string(),
            icon: item.icon().map(str::to_string),
            enabled: item.is_enabled(),
        }
    }

    fn label(&self) -> String {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => format!(" {} {} ", icon, self.title),
            _ => format!(" {} ", self.title),
        }
    }
}

/// State of the visual tab strip
#[derive(Debug, Clone, Default)]
pub struct TabBarState {
    entries: Vec<TabEntry>,
    selected: Option<usize>,
    /// Per-entry screen region from the last render; empty when stale
    hit_regions: Vec<Rect>,
}

impl TabBarState {
    /// Creates an empty bar
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tabs in the bar
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bar has no tabs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in display order
    #[must_use]
    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    /// Entry at `index`
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&TabEntry> {
        self.entries.get(index)
    }

    /// Titles in display order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    /// Inserts an entry, clamping `index` to the end of the bar.
    ///
    /// A visual selection at or after `index` shifts right with its tab.
    pub fn insert_tab(&mut self, index: usize, entry: TabEntry) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
        if let Some(sel) = self.selected {
            if sel >= index {
                self.selected = Some(sel + 1);
            }
        }
        self.hit_regions.clear();
    }

    /// Removes the entry at `index`, returning it.
    ///
    /// Removing the visually selected tab leaves the bar with no selection.
    pub fn remove_tab(&mut self, index: usize) -> Option<TabEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        self.selected = match self.selected {
            Some(sel) if sel == index => NO_SELECTION,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        self.hit_regions.clear();
        Some(entry)
    }

    /// Replaces the entry at `index`. Returns false if out of range.
    pub fn update_tab(&mut self, index: usize, entry: TabEntry) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = entry;
                self.hit_regions.clear();
                true
            }
            None => false,
        }
    }

    /// Sets the visual selection. Out-of-range indices clear it.
    pub fn select_tab(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.entries.len());
    }

    /// Current visual selection, [`NO_SELECTION`] if none
    #[must_use]
    pub fn selected_tab(&self) -> Option<usize> {
        self.selected
    }

    /// Visual class of the tab at `index`
    #[must_use]
    pub fn tab_class(&self, index: usize) -> Option<TabClass> {
        let entry = self.entries.get(index)?;
        Some(if !entry.enabled {
            TabClass::Disabled
        } else if self.selected == Some(index) {
            TabClass::Selected
        } else {
            TabClass::Normal
        })
    }

    /// Simulates a click on the tab at `index`.
    ///
    /// Enabled tabs become visually selected and a selection request is
    /// returned for the owner to act on. Clicks on disabled or missing
    /// tabs are ignored.
    pub fn click(&mut self, index: usize) -> Option<TabBarEvent> {
        let entry = self.entries.get(index)?;
        if !entry.enabled {
            return None;
        }
        self.selected = Some(index);
        Some(TabBarEvent::TabSelected(index))
    }

    /// Index of the tab drawn at a screen position in the last render
    #[must_use]
    pub fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.hit_regions
            .iter()
            .position(|region| region.contains(position))
    }
}

/// Widget drawing a [`TabBarState`]
///
/// Selected tabs use the accent colour in bold, other enabled tabs the
/// muted colour, disabled tabs the disabled colour crossed out.
pub struct TabBar<'a> {
    theme: &'a Theme,
    divider: &'a str,
}

impl<'a> TabBar<'a> {
    /// Creates a tab bar with the default `|` divider
    pub fn new(theme: &'a Theme) -> Self {
        TabBar {
            theme,
            divider: "|",
        }
    }

    /// Sets the divider drawn between tabs
    #[must_use]
    pub fn divider(mut self, divider: &'a str) -> Self {
        self.divider = divider;
        self
    }

    fn class_style(&self, class: TabClass) -> Style {
        let colors = &self.theme.colors;
        match class {
            TabClass::Selected => Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
            TabClass::Normal => Style::default().fg(colors.muted),
            TabClass::Disabled => Style::default()
                .fg(colors.disabled)
                .add_modifier(Modifier::CROSSED_OUT),
        }
    }
}

impl StatefulWidget for TabBar<'_> {
    type State = TabBarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.hit_regions.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(self.theme.colors.background));

        let divider_style = Style::default().fg(self.theme.colors.muted);
        let mut x = area.x;
        for index in 0..state.entries.len() {
            if index > 0 && x < area.right() {
                let (next_x, _) = buf.set_stringn(
                    x,
                    area.y,
                    self.divider,
                    (area.right() - x) as usize,
                    divider_style,
                );
                x = next_x;
            }

            let start = x;
            if start < area.right() {
                let style = state
                    .tab_class(index)
                    .map_or_else(Style::default, |class| self.class_style(class));
                let label = state.entries[index].label();
                let (next_x, _) =
                    buf.set_stringn(start, area.y, &label, (area.right() - start) as usize, style);
                x = next_x;
            }
            // Tabs pushed off the right edge get an empty region.
            state
                .hit_regions
                .push(Rect::new(start, area.y, x.saturating_sub(start), 1));
        }
    }
}
