//! Text tabs hosted by the demo

use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget, Wrap};
use tabview_core::{Message, TabItem, TabItemId, TabViewId};

/// Titles used for the first demo tabs, with their icons
const SAMPLE_TABS: &[(&str, &str)] = &[
    ("Layers", "≡"),
    ("Legend", "◧"),
    ("Basemaps", "▦"),
    ("Measure", "↔"),
    ("Share", "⇪"),
];

/// A tab showing a few lines of scrollable text
pub struct TextTab {
    id: TabItemId,
    title: String,
    icon: Option<String>,
    body: Vec<String>,
    enabled: bool,
    selected: bool,
    owner: Option<TabViewId>,
    scroll: u16,
}

impl TextTab {
    pub fn new(id: TabItemId, title: impl Into<String>) -> Self {
        let title = title.into();
        let body = vec![
            format!("This is the {} tab.", title),
            String::new(),
            "Tab / Shift+Tab   next / previous tab".to_string(),
            "Ctrl+E            collapse or expand".to_string(),
            "Ctrl+D            disable this tab".to_string(),
            "Ctrl+R            enable every tab".to_string(),
            "Ctrl+W            close this tab".to_string(),
            "Up / Down         scroll".to_string(),
            "Ctrl+Q            quit".to_string(),
        ];
        Self {
            id,
            title,
            icon: None,
            body,
            enabled: true,
            selected: false,
            owner: None,
            scroll: 0,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Builds `count` tabs, named from the sample list first.
pub fn sample_tabs(count: u16) -> Vec<TextTab> {
    (1..=count)
        .map(|n| {
            let id = TabItemId::from(n);
            match SAMPLE_TABS.get(usize::from(n - 1)) {
                Some((title, icon)) => TextTab::new(id, *title).with_icon(*icon),
                None => TextTab::new(id, format!("Tab {}", id)),
            }
        })
        .collect()
}

impl TabItem for TextTab {
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

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
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
        let text: Vec<Line> = self.body.iter().map(|l| Line::raw(l.as_str())).collect();
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }

    fn handle_message(&mut self, message: &Message) -> Option<Message> {
        let Message::Key(key) = message else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Some(Message::None)
            }
            KeyCode::Down => {
                let max = self.body.len().saturating_sub(1) as u16;
                self.scroll = (self.scroll + 1).min(max);
                Some(Message::None)
            }
            _ => None,
        }
    }
}
