//! Layout calculation for a tab view
//!
//! A tab view stacks three regions top to bottom: the tab bar, the
//! optional editing toolbar, and the content container.
//!
//! ```text
//! +---------------------------------+
//! | Tab Bar (1 line)                |
//! +---------------------------------+
//! | Toolbar (1 line, editing only)  |
//! +---------------------------------+
//! |                                 |
//! | Content (remaining space,       |
//! |          empty when collapsed)  |
//! |                                 |
//! +---------------------------------+
//! ```

use ratatui::prelude::*;

/// Regions of a rendered tab view
///
/// # Example
///
/// ```
/// use tabview_ui::layout::TabViewLayout;
/// use ratatui::prelude::Rect;
///
/// let layout = TabViewLayout::new(Rect::new(0, 0, 80, 24), true, true);
/// assert_eq!(layout.tab_bar, Rect::new(0, 0, 80, 1));
/// assert_eq!(layout.toolbar, Some(Rect::new(0, 1, 80, 1)));
/// assert_eq!(layout.content, Rect::new(0, 2, 80, 22));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabViewLayout {
    /// Area for the tab bar (top)
    pub tab_bar: Rect,
    /// Area for the editing toolbar, directly below the bar
    pub toolbar: Option<Rect>,
    /// Area for the selected item's content
    pub content: Rect,
}

impl TabViewLayout {
    /// Calculate regions from the area given to the view.
    ///
    /// The bar always gets the first row. The toolbar only takes a row
    /// when editing is enabled and a row is left for it. A collapsed view
    /// gets an empty content rect positioned just below the last region.
    #[must_use]
    pub fn new(area: Rect, editing: bool, expanded: bool) -> Self {
        let tab_bar = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let mut used = tab_bar.height;

        let toolbar = if editing && area.height > used {
            let rect = Rect::new(area.x, area.y + used, area.width, 1);
            used += 1;
            Some(rect)
        } else {
            None
        };

        let height = if expanded {
            area.height.saturating_sub(used)
        } else {
            0
        };
        let content = Rect::new(area.x, area.y + used, area.width, height);

        TabViewLayout {
            tab_bar,
            toolbar,
            content,
        }
    }

    /// Rows actually occupied by the view
    #[must_use]
    pub fn height(&self) -> u16 {
        self.tab_bar.height + self.toolbar.map_or(0, |t| t.height) + self.content.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_toolbar() {
        let layout = TabViewLayout::new(Rect::new(0, 0, 80, 24), false, true);
        assert_eq!(layout.tab_bar, Rect::new(0, 0, 80, 1));
        assert!(layout.toolbar.is_none());
        assert_eq!(layout.content, Rect::new(0, 1, 80, 23));
        assert_eq!(layout.height(), 24);
    }

    #[test]
    fn test_layout_regions_are_ordered() {
        let layout = TabViewLayout::new(Rect::new(0, 0, 40, 10), true, true);
        let toolbar = layout.toolbar.expect("toolbar present");
        assert!(layout.tab_bar.bottom() <= toolbar.top());
        assert!(toolbar.bottom() <= layout.content.top());
    }

    #[test]
    fn test_layout_collapsed_has_no_content() {
        let layout = TabViewLayout::new(Rect::new(0, 0, 80, 24), true, false);
        assert_eq!(layout.content.height, 0);
        assert_eq!(layout.content.y, 2);
        assert_eq!(layout.height(), 2);
    }

    #[test]
    fn test_layout_single_row_drops_toolbar() {
        let layout = TabViewLayout::new(Rect::new(0, 0, 80, 1), true, true);
        assert_eq!(layout.tab_bar.height, 1);
        assert!(layout.toolbar.is_none());
        assert_eq!(layout.content.height, 0);
    }

    #[test]
    fn test_layout_zero_height() {
        let layout = TabViewLayout::new(Rect::new(0, 0, 80, 0), true, true);
        assert_eq!(layout.tab_bar.height, 0);
        assert!(layout.toolbar.is_none());
        assert_eq!(layout.height(), 0);
    }

    #[test]
    fn test_layout_with_offset() {
        let layout = TabViewLayout::new(Rect::new(5, 3, 30, 12), true, true);
        assert_eq!(layout.tab_bar, Rect::new(5, 3, 30, 1));
        assert_eq!(layout.toolbar, Some(Rect::new(5, 4, 30, 1)));
        assert_eq!(layout.content, Rect::new(5, 5, 30, 10));
    }
}
