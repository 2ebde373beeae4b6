//! Editing toolbar widget
//!
//! The [`EditToolbar`] is the one-row strip a tab view places between its
//! bar and its content when editing is enabled: a bold label on the left,
//! the available actions after it, and a hint right-aligned.

use ratatui::prelude::*;
use ratatui::widgets::Widget;
use tabview_core::Theme;

/// Actions shown when the view does not override them
pub const DEFAULT_ACTIONS: &[&str] = &["n:new layer", "f:new folder", "s:share"];

/// One-row editing toolbar
///
/// ```ignore
/// let toolbar = EditToolbar::new(&theme)
///     .label("EDIT")
///     .actions(&["n:new layer"])
///     .hint("ctrl+z:undo");
/// frame.render_widget(toolbar, area);
/// ```
pub struct EditToolbar<'a> {
    label: &'a str,
    actions: &'a [&'a str],
    hint: &'a str,
    theme: &'a Theme,
}

impl<'a> EditToolbar<'a> {
    /// Creates a toolbar with the default label and actions
    pub fn new(theme: &'a Theme) -> Self {
        EditToolbar {
            label: "EDIT",
            actions: DEFAULT_ACTIONS,
            hint: "",
            theme,
        }
    }

    /// Sets the left label
    pub fn label(mut self, text: &'a str) -> Self {
        self.label = text;
        self
    }

    /// Sets the action list drawn after the label
    pub fn actions(mut self, actions: &'a [&'a str]) -> Self {
        self.actions = actions;
        self
    }

    /// Sets the right-aligned hint
    pub fn hint(mut self, text: &'a str) -> Self {
        self.hint = text;
        self
    }
}

impl Widget for EditToolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bg = self.theme.colors.toolbar;
        buf.set_style(area, Style::default().bg(bg));

        let mut x = area.x;
        if !self.label.is_empty() {
            let style = Style::default()
                .fg(self.theme.colors.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD);
            let (next_x, _) = buf.set_stringn(
                x,
                area.y,
                format!(" {} ", self.label),
                area.width as usize,
                style,
            );
            x = next_x;
        }

        let action_style = Style::default().fg(self.theme.colors.foreground).bg(bg);
        for action in self.actions {
            if x >= area.right() {
                break;
            }
            let (next_x, _) = buf.set_stringn(
                x,
                area.y,
                format!(" {} ", action),
                (area.right() - x) as usize,
                action_style,
            );
            x = next_x;
        }

        // Hint only when it fits without overlapping the actions.
        if !self.hint.is_empty() {
            let text = format!(" {} ", self.hint);
            let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
            if len <= area.right().saturating_sub(x) {
                let style = Style::default().fg(self.theme.colors.muted).bg(bg);
                buf.set_string(area.right() - len, area.y, &text, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, area: Rect) -> String {
        (area.left()..area.right())
            .map(|x| buf[(x, area.y)].symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_defaults_render() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        EditToolbar::new(&theme).render(area, &mut buf);

        let content = row_text(&buf, area);
        assert!(content.starts_with(" EDIT "));
        assert!(content.contains("n:new layer"));
        assert_eq!(buf[(0, 0)].bg, theme.colors.toolbar);
    }

    #[test]
    fn test_hint_right_aligned() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        EditToolbar::new(&theme)
            .actions(&[])
            .hint("u:undo")
            .render(area, &mut buf);

        assert!(row_text(&buf, area).ends_with(" u:undo "));
    }

    #[test]
    fn test_hint_dropped_when_crowded() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        EditToolbar::new(&theme)
            .label("EDITING")
            .actions(&["a:add"])
            .hint("ctrl+z:undo")
            .render(area, &mut buf);

        let content = row_text(&buf, area);
        assert!(content.contains("a:add"));
        assert!(!content.contains("undo"));
    }

    #[test]
    fn test_hint_near_right_edge_of_wide_buffer() {
        let theme = Theme::dark();
        let area = Rect::new(u16::MAX - 30, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        EditToolbar::new(&theme)
            .label("")
            .actions(&[])
            .hint("a-very-long-hint-that-cannot-fit-anywhere")
            .render(area, &mut buf);

        assert!(!row_text(&buf, area).contains("hint"));
    }

    #[test]
    fn test_zero_area() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 0, 1);
        let mut buf = Buffer::empty(area);
        EditToolbar::new(&theme).render(area, &mut buf);
    }
}
