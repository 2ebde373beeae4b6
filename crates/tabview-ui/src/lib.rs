//! # tabview-ui
//!
//! Tab view container and widgets built on [`tabview_core`].
//!
//! - [`TabView`] - Owns tab items, the single selection and the bar
//! - [`TabBar`] / [`TabBarState`] - Visual tab strip
//! - [`EditToolbar`] - Strip shown between bar and content while editing
//! - [`TabViewLayout`] - Vertical split of a view's area
//!
//! ## Overview
//!
//! The [`TabView`] is authoritative for selection. Its bar only ever
//! reflects that decision, and a click on the bar comes back as a
//! [`TabBarEvent`] which the view accepts or rejects. Listeners learn
//! about user-driven changes through [`tabview_core::TabViewEvent`]s.
//!
//! ## Example
//!
//! ```ignore
//! use tabview_ui::TabView;
//! use tabview_core::{Message, TabViewConfig};
//!
//! let mut view = TabView::new(TabViewConfig::load()?);
//! view.append_tab_item(Box::new(layers))?;
//!
//! loop {
//!     terminal.draw(|f| view.draw(f))?;
//!
//!     if let Event::Key(key) = event::read()? {
//!         view.handle_message(&Message::Key(key));
//!     }
//! }
//! ```
//!
//! ## Layout Calculation
//!
//! ```
//! use tabview_ui::TabViewLayout;
//! use ratatui::prelude::Rect;
//!
//! let layout = TabViewLayout::new(Rect::new(0, 0, 80, 24), true, true);
//!
//! // Bar, then toolbar, then content
//! assert_eq!(layout.tab_bar.y, 0);
//! assert_eq!(layout.toolbar.map(|t| t.y), Some(1));
//! assert_eq!(layout.content.height, 22);
//! ```

pub mod layout;
pub mod tab_view;
pub mod widgets;

pub use layout::TabViewLayout;
pub use tab_view::{TabTarget, TabView};
pub use widgets::{EditToolbar, TabBar, TabBarEvent, TabBarState, TabClass, TabEntry, NO_SELECTION};
