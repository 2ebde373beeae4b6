//! Widgets drawn by a tab view
//!
//! - [`TabBar`] / [`TabBarState`] - the visual tab strip and its state
//! - [`EditToolbar`] - one-row strip shown when editing is enabled

pub mod tab_bar;
pub mod toolbar;

pub use tab_bar::{TabBar, TabBarEvent, TabBarState, TabClass, TabEntry, NO_SELECTION};
pub use toolbar::EditToolbar;
