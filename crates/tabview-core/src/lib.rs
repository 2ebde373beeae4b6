//! # tabview-core
//!
//! Core traits and types for the tabview tab-strip widget.
//!
//! ## Overview
//!
//! A tab view hosts an ordered list of tab items, keeps at most one of
//! them selected and publishes events when the user picks a tab from the
//! bar. This crate holds everything the view and its items share; the
//! view itself lives in `tabview-ui`.
//!
//! ## Core Abstractions
//!
//! - [`TabItem`] - Trait for tab content
//! - [`Message`] - Commands and terminal input routed into a view
//! - [`TabViewEvent`] / [`EventBus`] - Notifications published by a view
//! - [`Theme`] - Palette for tab classes, toolbar and content border
//! - [`TabViewConfig`] - Construction options loaded from TOML
//! - [`CoreError`] - Error types for view operations

pub mod config;
pub mod error;
pub mod event;
pub mod tab;
pub mod theme;

pub use config::TabViewConfig;
pub use error::{CoreError, CoreResult};
pub use event::{EventBus, Message, PanelAction, TabViewEvent};
pub use tab::{TabItem, TabItemId, TabViewId};
pub use theme::{BorderStyle, Theme, ThemeColors};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _: TabItemId = 0;
        let _: TabViewId = 0;
        let _ = CoreError::TabNotFound(0);
        let _ = Message::NextTab;
        let _ = TabViewEvent::LayoutChanged;
        let _ = EventBus::default();
        let _ = PanelAction::NewTabSelected;
        let _ = TabViewConfig::default();
        let _ = BorderStyle::Rounded;
        let theme = Theme::dark();
        let _ = theme.colors.background;
    }

    #[test]
    fn test_core_result_usage() {
        fn failing_function() -> CoreResult<u32> {
            Err(CoreError::TabDisabled(1))
        }

        assert!(failing_function().is_err());
    }
}
