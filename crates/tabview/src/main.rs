//! tabview - terminal demo of the tab view
//!
//! Hosts a handful of text tabs in a `TabView` and shows the events it
//! publishes on the bottom row.

mod tabs;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tabview_core::{Message, TabViewConfig, TabViewEvent, Theme};
use tabview_ui::TabView;
use tokio::sync::broadcast::error::TryRecvError;
use tracing_subscriber::EnvFilter;

/// Upper bound for `--tabs`
const MAX_TABS: i64 = 99;

/// Tab strip demo
#[derive(Parser)]
#[command(name = "tabview")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Show the editing toolbar
    #[arg(long)]
    editing: bool,

    /// Start collapsed
    #[arg(long)]
    collapsed: bool,

    /// Number of tabs to create
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(0..=MAX_TABS))]
    tabs: u16,

    /// Theme name (dark, light, nord)
    #[arg(long)]
    theme: Option<String>,

    /// Configuration file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = load_config(&cli)?;
    let theme = config.resolve_theme();
    let mut view = TabView::with_theme(config, theme);
    for tab in tabs::sample_tabs(cli.tabs) {
        view.append_tab_item(Box::new(tab))?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut view);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::from_default_env()
        .add_directive("tabview=debug".parse()?)
        .add_directive("tabview_ui=debug".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .init();
    Ok(())
}

/// Reads the configuration file, then applies command line overrides.
fn load_config(cli: &Cli) -> Result<TabViewConfig> {
    let mut config = match &cli.config {
        Some(path) => TabViewConfig::load_from(path)?,
        None => TabViewConfig::load().unwrap_or_else(|e| {
            tracing::warn!("using default configuration: {}", e);
            TabViewConfig::default()
        }),
    };

    if cli.editing {
        config.enable_editing = true;
    }
    if cli.collapsed {
        config.expanded = false;
    }
    if let Some(name) = &cli.theme {
        if Theme::by_name(name).is_none() {
            return Err(color_eyre::eyre::eyre!("unknown theme: {}", name));
        }
        config.theme = name.clone();
    }
    Ok(config)
}

fn run_app<B>(terminal: &mut Terminal<B>, view: &mut TabView) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    let mut events = view.subscribe();
    let mut status = String::from("Tab:next  Ctrl+E:collapse  Ctrl+Q:quit");

    loop {
        terminal.draw(|frame| {
            let [main, footer] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
            view.render(main, frame.buffer_mut());
            frame.render_widget(Paragraph::new(status.as_str()), footer);
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            let msg = match event::read()? {
                Event::Key(key) => match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => Message::Quit,
                    (KeyModifiers::CONTROL, KeyCode::Char('e')) => Message::ToggleExpanded,
                    (KeyModifiers::CONTROL, KeyCode::Char('w')) => match view.selected_id() {
                        Some(id) => Message::CloseTab(id),
                        None => Message::None,
                    },
                    (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                        if let Some(id) = view.selected_id() {
                            view.set_tab_enabled(id, false)?;
                        }
                        Message::None
                    }
                    (KeyModifiers::CONTROL, KeyCode::Char('r')) => {
                        let ids: Vec<_> = view.tab_items().map(|t| t.id()).collect();
                        for id in ids {
                            view.set_tab_enabled(id, true)?;
                        }
                        Message::None
                    }
                    (KeyModifiers::NONE, KeyCode::Tab) => Message::NextTab,
                    (KeyModifiers::SHIFT, KeyCode::BackTab) => Message::PrevTab,
                    _ => Message::Key(key),
                },
                Event::Mouse(mouse) => Message::Mouse(mouse),
                Event::Resize(w, h) => Message::Resize(w, h),
                _ => Message::None,
            };

            if msg == Message::Quit {
                break;
            }
            if !msg.is_none() {
                view.handle_message(&msg);
            }
        }

        loop {
            match events.try_recv() {
                Ok(event) => status = describe(view, event),
                Err(TryRecvError::Lagged(n)) => tracing::debug!("missed {} events", n),
                Err(_) => break,
            }
        }
    }

    Ok(())
}

fn describe(view: &TabView, event: TabViewEvent) -> String {
    let title = |id| view.get(id).map_or("?", |t| t.title()).to_string();
    match event {
        TabViewEvent::NewTabSelected { id, index } => {
            format!("new tab selected: {} (#{})", title(id), index)
        }
        TabViewEvent::SameTabSelected { id, index } => {
            format!("same tab selected: {} (#{})", title(id), index)
        }
        TabViewEvent::LayoutChanged => {
            let state = if view.is_expanded() { "expanded" } else { "collapsed" };
            format!("layout changed: {}", state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_flag_default() {
        let cli = Cli::try_parse_from(["tabview"]).expect("parse");
        assert_eq!(cli.tabs, 4);
        assert!(!cli.editing && !cli.collapsed);
    }

    #[test]
    fn test_tabs_flag_range() {
        let cli = Cli::try_parse_from(["tabview", "--tabs", "99"]).expect("parse");
        assert_eq!(cli.tabs, 99);
        assert!(Cli::try_parse_from(["tabview", "--tabs", "100"]).is_err());
        assert!(Cli::try_parse_from(["tabview", "--tabs", "4294967297"]).is_err());
        assert!(Cli::try_parse_from(["tabview", "--tabs", "-1"]).is_err());
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        TabViewConfig::default().save_to(&path).expect("save");

        let cli = Cli::try_parse_from([
            "tabview",
            "--editing",
            "--collapsed",
            "--theme",
            "nord",
            "--config",
            path.to_str().expect("utf-8 path"),
        ])
        .expect("parse");
        let config = load_config(&cli).expect("load");
        assert!(config.enable_editing);
        assert!(!config.expanded);
        assert_eq!(config.theme, "nord");

        let bad = Cli::try_parse_from([
            "tabview",
            "--theme",
            "sepia",
            "--config",
            path.to_str().expect("utf-8 path"),
        ])
        .expect("parse");
        assert!(load_config(&bad).is_err());
    }
}
