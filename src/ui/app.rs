//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::Config;
use crate::consts::screener_consts::ui as ui_consts;
use crate::data::export::{self, ExportFormat};
use crate::data::loader::DatasetCache;
use crate::data::refresh::run_refresh;
use crate::error::ScreenerError;
use crate::events::{Event as ScreenerEvent, EventType};
use crate::logging::LogLevel;
use crate::ui::dashboard::{DashboardAction, DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::Path;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the filtered dataset.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Dataset location and refresh command.
    config: Config,
    /// Memoized dataset loads, owned outside the view so render passes stay
    /// pure.
    cache: DatasetCache,
    /// The current screen being displayed in the application.
    current_screen: Screen,
    /// Whether to disable background colors
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(config: Config, ui_config: UIConfig) -> Self {
        Self {
            config,
            cache: DatasetCache::new(),
            current_screen: Screen::Splash,
            with_background_color: ui_config.with_background_color,
        }
    }

    /// Builds the dashboard screen, loading the dataset when the file
    /// exists. With no file present the dashboard opens in its warning
    /// state and waits for an explicit refresh.
    ///
    /// # Errors
    /// An existing but unreadable or malformed dataset aborts the session.
    fn open_dashboard(&mut self) -> Result<(), ScreenerError> {
        let mut state =
            DashboardState::new(self.config.data_file.clone(), self.with_background_color);

        if self.config.data_file.exists() {
            let records = self.cache.load(&self.config.data_file)?;
            state.add_event(ScreenerEvent::loader(
                format!(
                    "Loaded {} securities from {}",
                    records.len(),
                    self.config.data_file.display()
                ),
                EventType::Success,
                LogLevel::Info,
            ));
            state.set_records(records);
        } else {
            state.add_event(ScreenerEvent::loader(
                "No precomputed data found. Please refresh.".to_string(),
                EventType::Waiting,
                LogLevel::Warn,
            ));
        }

        self.current_screen = Screen::Dashboard(Box::new(state));
        Ok(())
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<(), ScreenerError> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(ui_consts::SPLASH_SECS);

    // UI event loop
    loop {
        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard()?;
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(ui_consts::POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                // Any key press will skip the splash screen
                if matches!(app.current_screen, Screen::Splash) {
                    app.open_dashboard()?;
                    continue;
                }

                let action = match &mut app.current_screen {
                    Screen::Splash => None,
                    Screen::Dashboard(state) => state.handle_key(key.code),
                };

                match action {
                    Some(DashboardAction::Refresh) => perform_refresh(&mut app, terminal).await?,
                    Some(DashboardAction::Export(format)) => perform_export(&mut app, format),
                    None => {}
                }
            }
        }
    }
}

/// Runs the external computation script and reloads the dataset.
///
/// One busy frame is drawn first; after that the session blocks on the
/// subprocess with no cancellation until it exits. A spawn or reload failure
/// surfaces in the activity log and the previously loaded records stay on
/// screen; the next render pass carries on.
async fn perform_refresh<B: Backend>(
    app: &mut App,
    terminal: &mut Terminal<B>,
) -> Result<(), ScreenerError> {
    if let Screen::Dashboard(state) = &mut app.current_screen {
        state.refreshing = true;
        state.add_to_activity_log(ScreenerEvent::refresher(
            "Fetching latest data, this may take 3-5 minutes".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        ));
    }
    terminal.draw(|f| render(f, &app.current_screen))?;

    let result = run_refresh(
        &app.config.refresh_command,
        &mut app.cache,
        &app.config.data_file,
    )
    .await;

    if let Screen::Dashboard(state) = &mut app.current_screen {
        state.refreshing = false;
        match result {
            Ok((records, elapsed)) => {
                state.last_refresh_secs = Some(elapsed);
                state.add_event(ScreenerEvent::refresher(
                    format!("Data refreshed in {} seconds!", elapsed),
                    EventType::Success,
                    LogLevel::Info,
                ));
                state.set_records(records);
            }
            Err(err) => {
                state.add_event(ScreenerEvent::refresher(
                    format!("Refresh failed: {}", err),
                    EventType::Error,
                    LogLevel::Error,
                ));
            }
        }
    }
    Ok(())
}

/// Writes a dated snapshot of the currently displayed rows. A write failure
/// surfaces in the activity log; the view itself is unaffected.
fn perform_export(app: &mut App, format: ExportFormat) {
    if let Screen::Dashboard(state) = &mut app.current_screen {
        let filtered = state.filtered_records();
        let path = export::export_path(Path::new("."), format);
        let event = match export::write_snapshot(&path, &filtered, format) {
            Ok(()) => ScreenerEvent::exporter(
                format!("Exported {} rows to {}", filtered.len(), path.display()),
                EventType::Success,
                LogLevel::Info,
            ),
            Err(err) => ScreenerEvent::exporter(
                format!("Export failed: {}", err),
                EventType::Error,
                LogLevel::Error,
            ),
        };
        state.add_event(event);
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
