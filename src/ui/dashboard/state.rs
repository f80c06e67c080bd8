//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::screener_consts::filters;
use crate::consts::screener_consts::ui::MAX_ACTIVITY_LOGS;
use crate::data::export::ExportFormat;
use crate::data::filter::{FilterCriteria, apply_filters, step_value};
use crate::data::record::SecurityRecord;
use crate::events::Event as ScreenerEvent;

use crossterm::event::KeyCode;
use ratatui::widgets::TableState;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

/// Which control currently owns keyboard focus.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FocusedControl {
    MinSharpe,
    BetaLow,
    BetaHigh,
    Sectors,
    Table,
}

impl FocusedControl {
    pub fn next(self) -> Self {
        match self {
            FocusedControl::MinSharpe => FocusedControl::BetaLow,
            FocusedControl::BetaLow => FocusedControl::BetaHigh,
            FocusedControl::BetaHigh => FocusedControl::Sectors,
            FocusedControl::Sectors => FocusedControl::Table,
            FocusedControl::Table => FocusedControl::MinSharpe,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedControl::MinSharpe => FocusedControl::Table,
            FocusedControl::BetaLow => FocusedControl::MinSharpe,
            FocusedControl::BetaHigh => FocusedControl::BetaLow,
            FocusedControl::Sectors => FocusedControl::BetaHigh,
            FocusedControl::Table => FocusedControl::Sectors,
        }
    }
}

/// Effects the event loop executes on behalf of the dashboard. Key handling
/// only mutates state; anything touching the cache, the subprocess, or the
/// filesystem is requested through one of these.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DashboardAction {
    Refresh,
    Export(ExportFormat),
}

/// Screener dashboard state: the loaded dataset, the filter controls, and
/// the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// Path the dataset is loaded from, shown in the warning pane.
    pub data_file: PathBuf,
    /// The loaded collection, shared with the cache. `None` until a dataset
    /// exists; the table and charts are withheld in that case.
    pub records: Option<Arc<Vec<SecurityRecord>>>,
    /// Current filter control values.
    pub criteria: FilterCriteria,
    /// Sector multi-select options, recomputed from the loaded dataset on
    /// every pass.
    pub sector_options: Vec<String>,
    /// Control owning keyboard focus.
    pub focus: FocusedControl,
    /// Cursor row inside the sector multi-select.
    pub sector_cursor: usize,
    /// Table selection; the selected row doubles as the scatter detail view.
    pub table_state: TableState,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<ScreenerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<ScreenerEvent>,
    /// Duration of the last refresh, if one ran this session.
    pub last_refresh_secs: Option<f64>,
    /// Set while the busy frame is on screen and the script runs.
    pub refreshing: bool,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(data_file: PathBuf, with_background_color: bool) -> Self {
        Self {
            data_file,
            records: None,
            criteria: FilterCriteria::default(),
            sector_options: Vec::new(),
            focus: FocusedControl::MinSharpe,
            sector_cursor: 0,
            table_state: TableState::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            last_refresh_secs: None,
            refreshing: false,
            with_background_color,
            tick: 0,
        }
    }

    /// Replaces the dataset wholesale. Sector options follow on the next
    /// update pass (or immediately, for the first render after a load).
    pub fn set_records(&mut self, records: Arc<Vec<SecurityRecord>>) {
        self.records = Some(records);
        self.sync_sector_options();
    }

    /// The filtered view, re-derived on demand. Pure: same records and
    /// criteria always produce the same rows, in dataset order.
    pub fn filtered_records(&self) -> Vec<SecurityRecord> {
        match &self.records {
            Some(records) => apply_filters(records, &self.criteria),
            None => Vec::new(),
        }
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: ScreenerEvent) {
        self.pending_events.push_back(event);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ScreenerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Routes a key press to the focused control. Returns the effect the
    /// event loop must run, if any.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<DashboardAction> {
        match code {
            KeyCode::Char('r') | KeyCode::Char('R') => return Some(DashboardAction::Refresh),
            KeyCode::Char('c') | KeyCode::Char('C') if self.records.is_some() => {
                return Some(DashboardAction::Export(ExportFormat::Csv));
            }
            KeyCode::Char('j') | KeyCode::Char('J') if self.records.is_some() => {
                return Some(DashboardAction::Export(ExportFormat::Json));
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Left => self.adjust_slider(-1),
            KeyCode::Right => self.adjust_slider(1),
            KeyCode::Up => self.move_cursor_up(),
            KeyCode::Down => self.move_cursor_down(),
            KeyCode::Char(' ') if self.focus == FocusedControl::Sectors => {
                self.toggle_sector_at_cursor();
            }
            KeyCode::Char('a') | KeyCode::Char('A') if self.focus == FocusedControl::Sectors => {
                self.criteria.sectors = self.sector_options.iter().cloned().collect();
            }
            _ => {}
        }
        None
    }

    fn adjust_slider(&mut self, delta_steps: i32) {
        match self.focus {
            FocusedControl::MinSharpe => {
                self.criteria.min_sharpe = step_value(
                    self.criteria.min_sharpe,
                    delta_steps,
                    filters::SHARPE_MIN,
                    filters::SHARPE_MAX,
                );
            }
            // The two beta handles may not cross.
            FocusedControl::BetaLow => {
                let (low, high) = self.criteria.beta_range;
                let stepped = step_value(low, delta_steps, filters::BETA_MIN, filters::BETA_MAX);
                self.criteria.beta_range = (stepped.min(high), high);
            }
            FocusedControl::BetaHigh => {
                let (low, high) = self.criteria.beta_range;
                let stepped = step_value(high, delta_steps, filters::BETA_MIN, filters::BETA_MAX);
                self.criteria.beta_range = (low, stepped.max(low));
            }
            FocusedControl::Sectors | FocusedControl::Table => {}
        }
    }

    fn move_cursor_up(&mut self) {
        match self.focus {
            FocusedControl::Sectors => {
                self.sector_cursor = self.sector_cursor.saturating_sub(1);
            }
            FocusedControl::Table => {
                let selected = self.table_state.selected().unwrap_or(0);
                self.table_state.select(Some(selected.saturating_sub(1)));
            }
            _ => {}
        }
    }

    fn move_cursor_down(&mut self) {
        match self.focus {
            FocusedControl::Sectors => {
                if self.sector_cursor + 1 < self.sector_options.len() {
                    self.sector_cursor += 1;
                }
            }
            FocusedControl::Table => {
                let row_count = self.filtered_records().len();
                if row_count == 0 {
                    return;
                }
                let next = match self.table_state.selected() {
                    Some(selected) => (selected + 1).min(row_count - 1),
                    None => 0,
                };
                self.table_state.select(Some(next));
            }
            _ => {}
        }
    }

    fn toggle_sector_at_cursor(&mut self) {
        if let Some(sector) = self.sector_options.get(self.sector_cursor) {
            if !self.criteria.sectors.remove(sector) {
                self.criteria.sectors.insert(sector.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str, sharpe: f64, beta: f64, sector: &str) -> SecurityRecord {
        SecurityRecord {
            ticker: ticker.to_string(),
            sharpe_ratio: sharpe,
            beta,
            annual_return_pct: 10.0,
            sector: sector.to_string(),
        }
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new(PathBuf::from("sharpe.json"), false);
        state.set_records(Arc::new(vec![
            record("A", 2.0, 1.0, "Tech"),
            record("B", 1.0, 2.0, "Unknown"),
            record("C", 1.8, 0.2, "Energy"), // beta below the default range
        ]));
        state.update();
        state
    }

    #[test]
    // Loading a dataset defaults the sector selection to all observed sectors.
    fn test_sector_selection_defaults_to_all() {
        let state = loaded_state();
        assert_eq!(state.sector_options, vec!["Tech", "Unknown", "Energy"]);
        assert_eq!(state.criteria.sectors.len(), 3);
    }

    #[test]
    // The default criteria reproduce the spec scenario: only A survives.
    fn test_default_filtered_view() {
        let state = loaded_state();
        let filtered = state.filtered_records();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].ticker, "A");
    }

    #[test]
    // Arrow keys step the focused slider by 0.1 within its bounds.
    fn test_slider_adjustment() {
        let mut state = loaded_state();
        assert_eq!(state.focus, FocusedControl::MinSharpe);

        state.handle_key(KeyCode::Left);
        assert!((state.criteria.min_sharpe - 1.4).abs() < 1e-9);
        state.handle_key(KeyCode::Right);
        state.handle_key(KeyCode::Right);
        assert!((state.criteria.min_sharpe - 1.6).abs() < 1e-9);
    }

    #[test]
    // The beta handles clamp against each other instead of crossing.
    fn test_beta_handles_do_not_cross() {
        let mut state = loaded_state();
        state.focus = FocusedControl::BetaLow;
        for _ in 0..20 {
            state.handle_key(KeyCode::Right);
        }
        let (low, high) = state.criteria.beta_range;
        assert_eq!(low, high);
        assert!((high - 1.5).abs() < 1e-9);
    }

    #[test]
    // Space toggles the sector under the cursor, 'a' restores all.
    fn test_sector_toggle_and_select_all() {
        let mut state = loaded_state();
        state.focus = FocusedControl::Sectors;

        state.handle_key(KeyCode::Char(' '));
        assert!(!state.criteria.sectors.contains("Tech"));
        assert!(state.filtered_records().is_empty());

        state.handle_key(KeyCode::Char('a'));
        assert_eq!(state.criteria.sectors.len(), 3);
    }

    #[test]
    // Export actions are only offered once a dataset is loaded.
    fn test_export_requires_dataset() {
        let mut empty = DashboardState::new(PathBuf::from("sharpe.json"), false);
        assert_eq!(empty.handle_key(KeyCode::Char('c')), None);

        let mut state = loaded_state();
        assert_eq!(
            state.handle_key(KeyCode::Char('c')),
            Some(DashboardAction::Export(ExportFormat::Csv))
        );
        assert_eq!(
            state.handle_key(KeyCode::Char('j')),
            Some(DashboardAction::Export(ExportFormat::Json))
        );
    }

    #[test]
    // Refresh is available with or without a dataset.
    fn test_refresh_always_available() {
        let mut empty = DashboardState::new(PathBuf::from("sharpe.json"), false);
        assert_eq!(
            empty.handle_key(KeyCode::Char('r')),
            Some(DashboardAction::Refresh)
        );
    }

    #[test]
    // Table navigation stays inside the filtered row count.
    fn test_table_navigation_bounds() {
        let mut state = loaded_state();
        state.focus = FocusedControl::Table;

        state.handle_key(KeyCode::Down);
        assert_eq!(state.table_state.selected(), Some(0));
        // Only one filtered row; further presses stay put.
        state.handle_key(KeyCode::Down);
        assert_eq!(state.table_state.selected(), Some(0));
        state.handle_key(KeyCode::Up);
        assert_eq!(state.table_state.selected(), Some(0));
    }
}
