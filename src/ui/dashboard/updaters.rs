//! Dashboard state update logic
//!
//! Runs once per render pass, before the view is drawn

use super::state::DashboardState;

use crate::data::record::sector_options;

impl DashboardState {
    /// Advances one render pass: animation tick, sector option sync, event
    /// drain, selection clamping.
    pub fn update(&mut self) {
        self.tick += 1;

        self.sync_sector_options();

        // Move queued events into the displayed activity log
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        self.clamp_cursors();
    }

    /// Recomputes the sector option list from the loaded dataset.
    ///
    /// When the observed sector set changed (first load, or a refresh that
    /// introduced or removed sectors), the selection silently resets to all
    /// options. A selection narrowed by the user survives passes where the
    /// option list is unchanged.
    pub fn sync_sector_options(&mut self) {
        let options = match &self.records {
            Some(records) => sector_options(records),
            None => Vec::new(),
        };
        if options != self.sector_options {
            self.criteria.sectors = options.iter().cloned().collect();
            self.sector_options = options;
        }
    }

    // Keep the sector cursor and table selection inside their collections
    // after the dataset or the filters shrank them.
    fn clamp_cursors(&mut self) {
        if self.sector_cursor >= self.sector_options.len() {
            self.sector_cursor = self.sector_options.len().saturating_sub(1);
        }

        if let Some(selected) = self.table_state.selected() {
            let row_count = self.filtered_records().len();
            if row_count == 0 {
                self.table_state.select(None);
            } else if selected >= row_count {
                self.table_state.select(Some(row_count - 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::SecurityRecord;
    use crate::ui::dashboard::state::FocusedControl;
    use crossterm::event::KeyCode;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn record(ticker: &str, sector: &str) -> SecurityRecord {
        SecurityRecord {
            ticker: ticker.to_string(),
            sharpe_ratio: 2.0,
            beta: 1.0,
            annual_return_pct: 10.0,
            sector: sector.to_string(),
        }
    }

    #[test]
    // A reload with a changed sector set silently resets the selection.
    fn test_sector_reset_on_changed_options() {
        let mut state = DashboardState::new(PathBuf::from("sharpe.json"), false);
        state.set_records(Arc::new(vec![record("A", "Tech"), record("B", "Energy")]));
        state.update();

        // Narrow the selection to Tech only.
        state.focus = FocusedControl::Sectors;
        state.sector_cursor = 1;
        state.handle_key(KeyCode::Char(' '));
        assert_eq!(state.criteria.sectors.len(), 1);

        // Same sector set observed: the narrowed selection survives.
        state.update();
        assert_eq!(state.criteria.sectors.len(), 1);

        // A refresh that introduces a sector resets the selection to all.
        state.set_records(Arc::new(vec![
            record("A", "Tech"),
            record("B", "Energy"),
            record("C", "Utilities"),
        ]));
        state.update();
        assert_eq!(state.criteria.sectors.len(), 3);
    }

    #[test]
    // Shrinking the filtered set pulls the table selection back in range.
    fn test_selection_clamped_to_filtered_rows() {
        let mut state = DashboardState::new(PathBuf::from("sharpe.json"), false);
        state.set_records(Arc::new(vec![
            record("A", "Tech"),
            record("B", "Tech"),
            record("C", "Tech"),
        ]));
        state.update();

        state.focus = FocusedControl::Table;
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Down);
        assert_eq!(state.table_state.selected(), Some(2));

        // Raise the Sharpe floor above every record: no rows remain.
        state.criteria.min_sharpe = 3.0;
        state.update();
        assert_eq!(state.table_state.selected(), None);
    }
}
