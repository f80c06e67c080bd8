//! Dashboard header component
//!
//! Renders the title, the count summary, and the refresh gauge

use super::super::state::DashboardState;
use crate::data::record::SecurityRecord;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title and the filtered count summary.
pub fn render_header(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    filtered: &[SecurityRecord],
) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!(
        "SHARPE RATIO SCREENER v{} | Top 1000 US Stocks",
        version
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    if state.refreshing {
        // Busy frame: the session blocks on the script right after this draw.
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .gauge_style(
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
            .percent(((state.tick % 20) as f64 / 20.0 * 100.0) as u16)
            .label("REFRESHING - Fetching latest data, this may take 3-5 minutes");
        f.render_widget(gauge, header_chunks[1]);
        return;
    }

    let summary = if state.records.is_some() {
        let (beta_low, beta_high) = state.criteria.beta_range;
        let mut line = format!(
            "{} securities with Sharpe >= {:.1} and Beta in {:.1}..{:.1}",
            filtered.len(),
            state.criteria.min_sharpe,
            beta_low,
            beta_high,
        );
        if let Some(secs) = state.last_refresh_secs {
            line.push_str(&format!("  |  last refresh took {} seconds", secs));
        }
        line
    } else {
        "No dataset loaded".to_string()
    };

    let summary_line = Paragraph::new(summary)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(summary_line, header_chunks[1]);
}
