//! Securities table component
//!
//! Renders the filtered records with a detail line for the selected row

use super::super::state::{DashboardState, FocusedControl};
use crate::data::record::SecurityRecord;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub fn render_table(f: &mut Frame, area: Rect, state: &DashboardState, filtered: &[SecurityRecord]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(area);

    let focused = state.focus == FocusedControl::Table;
    let border_color = if focused { Color::LightYellow } else { Color::Cyan };

    let header = Row::new(vec![
        Cell::from(header_span("TICKER")),
        Cell::from(header_span("SHARPE")),
        Cell::from(header_span("BETA")),
        Cell::from(header_span("ANNUAL RET %")),
        Cell::from(header_span("SECTOR")),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = filtered
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(Span::styled(
                    record.ticker.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(format!("{:.2}", record.sharpe_ratio)),
                Cell::from(format!("{:.2}", record.beta)),
                Cell::from(format!("{:.1}", record.annual_return_pct)),
                Cell::from(record.sector.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(13),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(" SECURITIES ({}) ", filtered.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    // The shared table state is read-only during rendering; scroll offset is
    // recomputed from the selection each frame.
    let mut table_state = state.table_state.clone();
    f.render_stateful_widget(table, chunks[0], &mut table_state);

    render_detail_line(f, chunks[1], state, filtered);
}

// The terminal stand-in for the scatter tooltip: every tooltip field of the
// selected row on one line.
fn render_detail_line(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    filtered: &[SecurityRecord],
) {
    let detail = state
        .table_state
        .selected()
        .and_then(|index| filtered.get(index));

    let line = match detail {
        Some(record) => Line::from(vec![
            Span::styled(
                format!(" {} ", record.ticker),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " Sharpe Ratio {:.2} | Beta {:.2} | Annual Return {:.1}% | {}",
                record.sharpe_ratio, record.beta, record.annual_return_pct, record.sector
            )),
        ]),
        None => Line::from(Span::styled(
            " Select a row for details",
            Style::default().fg(Color::DarkGray),
        )),
    };

    f.render_widget(Paragraph::new(line), area);
}

fn header_span(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
