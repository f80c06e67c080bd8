//! Filter sidebar component
//!
//! Renders the Sharpe slider, the beta range slider, and the sector
//! multi-select

use super::super::state::{DashboardState, FocusedControl};
use crate::consts::screener_consts::filters;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState};

pub fn render_filters(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // min Sharpe
            Constraint::Length(3), // beta low
            Constraint::Length(3), // beta high
            Constraint::Fill(1),   // sectors
        ])
        .split(area);

    let (beta_low, beta_high) = state.criteria.beta_range;
    render_slider(
        f,
        chunks[0],
        "Min Sharpe",
        state.criteria.min_sharpe,
        filters::SHARPE_MIN,
        filters::SHARPE_MAX,
        state.focus == FocusedControl::MinSharpe,
    );
    render_slider(
        f,
        chunks[1],
        "Beta Low",
        beta_low,
        filters::BETA_MIN,
        filters::BETA_MAX,
        state.focus == FocusedControl::BetaLow,
    );
    render_slider(
        f,
        chunks[2],
        "Beta High",
        beta_high,
        filters::BETA_MIN,
        filters::BETA_MAX,
        state.focus == FocusedControl::BetaHigh,
    );
    render_sector_select(f, chunks[3], state);
}

fn render_slider(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: f64,
    min: f64,
    max: f64,
    focused: bool,
) {
    let border_color = if focused { Color::LightYellow } else { Color::DarkGray };
    let ratio = ((value - min) / (max - min)).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{:.1}", value));
    f.render_widget(gauge, area);
}

fn render_sector_select(f: &mut Frame, area: Rect, state: &DashboardState) {
    let focused = state.focus == FocusedControl::Sectors;
    let border_color = if focused { Color::LightYellow } else { Color::DarkGray };

    let items: Vec<ListItem> = state
        .sector_options
        .iter()
        .map(|sector| {
            let checked = state.criteria.sectors.contains(sector);
            let marker = if checked { "[x]" } else { "[ ]" };
            let style = if checked {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", marker), style),
                Span::styled(sector.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Sectors")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    // The cursor only shows while the list owns focus.
    let mut list_state = ListState::default();
    if focused && !state.sector_options.is_empty() {
        list_state.select(Some(state.sector_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}
