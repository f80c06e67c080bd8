//! Dashboard chart components
//!
//! Renders the Beta vs Sharpe scatter, the Sharpe histogram, and the sector
//! breakdown

use super::super::state::DashboardState;
use super::super::utils::{sector_color, sector_counts, sharpe_histogram};
use crate::consts::screener_consts::{filters, ui as ui_consts};
use crate::data::record::SecurityRecord;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
};

pub fn render_charts(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    filtered: &[SecurityRecord],
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    render_scatter(f, chunks[0], state, filtered);
    render_histogram(f, chunks[1], filtered);
    render_sector_breakdown(f, chunks[2], state, filtered);
}

/// Beta on x, Sharpe ratio on y, one dataset per sector so the point color
/// identifies the sector.
fn render_scatter(f: &mut Frame, area: Rect, state: &DashboardState, filtered: &[SecurityRecord]) {
    let y_max = filtered
        .iter()
        .map(|r| r.sharpe_ratio)
        .fold(filters::SHARPE_MAX, f64::max)
        .ceil();

    // Sector order follows the option list so colors stay stable across
    // charts and render passes.
    let series: Vec<(String, Color, Vec<(f64, f64)>)> = state
        .sector_options
        .iter()
        .enumerate()
        .map(|(index, sector)| {
            let points: Vec<(f64, f64)> = filtered
                .iter()
                .filter(|r| &r.sector == sector)
                .map(|r| (r.beta, r.sharpe_ratio))
                .collect();
            (sector.clone(), sector_color(index), points)
        })
        .filter(|(_, _, points)| !points.is_empty())
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(sector, color, points)| {
            Dataset::default()
                .name(sector.clone())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" BETA vs SHARPE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title("Beta")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([filters::BETA_MIN, filters::BETA_MAX])
                .labels(axis_labels(filters::BETA_MIN, filters::BETA_MAX)),
        )
        .y_axis(
            Axis::default()
                .title("Sharpe")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([filters::SHARPE_MIN, y_max])
                .labels(axis_labels(filters::SHARPE_MIN, y_max)),
        );
    f.render_widget(chart, area);
}

fn render_histogram(f: &mut Frame, area: Rect, filtered: &[SecurityRecord]) {
    let bins = sharpe_histogram(filtered, ui_consts::HISTOGRAM_BIN_WIDTH);
    let bars: Vec<Bar> = bins
        .iter()
        .map(|(label, count)| {
            Bar::default()
                .label(Line::from(label.clone()))
                .value(*count)
                .style(Style::default().fg(Color::Cyan))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" SHARPE DISTRIBUTION ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1);
    f.render_widget(chart, area);
}

fn render_sector_breakdown(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    filtered: &[SecurityRecord],
) {
    let counts = sector_counts(filtered);
    let bars: Vec<Bar> = counts
        .iter()
        .map(|(sector, count)| {
            let index = state
                .sector_options
                .iter()
                .position(|s| s == sector)
                .unwrap_or(0);
            Bar::default()
                .label(Line::from(sector.clone()))
                .value(*count)
                .style(Style::default().fg(sector_color(index)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(sector_color(index))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" SECTOR BREAKDOWN ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1);
    f.render_widget(chart, area);
}

fn axis_labels(min: f64, max: f64) -> Vec<Span<'static>> {
    let mid = (min + max) / 2.0;
    vec![
        Span::raw(format!("{:.1}", min)),
        Span::raw(format!("{:.1}", mid)),
        Span::raw(format!("{:.1}", max)),
    ]
}
