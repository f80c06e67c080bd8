//! Dashboard main renderer

use super::components::{charts, filters, footer, header, logs, table};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    // The filtered view is derived once per pass and feeds every widget, so
    // the table, charts, and count summary always agree.
    let filtered = state.filtered_records();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state, &filtered);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Fill(1)])
        .split(main_chunks[1]);

    render_sidebar(f, content_chunks[0], state);

    if state.records.is_some() {
        render_main_panel(f, content_chunks[1], state, &filtered);
    } else {
        render_missing_data(f, content_chunks[1], state);
    }

    footer::render_footer(f, main_chunks[2]);
}

fn render_sidebar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(22), Constraint::Fill(1)])
        .split(area);

    filters::render_filters(f, sidebar_chunks[0], state);
    logs::render_logs_panel(f, sidebar_chunks[1], state);
}

fn render_main_panel(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    filtered: &[crate::data::record::SecurityRecord],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    table::render_table(f, chunks[0], state, filtered);
    charts::render_charts(f, chunks[1], state, filtered);
}

// Shown until a dataset exists: the table and charts are withheld and the
// user is pointed at the refresh action.
fn render_missing_data(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "No precomputed data found. Please refresh.",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            format!("Expected dataset at: {}", state.data_file.display()),
            Style::default().fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::styled(
            "Press [R] to run the computation script (3-5 minutes).",
            Style::default().fg(Color::White),
        ),
    ];

    let warning = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" NO DATA ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::LightYellow)),
        );
    f.render_widget(warning, area);
}
