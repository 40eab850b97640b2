use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};

use cgpa_genie::app::App;
use cgpa_genie::gpa::format_gpa;
use cgpa_genie::history::SgpaRecord;

use crate::ui::{format_number, frame_layout, render_help, render_status, render_title};

/// (semester, sgpa) points for the trend chart, semesters counted from 1
pub fn chart_points(records: &[SgpaRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .enumerate()
        .map(|(idx, r)| ((idx + 1) as f64, r.sgpa))
        .collect()
}

pub fn present_record(idx: usize, record: &SgpaRecord) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!("{}", idx + 1)),
        Cell::from(format_gpa(record.sgpa)).style(Style::default().fg(Color::Green)),
        Cell::from(record.course.clone().unwrap_or_else(|| "-".to_string())),
        Cell::from(record.recorded_at.format("%H:%M:%S").to_string()),
    ])
}

pub fn render_history(app: &mut App, f: &mut Frame) {
    let [title, body, status, help] = frame_layout(f.area());
    render_title(f, title, "Session history");

    let records = app.history.records();
    if records.is_empty() {
        let empty = Paragraph::new(
            "No SGPA calculated this session yet.\nHistory is kept only while the app runs.",
        )
        .block(Block::default().borders(Borders::ALL).title("No Data"))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
        f.render_widget(empty, body);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(10)])
            .split(body);

        let header = Row::new(vec![
            Cell::from("Sem"),
            Cell::from("SGPA"),
            Cell::from("Course"),
            Cell::from("Time"),
        ])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        let rows: Vec<Row> = records
            .iter()
            .enumerate()
            .map(|(idx, r)| present_record(idx, r))
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Min(12),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .column_spacing(2)
        .block(Block::default().borders(Borders::ALL).title("SGPAs"));
        f.render_widget(table, chunks[0]);

        let points = chart_points(records);
        let x_max = (points.len() as f64).max(2.0);
        let datasets = vec![Dataset::default()
            .marker(Marker::Braille)
            .style(Style::default().fg(Color::Magenta))
            .graph_type(GraphType::Line)
            .data(&points)];
        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title("Trend"))
            .x_axis(
                Axis::default()
                    .title("semester")
                    .bounds([1.0, x_max])
                    .labels(vec![Span::raw("1"), Span::raw(format_number(x_max))]),
            )
            .y_axis(
                Axis::default()
                    .title("SGPA")
                    .bounds([0.0, 10.0])
                    .labels(vec![Span::raw("0"), Span::raw("5"), Span::raw("10")]),
            );
        f.render_widget(chart, chunks[1]);
    }

    render_status(f, status, app.status.as_ref());
    render_help(f, help, "(b/esc) back to menu");
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgpa_genie::history::SessionHistory;

    #[test]
    fn test_chart_points_count_semesters_from_one() {
        let history = SessionHistory::with_values(&[9.57, 8.0]);
        assert_eq!(chart_points(history.records()), vec![(1.0, 9.57), (2.0, 8.0)]);
    }
}
