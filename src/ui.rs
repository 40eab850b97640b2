pub mod cgpa;
pub mod history;
pub mod menu;
pub mod screen;
pub mod sgpa;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use cgpa_genie::app::{App, Status};

use crate::ui::screen::current_screen;

pub const APP_TITLE: &str = "CGPA Genie";

pub fn ui(app: &mut App, f: &mut Frame) {
    current_screen(&app.state).render(app, f);
}

/// Title bar, body and a two line footer (status + key help)
pub fn frame_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(3),    // body
            Constraint::Length(1), // status
            Constraint::Length(1), // help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

pub fn render_title(f: &mut Frame, area: Rect, subtitle: &str) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", subtitle),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

pub fn render_status(f: &mut Frame, area: Rect, status: Option<&Status>) {
    let line = match status {
        Some(Status::Info(msg)) => Span::styled(
            format!("✅ {}", msg),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Status::Error(msg)) => Span::styled(
            format!("❌ {}", msg),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => Span::raw(""),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn render_help(f: &mut Frame, area: Rect, help: &str) {
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(help, area);
}

/// Rect of `width` x `height` cells centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Credits and axis labels: whole numbers without decimals, else two places
pub fn format_number(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}
