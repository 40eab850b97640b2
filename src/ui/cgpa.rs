use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use cgpa_genie::app::App;
use cgpa_genie::gpa::format_gpa;

use crate::ui::{centered_rect, frame_layout, render_help, render_status, render_title};

pub fn render_manual_input(app: &mut App, f: &mut Frame) {
    let [title, body, status, help] = frame_layout(f.area());
    render_title(f, title, "CGPA Calculator");

    let area = centered_rect(64, 7, body);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .split(area);

    let prompt = Paragraph::new(
        "No SGPA calculated this session. Enter your previous SGPAs like [8.5, 9.0, 8.0]:",
    )
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true });
    f.render_widget(prompt, chunks[0]);

    let input = Paragraph::new(app.manual_input.as_str())
        .block(Block::default().borders(Borders::ALL).title("SGPA list"));
    f.render_widget(input, chunks[1]);

    let inner_width = chunks[1].width.saturating_sub(2);
    let cursor_x = (app.manual_input.width() as u16).min(inner_width.saturating_sub(1));
    f.set_cursor_position(Position::new(chunks[1].x + 1 + cursor_x, chunks[1].y + 1));

    render_status(f, status, app.status.as_ref());
    render_help(f, help, "(enter) calculate  (backspace) delete  (esc) back");
}

pub fn render_result(app: &mut App, f: &mut Frame) {
    let [title, body, status, help] = frame_layout(f.area());
    render_title(f, title, "CGPA Result");

    let lines = match &app.last_cgpa {
        Some(cgpa) => vec![
            Line::from(Span::styled(
                format!("📊 Your CGPA ({}): {}", cgpa.source, format_gpa(cgpa.value)),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "averaged over {} semester{}",
                    cgpa.semesters,
                    if cgpa.semesters == 1 { "" } else { "s" }
                ),
                Style::default().fg(Color::Gray),
            )),
        ],
        None => vec![Line::from("No CGPA calculated yet.")],
    };

    let result = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(result, centered_rect(56, 5, body));

    render_status(f, status, app.status.as_ref());
    render_help(f, help, "(enter/esc) back to menu");
}
