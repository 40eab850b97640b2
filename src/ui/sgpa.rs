use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use cgpa_genie::app::{App, Field, SubjectRow};
use cgpa_genie::catalog::Course;
use cgpa_genie::gpa::format_gpa;

use crate::ui::{format_number, frame_layout, render_help, render_status, render_title};

const CREDIT_COL: u16 = 10;
const GRADE_COL: u16 = 8;

pub fn render_course_select(app: &mut App, f: &mut Frame) {
    let [title, body, status, help] = frame_layout(f.area());
    render_title(f, title, "Select your course");

    let items: Vec<ListItem> = app
        .catalog
        .courses()
        .iter()
        .map(|c| {
            ListItem::new(format!(
                "{}  ({} subjects, {} credits)",
                c.name,
                c.subjects.len(),
                format_number(c.total_credits())
            ))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Courses"))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.course_index));
    f.render_stateful_widget(list, body, &mut state);

    render_status(f, status, app.status.as_ref());
    render_help(f, help, "(↑/↓) select  (enter) show subject reference  (esc) back");
}

/// Rows of the read-only subject reference table
pub fn reference_rows(course: &Course) -> Vec<Row<'static>> {
    course
        .subjects
        .iter()
        .map(|s| Row::new(vec![Cell::from(s.code.clone()), Cell::from(format_number(s.credit))]))
        .collect()
}

fn render_reference(f: &mut Frame, area: Rect, course: Option<&Course>) {
    let Some(course) = course else {
        f.render_widget(
            Paragraph::new("No course selected")
                .block(Block::default().borders(Borders::ALL).title("📚 Subject Reference")),
            area,
        );
        return;
    };

    let header = Row::new(vec![Cell::from("Subject Code"), Cell::from("Credit")]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let table = Table::new(
        reference_rows(course),
        [Constraint::Min(14), Constraint::Length(CREDIT_COL)],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("📚 {} ({} credits)", course.name, format_number(course.total_credits()))),
    );
    f.render_widget(table, area);
}

fn input_cell(text: &str, focused: bool) -> Cell<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Cell::from(text.to_string()).style(style)
}

/// One form row, highlighting the focused field
pub fn present_form_row(idx: usize, row: &SubjectRow, focus: Option<Field>) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!("{:>2}", idx + 1)).style(Style::default().fg(Color::Gray)),
        input_cell(&row.credit, focus == Some(Field::Credit)),
        input_cell(&row.grade, focus == Some(Field::Grade)),
    ])
}

fn render_form(app: &App, f: &mut Frame, area: Rect) {
    let form = &app.form;
    let rows: Vec<Row> = form
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| present_form_row(idx, row, (idx == form.row).then_some(form.field)))
        .collect();

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Credit"),
        Cell::from("Grade (S/A/B/...)"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let title = match app.last_sgpa {
        Some(sgpa) => format!("Subjects · last SGPA {}", format_gpa(sgpa)),
        None => "Subjects".to_string(),
    };
    let widths = [
        Constraint::Length(3),
        Constraint::Length(CREDIT_COL),
        Constraint::Min(GRADE_COL),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(table, area);

    // Place the terminal cursor after the focused text: border + header + row
    let visible_rows = area.height.saturating_sub(3) as usize;
    if form.row < visible_rows {
        let text = &form.rows[form.row];
        let (col_x, width) = match form.field {
            Field::Credit => (area.x + 1 + 3 + 1, text.credit.width() as u16),
            Field::Grade => (area.x + 1 + 3 + 1 + CREDIT_COL + 1, text.grade.width() as u16),
        };
        let y = area.y + 2 + form.row as u16;
        f.set_cursor_position(Position::new(col_x + width, y));
    }
}

pub fn render_sgpa_entry(app: &mut App, f: &mut Frame) {
    let [title, body, status, help] = frame_layout(f.area());
    render_title(f, title, "SGPA Calculator");

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body);

    render_reference(f, columns[0], app.course.as_ref());
    render_form(app, f, columns[1]);

    render_status(f, status, app.status.as_ref());
    let help_line = Line::from(vec![
        Span::raw("(tab) next field  (↑/↓) row  "),
        Span::styled("(ctrl+n) add subject", Style::default().fg(Color::Blue)),
        Span::raw("  (ctrl+d) remove  (ctrl+r) fill credits  "),
        Span::styled("(enter) calculate", Style::default().fg(Color::Green)),
        Span::raw("  (esc) back"),
    ]);
    f.render_widget(
        Paragraph::new(help_line).alignment(ratatui::layout::Alignment::Center),
        help,
    );
}
