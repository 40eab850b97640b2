use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use cgpa_genie::app::{App, MenuItem};

use crate::ui::{centered_rect, frame_layout, render_help, render_status, render_title};

fn menu_color(item: MenuItem) -> Color {
    match item {
        MenuItem::Sgpa => Color::Blue,
        MenuItem::Cgpa => Color::Green,
        MenuItem::History => Color::Magenta,
        MenuItem::Exit => Color::Red,
    }
}

pub fn render_menu(app: &mut App, f: &mut Frame) {
    let [title, body, status, help] = frame_layout(f.area());
    let subtitle = match app.history.len() {
        0 => "SGPA & CGPA calculator".to_string(),
        1 => "1 SGPA this session".to_string(),
        n => format!("{} SGPAs this session", n),
    };
    render_title(f, title, &subtitle);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            ListItem::new(format!(" {}  {}", idx + 1, item))
                .style(Style::default().fg(menu_color(*item)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.menu_index));
    let height = MenuItem::ALL.len() as u16 + 2;
    f.render_stateful_widget(list, centered_rect(36, height, body), &mut state);

    render_status(f, status, app.status.as_ref());
    render_help(f, help, "(↑/↓) select  (enter) open  (1-4) jump  (q/esc) quit");
}
