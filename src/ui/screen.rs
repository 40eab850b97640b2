use ratatui::Frame;

use cgpa_genie::app::{App, AppState};

use crate::ui::{cgpa, history, menu, sgpa};

/// A UI Screen boundary: responsible for rendering one app state
pub trait Screen {
    fn render(&self, app: &mut App, f: &mut Frame);
}

pub struct MenuScreen;

impl Screen for MenuScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        menu::render_menu(app, f);
    }
}

pub struct CourseSelectScreen;

impl Screen for CourseSelectScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        sgpa::render_course_select(app, f);
    }
}

/// Reference table plus the credit/grade form
pub struct SgpaEntryScreen;

impl Screen for SgpaEntryScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        sgpa::render_sgpa_entry(app, f);
    }
}

pub struct CgpaManualScreen;

impl Screen for CgpaManualScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        cgpa::render_manual_input(app, f);
    }
}

pub struct CgpaResultScreen;

impl Screen for CgpaResultScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        cgpa::render_result(app, f);
    }
}

pub struct HistoryScreen;

impl Screen for HistoryScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        history::render_history(app, f);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Menu => Box::new(MenuScreen),
        AppState::CourseSelect => Box::new(CourseSelectScreen),
        AppState::SgpaEntry => Box::new(SgpaEntryScreen),
        AppState::CgpaManual => Box::new(CgpaManualScreen),
        AppState::CgpaResult => Box::new(CgpaResultScreen),
        AppState::History => Box::new(HistoryScreen),
    }
}
