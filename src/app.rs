//! Presentation controller: screen state, form buffers and key handling.
//! Rendering lives in the binary; everything here can be driven headlessly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use crate::catalog::{Catalog, Course};
use crate::config::Config;
use crate::error::{GpaError, GpaResult};
use crate::gpa::{cgpa_for_session, compute_sgpa, format_gpa, Cgpa, SubjectEntry};
use crate::history::SessionHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    CourseSelect,
    SgpaEntry,
    CgpaManual,
    CgpaResult,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum MenuItem {
    #[strum(to_string = "Calculate SGPA")]
    Sgpa,
    #[strum(to_string = "Calculate CGPA")]
    Cgpa,
    #[strum(to_string = "Session history")]
    History,
    #[strum(to_string = "Exit")]
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Sgpa,
        MenuItem::Cgpa,
        MenuItem::History,
        MenuItem::Exit,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Credit,
    Grade,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Raw text of one credit/grade row as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectRow {
    pub credit: String,
    pub grade: String,
}

impl SubjectRow {
    fn is_blank(&self) -> bool {
        self.credit.trim().is_empty() && self.grade.trim().is_empty()
    }
}

/// The SGPA form: one row per subject plus the focused cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SgpaForm {
    pub rows: Vec<SubjectRow>,
    pub row: usize,
    pub field: Field,
}

impl SgpaForm {
    pub fn new(rows: usize) -> Self {
        Self {
            rows: vec![SubjectRow::default(); rows.max(1)],
            row: 0,
            field: Field::Credit,
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(SubjectRow::default());
        self.row = self.rows.len() - 1;
        self.field = Field::Credit;
    }

    /// Drops the focused row; the form always keeps at least one.
    pub fn remove_row(&mut self) {
        if self.rows.len() > 1 {
            self.rows.remove(self.row);
            self.row = self.row.min(self.rows.len() - 1);
        } else {
            self.rows[0] = SubjectRow::default();
        }
        self.field = Field::Credit;
    }

    pub fn next_field(&mut self) {
        match self.field {
            Field::Credit => self.field = Field::Grade,
            Field::Grade => {
                if self.row + 1 < self.rows.len() {
                    self.row += 1;
                    self.field = Field::Credit;
                }
            }
        }
    }

    pub fn prev_field(&mut self) {
        match self.field {
            Field::Grade => self.field = Field::Credit,
            Field::Credit => {
                if self.row > 0 {
                    self.row -= 1;
                    self.field = Field::Grade;
                }
            }
        }
    }

    pub fn row_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn row_down(&mut self) {
        if self.row + 1 < self.rows.len() {
            self.row += 1;
        }
    }

    pub fn focused_mut(&mut self) -> &mut String {
        let row = &mut self.rows[self.row];
        match self.field {
            Field::Credit => &mut row.credit,
            Field::Grade => &mut row.grade,
        }
    }

    /// Make one row per reference subject, carrying its nominal credit.
    /// Grades already typed are kept in place.
    pub fn fill_credits(&mut self, course: &Course) {
        for (idx, subject) in course.subjects.iter().enumerate() {
            if idx == self.rows.len() {
                self.rows.push(SubjectRow::default());
            }
            self.rows[idx].credit = subject.credit.to_string();
        }
    }

    /// Typed entries for every non-blank row. Blank rows are skipped so an
    /// unused "add subject" row does not fail the calculation.
    pub fn entries(&self) -> GpaResult<Vec<SubjectEntry>> {
        self.rows
            .iter()
            .filter(|r| !r.is_blank())
            .map(|r| SubjectEntry::parse(&r.credit, &r.grade))
            .collect()
    }
}

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub config: Config,
    pub catalog: Catalog,
    pub history: SessionHistory,
    pub menu_index: usize,
    pub course_index: usize,
    pub course: Option<Course>,
    pub form: SgpaForm,
    pub manual_input: String,
    pub last_sgpa: Option<f64>,
    pub last_cgpa: Option<Cgpa>,
    pub status: Option<Status>,
}

impl App {
    pub fn new(config: Config, catalog: Catalog, history: SessionHistory) -> Self {
        let course_index = config
            .default_course
            .as_deref()
            .and_then(|name| catalog.position(name))
            .unwrap_or(0);

        Self {
            state: AppState::Menu,
            form: SgpaForm::new(config.starting_rows),
            config,
            catalog,
            history,
            menu_index: 0,
            course_index,
            course: None,
            manual_input: String::new(),
            last_sgpa: None,
            last_cgpa: None,
            status: None,
        }
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_index.min(MenuItem::ALL.len() - 1)]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        match self.state {
            AppState::Menu => return self.on_menu_key(key),
            AppState::CourseSelect => self.on_course_key(key),
            AppState::SgpaEntry => self.on_sgpa_key(key),
            AppState::CgpaManual => self.on_manual_key(key),
            AppState::CgpaResult | AppState::History => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('b') => {
                    self.go_to(AppState::Menu)
                }
                _ => {}
            },
        }
        Control::Continue
    }

    fn go_to(&mut self, state: AppState) {
        self.state = state;
        self.status = None;
    }

    fn on_menu_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_index = self.menu_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_index = (self.menu_index + 1).min(MenuItem::ALL.len() - 1);
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.menu_index = c as usize - '1' as usize;
                return self.activate(self.selected_menu_item());
            }
            KeyCode::Enter => return self.activate(self.selected_menu_item()),
            _ => {}
        }
        Control::Continue
    }

    pub fn activate(&mut self, item: MenuItem) -> Control {
        match item {
            MenuItem::Sgpa => self.go_to(AppState::CourseSelect),
            MenuItem::Cgpa => self.open_cgpa(),
            MenuItem::History => self.go_to(AppState::History),
            MenuItem::Exit => return Control::Quit,
        }
        Control::Continue
    }

    fn on_course_key(&mut self, key: KeyEvent) {
        let count = self.catalog.courses().len();
        match key.code {
            KeyCode::Esc => self.go_to(AppState::Menu),
            KeyCode::Up | KeyCode::Char('k') => {
                self.course_index = self.course_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.course_index = (self.course_index + 1).min(count - 1);
            }
            KeyCode::Enter => self.choose_course(),
            _ => {}
        }
    }

    fn choose_course(&mut self) {
        let Some(course) = self.catalog.courses().get(self.course_index).cloned() else {
            self.status = Some(Status::Error("Please select a course.".into()));
            return;
        };

        info!(course = %course.name, "course selected");
        self.config.default_course = Some(course.name.clone());
        self.course = Some(course);
        self.form = SgpaForm::new(self.config.starting_rows);
        self.last_sgpa = None;
        self.go_to(AppState::SgpaEntry);
    }

    fn on_sgpa_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.go_to(AppState::CourseSelect),
            KeyCode::Char('n') if ctrl => self.form.add_row(),
            KeyCode::Char('d') if ctrl => self.form.remove_row(),
            KeyCode::Char('r') if ctrl => {
                if let Some(course) = &self.course {
                    self.form.fill_credits(course);
                    self.status = Some(Status::Info(format!(
                        "Credits filled from the {} reference",
                        course.name
                    )));
                }
            }
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            KeyCode::Up => self.form.row_up(),
            KeyCode::Down => self.form.row_down(),
            KeyCode::Left => self.form.field = Field::Credit,
            KeyCode::Right => self.form.field = Field::Grade,
            KeyCode::Backspace => {
                self.form.focused_mut().pop();
            }
            KeyCode::Enter => self.submit_sgpa(),
            KeyCode::Char(c) if !ctrl => {
                self.form.focused_mut().push(c);
                self.status = None;
            }
            _ => {}
        }
    }

    /// Validate the form, compute and (if enabled) record the SGPA.
    pub fn submit_sgpa(&mut self) {
        match self.form.entries().and_then(|entries| compute_sgpa(&entries)) {
            Ok(sgpa) => {
                self.last_sgpa = Some(sgpa);
                if self.config.record_sessions {
                    self.history
                        .record_for(sgpa, self.course.as_ref().map(|c| c.name.clone()));
                }
                self.status = Some(Status::Info(format!(
                    "Your SGPA is: {}",
                    format_gpa(sgpa)
                )));
            }
            Err(err) => self.report(err),
        }
    }

    fn open_cgpa(&mut self) {
        if self.history.is_empty() {
            self.manual_input.clear();
            self.go_to(AppState::CgpaManual);
        } else {
            self.finish_cgpa(None);
        }
    }

    fn on_manual_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_to(AppState::Menu),
            KeyCode::Backspace => {
                self.manual_input.pop();
            }
            KeyCode::Enter => {
                let input = self.manual_input.clone();
                self.finish_cgpa(Some(&input));
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.manual_input.push(c);
                self.status = None;
            }
            _ => {}
        }
    }

    fn finish_cgpa(&mut self, manual: Option<&str>) {
        match cgpa_for_session(&self.history, manual) {
            Ok(cgpa) => {
                info!(cgpa = cgpa.value, source = %cgpa.source, "cgpa calculated");
                self.last_cgpa = Some(cgpa);
                self.go_to(AppState::CgpaResult);
            }
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: GpaError) {
        warn!(%err, state = ?self.state, "calculation rejected");
        self.status = Some(Status::Error(err.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Subject;
    use crate::gpa::CgpaSource;
    use crate::history::HistoryState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course {
                name: "Alpha".into(),
                subjects: vec![
                    Subject {
                        code: "A1".into(),
                        credit: 4.0,
                    },
                    Subject {
                        code: "A2".into(),
                        credit: 3.0,
                    },
                ],
            },
            Course {
                name: "Beta".into(),
                subjects: vec![Subject {
                    code: "B1".into(),
                    credit: 2.0,
                }],
            },
        ])
    }

    fn new_app() -> App {
        App::new(Config::default(), test_catalog(), SessionHistory::new())
    }

    /// Menu -> SGPA -> first course, with the form focused on row 0.
    fn open_form(app: &mut App) {
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.state, AppState::CourseSelect);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::SgpaEntry);
    }

    fn enter_row(app: &mut App, credit: &str, grade: &str) {
        type_str(app, credit);
        app.handle_key(key(KeyCode::Tab));
        type_str(app, grade);
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = new_app();
        assert_eq!(app.selected_menu_item(), MenuItem::Sgpa);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_menu_item(), MenuItem::History);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.selected_menu_item(), MenuItem::Exit);
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Control::Quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Control::Quit);
        app.state = AppState::SgpaEntry;
        assert_eq!(app.handle_key(ctrl('c')), Control::Quit);
    }

    #[test]
    fn test_sgpa_flow_records_history() {
        let mut app = new_app();
        open_form(&mut app);
        enter_row(&mut app, "4", "S");
        app.handle_key(ctrl('n'));
        enter_row(&mut app, "3", "a");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.last_sgpa, Some(9.57));
        assert_eq!(
            app.status,
            Some(Status::Info("Your SGPA is: 9.57".into()))
        );
        assert_eq!(app.history.values(), vec![9.57]);
        assert_eq!(app.history.records()[0].course.as_deref(), Some("Alpha"));
        assert_eq!(app.config.default_course.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_whole_sgpa_status_shows_two_places() {
        let mut app = new_app();
        open_form(&mut app);
        enter_row(&mut app, "2", "b");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(
            app.status,
            Some(Status::Info("Your SGPA is: 8.00".into()))
        );
    }

    #[test]
    fn test_sgpa_error_leaves_history_untouched() {
        let mut app = new_app();
        open_form(&mut app);
        enter_row(&mut app, "4", "z");
        app.handle_key(key(KeyCode::Enter));

        assert!(matches!(app.status, Some(Status::Error(ref m)) if m.contains("invalid grade")));
        assert_eq!(app.history.state(), HistoryState::Empty);
        assert_eq!(app.last_sgpa, None);
    }

    #[test]
    fn test_sgpa_non_numeric_credit() {
        let mut app = new_app();
        open_form(&mut app);
        enter_row(&mut app, "four", "s");
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.status, Some(Status::Error(ref m)) if m.contains("invalid credit")));
    }

    #[test]
    fn test_sgpa_blank_form_is_empty_input() {
        let mut app = new_app();
        open_form(&mut app);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.status,
            Some(Status::Error(GpaError::EmptyInput.to_string()))
        );
    }

    #[test]
    fn test_recording_can_be_disabled() {
        let config = Config {
            record_sessions: false,
            ..Config::default()
        };
        let mut app = App::new(config, test_catalog(), SessionHistory::new());
        open_form(&mut app);
        enter_row(&mut app, "2", "b");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.last_sgpa, Some(8.0));
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_fill_credits_from_reference() {
        let mut app = new_app();
        open_form(&mut app);
        app.handle_key(key(KeyCode::Right));
        type_str(&mut app, "s");
        app.handle_key(ctrl('r'));

        assert_eq!(app.form.rows.len(), 2);
        assert_eq!(app.form.rows[0].credit, "4");
        assert_eq!(app.form.rows[0].grade, "s");
        assert_eq!(app.form.rows[1].credit, "3");

        app.handle_key(key(KeyCode::Down));
        type_str(&mut app, "a");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.last_sgpa, Some(9.57));
    }

    #[test]
    fn test_remove_row_keeps_one() {
        let mut form = SgpaForm::new(1);
        form.focused_mut().push('4');
        form.remove_row();
        assert_eq!(form.rows, vec![SubjectRow::default()]);

        form.add_row();
        form.add_row();
        assert_eq!(form.row, 2);
        form.remove_row();
        assert_eq!(form.rows.len(), 2);
        assert_eq!(form.row, 1);
    }

    #[test]
    fn test_form_field_traversal() {
        let mut form = SgpaForm::new(2);
        form.next_field();
        assert_eq!((form.row, form.field), (0, Field::Grade));
        form.next_field();
        assert_eq!((form.row, form.field), (1, Field::Credit));
        form.next_field();
        form.next_field();
        assert_eq!((form.row, form.field), (1, Field::Grade));
        form.prev_field();
        form.prev_field();
        assert_eq!((form.row, form.field), (0, Field::Grade));
    }

    #[test]
    fn test_cgpa_manual_when_history_empty() {
        let mut app = new_app();
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.state, AppState::CgpaManual);

        type_str(&mut app, "[8.5, 9.0, 8.0]");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::CgpaResult);
        let cgpa = app.last_cgpa.clone().unwrap();
        assert_eq!(cgpa.value, 8.5);
        assert_eq!(cgpa.source, CgpaSource::Manual);
    }

    #[test]
    fn test_cgpa_manual_rejects_malformed_text() {
        let mut app = new_app();
        app.handle_key(key(KeyCode::Char('2')));
        type_str(&mut app, "eval('8')");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state, AppState::CgpaManual);
        assert!(matches!(app.status, Some(Status::Error(ref m)) if m.starts_with("invalid input format")));
        assert!(app.last_cgpa.is_none());
    }

    #[test]
    fn test_cgpa_uses_session_history() {
        let history = SessionHistory::with_values(&[9.57, 8.0]);
        let mut app = App::new(Config::default(), test_catalog(), history);
        app.handle_key(key(KeyCode::Char('2')));

        assert_eq!(app.state, AppState::CgpaResult);
        let cgpa = app.last_cgpa.clone().unwrap();
        assert_eq!(cgpa.value, 8.79);
        assert_eq!(cgpa.source, CgpaSource::Session);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Menu);
    }

    #[test]
    fn test_default_course_preselected() {
        let config = Config {
            default_course: Some("beta".into()),
            ..Config::default()
        };
        let app = App::new(config, test_catalog(), SessionHistory::new());
        assert_eq!(app.course_index, 1);
    }

    #[test]
    fn test_escape_walks_back() {
        let mut app = new_app();
        open_form(&mut app);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state, AppState::CourseSelect);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Menu);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.state, AppState::History);
        app.handle_key(key(KeyCode::Char('b')));
        assert_eq!(app.state, AppState::Menu);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = new_app();
        let mut release = key(KeyCode::Esc);
        release.kind = KeyEventKind::Release;
        assert_eq!(app.handle_key(release), Control::Continue);
        assert_eq!(app.state, AppState::Menu);
    }
}
