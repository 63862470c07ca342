use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::info;

use unimanage::badge::{Badge, BadgeCategory, Badged};
use unimanage::dashboard::{self, QuickAction};
use unimanage::entities::{initials, Course, Faculty, Student};
use unimanage::intake::{Draft, IntakeDefaults, IntakeDialog, IntakeError};
use unimanage::nav::{Navigator, Section, SectionRouter};
use unimanage::notify::{Notification, Notifier, Severity, ToastQueue};
use unimanage::page::{Campus, ListPage};
use unimanage::search::Searchable;
use unimanage::stats::{self, StatCard};

const TICK: Duration = Duration::from_millis(250);
const PAGE_JUMP: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the page's search box
    Search,
    /// The page's add dialog is open
    Form,
}

pub struct App {
    pub campus: Campus,
    pub router: SectionRouter,
    pub toasts: ToastQueue,
    pub mode: InputMode,
    /// Focused input of the open dialog
    pub form_field: usize,
    pub student_state: TableState,
    pub faculty_state: TableState,
    pub course_state: TableState,
    pub action_state: ListState,
    pub show_detail: bool,
}

impl App {
    pub fn new(campus: Campus, start: Section) -> Self {
        let mut app = Self {
            campus,
            router: SectionRouter::new(start),
            toasts: ToastQueue::default(),
            mode: InputMode::Normal,
            form_field: 0,
            student_state: TableState::default(),
            faculty_state: TableState::default(),
            course_state: TableState::default(),
            action_state: ListState::default(),
            show_detail: false,
        };
        app.action_state.select(Some(0));
        for section in [Section::Students, Section::Faculty, Section::Courses] {
            app.reset_selection(section);
        }
        app
    }

    pub fn section(&self) -> Section {
        self.router.current()
    }

    fn is_list_page(&self) -> bool {
        matches!(
            self.section(),
            Section::Students | Section::Faculty | Section::Courses
        )
    }

    /// Visible row count and selection of a list page
    fn list_mut(&mut self, section: Section) -> Option<(usize, &mut TableState)> {
        match section {
            Section::Students => Some((self.campus.students.visible().len(), &mut self.student_state)),
            Section::Faculty => Some((self.campus.faculty.visible().len(), &mut self.faculty_state)),
            Section::Courses => Some((self.campus.courses.visible().len(), &mut self.course_state)),
            _ => None,
        }
    }

    /// First row selected, or nothing when the filtered list is empty
    fn reset_selection(&mut self, section: Section) {
        if let Some((len, state)) = self.list_mut(section) {
            if len == 0 {
                state.select(None);
            } else {
                state.select(Some(0));
            }
        }
    }

    pub fn next_section(&mut self) {
        let next = self.section().next();
        self.router.go(next);
        self.show_detail = false;
    }

    pub fn previous_section(&mut self) {
        let previous = self.section().previous();
        self.router.go(previous);
        self.show_detail = false;
    }

    pub fn navigate(&mut self, path: &str) {
        if self.router.navigate(path).is_some() {
            self.show_detail = false;
        }
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn next(&mut self) {
        if self.section() == Section::Dashboard {
            let i = self.action_state.selected().map_or(0, |i| (i + 1) % QuickAction::ALL.len());
            self.action_state.select(Some(i));
            return;
        }
        if let Some((len, state)) = self.list_mut(self.section()) {
            if len == 0 {
                return;
            }
            let i = match state.selected() {
                Some(i) if i + 1 < len => i + 1,
                _ => 0,
            };
            state.select(Some(i));
        }
    }

    pub fn previous(&mut self) {
        if self.section() == Section::Dashboard {
            let len = QuickAction::ALL.len();
            let i = self.action_state.selected().map_or(0, |i| (i + len - 1) % len);
            self.action_state.select(Some(i));
            return;
        }
        if let Some((len, state)) = self.list_mut(self.section()) {
            if len == 0 {
                return;
            }
            let i = match state.selected() {
                Some(0) | None => len - 1,
                Some(i) => i - 1,
            };
            state.select(Some(i));
        }
    }

    pub fn page_down(&mut self) {
        if let Some((len, state)) = self.list_mut(self.section()) {
            if len == 0 {
                return;
            }
            let i = state.selected().map_or(0, |i| (i + PAGE_JUMP).min(len - 1));
            state.select(Some(i));
        }
    }

    pub fn page_up(&mut self) {
        if let Some((_, state)) = self.list_mut(self.section()) {
            let i = state.selected().map_or(0, |i| i.saturating_sub(PAGE_JUMP));
            state.select(Some(i));
        }
    }

    fn select_edge(&mut self, last: bool) {
        if let Some((len, state)) = self.list_mut(self.section()) {
            if len > 0 {
                state.select(Some(if last { len - 1 } else { 0 }));
            }
        }
    }

    // ------------------------------------------------------------------------
    // Search, dialogs, actions
    // ------------------------------------------------------------------------

    fn edit_query(&mut self, edit: impl Fn(&mut String)) {
        let section = self.section();
        let mut query = self.query(section).to_string();
        edit(&mut query);
        match section {
            Section::Students => self.campus.students.set_query(query),
            Section::Faculty => self.campus.faculty.set_query(query),
            Section::Courses => self.campus.courses.set_query(query),
            _ => return,
        }
        self.reset_selection(section);
    }

    pub fn query(&self, section: Section) -> &str {
        match section {
            Section::Students => self.campus.students.query(),
            Section::Faculty => self.campus.faculty.query(),
            Section::Courses => self.campus.courses.query(),
            _ => "",
        }
    }

    /// Open the add dialog of `section`, navigating there first
    pub fn open_dialog(&mut self, section: Section) {
        match section {
            Section::Students => self.campus.students.dialog.open(),
            Section::Faculty => self.campus.faculty.dialog.open(),
            Section::Courses => self.campus.courses.dialog.open(),
            _ => return,
        }
        self.router.go(section);
        self.mode = InputMode::Form;
        self.form_field = 0;
        self.show_detail = false;
    }

    pub fn trigger_quick_action(&mut self, action: QuickAction) {
        match action.intake_target() {
            Some(section) => self.open_dialog(section),
            None => {
                info!(action = action.label(), "quick action not available");
                self.toasts.notify(Notification::info(
                    action.label(),
                    "Not available in this portal yet",
                ));
            }
        }
    }

    fn unavailable(&mut self, what: &str) {
        self.toasts
            .notify(Notification::info(what, "Editing and removing records is not available"));
    }

    /// Route a key press. Returns false when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.mode {
            InputMode::Form => {
                self.handle_form_key(key);
                true
            }
            InputMode::Search => {
                self.handle_search_key(key);
                true
            }
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.mode = InputMode::Normal,
            KeyCode::Esc => {
                self.edit_query(String::clear);
                self.mode = InputMode::Normal;
            }
            KeyCode::Backspace => self.edit_query(|q| {
                q.pop();
            }),
            KeyCode::Char(c) => self.edit_query(|q| q.push(c)),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let section = self.section();
        let defaults = &self.campus.defaults;
        let field = &mut self.form_field;
        let toasts = &mut self.toasts;

        let outcome = match section {
            Section::Students => form_key(&mut self.campus.students, field, key, defaults, toasts),
            Section::Faculty => form_key(&mut self.campus.faculty, field, key, defaults, toasts),
            Section::Courses => form_key(&mut self.campus.courses, field, key, defaults, toasts),
            _ => FormOutcome::Closed,
        };

        if outcome == FormOutcome::Closed {
            self.mode = InputMode::Normal;
            self.reset_selection(section);
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.previous_section();
                } else {
                    self.next_section();
                }
            }
            KeyCode::BackTab => self.previous_section(),
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                self.navigate(Section::ALL[index].path());
            }
            KeyCode::Char('/') if self.is_list_page() => self.mode = InputMode::Search,
            KeyCode::Char('c') if self.is_list_page() => self.edit_query(String::clear),
            KeyCode::Char('a') if self.is_list_page() => self.open_dialog(self.section()),
            KeyCode::Char('e') if self.is_list_page() => self.unavailable("Edit"),
            KeyCode::Char('d') if self.is_list_page() => self.unavailable("Delete"),
            KeyCode::Char('x') => self.toasts.dismiss(),
            KeyCode::Enter => {
                if self.section() == Section::Dashboard {
                    let selected = self.action_state.selected().unwrap_or(0);
                    if let Some(action) = QuickAction::ALL.get(selected).copied() {
                        self.trigger_quick_action(action);
                    }
                } else if self.is_list_page() {
                    self.show_detail = !self.show_detail;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home => self.select_edge(false),
            KeyCode::End => self.select_edge(true),
            _ => {}
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormOutcome {
    Editing,
    Closed,
}

/// One key press inside an add dialog
fn form_key<D>(
    page: &mut ListPage<D>,
    field: &mut usize,
    key: KeyEvent,
    defaults: &IntakeDefaults,
    toasts: &mut ToastQueue,
) -> FormOutcome
where
    D: Draft,
    D::Record: Searchable,
{
    let fields = D::FIELDS;
    let spec = fields[(*field).min(fields.len() - 1)];

    match key.code {
        KeyCode::Esc => {
            page.dialog.cancel();
            return FormOutcome::Closed;
        }
        KeyCode::Enter => {
            return match page.submit(defaults, toasts) {
                Ok(_) => FormOutcome::Closed,
                Err(IntakeError::MissingFields(missing)) => {
                    if let Some(first) = fields.iter().position(|f| missing.contains(&f.label)) {
                        *field = first;
                    }
                    FormOutcome::Editing
                }
                Err(_) => FormOutcome::Editing,
            };
        }
        KeyCode::Tab | KeyCode::Down => *field = (*field + 1) % fields.len(),
        KeyCode::BackTab | KeyCode::Up => *field = (*field + fields.len() - 1) % fields.len(),
        KeyCode::Left | KeyCode::Right if !spec.choices.is_empty() => {
            if let Some(value) = page.dialog.draft_mut().value_mut(*field) {
                let forward = key.code == KeyCode::Right;
                *value = cycle_choice(spec.choices, value, forward).to_string();
            }
        }
        KeyCode::Backspace if spec.choices.is_empty() => {
            if let Some(value) = page.dialog.draft_mut().value_mut(*field) {
                value.pop();
            }
        }
        KeyCode::Char(c) if spec.choices.is_empty() => {
            if let Some(value) = page.dialog.draft_mut().value_mut(*field) {
                value.push(c);
            }
        }
        _ => {}
    }
    FormOutcome::Editing
}

/// Next (or previous) option of a select; an unset select starts at the ends
fn cycle_choice(choices: &'static [&'static str], current: &str, forward: bool) -> &'static str {
    let len = choices.len();
    let next = match choices.iter().position(|c| *c == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    choices[next]
}

// ============================================================================
// Terminal loop
// ============================================================================

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Dashboard loop failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(TICK)? {
            app.toasts.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let searching = app.mode == InputMode::Search;
    let detail = app.show_detail;
    match app.section() {
        Section::Dashboard => render_dashboard(f, chunks[1], app),
        Section::Students => {
            let cards = app.campus.student_cards();
            render_list_page(f, chunks[1], &app.campus.students, &mut app.student_state, &cards, searching, detail);
        }
        Section::Faculty => {
            let cards = app.campus.faculty_cards();
            render_list_page(f, chunks[1], &app.campus.faculty, &mut app.faculty_state, &cards, searching, detail);
        }
        Section::Courses => {
            let cards = app.campus.course_cards();
            render_list_page(f, chunks[1], &app.campus.courses, &mut app.course_state, &cards, searching, detail);
        }
        other => render_placeholder(f, chunks[1], other),
    }

    if app.mode == InputMode::Form {
        let popup = centered_rect(60, 70, f.size());
        match app.section() {
            Section::Students => render_dialog(f, popup, &app.campus.students.dialog, app.form_field),
            Section::Faculty => render_dialog(f, popup, &app.campus.faculty.dialog, app.form_field),
            Section::Courses => render_dialog(f, popup, &app.campus.courses.dialog, app.form_field),
            _ => {}
        }
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![Span::styled(
        " 🎓 UniManage ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    for (i, section) in Section::ALL.iter().enumerate() {
        tab_spans.push(Span::raw(" │ "));

        let style = if app.router.is_active(*section) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(
            format!("{} {} {}", i + 1, section.icon(), section.title()),
            style,
        ));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn badge_style(category: BadgeCategory) -> Style {
    match category {
        BadgeCategory::Positive => Style::default().fg(Color::Green),
        BadgeCategory::Caution => Style::default().fg(Color::Yellow),
        BadgeCategory::Critical => Style::default().fg(Color::Red),
        BadgeCategory::Muted => Style::default().fg(Color::DarkGray),
        BadgeCategory::Primary => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        BadgeCategory::Informational => Style::default().fg(Color::Blue),
        BadgeCategory::Highlight => Style::default().fg(Color::Magenta),
        BadgeCategory::Outline => Style::default().add_modifier(Modifier::DIM),
    }
}

fn badge_cell(badge: Badge) -> Cell<'static> {
    Cell::from(format!("[{}]", badge.label)).style(badge_style(badge.category))
}

/// Text progress bar; a missing percentage renders empty
pub fn percent_bar(percent: Option<u32>, width: usize) -> String {
    let filled = percent.map_or(0, |p| (p.min(100) as usize * width + 50) / 100);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

fn header_row(headers: &[&'static str]) -> Row<'static> {
    let cells = headers.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });
    Row::new(cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1)
}

fn detail_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {}: ", label),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.into()),
    ])
}

/// How an entity shows up in its page table and detail panel
trait TableView {
    const TITLE: &'static str;
    const HEADERS: &'static [&'static str];

    fn widths() -> Vec<Constraint>;
    fn row(&self) -> Row<'static>;
    fn detail(&self) -> Vec<Line<'static>>;
}

impl TableView for Student {
    const TITLE: &'static str = " Student Records ";
    const HEADERS: &'static [&'static str] = &["Student", "Student ID", "Program", "Year", "GPA", "Status"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(26),
            Constraint::Length(11),
            Constraint::Length(25),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Length(12),
        ]
    }

    fn row(&self) -> Row<'static> {
        Row::new(vec![
            Cell::from(format!("({}) {}", initials(&self.name), truncate(&self.name, 19))),
            Cell::from(self.id.clone()),
            Cell::from(truncate(&self.program, 24)),
            Cell::from(self.year.as_str()),
            Cell::from(self.gpa.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            badge_cell(self.status.badge()),
        ])
        .height(1)
    }

    fn detail(&self) -> Vec<Line<'static>> {
        vec![
            detail_line("Name", self.name.clone()),
            detail_line("Email", self.email.clone()),
            detail_line("Student ID", self.id.clone()),
            detail_line("Program", self.program.clone()),
            detail_line("Year", self.year.as_str()),
            detail_line("GPA", self.gpa.clone()),
            detail_line("Enrolled", self.enrolled_date.format("%Y-%m-%d").to_string()),
            detail_line("Status", self.status.as_str()),
        ]
    }
}

impl TableView for Faculty {
    const TITLE: &'static str = " Faculty Members ";
    const HEADERS: &'static [&'static str] = &["Faculty", "Department", "Position", "Contact", "Experience", "Status"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(26),
            Constraint::Length(25),
            Constraint::Length(18),
            Constraint::Length(19),
            Constraint::Length(11),
            Constraint::Length(12),
        ]
    }

    fn row(&self) -> Row<'static> {
        Row::new(vec![
            Cell::from(format!("({}) {}", initials(&self.name), truncate(&self.name, 19))),
            Cell::from(truncate(&self.department, 24)),
            badge_cell(self.position.badge()),
            Cell::from(self.phone.clone()),
            Cell::from(self.experience.clone()),
            badge_cell(self.status.badge()),
        ])
        .height(1)
    }

    fn detail(&self) -> Vec<Line<'static>> {
        vec![
            detail_line("Name", self.name.clone()),
            detail_line("Email", self.email.clone()),
            detail_line("Faculty ID", self.id.clone()),
            detail_line("Department", self.department.clone()),
            detail_line("Position", self.position.as_str()),
            detail_line("Phone", self.phone.clone()),
            detail_line("Courses", self.courses.join(", ")),
            detail_line("Experience", self.experience.clone()),
            detail_line("Status", self.status.as_str()),
        ]
    }
}

impl TableView for Course {
    const TITLE: &'static str = " Course Catalog ";
    const HEADERS: &'static [&'static str] = &["Course", "Instructor", "Credits", "Enrollment", "Schedule", "Status"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(34),
            Constraint::Length(20),
            Constraint::Length(7),
            Constraint::Length(22),
            Constraint::Length(16),
            Constraint::Length(12),
        ]
    }

    fn row(&self) -> Row<'static> {
        let percent = self.enrollment_percentage();
        Row::new(vec![
            Cell::from(format!("{} • {}", self.id, truncate(&self.title, 24))),
            Cell::from(truncate(&self.instructor, 19)),
            Cell::from(self.credits.to_string()),
            Cell::from(format!(
                "{:>3}/{:<3} {}",
                self.enrolled,
                self.capacity,
                percent_bar(percent, 10)
            )),
            Cell::from(self.schedule.clone()),
            badge_cell(self.status.badge()),
        ])
        .height(1)
    }

    fn detail(&self) -> Vec<Line<'static>> {
        vec![
            detail_line("Title", self.title.clone()),
            detail_line("Course ID", self.id.clone()),
            detail_line("Department", self.department.clone()),
            detail_line("Instructor", self.instructor.clone()),
            detail_line("Credits", self.credits.to_string()),
            detail_line(
                "Enrollment",
                format!(
                    "{}/{} ({})",
                    self.enrolled,
                    self.capacity,
                    stats::format_percentage(self.enrollment_percentage())
                ),
            ),
            detail_line("Schedule", self.schedule.clone()),
            detail_line("Semester", self.semester.clone()),
            detail_line("Status", self.status.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", self.description),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ]
    }
}

fn render_cards(f: &mut Frame, area: Rect, cards: &[StatCard]) {
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len().max(1) as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let content = Line::from(vec![
            Span::styled(
                format!(" {} ", card.value),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(card.label, Style::default().fg(Color::DarkGray)),
        ]);
        let widget = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, *column);
    }
}

fn render_list_page<D>(
    f: &mut Frame,
    area: Rect,
    page: &ListPage<D>,
    state: &mut TableState,
    cards: &[StatCard],
    searching: bool,
    show_detail: bool,
) where
    D: Draft,
    D::Record: Searchable + TableView,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stat cards
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Table
        ])
        .split(area);

    render_cards(f, chunks[0], cards);

    let search_style = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if searching { "▏" } else { "" };
    let search = Paragraph::new(Line::from(vec![
        Span::raw(" 🔍 "),
        Span::styled(format!("{}{}", page.query(), cursor), search_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(" Search (/) "),
    );
    f.render_widget(search, chunks[1]);

    let visible = page.visible();
    let table_area = if show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Record list
                Constraint::Percentage(40), // Detail panel
            ])
            .split(chunks[2]);

        let selected = state.selected().and_then(|i| visible.get(i).copied());
        render_detail_panel(f, content_chunks[1], selected.map(|record| record.detail()));
        content_chunks[0]
    } else {
        chunks[2]
    };

    let rows = visible.iter().map(|record| record.row());
    let table = Table::new(rows, <D::Record as TableView>::widths())
        .header(header_row(<D::Record as TableView>::HEADERS))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(<D::Record as TableView>::TITLE),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, table_area, state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, lines: Option<Vec<Line<'static>>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Details ");

    let mut content = match lines {
        Some(lines) => lines,
        None => vec![Line::from("  No record selected")],
    };
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Press Enter to close",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    f.render_widget(Paragraph::new(content).block(block).wrap(Wrap { trim: false }), area);
}

fn render_dashboard(f: &mut Frame, area: Rect, app: &mut App) {
    let overview = app.campus.overview();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hero
            Constraint::Min(8),    // Activity + quick actions
            Constraint::Length(7), // Events + metrics
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "  University Management System",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Monitor students, faculty, courses, and analytics all in one place.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(format!("  {} ", overview.total_students), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("Total Students   "),
            Span::styled(format!("{} ", overview.faculty_members), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("Faculty Members   "),
            Span::styled(format!("{} ", overview.active_courses), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("Active Courses   "),
            Span::styled(
                format!("{} ", stats::format_percentage(overview.capacity_rate)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("Seats Filled"),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));
    f.render_widget(hero, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    let activity: Vec<ListItem> = dashboard::recent_activity()
        .into_iter()
        .map(|activity| {
            let badge = activity.status.badge();
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("({}) {} ", initials(activity.user), activity.user),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("[{}]", activity.kind.as_str()), badge_style(badge.category)),
                ]),
                Line::from(Span::raw(format!("    {} · {}", activity.action, activity.time))),
            ])
        })
        .collect();
    f.render_widget(
        List::new(activity).block(Block::default().borders(Borders::ALL).title(" Recent Activity ")),
        middle[0],
    );

    let actions: Vec<ListItem> = QuickAction::ALL
        .iter()
        .map(|action| {
            ListItem::new(Line::from(vec![
                Span::styled(action.label(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", action.description()), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    let actions = List::new(actions)
        .block(Block::default().borders(Borders::ALL).title(" Quick Actions "))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("→ ");
    f.render_stateful_widget(actions, middle[1], &mut app.action_state);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let events: Vec<Line> = dashboard::upcoming_events()
        .into_iter()
        .map(|event| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::Cyan)),
                Span::styled(event.title, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", event.when), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(events).block(Block::default().borders(Borders::ALL).title(" Upcoming Events ")),
        bottom[0],
    );

    let metrics: Vec<Line> = dashboard::performance_metrics()
        .into_iter()
        .map(|metric| {
            Line::from(vec![
                Span::raw(format!("  {:<22}", metric.label)),
                Span::styled(percent_bar(Some(metric.percent), 20), Style::default().fg(Color::Green)),
                Span::raw(format!(" {}%", metric.percent)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(metrics).block(Block::default().borders(Borders::ALL).title(" Performance Metrics ")),
        bottom[1],
    );
}

fn render_placeholder(f: &mut Frame, area: Rect, section: Section) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} {}", section.icon(), section.title()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", section.subtitle()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from("  This section is not available yet."),
    ];
    f.render_widget(
        Paragraph::new(content).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_dialog<D: Draft>(f: &mut Frame, area: Rect, dialog: &IntakeDialog<D>, focused: usize) {
    let mut lines = vec![Line::from("")];
    for (i, spec) in D::FIELDS.iter().enumerate() {
        let is_focused = i == focused;
        let marker = if is_focused { "→ " } else { "  " };
        let required = if spec.required { "*" } else { " " };
        let value = dialog.draft().value(i);

        let shown = if !spec.choices.is_empty() {
            if value.is_empty() {
                "◀ select ▶".to_string()
            } else {
                format!("◀ {} ▶", value)
            }
        } else if is_focused {
            format!("{}▏", value)
        } else {
            value.to_string()
        };

        let label_style = if is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}{:<14}", marker, required, spec.label), label_style),
            Span::raw(shown),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter add · Esc cancel · Tab/↑↓ field · ←/→ choose",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let title = format!(" Add New {} ", D::NOUN);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = Vec::new();

    if let Some(toast) = app.toasts.current() {
        let color = match toast.severity {
            Severity::Default => Color::Green,
            Severity::Info => Color::Cyan,
            Severity::Destructive => Color::Red,
        };
        status_spans.push(Span::styled(
            format!(" {}: {} ", toast.title, toast.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        status_spans.push(Span::raw(" | "));
    }

    let hints: &[(&str, &str)] = match (app.mode, app.section()) {
        (InputMode::Search, _) => &[("Enter", "Done"), ("Esc", "Clear")],
        (InputMode::Form, _) => &[("Enter", "Add"), ("Esc", "Cancel")],
        (InputMode::Normal, Section::Dashboard) => &[("↑/↓", "Action"), ("Enter", "Run"), ("Tab", "Page"), ("q", "Quit")],
        (InputMode::Normal, Section::Students | Section::Faculty | Section::Courses) => &[
            ("/", "Search"),
            ("a", "Add"),
            ("Enter", "Details"),
            ("Tab", "Page"),
            ("q", "Quit"),
        ],
        (InputMode::Normal, _) => &[("Tab", "Page"), ("q", "Quit")],
    };
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            status_spans.push(Span::raw(" | "));
        }
        status_spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(format!(" {}", label)));
    }

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn app() -> App {
        let defaults = IntakeDefaults {
            today: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            ..IntakeDefaults::default()
        };
        App::new(Campus::seeded(defaults), Section::Dashboard)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(!press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.section(), Section::Students);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.section(), Section::Settings);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.section(), Section::Courses);
        assert_eq!(app.router.current_path(), "/courses");
    }

    #[test]
    fn test_search_filters_and_resets_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.student_state.selected(), Some(1));

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, InputMode::Search);
        type_text(&mut app, "EMMA");
        assert_eq!(app.campus.students.visible().len(), 1);
        assert_eq!(app.student_state.selected(), Some(0));

        type_text(&mut app, "zz");
        assert_eq!(app.student_state.selected(), None);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.query(Section::Students), "");
        assert_eq!(app.campus.students.visible().len(), 4);
    }

    #[test]
    fn test_add_student_through_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, InputMode::Form);

        type_text(&mut app, "Ada Lovelace");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@university.edu");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right); // Computer Science
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left); // 4th Year
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, InputMode::Normal);
        let added = app.campus.students.store().get("STU005").unwrap();
        assert_eq!(added.name, "Ada Lovelace");
        assert_eq!(added.program, "Computer Science");
        assert_eq!(added.year.as_str(), "4th Year");
        assert_eq!(
            app.toasts.current().map(|n| n.message.as_str()),
            Some("Student added successfully")
        );
    }

    #[test]
    fn test_incomplete_form_stays_open_and_focuses_missing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Dr. New Hire");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, InputMode::Form);
        assert!(app.campus.faculty.dialog.is_open());
        assert_eq!(app.form_field, 1); // Email
        assert_eq!(app.campus.faculty.store().len(), 4);
        assert_eq!(app.toasts.current().map(|n| n.severity), Some(Severity::Destructive));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, InputMode::Normal);
        assert!(!app.campus.faculty.dialog.is_open());
    }

    #[test]
    fn test_quick_action_opens_course_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Down); // Create Course
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.section(), Section::Courses);
        assert_eq!(app.mode, InputMode::Form);
        assert!(app.campus.courses.dialog.is_open());
    }

    #[test]
    fn test_unbacked_quick_action_notifies() {
        let mut app = app();
        press(&mut app, KeyCode::Up); // wraps from Add Student to Send Notice
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.section(), Section::Dashboard);
        assert_eq!(app.mode, InputMode::Normal);
        let toast = app.toasts.current().unwrap();
        assert_eq!(toast.title, "Send Notice");
        assert_eq!(toast.severity, Severity::Info);
    }

    #[test]
    fn test_edit_and_delete_are_noops() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('e'));

        assert_eq!(app.campus.courses.store().len(), 4);
        assert_eq!(app.toasts.len(), 2);
    }

    #[test]
    fn test_cycle_choice() {
        let choices: &'static [&'static str] = &["a", "b", "c"];
        assert_eq!(cycle_choice(choices, "", true), "a");
        assert_eq!(cycle_choice(choices, "", false), "c");
        assert_eq!(cycle_choice(choices, "c", true), "a");
        assert_eq!(cycle_choice(choices, "a", false), "c");
    }

    #[test]
    fn test_percent_bar() {
        assert_eq!(percent_bar(Some(77), 10), "████████░░");
        assert_eq!(percent_bar(Some(0), 4), "░░░░");
        assert_eq!(percent_bar(Some(150), 4), "████");
        assert_eq!(percent_bar(None, 4), "░░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Introduction to Computer Science", 10), "Introdu...");
    }
}
