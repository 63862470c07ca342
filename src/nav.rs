// 🧭 Navigation - sidebar sections and the current path

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Students,
    Faculty,
    Courses,
    Schedule,
    Analytics,
    Settings,
}

impl Section {
    /// Sidebar order
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Students,
        Section::Faculty,
        Section::Courses,
        Section::Schedule,
        Section::Analytics,
        Section::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Section::Dashboard => "/",
            Section::Students => "/students",
            Section::Faculty => "/faculty",
            Section::Courses => "/courses",
            Section::Schedule => "/schedule",
            Section::Analytics => "/analytics",
            Section::Settings => "/settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Students => "Students",
            Section::Faculty => "Faculty",
            Section::Courses => "Courses",
            Section::Schedule => "Schedule",
            Section::Analytics => "Analytics",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "⌂",
            Section::Students => "👥",
            Section::Faculty => "✔",
            Section::Courses => "📖",
            Section::Schedule => "📅",
            Section::Analytics => "📊",
            Section::Settings => "⚙",
        }
    }

    /// Subtitle under the page heading
    pub fn subtitle(&self) -> &'static str {
        match self {
            Section::Dashboard => "University Management System",
            Section::Students => "Manage student records and enrollment",
            Section::Faculty => "Manage faculty members and academic staff",
            Section::Courses => "Manage course catalog and enrollment",
            Section::Schedule => "Timetables and room bookings",
            Section::Analytics => "Reports and trends",
            Section::Settings => "Portal preferences",
        }
    }

    /// Sections that have a page behind them; the rest show a placeholder
    pub fn is_implemented(&self) -> bool {
        matches!(
            self,
            Section::Dashboard | Section::Students | Section::Faculty | Section::Courses
        )
    }

    /// Exact path match; a trailing slash is tolerated
    pub fn from_path(path: &str) -> Option<Section> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Section::ALL
            .into_iter()
            .find(|section| section.path() == normalized)
    }

    pub fn next(&self) -> Self {
        let index = self.index();
        Section::ALL[(index + 1) % Section::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let index = self.index();
        Section::ALL[(index + Section::ALL.len() - 1) % Section::ALL.len()]
    }

    fn index(&self) -> usize {
        Section::ALL
            .iter()
            .position(|section| section == self)
            .unwrap_or(0)
    }
}

/// Routing capability
pub trait Navigator {
    /// Go to `path`; returns the section navigated to, None if unknown
    fn navigate(&mut self, path: &str) -> Option<Section>;

    fn current_path(&self) -> &str;

    /// Is `section` the one the sidebar should highlight?
    fn is_active(&self, section: Section) -> bool {
        self.current_path() == section.path()
    }
}

/// In-process router over the fixed sidebar sections
#[derive(Debug, Clone)]
pub struct SectionRouter {
    current: Section,
}

impl SectionRouter {
    pub fn new(start: Section) -> Self {
        SectionRouter { current: start }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn go(&mut self, section: Section) {
        if section != self.current {
            info!(from = self.current.path(), to = section.path(), "navigate");
        }
        self.current = section;
    }
}

impl Default for SectionRouter {
    fn default() -> Self {
        SectionRouter::new(Section::Dashboard)
    }
}

impl Navigator for SectionRouter {
    fn navigate(&mut self, path: &str) -> Option<Section> {
        match Section::from_path(path) {
            Some(section) => {
                self.go(section);
                Some(section)
            }
            None => {
                warn!(path, "unknown path, staying on {}", self.current.path());
                None
            }
        }
    }

    fn current_path(&self) -> &str {
        self.current.path()
    }
}
