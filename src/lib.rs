// UniManage - Core Library
// Exposes all modules for use in the dashboard binary and tests

pub mod badge;      // Status/role → visual category
pub mod cli;
pub mod config;
pub mod dashboard;  // Overview, activity feed, quick actions
pub mod entities;   // Students, faculty, courses + seed data
pub mod intake;     // "Add ..." dialogs
pub mod logging;
pub mod nav;        // Sidebar sections + router
pub mod notify;     // Toasts
pub mod page;       // List pages: store + search + dialog
pub mod report;     // Headless summary/list output
pub mod search;
pub mod stats;      // Stat cards
pub mod store;

// Re-export commonly used types
pub use badge::{Badge, BadgeCategory, Badged};
pub use config::AppConfig;
pub use entities::{
    AcademicYear, Course, CourseStatus, Faculty, FacultyStatus, Position, Student,
    StudentStatus, DEPARTMENTS,
};
pub use intake::{
    CourseDraft, DialogState, Draft, FacultyDraft, IntakeDefaults, IntakeDialog, IntakeError,
    StudentDraft,
};
pub use nav::{Navigator, Section, SectionRouter};
pub use notify::{Notification, Notifier, Severity, ToastQueue};
pub use page::{Campus, CoursePage, FacultyPage, ListPage, StudentPage};
pub use search::{filter, Searchable};
pub use stats::{percentage, StatCard};
pub use store::{EntityStore, Record};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
