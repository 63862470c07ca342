// 🏷️ Badge categories
//
// Every status and role value maps to one of a closed set of visual
// categories. The mappings are exhaustive matches: adding a status variant
// fails to compile until it is given a category.

use crate::dashboard::ActivityStatus;
use crate::entities::{CourseStatus, FacultyStatus, Position, StudentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeCategory {
    /// Accent: healthy / active
    Positive,
    /// Yellow: needs attention
    Caution,
    /// Red: cancelled / failed
    Critical,
    /// Secondary grey
    Muted,
    /// Brand colour
    Primary,
    /// Blue
    Informational,
    /// Purple
    Highlight,
    /// Border only
    Outline,
}

/// What a badge shows and how it is coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub category: BadgeCategory,
}

pub trait Badged {
    fn badge(&self) -> Badge;
}

fn badge(label: &'static str, category: BadgeCategory) -> Badge {
    Badge { label, category }
}

impl Badged for StudentStatus {
    fn badge(&self) -> Badge {
        match self {
            StudentStatus::Active => badge(self.as_str(), BadgeCategory::Positive),
            StudentStatus::Inactive => badge(self.as_str(), BadgeCategory::Muted),
        }
    }
}

impl Badged for FacultyStatus {
    fn badge(&self) -> Badge {
        match self {
            FacultyStatus::Active => badge(self.as_str(), BadgeCategory::Positive),
            FacultyStatus::OnLeave => badge(self.as_str(), BadgeCategory::Caution),
        }
    }
}

impl Badged for Position {
    fn badge(&self) -> Badge {
        let category = match self {
            Position::Professor => BadgeCategory::Primary,
            Position::AssociateProfessor => BadgeCategory::Informational,
            Position::AssistantProfessor => BadgeCategory::Highlight,
            Position::Lecturer => BadgeCategory::Outline,
        };
        badge(self.short_label(), category)
    }
}

impl Badged for CourseStatus {
    fn badge(&self) -> Badge {
        let category = match self {
            CourseStatus::Active => BadgeCategory::Positive,
            CourseStatus::Full => BadgeCategory::Caution,
            CourseStatus::Cancelled => BadgeCategory::Critical,
        };
        badge(self.as_str(), category)
    }
}

impl Badged for ActivityStatus {
    fn badge(&self) -> Badge {
        let category = match self {
            ActivityStatus::Success => BadgeCategory::Positive,
            ActivityStatus::Warning => BadgeCategory::Caution,
            ActivityStatus::Info => BadgeCategory::Primary,
        };
        badge(self.as_str(), category)
    }
}
