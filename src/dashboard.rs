// 🏠 Dashboard overview
//
// The landing page: headline totals drawn from the live stores, plus the
// activity feed, quick actions, upcoming events and performance metrics.
// Only the totals are computed; the rest is demo content.

use crate::entities::{Course, Faculty, Student};
use crate::nav::Section;
use crate::stats;
use crate::store::EntityStore;

// ============================================================================
// OVERVIEW
// ============================================================================

/// Hero and stats-grid numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub total_students: usize,
    pub faculty_members: usize,
    pub active_courses: usize,
    /// Seats filled across the catalog
    pub capacity_rate: Option<u32>,
}

impl Overview {
    pub fn compute(
        students: &EntityStore<Student>,
        faculty: &EntityStore<Faculty>,
        courses: &EntityStore<Course>,
    ) -> Self {
        let catalog = stats::CourseStats::compute(courses);
        Overview {
            total_students: students.len(),
            faculty_members: faculty.len(),
            active_courses: catalog.active,
            capacity_rate: catalog.capacity_rate,
        }
    }
}

// ============================================================================
// RECENT ACTIVITY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Enrollment,
    Grade,
    Attendance,
    Fee,
    Alert,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Enrollment => "enrollment",
            ActivityKind::Grade => "grade",
            ActivityKind::Attendance => "attendance",
            ActivityKind::Fee => "fee",
            ActivityKind::Alert => "alert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Warning,
    Info,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Success => "success",
            ActivityStatus::Warning => "warning",
            ActivityStatus::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub user: &'static str,
    pub action: &'static str,
    /// Relative, as displayed ("2 hours ago")
    pub time: &'static str,
    pub status: ActivityStatus,
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: ActivityKind::Enrollment,
            user: "Sarah Johnson",
            action: "enrolled in Advanced Mathematics",
            time: "2 hours ago",
            status: ActivityStatus::Success,
        },
        Activity {
            id: 2,
            kind: ActivityKind::Grade,
            user: "Prof. Michael Chen",
            action: "submitted grades for Physics 101",
            time: "4 hours ago",
            status: ActivityStatus::Info,
        },
        Activity {
            id: 3,
            kind: ActivityKind::Attendance,
            user: "Emma Davis",
            action: "marked present for Chemistry Lab",
            time: "6 hours ago",
            status: ActivityStatus::Success,
        },
        Activity {
            id: 4,
            kind: ActivityKind::Fee,
            user: "James Wilson",
            action: "paid semester fees",
            time: "1 day ago",
            status: ActivityStatus::Success,
        },
        Activity {
            id: 5,
            kind: ActivityKind::Alert,
            user: "System",
            action: "Low attendance alert for Computer Science",
            time: "2 days ago",
            status: ActivityStatus::Warning,
        },
    ]
}

// ============================================================================
// QUICK ACTIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    AddStudent,
    CreateCourse,
    ScheduleClass,
    GenerateReport,
    ExportData,
    SendNotice,
}

impl QuickAction {
    pub const ALL: [QuickAction; 6] = [
        QuickAction::AddStudent,
        QuickAction::CreateCourse,
        QuickAction::ScheduleClass,
        QuickAction::GenerateReport,
        QuickAction::ExportData,
        QuickAction::SendNotice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::AddStudent => "Add Student",
            QuickAction::CreateCourse => "Create Course",
            QuickAction::ScheduleClass => "Schedule Class",
            QuickAction::GenerateReport => "Generate Report",
            QuickAction::ExportData => "Export Data",
            QuickAction::SendNotice => "Send Notice",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuickAction::AddStudent => "Register new student",
            QuickAction::CreateCourse => "Add new course",
            QuickAction::ScheduleClass => "Add to timetable",
            QuickAction::GenerateReport => "Create analytics report",
            QuickAction::ExportData => "Download student data",
            QuickAction::SendNotice => "Broadcast announcement",
        }
    }

    /// Page whose add dialog this action opens; None when nothing backs it
    pub fn intake_target(&self) -> Option<Section> {
        match self {
            QuickAction::AddStudent => Some(Section::Students),
            QuickAction::CreateCourse => Some(Section::Courses),
            QuickAction::ScheduleClass
            | QuickAction::GenerateReport
            | QuickAction::ExportData
            | QuickAction::SendNotice => None,
        }
    }
}

// ============================================================================
// EVENTS & METRICS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEvent {
    pub title: &'static str,
    pub when: &'static str,
}

pub fn upcoming_events() -> Vec<UpcomingEvent> {
    vec![
        UpcomingEvent {
            title: "Faculty Meeting",
            when: "Today, 2:00 PM",
        },
        UpcomingEvent {
            title: "Student Orientation",
            when: "Tomorrow, 10:00 AM",
        },
        UpcomingEvent {
            title: "Exam Schedule Release",
            when: "Friday, 9:00 AM",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub percent: u32,
}

pub fn performance_metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: "Student Satisfaction",
            percent: 94,
        },
        Metric {
            label: "Course Completion",
            percent: 87,
        },
        Metric {
            label: "Faculty Engagement",
            percent: 91,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_from_seed() {
        let students = EntityStore::with_records(Student::seed());
        let faculty = EntityStore::with_records(Faculty::seed());
        let courses = EntityStore::with_records(Course::seed());

        let overview = Overview::compute(&students, &faculty, &courses);

        assert_eq!(overview.total_students, 4);
        assert_eq!(overview.faculty_members, 4);
        assert_eq!(overview.active_courses, 2);
        assert_eq!(overview.capacity_rate, Some(77));
    }

    #[test]
    fn test_overview_empty_campus() {
        let overview = Overview::compute(
            &EntityStore::new(),
            &EntityStore::new(),
            &EntityStore::new(),
        );
        assert_eq!(overview.total_students, 0);
        assert_eq!(overview.capacity_rate, None);
    }

    #[test]
    fn test_quick_action_targets() {
        assert_eq!(QuickAction::AddStudent.intake_target(), Some(Section::Students));
        assert_eq!(QuickAction::CreateCourse.intake_target(), Some(Section::Courses));
        assert_eq!(QuickAction::ExportData.intake_target(), None);
    }

    #[test]
    fn test_activity_feed() {
        let feed = recent_activity();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[4].kind, ActivityKind::Alert);
        assert_eq!(feed[4].status, ActivityStatus::Warning);
    }
}
