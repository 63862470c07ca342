// Entity Models - students, faculty, courses
//
// Each entity has:
// - A sequence identifier (STU###, FAC###, NEW###) assigned at intake
// - Closed enums for every status/role value the dashboard renders
// - Seed data matching the demo campus shown on first launch
//
// Cross references (a faculty member's courses, a course's instructor) are
// plain strings. Nothing links them.

pub mod course;
pub mod faculty;
pub mod student;

pub use course::{Course, CourseStatus};
pub use faculty::{Faculty, FacultyStatus, Position};
pub use student::{AcademicYear, Student, StudentStatus};

/// Departments offered by the intake selects (students use them as programs).
pub const DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Business Administration",
    "Psychology",
    "Engineering",
    "Mathematics",
    "Physics",
];

/// Avatar fallback: first letter of each whitespace separated name part.
///
/// "Dr. Alice Thompson" → "DAT"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}
