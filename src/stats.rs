// 📊 Aggregation/Stats Engine
//
// Every summary is recomputed from the live store on each call. Lists are a
// handful of records, so there is no caching.
//
// Percentages with a zero denominator are `None` and render as "N/A".

use std::collections::BTreeSet;

use tracing::debug;

use crate::entities::{Course, Faculty, Student};
use crate::store::EntityStore;

// ============================================================================
// PRIMITIVES
// ============================================================================

pub fn count_where<T>(records: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|&record| predicate(record)).count()
}

/// Sum of a numeric field; 0 for an empty list
pub fn sum_by<T>(records: &[T], field: impl Fn(&T) -> u64) -> u64 {
    records.iter().map(field).sum()
}

/// `part / whole * 100`, rounded half up. None when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    let (part, whole) = (u128::from(part), u128::from(whole));
    let rounded = (part * 200 + whole) / (whole * 2);
    Some(u32::try_from(rounded).unwrap_or(u32::MAX))
}

/// Mean of the values that are present; None when nothing is
pub fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.collect::<BTreeSet<_>>().len()
}

pub fn format_percentage(value: Option<u32>) -> String {
    match value {
        Some(p) => format!("{}%", p),
        None => "N/A".to_string(),
    }
}

pub fn format_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "N/A".to_string(),
    }
}

// ============================================================================
// PAGE SUMMARIES
// ============================================================================

/// A labelled number shown on a stat card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        StatCard {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentStats {
    pub total: usize,
    pub programs: usize,
    pub average_gpa: Option<f64>,
    pub active_rate: Option<u32>,
}

impl StudentStats {
    pub fn compute(store: &EntityStore<Student>) -> Self {
        let students = store.records();
        let active = count_where(students, Student::is_active);
        debug!(total = students.len(), active, "computing student stats");

        StudentStats {
            total: students.len(),
            programs: distinct(students.iter().map(|s| s.program.as_str())),
            average_gpa: mean(students.iter().map(Student::gpa_value)),
            active_rate: percentage(active as u64, students.len() as u64),
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Students", self.total.to_string()),
            StatCard::new("Programs", self.programs.to_string()),
            StatCard::new("Avg GPA", format_decimal(self.average_gpa)),
            StatCard::new("Active Rate", format_percentage(self.active_rate)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacultyStats {
    pub total: usize,
    pub departments: usize,
    pub average_experience: Option<f64>,
    pub active_rate: Option<u32>,
}

impl FacultyStats {
    pub fn compute(store: &EntityStore<Faculty>) -> Self {
        let faculty = store.records();
        let active = count_where(faculty, Faculty::is_active);
        debug!(total = faculty.len(), active, "computing faculty stats");

        FacultyStats {
            total: faculty.len(),
            departments: distinct(faculty.iter().map(|f| f.department.as_str())),
            average_experience: mean(faculty.iter().map(Faculty::experience_years)),
            active_rate: percentage(active as u64, faculty.len() as u64),
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Faculty", self.total.to_string()),
            StatCard::new("Departments", self.departments.to_string()),
            StatCard::new("Avg Experience", format_decimal(self.average_experience)),
            StatCard::new("Active Rate", format_percentage(self.active_rate)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStats {
    pub total: usize,
    pub active: usize,
    pub total_enrolled: u64,
    pub total_capacity: u64,
    /// Enrolled over capacity across the whole catalog
    pub capacity_rate: Option<u32>,
}

impl CourseStats {
    pub fn compute(store: &EntityStore<Course>) -> Self {
        let courses = store.records();
        let total_enrolled = sum_by(courses, |c| u64::from(c.enrolled));
        let total_capacity = sum_by(courses, |c| u64::from(c.capacity));
        debug!(total = courses.len(), total_enrolled, total_capacity, "computing course stats");

        CourseStats {
            total: courses.len(),
            active: count_where(courses, Course::is_active),
            total_enrolled,
            total_capacity,
            capacity_rate: percentage(total_enrolled, total_capacity),
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Courses", self.total.to_string()),
            StatCard::new("Active Courses", self.active.to_string()),
            StatCard::new("Total Enrolled", self.total_enrolled.to_string()),
            StatCard::new("Avg Capacity", format_percentage(self.capacity_rate)),
        ]
    }
}

// ============================================================================
// TESTS
// ============================================================================
