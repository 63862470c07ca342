// 🎓 Student Entity
//
// A student record as the registrar sees it: who, which program, which year,
// and whether they are currently enrolled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::search::Searchable;
use crate::store::Record;

// ============================================================================
// STUDENT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentStatus {
    Active,
    Inactive,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::Inactive => "Inactive",
        }
    }
}

// ============================================================================
// ACADEMIC YEAR
// ============================================================================

/// Class standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AcademicYear {
    #[serde(rename = "1st Year")]
    First,
    #[serde(rename = "2nd Year")]
    Second,
    #[serde(rename = "3rd Year")]
    Third,
    #[serde(rename = "4th Year")]
    Fourth,
}

impl AcademicYear {
    pub const ALL: [AcademicYear; 4] = [
        AcademicYear::First,
        AcademicYear::Second,
        AcademicYear::Third,
        AcademicYear::Fourth,
    ];

    /// Labels offered by the intake select, in order
    pub const LABELS: &'static [&'static str] = &["1st Year", "2nd Year", "3rd Year", "4th Year"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicYear::First => "1st Year",
            AcademicYear::Second => "2nd Year",
            AcademicYear::Third => "3rd Year",
            AcademicYear::Fourth => "4th Year",
        }
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcademicYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AcademicYear::ALL
            .into_iter()
            .find(|year| year.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown academic year: {}", s))
    }
}

// ============================================================================
// STUDENT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// STU### sequence id
    pub id: String,
    pub name: String,
    pub email: String,

    /// Program of study (free string, the intake select offers DEPARTMENTS)
    pub program: String,
    pub year: AcademicYear,

    /// Kept as entered ("3.8"), never recomputed
    pub gpa: String,
    pub status: StudentStatus,
    pub enrolled_date: NaiveDate,
}

impl Student {
    /// Demo roster loaded on every launch
    pub fn seed() -> Vec<Student> {
        vec![
            seed_student(
                "STU001",
                "Sarah Johnson",
                "sarah.johnson@university.edu",
                "Computer Science",
                AcademicYear::Third,
                "3.8",
                date(2022, 9, 1),
            ),
            seed_student(
                "STU002",
                "Michael Chen",
                "michael.chen@university.edu",
                "Business Administration",
                AcademicYear::Second,
                "3.6",
                date(2023, 9, 1),
            ),
            seed_student(
                "STU003",
                "Emma Davis",
                "emma.davis@university.edu",
                "Psychology",
                AcademicYear::Fourth,
                "3.9",
                date(2021, 9, 1),
            ),
            seed_student(
                "STU004",
                "James Wilson",
                "james.wilson@university.edu",
                "Engineering",
                AcademicYear::First,
                "3.4",
                date(2024, 9, 1),
            ),
        ]
    }

    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }

    /// GPA as a number, None when the stored string does not parse
    pub fn gpa_value(&self) -> Option<f64> {
        self.gpa.trim().parse::<f64>().ok()
    }
}

fn seed_student(
    id: &str,
    name: &str,
    email: &str,
    program: &str,
    year: AcademicYear,
    gpa: &str,
    enrolled_date: NaiveDate,
) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        program: program.to_string(),
        year,
        gpa: gpa.to_string(),
        status: StudentStatus::Active,
        enrolled_date,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Record for Student {
    const ID_PREFIX: &'static str = "STU";
    const KIND: &'static str = "student";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.program.as_str()]
    }
}

// ============================================================================
// TESTS
// ============================================================================
