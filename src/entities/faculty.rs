// 👩‍🏫 Faculty Entity
//
// Academic staff. `courses` are titles only; they do not resolve to Course ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::search::Searchable;
use crate::store::Record;

// ============================================================================
// FACULTY STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacultyStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl FacultyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacultyStatus::Active => "Active",
            FacultyStatus::OnLeave => "On Leave",
        }
    }
}

// ============================================================================
// POSITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Full professor
    Professor,

    #[serde(rename = "Associate Professor")]
    AssociateProfessor,

    #[serde(rename = "Assistant Professor")]
    AssistantProfessor,

    /// Teaching-only appointment
    Lecturer,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Professor,
        Position::AssociateProfessor,
        Position::AssistantProfessor,
        Position::Lecturer,
    ];

    pub const LABELS: &'static [&'static str] = &[
        "Professor",
        "Associate Professor",
        "Assistant Professor",
        "Lecturer",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Professor => "Professor",
            Position::AssociateProfessor => "Associate Professor",
            Position::AssistantProfessor => "Assistant Professor",
            Position::Lecturer => "Lecturer",
        }
    }

    /// Label used where a table column is narrow
    pub fn short_label(&self) -> &'static str {
        match self {
            Position::Professor => "Professor",
            Position::AssociateProfessor => "Associate Prof.",
            Position::AssistantProfessor => "Assistant Prof.",
            Position::Lecturer => "Lecturer",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown position: {}", s))
    }
}

// ============================================================================
// FACULTY ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    /// FAC### sequence id
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: Position,
    pub phone: String,

    /// Course titles this member teaches
    pub courses: Vec<String>,

    /// Free text such as "15 years"
    pub experience: String,
    pub status: FacultyStatus,
}

impl Faculty {
    /// Demo faculty loaded on every launch
    pub fn seed() -> Vec<Faculty> {
        vec![
            Faculty {
                id: "FAC001".to_string(),
                name: "Dr. Alice Thompson".to_string(),
                email: "alice.thompson@university.edu".to_string(),
                department: "Computer Science".to_string(),
                position: Position::Professor,
                phone: "+1 (555) 123-4567".to_string(),
                courses: vec!["Data Structures".to_string(), "Algorithms".to_string()],
                experience: "15 years".to_string(),
                status: FacultyStatus::Active,
            },
            Faculty {
                id: "FAC002".to_string(),
                name: "Prof. Robert Smith".to_string(),
                email: "robert.smith@university.edu".to_string(),
                department: "Business Administration".to_string(),
                position: Position::AssociateProfessor,
                phone: "+1 (555) 234-5678".to_string(),
                courses: vec!["Marketing".to_string(), "Finance".to_string()],
                experience: "10 years".to_string(),
                status: FacultyStatus::Active,
            },
            Faculty {
                id: "FAC003".to_string(),
                name: "Dr. Maria Garcia".to_string(),
                email: "maria.garcia@university.edu".to_string(),
                department: "Psychology".to_string(),
                position: Position::AssistantProfessor,
                phone: "+1 (555) 345-6789".to_string(),
                courses: vec![
                    "Cognitive Psychology".to_string(),
                    "Research Methods".to_string(),
                ],
                experience: "7 years".to_string(),
                status: FacultyStatus::Active,
            },
            Faculty {
                id: "FAC004".to_string(),
                name: "Prof. David Lee".to_string(),
                email: "david.lee@university.edu".to_string(),
                department: "Engineering".to_string(),
                position: Position::Professor,
                phone: "+1 (555) 456-7890".to_string(),
                courses: vec![
                    "Mechanical Engineering".to_string(),
                    "Thermodynamics".to_string(),
                ],
                experience: "20 years".to_string(),
                status: FacultyStatus::OnLeave,
            },
        ]
    }

    pub fn is_active(&self) -> bool {
        self.status == FacultyStatus::Active
    }

    /// Leading number of `experience` ("12.5 years" → 12.5)
    pub fn experience_years(&self) -> Option<f64> {
        self.experience
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<f64>().ok())
    }
}

impl Record for Faculty {
    const ID_PREFIX: &'static str = "FAC";
    const KIND: &'static str = "faculty";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Faculty {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.department.as_str(),
        ]
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_faculty() {
        let faculty = Faculty::seed();

        assert_eq!(faculty.len(), 4);
        assert_eq!(faculty[1].position, Position::AssociateProfessor);
        assert_eq!(faculty[3].status, FacultyStatus::OnLeave);
        assert_eq!(faculty.iter().filter(|f| f.is_active()).count(), 3);
    }

    #[test]
    fn test_experience_years() {
        let mut member = Faculty::seed().remove(0);
        assert_eq!(member.experience_years(), Some(15.0));

        member.experience = "12.5 years".to_string();
        assert_eq!(member.experience_years(), Some(12.5));

        member.experience = "a decade".to_string();
        assert_eq!(member.experience_years(), None);

        member.experience = String::new();
        assert_eq!(member.experience_years(), None);
    }

    #[test]
    fn test_position_round_trip_labels() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>(), Ok(position));
        }
        assert!("Dean".parse::<Position>().is_err());
        assert_eq!(Position::AssistantProfessor.short_label(), "Assistant Prof.");
    }

    #[test]
    fn test_status_serializes_with_space() {
        let json = serde_json::to_value(FacultyStatus::OnLeave).unwrap();
        assert_eq!(json, "On Leave");
    }
}
