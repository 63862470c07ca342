// 📚 Course Entity
//
// A catalog entry for one semester. `enrolled <= capacity` is expected but
// never enforced; the aggregation side copes with either.

use serde::{Deserialize, Serialize};

use crate::search::Searchable;
use crate::stats;
use crate::store::Record;

// ============================================================================
// COURSE STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    /// Open for enrollment
    Active,

    /// No seats left
    Full,

    Cancelled,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Active => "Active",
            CourseStatus::Full => "Full",
            CourseStatus::Cancelled => "Cancelled",
        }
    }
}

// ============================================================================
// COURSE ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Catalog code such as "CS101"; intake-created courses get NEW###
    pub id: String,
    pub title: String,
    pub department: String,

    /// Free string, not linked to a Faculty id
    pub instructor: String,
    pub credits: u8,
    pub capacity: u32,
    pub enrolled: u32,

    /// Meeting pattern such as "MWF 9:00-10:00"
    pub schedule: String,
    pub semester: String,
    pub status: CourseStatus,
    pub description: String,
}

impl Course {
    /// Demo catalog loaded on every launch
    pub fn seed() -> Vec<Course> {
        vec![
            Course {
                id: "CS101".to_string(),
                title: "Introduction to Computer Science".to_string(),
                department: "Computer Science".to_string(),
                instructor: "Dr. Alice Thompson".to_string(),
                credits: 3,
                capacity: 120,
                enrolled: 95,
                schedule: "MWF 9:00-10:00".to_string(),
                semester: "Fall 2024".to_string(),
                status: CourseStatus::Active,
                description: "Fundamental concepts of computer science and programming."
                    .to_string(),
            },
            Course {
                id: "BUS201".to_string(),
                title: "Business Analytics".to_string(),
                department: "Business Administration".to_string(),
                instructor: "Prof. Robert Smith".to_string(),
                credits: 3,
                capacity: 80,
                enrolled: 72,
                schedule: "TTh 2:00-3:30".to_string(),
                semester: "Fall 2024".to_string(),
                status: CourseStatus::Active,
                description: "Data analysis techniques for business decision making."
                    .to_string(),
            },
            Course {
                id: "PSY301".to_string(),
                title: "Cognitive Psychology".to_string(),
                department: "Psychology".to_string(),
                instructor: "Dr. Maria Garcia".to_string(),
                credits: 4,
                capacity: 50,
                enrolled: 48,
                schedule: "MWF 11:00-12:00".to_string(),
                semester: "Fall 2024".to_string(),
                status: CourseStatus::Full,
                description:
                    "Study of mental processes including perception, memory, and thinking."
                        .to_string(),
            },
            Course {
                id: "ENG401".to_string(),
                title: "Advanced Thermodynamics".to_string(),
                department: "Engineering".to_string(),
                instructor: "Prof. David Lee".to_string(),
                credits: 4,
                capacity: 30,
                enrolled: 0,
                schedule: "TTh 10:00-12:00".to_string(),
                semester: "Fall 2024".to_string(),
                status: CourseStatus::Cancelled,
                description: "Advanced concepts in thermodynamics and heat transfer."
                    .to_string(),
            },
        ]
    }

    pub fn is_active(&self) -> bool {
        self.status == CourseStatus::Active
    }

    /// Seats taken as a rounded percentage; None for a zero-capacity course
    pub fn enrollment_percentage(&self) -> Option<u32> {
        stats::percentage(u64::from(self.enrolled), u64::from(self.capacity))
    }
}

impl Record for Course {
    const ID_PREFIX: &'static str = "NEW";
    const KIND: &'static str = "course";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.id.as_str(),
            self.department.as_str(),
            self.instructor.as_str(),
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
    fn test_seed_catalog() {
        let courses = Course::seed();

        let capacities: Vec<u32> = courses.iter().map(|c| c.capacity).collect();
        let enrolled: Vec<u32> = courses.iter().map(|c| c.enrolled).collect();

        assert_eq!(capacities, vec![120, 80, 50, 30]);
        assert_eq!(enrolled, vec![95, 72, 48, 0]);
        assert_eq!(courses[2].status, CourseStatus::Full);
        assert_eq!(courses[3].status, CourseStatus::Cancelled);
    }

    #[test]
    fn test_enrollment_percentage() {
        let mut course = Course::seed().remove(0);
        // 95 / 120 = 79.17%
        assert_eq!(course.enrollment_percentage(), Some(79));

        course.enrolled = 0;
        assert_eq!(course.enrollment_percentage(), Some(0));

        course.capacity = 0;
        assert_eq!(course.enrollment_percentage(), None);
    }

    #[test]
    fn test_overbooked_course_exceeds_hundred() {
        let mut course = Course::seed().remove(3);
        course.enrolled = 45;
        assert_eq!(course.enrollment_percentage(), Some(150));
    }

    #[test]
    fn test_search_fields_include_id() {
        let course = Course::seed().remove(1);
        assert!(course.search_fields().contains(&"BUS201"));
        assert!(course.search_fields().contains(&"Prof. Robert Smith"));
    }
}
