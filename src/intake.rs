// 📝 Intake Component - the "Add ..." dialog
//
// Two states: Closed and Open. A submit either appends exactly one record and
// closes, or appends nothing and stays open with the draft intact.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::entities::{
    AcademicYear, Course, CourseStatus, Faculty, FacultyStatus, Position, Student,
    StudentStatus, DEPARTMENTS,
};
use crate::notify::{Notification, Notifier};
use crate::store::{EntityStore, Record};

/// Credits accepted by the course form
pub const CREDIT_RANGE: std::ops::RangeInclusive<u8> = 1..=6;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("Please fill in all required fields ({})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{field}: {value:?} is not one of the offered options")]
    InvalidChoice { field: &'static str, value: String },

    #[error("Credits must be a whole number from 1 to 6, got {0:?}")]
    InvalidCredits(String),

    #[error("the add dialog is not open")]
    DialogClosed,
}

// ============================================================================
// DEFAULTS
// ============================================================================

/// Values for fields the forms do not ask for
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeDefaults {
    /// Used when the capacity input is empty or not a number
    pub capacity: u32,
    pub semester: String,
    pub experience: String,
    pub gpa: String,
    /// Enrollment date stamped on new students
    pub today: NaiveDate,
}

impl Default for IntakeDefaults {
    fn default() -> Self {
        IntakeDefaults {
            capacity: 50,
            semester: "Fall 2024".to_string(),
            experience: "0 years".to_string(),
            gpa: "0.0".to_string(),
            today: chrono::Local::now().date_naive(),
        }
    }
}

// ============================================================================
// DRAFTS
// ============================================================================

/// One input of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub required: bool,
    /// Non-empty for select inputs
    pub choices: &'static [&'static str],
}

const fn text(label: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        label,
        required,
        choices: &[],
    }
}

const fn select(label: &'static str, choices: &'static [&'static str]) -> FieldSpec {
    FieldSpec {
        label,
        required: true,
        choices,
    }
}

/// The in-progress values of an add form
pub trait Draft: Default {
    type Record: Record;

    /// "Student", "Faculty member", "Course"
    const NOUN: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn value(&self, index: usize) -> &str;
    fn value_mut(&mut self, index: usize) -> Option<&mut String>;

    /// Build the record once presence checks passed
    fn build(&self, id: String, defaults: &IntakeDefaults) -> Result<Self::Record, IntakeError>;

    /// Labels of required fields that are empty (whitespace counts as empty)
    fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .enumerate()
            .filter(|(index, spec)| spec.required && self.value(*index).trim().is_empty())
            .map(|(_, spec)| spec.label)
            .collect()
    }

    /// First select input holding a value outside its options
    ///
    /// Empty selects are left to `missing_fields`. Case is ignored.
    fn invalid_choice(&self) -> Option<IntakeError> {
        Self::FIELDS.iter().enumerate().find_map(|(index, spec)| {
            let value = self.value(index).trim();
            let offered = spec
                .choices
                .iter()
                .any(|choice| choice.eq_ignore_ascii_case(value));
            if spec.choices.is_empty() || value.is_empty() || offered {
                None
            } else {
                Some(IntakeError::InvalidChoice {
                    field: spec.label,
                    value: self.value(index).to_string(),
                })
            }
        })
    }
}

fn owned(value: &str) -> String {
    value.trim().to_string()
}

/// The offered spelling of a select value
fn chosen(choices: &[&str], value: &str) -> String {
    let value = value.trim();
    choices
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(value))
        .map_or_else(|| value.to_string(), |choice| choice.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub program: String,
    pub year: String,
}

impl Draft for StudentDraft {
    type Record = Student;

    const NOUN: &'static str = "Student";
    const FIELDS: &'static [FieldSpec] = &[
        text("Full Name", true),
        text("Email", true),
        select("Program", DEPARTMENTS),
        select("Academic Year", AcademicYear::LABELS),
    ];

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            2 => &self.program,
            3 => &self.year,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.program),
            3 => Some(&mut self.year),
            _ => None,
        }
    }

    fn build(&self, id: String, defaults: &IntakeDefaults) -> Result<Student, IntakeError> {
        let year = self
            .year
            .parse::<AcademicYear>()
            .map_err(|_| IntakeError::InvalidChoice {
                field: "Academic Year",
                value: self.year.clone(),
            })?;

        Ok(Student {
            id,
            name: owned(&self.name),
            email: owned(&self.email),
            program: chosen(DEPARTMENTS, &self.program),
            year,
            gpa: defaults.gpa.clone(),
            status: StudentStatus::Active,
            enrolled_date: defaults.today,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacultyDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub phone: String,
}

impl Draft for FacultyDraft {
    type Record = Faculty;

    const NOUN: &'static str = "Faculty member";
    const FIELDS: &'static [FieldSpec] = &[
        text("Full Name", true),
        text("Email", true),
        select("Department", DEPARTMENTS),
        select("Position", Position::LABELS),
        text("Phone", false),
    ];

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            2 => &self.department,
            3 => &self.position,
            4 => &self.phone,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.department),
            3 => Some(&mut self.position),
            4 => Some(&mut self.phone),
            _ => None,
        }
    }

    fn build(&self, id: String, defaults: &IntakeDefaults) -> Result<Faculty, IntakeError> {
        let position = self
            .position
            .parse::<Position>()
            .map_err(|_| IntakeError::InvalidChoice {
                field: "Position",
                value: self.position.clone(),
            })?;

        Ok(Faculty {
            id,
            name: owned(&self.name),
            email: owned(&self.email),
            department: chosen(DEPARTMENTS, &self.department),
            position,
            phone: owned(&self.phone),
            courses: Vec::new(),
            experience: defaults.experience.clone(),
            status: FacultyStatus::Active,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub department: String,
    pub instructor: String,
    pub credits: String,
    pub capacity: String,
    pub schedule: String,
    pub description: String,
}

impl Draft for CourseDraft {
    type Record = Course;

    const NOUN: &'static str = "Course";
    const FIELDS: &'static [FieldSpec] = &[
        text("Course Title", true),
        select("Department", DEPARTMENTS),
        text("Instructor", true),
        text("Credits", true),
        text("Capacity", false),
        text("Schedule", false),
        text("Description", false),
    ];

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.title,
            1 => &self.department,
            2 => &self.instructor,
            3 => &self.credits,
            4 => &self.capacity,
            5 => &self.schedule,
            6 => &self.description,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.title),
            1 => Some(&mut self.department),
            2 => Some(&mut self.instructor),
            3 => Some(&mut self.credits),
            4 => Some(&mut self.capacity),
            5 => Some(&mut self.schedule),
            6 => Some(&mut self.description),
            _ => None,
        }
    }

    fn build(&self, id: String, defaults: &IntakeDefaults) -> Result<Course, IntakeError> {
        let credits = parse_credits(&self.credits)?;

        Ok(Course {
            id,
            title: owned(&self.title),
            department: chosen(DEPARTMENTS, &self.department),
            instructor: owned(&self.instructor),
            credits,
            capacity: parse_capacity(&self.capacity, defaults.capacity),
            enrolled: 0,
            schedule: owned(&self.schedule),
            semester: defaults.semester.clone(),
            status: CourseStatus::Active,
            description: owned(&self.description),
        })
    }
}

fn parse_credits(input: &str) -> Result<u8, IntakeError> {
    input
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|credits| CREDIT_RANGE.contains(credits))
        .ok_or_else(|| IntakeError::InvalidCredits(input.to_string()))
}

/// Empty, non-numeric, or zero capacity falls back to the default
fn parse_capacity(input: &str, fallback: u32) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|capacity| *capacity > 0)
        .unwrap_or(fallback)
}

// ============================================================================
// DIALOG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
}

#[derive(Debug, Clone)]
pub struct IntakeDialog<D: Draft> {
    state: DialogState,
    draft: D,
}

impl<D: Draft> IntakeDialog<D> {
    pub fn new() -> Self {
        IntakeDialog {
            state: DialogState::Closed,
            draft: D::default(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Closed → Open. Whatever was typed before stays in the draft.
    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    /// Open → Closed without touching the store
    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Validate the draft and append it to `store`.
    ///
    /// On success the new id is returned, the draft is reset and the dialog
    /// closes. On a validation failure a destructive notification is sent and
    /// the dialog stays open with the draft as entered.
    pub fn submit<N>(
        &mut self,
        store: &mut EntityStore<D::Record>,
        defaults: &IntakeDefaults,
        notifier: &mut N,
    ) -> Result<String, IntakeError>
    where
        N: Notifier + ?Sized,
    {
        if !self.is_open() {
            return Err(IntakeError::DialogClosed);
        }

        let missing = self.draft.missing_fields();
        let built = if !missing.is_empty() {
            Err(IntakeError::MissingFields(missing))
        } else if let Some(invalid) = self.draft.invalid_choice() {
            Err(invalid)
        } else {
            self.draft.build(store.next_id(), defaults)
        };

        let kind = <D::Record as Record>::KIND;
        match built {
            Ok(record) => {
                let id = store.append(record).id().to_string();
                info!(kind, id = %id, "record added");

                self.draft = D::default();
                self.state = DialogState::Closed;
                notifier.notify(Notification::success(format!("{} added successfully", D::NOUN)));
                Ok(id)
            }
            Err(err) => {
                warn!(kind, error = %err, "intake rejected");
                notifier.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }
}

impl<D: Draft> Default for IntakeDialog<D> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;

    fn defaults() -> IntakeDefaults {
        IntakeDefaults {
            today: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            ..IntakeDefaults::default()
        }
    }

    fn filled_student() -> StudentDraft {
        StudentDraft {
            name: "X".to_string(),
            email: "x@e.edu".to_string(),
            program: "Engineering".to_string(),
            year: "1st Year".to_string(),
        }
    }

    #[test]
    fn test_starts_closed() {
        let dialog: IntakeDialog<StudentDraft> = IntakeDialog::new();
        assert_eq!(dialog.state(), DialogState::Closed);
    }

    #[test]
    fn test_submit_while_closed_is_rejected() {
        let mut store = EntityStore::with_records(Student::seed());
        let mut dialog: IntakeDialog<StudentDraft> = IntakeDialog::new();
        *dialog.draft_mut() = filled_student();
        let mut sent: Vec<Notification> = Vec::new();

        let result = dialog.submit(&mut store, &defaults(), &mut sent);

        assert_eq!(result, Err(IntakeError::DialogClosed));
        assert_eq!(store.len(), 4);
        assert!(sent.is_empty());
    }

    #[test]
    fn test_student_scenario() {
        let mut store = EntityStore::with_records(vec![Student::seed().remove(0)]);
        let mut dialog: IntakeDialog<StudentDraft> = IntakeDialog::new();
        let mut sent: Vec<Notification> = Vec::new();

        dialog.open();
        *dialog.draft_mut() = filled_student();
        let id = dialog.submit(&mut store, &defaults(), &mut sent).unwrap();

        assert_eq!(id, "STU002");
        assert_eq!(store.len(), 2);
        let added = &store.records()[1];
        assert_eq!(added.status, StudentStatus::Active);
        assert_eq!(added.gpa, "0.0");
        assert_eq!(added.year, AcademicYear::First);
        assert_eq!(added.enrolled_date, defaults().today);

        assert_eq!(dialog.state(), DialogState::Closed);
        assert_eq!(dialog.draft(), &StudentDraft::default());
        assert_eq!(sent, vec![Notification::success("Student added successfully")]);
    }

    #[test]
    fn test_missing_field_keeps_dialog_open() {
        let mut store = EntityStore::with_records(Student::seed());
        let mut dialog: IntakeDialog<StudentDraft> = IntakeDialog::new();
        let mut sent: Vec<Notification> = Vec::new();

        dialog.open();
        *dialog.draft_mut() = StudentDraft {
            email: String::new(),
            ..filled_student()
        };
        let result = dialog.submit(&mut store, &defaults(), &mut sent);

        assert_eq!(result, Err(IntakeError::MissingFields(vec!["Email"])));
        assert_eq!(store.len(), 4);
        assert!(dialog.is_open());
        assert_eq!(dialog.draft().name, "X");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].severity, Severity::Destructive);
        assert!(sent[0].message.starts_with("Please fill in all required fields"));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let draft = StudentDraft {
            name: "   ".to_string(),
            ..filled_student()
        };
        assert_eq!(draft.missing_fields(), vec!["Full Name"]);
    }

    #[test]
    fn test_cancel_keeps_store() {
        let mut dialog: IntakeDialog<FacultyDraft> = IntakeDialog::new();
        dialog.open();
        dialog.draft_mut().name = "Dr. Who".to_string();
        dialog.cancel();

        assert_eq!(dialog.state(), DialogState::Closed);
        // reopening shows the last entered values
        dialog.open();
        assert_eq!(dialog.draft().name, "Dr. Who");
    }

    #[test]
    fn test_faculty_defaults() {
        let mut store = EntityStore::with_records(Faculty::seed());
        let mut dialog: IntakeDialog<FacultyDraft> = IntakeDialog::new();
        let mut sent: Vec<Notification> = Vec::new();

        dialog.open();
        *dialog.draft_mut() = FacultyDraft {
            name: "Dr. Ada Byron".to_string(),
            email: "ada.byron@university.edu".to_string(),
            department: "Mathematics".to_string(),
            position: "Lecturer".to_string(),
            phone: String::new(),
        };
        let id = dialog.submit(&mut store, &defaults(), &mut sent).unwrap();

        let added = store.get(&id).unwrap();
        assert_eq!(id, "FAC005");
        assert_eq!(added.position, Position::Lecturer);
        assert_eq!(added.experience, "0 years");
        assert!(added.courses.is_empty());
        assert_eq!(added.status, FacultyStatus::Active);
        assert_eq!(sent[0].message, "Faculty member added successfully");
    }

    #[test]
    fn test_invalid_position_is_rejected() {
        let mut store = EntityStore::with_records(Faculty::seed());
        let mut dialog: IntakeDialog<FacultyDraft> = IntakeDialog::new();
        let mut sent: Vec<Notification> = Vec::new();

        dialog.open();
        *dialog.draft_mut() = FacultyDraft {
            name: "N".to_string(),
            email: "n@e.edu".to_string(),
            department: "Physics".to_string(),
            position: "Dean".to_string(),
            phone: String::new(),
        };
        let result = dialog.submit(&mut store, &defaults(), &mut sent);

        assert!(matches!(result, Err(IntakeError::InvalidChoice { field: "Position", .. })));
        assert_eq!(store.len(), 4);
        assert!(dialog.is_open());
    }

    #[test]
    fn test_department_outside_options_is_rejected() {
        let mut store = EntityStore::with_records(Faculty::seed());
        let mut dialog: IntakeDialog<FacultyDraft> = IntakeDialog::new();
        let mut sent: Vec<Notification> = Vec::new();

        dialog.open();
        *dialog.draft_mut() = FacultyDraft {
            name: "N".to_string(),
            email: "n@e.edu".to_string(),
            department: "Astrology".to_string(),
            position: "Lecturer".to_string(),
            phone: String::new(),
        };
        let result = dialog.submit(&mut store, &defaults(), &mut sent);

        assert_eq!(
            result,
            Err(IntakeError::InvalidChoice {
                field: "Department",
                value: "Astrology".to_string(),
            })
        );
        assert_eq!(store.len(), 4);
        assert!(dialog.is_open());
        assert_eq!(sent[0].severity, Severity::Destructive);
    }

    #[test]
    fn test_every_select_is_checked() {
        let student = StudentDraft {
            program: "Alchemy".to_string(),
            ..filled_student()
        };
        assert!(matches!(
            student.invalid_choice(),
            Some(IntakeError::InvalidChoice { field: "Program", .. })
        ));

        let course = CourseDraft {
            department: "Underwater Basketry".to_string(),
            ..course_draft("3", "")
        };
        assert!(matches!(
            course.invalid_choice(),
            Some(IntakeError::InvalidChoice { field: "Department", .. })
        ));

        // case and surrounding whitespace are tolerated
        let lenient = StudentDraft {
            program: " engineering ".to_string(),
            year: "1ST YEAR".to_string(),
            ..filled_student()
        };
        assert_eq!(lenient.invalid_choice(), None);
        let built = lenient.build("STU005".to_string(), &defaults()).unwrap();
        assert_eq!(built.program, "Engineering");
        assert_eq!(course_draft("3", "").invalid_choice(), None);
    }

    fn course_draft(credits: &str, capacity: &str) -> CourseDraft {
        CourseDraft {
            title: "Linear Algebra".to_string(),
            department: "Mathematics".to_string(),
            instructor: "Dr. Ada Byron".to_string(),
            credits: credits.to_string(),
            capacity: capacity.to_string(),
            schedule: "MWF 8:00-9:00".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_course_capacity_fallback() {
        let mut store = EntityStore::with_records(Course::seed());
        let mut dialog: IntakeDialog<CourseDraft> = IntakeDialog::new();
        let mut sent: Vec<Notification> = Vec::new();

        dialog.open();
        *dialog.draft_mut() = course_draft("3", "");
        let id = dialog.submit(&mut store, &defaults(), &mut sent).unwrap();
        let added = store.get(&id).unwrap();

        assert_eq!(id, "NEW005");
        assert_eq!(added.capacity, 50);
        assert_eq!(added.enrolled, 0);
        assert_eq!(added.credits, 3);
        assert_eq!(added.semester, "Fall 2024");
        assert_eq!(added.status, CourseStatus::Active);

        dialog.open();
        *dialog.draft_mut() = course_draft("4", "lots");
        let id = dialog.submit(&mut store, &defaults(), &mut sent).unwrap();
        assert_eq!(store.get(&id).map(|c| c.capacity), Some(50));

        dialog.open();
        *dialog.draft_mut() = course_draft("4", "35");
        let id = dialog.submit(&mut store, &defaults(), &mut sent).unwrap();
        assert_eq!(store.get(&id).map(|c| c.capacity), Some(35));
    }

    #[test]
    fn test_course_bad_credits_rejected() {
        let mut store = EntityStore::with_records(Course::seed());
        let mut dialog: IntakeDialog<CourseDraft> = IntakeDialog::new();
        let mut sent: Vec<Notification> = Vec::new();

        for credits in ["three", "0", "7", "-1", "2.5"] {
            dialog.open();
            *dialog.draft_mut() = course_draft(credits, "40");
            let result = dialog.submit(&mut store, &defaults(), &mut sent);

            assert_eq!(result, Err(IntakeError::InvalidCredits(credits.to_string())));
            assert!(dialog.is_open());
        }
        assert_eq!(store.len(), 4);
        assert!(sent.iter().all(|n| n.severity == Severity::Destructive));
    }

    #[test]
    fn test_course_required_fields() {
        let draft = CourseDraft::default();
        assert_eq!(
            draft.missing_fields(),
            vec!["Course Title", "Department", "Instructor", "Credits"]
        );
    }
}
