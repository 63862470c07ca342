// 📄 List pages - store + search box + add dialog
//
// One `ListPage` per entity type. It owns the page's store outright, so the
// only way to add a record is through its dialog's submit.

use tracing::debug;

use crate::entities::{Course, Faculty, Student};
use crate::intake::{CourseDraft, Draft, FacultyDraft, IntakeDefaults, IntakeDialog, IntakeError, StudentDraft};
use crate::notify::Notifier;
use crate::search::{self, Searchable};
use crate::stats::{CourseStats, FacultyStats, StatCard, StudentStats};
use crate::store::EntityStore;

pub struct ListPage<D: Draft> {
    store: EntityStore<D::Record>,
    query: String,
    pub dialog: IntakeDialog<D>,
}

impl<D> ListPage<D>
where
    D: Draft,
    D::Record: Searchable,
{
    pub fn new(records: Vec<D::Record>) -> Self {
        ListPage {
            store: EntityStore::with_records(records),
            query: String::new(),
            dialog: IntakeDialog::new(),
        }
    }

    pub fn store(&self) -> &EntityStore<D::Record> {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(query = %self.query, "search query changed");
    }

    /// Records matching the current query, in store order
    pub fn visible(&self) -> Vec<&D::Record> {
        search::filter(self.store.records(), &self.query)
    }

    pub fn submit<N: Notifier + ?Sized>(
        &mut self,
        defaults: &IntakeDefaults,
        notifier: &mut N,
    ) -> Result<String, IntakeError> {
        self.dialog.submit(&mut self.store, defaults, notifier)
    }
}

pub type StudentPage = ListPage<StudentDraft>;
pub type FacultyPage = ListPage<FacultyDraft>;
pub type CoursePage = ListPage<CourseDraft>;

/// The three list pages plus the defaults their dialogs fill in
pub struct Campus {
    pub students: StudentPage,
    pub faculty: FacultyPage,
    pub courses: CoursePage,
    pub defaults: IntakeDefaults,
}

impl Campus {
    /// Fresh session: seed data on every page, empty queries, dialogs closed
    pub fn seeded(defaults: IntakeDefaults) -> Self {
        Campus {
            students: ListPage::new(Student::seed()),
            faculty: ListPage::new(Faculty::seed()),
            courses: ListPage::new(Course::seed()),
            defaults,
        }
    }

    pub fn student_cards(&self) -> Vec<StatCard> {
        StudentStats::compute(self.students.store()).cards()
    }

    pub fn faculty_cards(&self) -> Vec<StatCard> {
        FacultyStats::compute(self.faculty.store()).cards()
    }

    pub fn course_cards(&self) -> Vec<StatCard> {
        CourseStats::compute(self.courses.store()).cards()
    }

    pub fn overview(&self) -> crate::dashboard::Overview {
        crate::dashboard::Overview::compute(
            self.students.store(),
            self.faculty.store(),
            self.courses.store(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notification;

    #[test]
    fn test_visible_follows_query() {
        let mut page = StudentPage::new(Student::seed());
        assert_eq!(page.visible().len(), 4);

        page.set_query("CHEN");
        let names: Vec<&str> = page.visible().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Michael Chen"]);

        page.set_query("");
        assert_eq!(page.query(), "");
        assert_eq!(page.visible().len(), 4);
    }

    #[test]
    fn test_added_record_is_searchable() {
        let mut campus = Campus::seeded(IntakeDefaults::default());
        let mut sent: Vec<Notification> = Vec::new();

        campus.courses.dialog.open();
        {
            let draft = campus.courses.dialog.draft_mut();
            draft.title = "Quantum Computing".to_string();
            draft.department = "Physics".to_string();
            draft.instructor = "Dr. Ada Byron".to_string();
            draft.credits = "3".to_string();
        }
        let id = campus
            .courses
            .submit(&campus.defaults, &mut sent)
            .unwrap();

        campus.courses.set_query("quantum");
        let visible: Vec<&str> = campus.courses.visible().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(visible, vec![id.as_str()]);
        assert_eq!(campus.course_cards()[0].value, "5");
    }

    #[test]
    fn test_seeded_cards() {
        let campus = Campus::seeded(IntakeDefaults::default());

        assert_eq!(campus.course_cards()[2].value, "215");
        assert_eq!(campus.faculty_cards()[3].value, "75%");
        assert_eq!(campus.student_cards()[0].value, "4");
        assert_eq!(campus.overview().active_courses, 2);
    }
}
