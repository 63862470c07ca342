// 🗂️ Entity Store - one ordered list per page
//
// The store is the only owner of a page's records. `append` is the single
// mutation entry point; filter and stats only ever borrow `records()`.

use tracing::debug;

/// A record that can live in an `EntityStore`
pub trait Record: Clone {
    /// Prefix for intake-synthesized ids ("STU", "FAC", "NEW")
    const ID_PREFIX: &'static str;

    /// Lower-case singular noun used in logs
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// `<PREFIX><n>` with `n` zero padded to three digits
///
/// Numbers past 999 keep all their digits ("STU1000").
pub fn sequence_id(prefix: &str, n: usize) -> String {
    format!("{}{:03}", prefix, n)
}

/// In-memory, insertion ordered list of records for one entity type.
///
/// Session only: nothing is persisted and there is no edit or delete, so the
/// next id can be derived from the current length. Once records can be
/// removed this has to become a monotonic counter.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    records: Vec<T>,
}

impl<T: Record> EntityStore<T> {
    pub fn new() -> Self {
        EntityStore {
            records: Vec::new(),
        }
    }

    /// Start from seed data, order preserved
    pub fn with_records(records: Vec<T>) -> Self {
        EntityStore { records }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Id the next appended record should carry
    pub fn next_id(&self) -> String {
        sequence_id(T::ID_PREFIX, self.records.len() + 1)
    }

    /// Append at the end and return the stored record
    pub fn append(&mut self, record: T) -> &T {
        debug!(kind = T::KIND, id = record.id(), "appending record");
        let index = self.records.len();
        self.records.push(record);
        &self.records[index]
    }
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Course, Faculty, Student};

    #[test]
    fn test_sequence_id_padding() {
        assert_eq!(sequence_id("STU", 1), "STU001");
        assert_eq!(sequence_id("FAC", 42), "FAC042");
        assert_eq!(sequence_id("NEW", 999), "NEW999");
        assert_eq!(sequence_id("STU", 1000), "STU1000");
    }

    #[test]
    fn test_next_id_follows_length() {
        let students = EntityStore::with_records(Student::seed());
        assert_eq!(students.next_id(), "STU005");

        let faculty: EntityStore<Faculty> = EntityStore::new();
        assert_eq!(faculty.next_id(), "FAC001");

        let courses = EntityStore::with_records(Course::seed());
        assert_eq!(courses.next_id(), "NEW005");
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = EntityStore::with_records(Student::seed());
        let mut extra = Student::seed().remove(0);
        extra.id = store.next_id();
        extra.name = "Late Enrollee".to_string();

        let stored = store.append(extra);
        assert_eq!(stored.id, "STU005");

        let ids: Vec<&str> = store.records().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["STU001", "STU002", "STU003", "STU004", "STU005"]);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_get_by_id() {
        let store = EntityStore::with_records(Course::seed());

        assert_eq!(store.get("PSY301").map(|c| c.credits), Some(4));
        assert!(store.get("MATH999").is_none());
        assert!(!store.is_empty());
    }
}
