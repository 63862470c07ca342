// 🔍 Filter/Search Engine
//
// Case-insensitive substring match of the query against a fixed set of fields
// per entity type. Not tokenized, not fuzzy, no limit.

/// Fields a free-text query is matched against
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Does any searchable field contain `query` (case-insensitive)?
pub fn matches<T: Searchable>(record: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    contains_needle(record, &needle)
}

fn contains_needle<T: Searchable>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Ordered subsequence of `records` matching `query`.
///
/// An empty query returns every record in store order.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| contains_needle(*record, &needle))
        .collect()
}
