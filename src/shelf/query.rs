//! # Query Engine
//!
//! Read-only transformations over the record collection: free-text search,
//! cumulative filtering and tag aggregation. Everything here borrows; the
//! store stays the only owner of record data.

use crate::model::{Record, RecordKind};
use regex::{Regex, RegexBuilder};

/// How a query matches: as a compiled case-insensitive pattern when the
/// query is a valid regex, otherwise as a literal substring.
enum Matcher {
    Pattern(Regex),
    Literal(String),
}

impl Matcher {
    fn new(query: &str) -> Self {
        match RegexBuilder::new(query).case_insensitive(true).build() {
            Ok(re) => Matcher::Pattern(re),
            Err(_) => Matcher::Literal(query.to_lowercase()),
        }
    }

    fn matches(&self, haystack: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(haystack),
            Matcher::Literal(needle) => haystack.contains(needle),
        }
    }
}

// One lowercase searchable string per record: every text field plus pages
// and the record type, space-joined.
fn haystack(record: &Record) -> String {
    let pages = record.pages.map(|p| p.to_string()).unwrap_or_default();
    [
        record.title.as_str(),
        record.author.as_str(),
        record.tag.as_str(),
        record.isbn.as_str(),
        record.notes.as_str(),
        pages.as_str(),
        record.kind.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Searches all records. A blank query matches everything.
pub fn search<'a>(query: &str, records: &'a [Record]) -> Vec<&'a Record> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }
    let matcher = Matcher::new(query);
    records
        .iter()
        .filter(|r| matcher.matches(&haystack(r)))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub kind: Option<RecordKind>,
    pub tag: Option<String>,
    pub query: Option<String>,
}

/// Narrows the collection by type, then tag, then search query. Each stage
/// applies only when the corresponding option is set.
pub fn filter<'a>(records: &'a [Record], filters: &Filters) -> Vec<&'a Record> {
    let mut matched: Vec<&Record> = records.iter().collect();
    if let Some(kind) = filters.kind {
        matched.retain(|r| r.kind == kind);
    }
    if let Some(tag) = &filters.tag {
        matched.retain(|r| &r.tag == tag);
    }
    if let Some(query) = &filters.query {
        if !query.trim().is_empty() {
            let matcher = Matcher::new(query);
            matched.retain(|r| matcher.matches(&haystack(r)));
        }
    }
    matched
}

/// Counts non-empty tags, case-sensitive, in first-seen order. The order
/// matters: the top-tag statistic breaks ties by first appearance.
pub fn unique_tags(records: &[Record]) -> Vec<(String, usize)> {
    let mut tags: Vec<(String, usize)> = Vec::new();
    for record in records {
        if record.tag.is_empty() {
            continue;
        }
        match tags.iter_mut().find(|(tag, _)| *tag == record.tag) {
            Some((_, count)) => *count += 1,
            None => tags.push((record.tag.clone(), 1)),
        }
    }
    tags
}
