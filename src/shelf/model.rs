//! # Domain Model: Records and Settings
//!
//! A [`Record`] is a single book or note entry. Field names serialize in
//! camelCase (`dateAdded`, `createdAt`, ...) so that export files stay
//! compatible with the historical data format.
//!
//! [`RecordDraft`] carries raw form input from the presentation layer. The
//! draft is what the validation engine inspects; committing a draft trims
//! title/author/tag/isbn and parses the pages field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Book,
    Note,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Book => "book",
            RecordKind::Note => "note",
        }
    }
}

impl Default for RecordKind {
    fn default() -> Self {
        Self::Book
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "book" => Ok(RecordKind::Book),
            "note" => Ok(RecordKind::Note),
            other => Err(format!("unknown record type '{}' (book or note)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub pages: Option<f64>,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub notes: String,
    pub date_added: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(draft: &RecordDraft) -> Self {
        let now = Utc::now();
        Self {
            id: fresh_id(),
            kind: draft.kind,
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            pages: parse_pages(&draft.pages),
            tag: draft.tag.trim().to_string(),
            isbn: draft.isbn.trim().to_string(),
            notes: draft.notes.clone(),
            date_added: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every mutable field from the draft. `id`, `created_at` and
    /// `date_added` stay untouched; `updated_at` is refreshed.
    pub fn apply(&mut self, draft: &RecordDraft) {
        self.kind = draft.kind;
        self.title = draft.title.trim().to_string();
        self.author = draft.author.trim().to_string();
        self.pages = parse_pages(&draft.pages);
        self.tag = draft.tag.trim().to_string();
        self.isbn = draft.isbn.trim().to_string();
        self.notes = draft.notes.clone();
        self.updated_at = Utc::now();
    }
}

/// Raw form input for a record, as typed by the user. Validation runs
/// against these untrimmed strings.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub kind: RecordKind,
    pub title: String,
    pub author: String,
    pub pages: String,
    pub tag: String,
    pub isbn: String,
    pub notes: String,
}

/// Fresh opaque record id. Stored as a string so that foreign ids coming
/// in through import survive unchanged.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

fn parse_pages(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (light or dark)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> RecordDraft {
        RecordDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn new_record_trims_text_fields() {
        let record = Record::new(&RecordDraft {
            kind: RecordKind::Book,
            title: "Dune".into(),
            author: "  Frank Herbert ".into(),
            pages: " 412 ".into(),
            tag: " scifi".into(),
            isbn: "9780441172719 ".into(),
            notes: String::new(),
        });

        assert_eq!(record.author, "Frank Herbert");
        assert_eq!(record.pages, Some(412.0));
        assert_eq!(record.tag, "scifi");
        assert_eq!(record.isbn, "9780441172719");
    }

    #[test]
    fn empty_pages_parse_to_none() {
        let record = Record::new(&draft("Dune"));
        assert_eq!(record.pages, None);
    }

    #[test]
    fn apply_keeps_identity_fields() {
        let mut record = Record::new(&draft("Old"));
        let id = record.id.clone();
        let created_at = record.created_at;
        let date_added = record.date_added;

        std::thread::sleep(std::time::Duration::from_millis(5));
        record.apply(&draft("New"));

        assert_eq!(record.id, id);
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.date_added, date_added);
        assert_eq!(record.title, "New");
        assert!(record.updated_at > created_at);
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let record = Record::new(&draft("Dune"));
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("type").is_some());
        assert!(json.get("dateAdded").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn deserializes_record_with_missing_optionals() {
        // Legacy exports may omit author/pages/tag/isbn/notes entirely
        let json = r#"{
            "id": "abc123",
            "type": "note",
            "title": "Reading list",
            "dateAdded": "2024-01-01T00:00:00Z",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, RecordKind::Note);
        assert_eq!(record.author, "");
        assert_eq!(record.pages, None);
        assert_eq!(record.notes, "");
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(fresh_id(), fresh_id());
    }

    #[test]
    fn theme_round_trips_through_str() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Light.to_string(), "light");
        assert!("solarized".parse::<Theme>().is_err());
    }
}
