//! Import-merge reconciliation.
//!
//! An import payload is either `{ "records": [...] }` (the export shape)
//! or a bare array of record-like objects. Items normalize with defaults
//! for every missing field, then merge against the existing collection:
//! an item is skipped when its id, or its lowercase `title|author`
//! composite key, already exists. The whole payload parses or nothing
//! merges.
//!
//! The duplicate check compares against the existing collection only,
//! never against other items of the same batch. Two identical incoming
//! records are both accepted.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::{self, Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportPayload {
    Wrapped { records: Vec<RawRecord> },
    Bare(Vec<RawRecord>),
}

/// A record-like object as found in an import file: every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default, deserialize_with = "id_as_string")]
    id: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<RecordKind>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    pages: Option<f64>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    isbn: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

// Foreign exports sometimes carry numeric ids; coerce them to strings
// instead of rejecting the payload.
fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "id must be a string, got {}",
            other
        ))),
    }
}

#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub accepted: Vec<Record>,
    pub skipped: usize,
}

/// Parses an import payload into record-like items. Any other shape is a
/// format error; nothing is merged from a payload that fails to parse.
pub fn parse_payload(raw: &str) -> Result<Vec<RawRecord>> {
    let payload: ImportPayload = serde_json::from_str(raw).map_err(|_| {
        ShelfError::Format("Invalid file format. Expected { records: [...] } or an array.".into())
    })?;
    Ok(match payload {
        ImportPayload::Wrapped { records } => records,
        ImportPayload::Bare(records) => records,
    })
}

/// Fills in defaults for every missing field of an incoming item.
fn normalize(raw: RawRecord, now: DateTime<Utc>) -> Record {
    Record {
        id: raw
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(model::fresh_id),
        kind: raw.kind.unwrap_or(RecordKind::Book),
        title: raw
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Untitled".to_string()),
        author: raw.author.unwrap_or_default(),
        pages: raw.pages.filter(|p| *p != 0.0),
        tag: raw.tag.unwrap_or_default(),
        isbn: raw.isbn.unwrap_or_default(),
        notes: raw.notes.unwrap_or_default(),
        date_added: raw.date_added.unwrap_or(now),
        created_at: raw.created_at.unwrap_or(now),
        updated_at: raw.updated_at.unwrap_or(now),
    }
}

fn composite_key(title: &str, author: &str) -> String {
    format!("{}|{}", title.to_lowercase(), author.to_lowercase())
}

/// Merges normalized incoming records against the existing collection.
pub fn merge(incoming: Vec<RawRecord>, existing: &[Record]) -> MergeOutcome {
    let now = Utc::now();
    let normalized: Vec<Record> = incoming.into_iter().map(|r| normalize(r, now)).collect();

    let existing_ids: HashSet<&str> = existing.iter().map(|r| r.id.as_str()).collect();
    let existing_keys: HashSet<String> = existing
        .iter()
        .map(|r| composite_key(&r.title, &r.author))
        .collect();

    let total = normalized.len();
    let accepted: Vec<Record> = normalized
        .into_iter()
        .filter(|record| {
            !existing_ids.contains(record.id.as_str())
                && !existing_keys.contains(&composite_key(&record.title, &record.author))
        })
        .collect();

    MergeOutcome {
        skipped: total - accepted.len(),
        accepted,
    }
}

pub fn run(library: &mut Library, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ShelfError::Format(format!("Failed to import: {}", e)))?;

    let incoming = parse_payload(&raw)?;
    let outcome = merge(incoming, library.records());

    // Commit through bulk replacement so the merge stays all-or-nothing
    let mut merged = library.records().to_vec();
    merged.extend(outcome.accepted.iter().cloned());
    library.replace_all(merged);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} records ({} duplicates skipped).",
        outcome.accepted.len(),
        outcome.skipped
    )));
    result.affected = outcome.accepted;
    Ok(result)
}
