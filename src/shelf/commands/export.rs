use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default output file name. A path argument overrides it.
pub const EXPORT_BASENAME: &str = "shelf-export.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub records: Vec<Record>,
    pub exported_at: DateTime<Utc>,
}

pub fn snapshot(records: &[Record]) -> Snapshot {
    Snapshot {
        records: records.to_vec(),
        exported_at: Utc::now(),
    }
}

pub fn run(library: &Library, path: Option<PathBuf>) -> Result<CmdResult> {
    let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_BASENAME));

    let snap = snapshot(library.records());
    let content = serde_json::to_string_pretty(&snap).map_err(ShelfError::Serialization)?;
    fs::write(&path, content).map_err(ShelfError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} records to {}",
        snap.records.len(),
        path.display()
    )));
    Ok(result)
}
