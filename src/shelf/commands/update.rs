use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::RecordDraft;

pub fn run(library: &mut Library, id: &str, draft: &RecordDraft) -> Result<CmdResult> {
    let record = library.update(id, draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Updated: {}", record.title)));
    result.affected.push(record);
    Ok(result)
}
