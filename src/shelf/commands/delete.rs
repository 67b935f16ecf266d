use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;

pub fn run(library: &mut Library, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match library.get(id).cloned() {
        Some(record) => {
            library.delete(&record.id);
            result.add_message(CmdMessage::success(format!("Deleted: {}", record.title)));
            result.affected.push(record);
        }
        // Idempotent: deleting an absent id is not an error
        None => result.add_message(CmdMessage::info(format!("No record matching '{}'.", id))),
    }

    Ok(result)
}
