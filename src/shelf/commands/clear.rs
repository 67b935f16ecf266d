use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use std::io::{self, Write};

/// Removes every record. Prompts for confirmation unless `skip_confirm`
/// is set (the `--yes` flag or a non-interactive caller).
pub fn run(library: &mut Library, skip_confirm: bool) -> Result<CmdResult> {
    let count = library.len();

    if count == 0 {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Nothing to clear."));
        return Ok(res);
    }

    if !skip_confirm {
        println!("This will permanently remove all {} records.", count);
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(ShelfError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(ShelfError::Io)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    library.replace_all(Vec::new());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed {} records.", count)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordDraft;

    #[test]
    fn clears_everything_when_confirmed() {
        let mut library = Library::new();
        for title in ["A", "B", "C"] {
            library
                .create(&RecordDraft {
                    title: title.into(),
                    ..Default::default()
                })
                .unwrap();
        }

        let result = run(&mut library, true).unwrap();
        assert!(library.is_empty());
        assert!(result.messages[0].content.contains("3"));
    }

    #[test]
    fn empty_library_reports_nothing_to_clear() {
        let mut library = Library::new();
        let result = run(&mut library, true).unwrap();
        assert!(result.messages[0].content.contains("Nothing"));
    }
}
