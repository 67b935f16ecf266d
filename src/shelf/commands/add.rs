use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::RecordDraft;

pub fn run(library: &mut Library, draft: &RecordDraft) -> Result<CmdResult> {
    let record = library.create(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {}: {}",
        record.kind, record.title
    )));
    result.affected.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::model::RecordKind;

    #[test]
    fn adds_record_and_reports_it() {
        let mut library = Library::new();
        let result = run(
            &mut library,
            &RecordDraft {
                kind: RecordKind::Note,
                title: "Reading plan".into(),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(result.affected.len(), 1);
        assert_eq!(library.len(), 1);
        assert!(result.messages[0].content.contains("note"));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut library = Library::new();
        let err = run(
            &mut library,
            &RecordDraft {
                title: "  ".into(),
                ..Default::default()
            },
        );
        assert!(matches!(err, Err(ShelfError::Validation(_))));
    }
}
