use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::query;

pub fn run(library: &Library) -> Result<CmdResult> {
    let tags = query::unique_tags(library.records());

    let mut result = CmdResult::default().with_tags(tags);
    if result.tags.is_empty() {
        result.add_message(CmdMessage::info("No tags yet."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordDraft;

    #[test]
    fn aggregates_tags_with_counts() {
        let mut library = Library::new();
        for (title, tag) in [("A", "scifi"), ("B", "scifi"), ("C", "classics")] {
            library
                .create(&RecordDraft {
                    title: title.into(),
                    tag: tag.into(),
                    ..Default::default()
                })
                .unwrap();
        }

        let result = run(&library).unwrap();
        assert_eq!(
            result.tags,
            vec![("scifi".to_string(), 2), ("classics".to_string(), 1)]
        );
    }
}
