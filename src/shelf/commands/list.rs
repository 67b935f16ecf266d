use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::Library;
use crate::query::{self, Filters};

pub fn run(library: &Library, filters: &Filters) -> Result<CmdResult> {
    let listed = query::filter(library.records(), filters)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecordDraft, RecordKind};

    #[test]
    fn lists_with_cumulative_filters() {
        let mut library = Library::new();
        library
            .create(&RecordDraft {
                kind: RecordKind::Book,
                title: "Dune".into(),
                tag: "scifi".into(),
                ..Default::default()
            })
            .unwrap();
        library
            .create(&RecordDraft {
                kind: RecordKind::Note,
                title: "Reading plan".into(),
                tag: "scifi".into(),
                ..Default::default()
            })
            .unwrap();

        let all = run(&library, &Filters::default()).unwrap();
        assert_eq!(all.listed.len(), 2);

        let books = run(
            &library,
            &Filters {
                kind: Some(RecordKind::Book),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(books.listed.len(), 1);
        assert_eq!(books.listed[0].title, "Dune");
    }
}
