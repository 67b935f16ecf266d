use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::Library;
use crate::query;

pub fn run(library: &Library, query: &str) -> Result<CmdResult> {
    let listed = query::search(query, library.records())
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordDraft;

    #[test]
    fn finds_case_insensitive_matches() {
        let mut library = Library::new();
        library
            .create(&RecordDraft {
                title: "Dune".into(),
                author: "Herbert".into(),
                tag: "scifi".into(),
                pages: "412".into(),
                ..Default::default()
            })
            .unwrap();

        let result = run(&library, "dune").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].title, "Dune");
    }
}
