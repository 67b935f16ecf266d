use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn shelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_HOME", home);
    cmd
}

#[test]
fn add_then_list_shows_the_record() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args([
            "add", "Dune", "--author", "Frank Herbert", "--pages", "412", "--tag", "scifi",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added book: Dune"));

    shelf(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Dune"))
        .stdout(predicates::str::contains("Frank Herbert"));
}

#[test]
fn list_filters_by_type() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path()).args(["add", "Dune"]).assert().success();
    shelf(temp_dir.path())
        .args(["add", "Reading plan", "--type", "note"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .args(["list", "--type", "note"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Reading plan"))
        .stdout(predicates::str::contains("Dune").not());
}

#[test]
fn validation_rejects_duplicate_word_title() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["add", "The The Hobbit"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Title contains duplicate words."));

    // Nothing was committed
    shelf(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No records found."));
}

#[test]
fn validation_enforces_two_decimal_pages() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["add", "Dune", "--pages", "12.345"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("non-negative number"));

    shelf(temp_dir.path())
        .args(["add", "Dune", "--pages", "12.34"])
        .assert()
        .success();
}

#[test]
fn search_matches_case_insensitively() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["add", "Dune", "--author", "Herbert"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .args(["search", "dune"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Dune"));

    shelf(temp_dir.path())
        .args(["search", "nothing-here"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No records found."));
}

#[test]
fn export_then_import_skips_duplicates() {
    let temp_dir = tempfile::tempdir().unwrap();
    let export_path = temp_dir.path().join("backup.json");

    shelf(temp_dir.path())
        .args(["add", "Dune", "--author", "Herbert"])
        .assert()
        .success();
    shelf(temp_dir.path())
        .args(["add", "Emma", "--author", "Austen"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .args(["export", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 2 records"));

    // Importing the export back into the same collection skips everything
    shelf(temp_dir.path())
        .args(["import", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Imported 0 records (2 duplicates skipped).",
        ));

    // Importing into an empty home accepts everything
    let fresh_dir = tempfile::tempdir().unwrap();
    shelf(fresh_dir.path())
        .args(["import", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Imported 2 records (0 duplicates skipped).",
        ));

    shelf(fresh_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Dune"))
        .stdout(predicates::str::contains("Emma"));
}

#[test]
fn import_rejects_malformed_payloads() {
    let temp_dir = tempfile::tempdir().unwrap();
    let bad_path = temp_dir.path().join("bad.json");
    std::fs::write(&bad_path, r#"{"items": []}"#).unwrap();

    shelf(temp_dir.path())
        .args(["import", bad_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid file format"));
}

#[test]
fn delete_by_position_and_unknown_id() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path()).args(["add", "Doomed"]).assert().success();

    shelf(temp_dir.path())
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted: Doomed"));

    // Deleting something that no longer exists is reported, not an error
    shelf(temp_dir.path())
        .args(["rm", "no-such-id"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No record matching"));
}

#[test]
fn clear_removes_everything_with_yes_flag() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path()).args(["add", "A"]).assert().success();
    shelf(temp_dir.path()).args(["add", "B"]).assert().success();

    shelf(temp_dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Removed 2 records."));

    shelf(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No records found."));
}

#[test]
fn stats_reports_totals_and_trend() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["add", "Dune", "--pages", "412", "--tag", "scifi"])
        .assert()
        .success();
    shelf(temp_dir.path())
        .args(["add", "Emma", "--pages", "474", "--tag", "scifi"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicates::str::contains("Records: 2"))
        .stdout(predicates::str::contains("886"))
        .stdout(predicates::str::contains("Top tag: scifi (2)"))
        .stdout(predicates::str::contains("Added last 7 days:"));
}

#[test]
fn config_round_trips_theme_and_page_cap() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["config", "theme", "dark"])
        .assert()
        .success()
        .stdout(predicates::str::contains("theme set to dark"));

    shelf(temp_dir.path())
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout(predicates::str::contains("theme = dark"));

    shelf(temp_dir.path())
        .args(["config", "page-cap", "500"])
        .assert()
        .success();

    // A cap below the page total shows up as exceeded on the dashboard
    shelf(temp_dir.path())
        .args(["add", "Dune", "--pages", "600"])
        .assert()
        .success();
    shelf(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicates::str::contains("Cap exceeded by 100 pages!"));
}

#[test]
fn tags_lists_counts() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["add", "Dune", "--tag", "scifi"])
        .assert()
        .success();
    shelf(temp_dir.path())
        .args(["add", "Solaris", "--tag", "scifi"])
        .assert()
        .success();

    shelf(temp_dir.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicates::str::contains("scifi"))
        .stdout(predicates::str::contains("2"));
}
