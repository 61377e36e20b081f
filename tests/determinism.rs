mod common;
use common::cli::{Workspace, run_keep2bear};
use common::fixtures;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Relative path -> file bytes for every file under `root`.
fn snapshot_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            (relative, fs::read(entry.path()).unwrap())
        })
        .collect()
}

#[test]
fn test_two_runs_produce_identical_output() {
    let workspace = Workspace::new();
    workspace.note("Groceries.json", fixtures::GROCERIES);
    workspace.note("call.json", fixtures::CALL_MOM);
    workspace.note("Beach.json", fixtures::PHOTO_MISSING);
    workspace.attachment("sunrise.png", b"\x89PNG\r\n\x1a\n");
    workspace.note("Morning.json", fixtures::PHOTO_PRESENT);
    workspace.note("dup-a.json", r#"{"title": "Same", "textContent": "first"}"#);
    workspace.note("dup-b.json", r#"{"title": "Same", "textContent": "second"}"#);

    let first = workspace.root.join("run-1");
    let second = workspace.root.join("run-2");
    for out in [&first, &second] {
        let output = run_keep2bear(
            &workspace,
            [
                "-i",
                workspace.takeout.to_str().unwrap(),
                "-o",
                out.to_str().unwrap(),
            ],
            "convert",
        );
        assert!(output.status.success(), "convert failed: {}", output.stderr);
    }

    let a = snapshot_tree(&first);
    let b = snapshot_tree(&second);
    assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
    assert_eq!(a, b);

    let documents = a.keys().filter(|k| k.ends_with("text.txt")).count();
    assert_eq!(documents, 6);
    assert!(a.contains_key(&format!("Same 2.textbundle{}text.txt", std::path::MAIN_SEPARATOR)));
}

#[test]
fn test_one_document_per_record() {
    let workspace = Workspace::new();
    for i in 0..25 {
        workspace.note(
            &format!("note-{i:02}.json"),
            &format!(r#"{{"title": "Note {i}", "textContent": "body {i}"}}"#),
        );
    }

    let output = run_keep2bear(
        &workspace,
        [
            "-i",
            workspace.takeout.to_str().unwrap(),
            "-o",
            workspace.out.to_str().unwrap(),
        ],
        "convert",
    );
    assert!(output.status.success(), "convert failed: {}", output.stderr);

    let bundles = fs::read_dir(&workspace.out)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "textbundle"))
        .count();
    assert_eq!(bundles, 25);
}
