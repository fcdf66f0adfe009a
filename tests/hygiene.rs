//! Source hygiene budgets for the landing crate.
//!
//! Scans production `.rs` files under `src/` (test files excluded) for
//! patterns the crate does not allow. Every budget is zero; a new hit means
//! fixing the code, not raising the number.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    reason: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, reason: "crashes the page script" },
    Budget { pattern: ".expect(", max: 0, reason: "crashes the page script" },
    Budget { pattern: "panic!(", max: 0, reason: "crashes the page script" },
    Budget { pattern: "unreachable!(", max: 0, reason: "crashes the page script" },
    Budget { pattern: "todo!(", max: 0, reason: "unfinished code path" },
    Budget { pattern: "unimplemented!(", max: 0, reason: "unfinished code path" },
    Budget { pattern: "let _ =", max: 0, reason: "discards an error without logging it" },
    Budget { pattern: ".ok()", max: 0, reason: "discards an error without logging it" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, reason: "hides unused code" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
    assert!(files.iter().any(|f| f.path.ends_with("site.rs")));
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "{} budget exceeded ({}): found {count}, max {}.\n{}",
                budget.pattern,
                budget.reason,
                budget.max,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

#[test]
fn tests_live_in_sibling_files() {
    let files = source_files();
    let inline: Vec<_> = files.iter().filter(|f| f.content.contains("mod tests {")).map(|f| f.path.clone()).collect();
    assert!(inline.is_empty(), "move inline test modules to <module>_test.rs:\n{}", inline.join("\n"));
}
