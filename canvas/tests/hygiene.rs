//! Hygiene — enforces coding standards at test time
//!
//! Scans the canvas crate source tree for antipatterns. Each has a budget of
//! zero: the animation loop runs every frame in the browser, so a panic there
//! takes the whole page down with it.
//!
//! The physics modules must also stay free of browser calls so they can be
//! exercised natively.

use std::fs;
use std::path::Path;

/// `(pattern, budget, why)` for every production file.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics"),
    (".expect(", 0, "panics"),
    ("panic!(", 0, "panics"),
    ("unreachable!(", 0, "panics"),
    ("todo!(", 0, "stub"),
    ("unimplemented!(", 0, "stub"),
    ("let _ =", 0, "silent discard"),
    (".ok()", 0, "silent discard"),
    ("#[allow(dead_code)]", 0, "dead code"),
    ("println!(", 0, "stdout is invisible in wasm"),
];

/// Modules allowed to touch `web_sys`.
const BROWSER_MODULES: &[&str] = &["engine.rs", "palette.rs", "render.rs"];

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn file_name(&self) -> &str {
        Path::new(&self.path).file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    /// Source lines with line comments and doc comments dropped.
    fn code_lines(&self) -> impl Iterator<Item = &str> {
        self.content
            .lines()
            .map(str::trim_start)
            .filter(|line| !line.starts_with("//"))
    }
}

/// Collect production `.rs` files from `canvas/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the canvas crate root");
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
            let count = file.code_lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, max, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            failures.push(format!("{pattern} ({why}): found {count}, max {max}\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn physics_modules_stay_browser_free() {
    let files = source_files();
    let offenders = files
        .iter()
        .filter(|file| !BROWSER_MODULES.contains(&file.file_name()) && file.file_name() != "lib.rs")
        .filter(|file| file.code_lines().any(|line| line.contains("web_sys") || line.contains("wasm_bindgen")))
        .map(|file| file.path.clone())
        .collect::<Vec<_>>();
    assert!(offenders.is_empty(), "browser calls outside {BROWSER_MODULES:?}: {offenders:?}");
}

#[test]
fn every_module_with_logic_has_tests() {
    let files = source_files();
    let missing = files
        .iter()
        .filter(|file| !matches!(file.file_name(), "lib.rs" | "consts.rs" | "render.rs"))
        .filter(|file| !file.content.contains("#[cfg(test)]"))
        .map(|file| file.path.clone())
        .collect::<Vec<_>>();
    assert!(missing.is_empty(), "modules without a test module: {missing:?}");
}
