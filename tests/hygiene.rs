//! Hygiene: enforces coding standards at test time
//!
//! Scans the site crate's source tree for antipatterns. Each has a budget
//! (zero for all of them); the budget never grows. A second check keeps
//! every browser-only API use inside an item or block gated on the `csr`
//! feature so the native test suite keeps building.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics: these take the whole page down in WASM.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_TODO: usize = 0;

// Silent loss: discards errors without inspecting.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

const MAX_ALLOW_DEAD_CODE: usize = 0;

/// Crates that only exist under the `csr` feature.
const BROWSER_ONLY: &[&str] = &["web_sys::", "gloo_net::", "gloo_timers::", "canvas::host", "console_log::"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
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

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    let hits = count_in_source(&files, pattern);
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{pattern} budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

const CSR_GATE: &str = "#[cfg(feature = \"csr\")]";

fn brace_delta(line: &str) -> i64 {
    let opens = line.matches('{').count();
    let closes = line.matches('}').count();
    i64::try_from(opens).unwrap_or(0) - i64::try_from(closes).unwrap_or(0)
}

/// 1-based line numbers of browser-only API uses that sit outside a
/// `csr`-gated item, block, or statement. Comment lines are ignored.
///
/// A gate covers the item it is attached to: further attribute lines, then
/// either a single `;`-terminated line or everything until the braces opened
/// after it close again.
fn ungated_browser_uses(content: &str) -> Vec<usize> {
    let mut depth: i64 = 0;
    let mut pending_gate = false;
    let mut gated_until: Option<i64> = None;
    let mut offenders = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") {
            continue;
        }

        let gated_line = gated_until.is_some() || pending_gate;
        if !gated_line && BROWSER_ONLY.iter().any(|api| line.contains(api)) {
            offenders.push(index + 1);
        }

        let start_depth = depth;
        depth += brace_delta(line);

        if trimmed.starts_with(CSR_GATE) {
            pending_gate = true;
            continue;
        }
        if pending_gate && !trimmed.starts_with("#[") {
            pending_gate = false;
            if depth > start_depth && gated_until.is_none() {
                gated_until = Some(start_depth);
            }
            continue;
        }
        if gated_until.is_some_and(|base| depth <= base) {
            gated_until = None;
        }
    }
    offenders
}

#[test]
fn browser_apis_are_feature_gated() {
    let offenders: Vec<String> = source_files()
        .into_iter()
        .flat_map(|file| {
            ungated_browser_uses(&file.content)
                .into_iter()
                .map(move |line| format!("{}:{line}", file.path))
        })
        .collect();
    assert!(offenders.is_empty(), "browser-only APIs used outside a csr gate:\n  {}", offenders.join("\n  "));
}

#[test]
fn gate_scan_flags_ungated_use_next_to_gated_block() {
    let source = r#"
pub fn scroll() {
    #[cfg(feature = "csr")]
    {
        let w = web_sys::window();
    }
}

pub fn leak() {
    let w = web_sys::window();
}
"#;
    assert_eq!(ungated_browser_uses(source), vec![10]);
}

#[test]
fn gate_scan_accepts_gated_items_and_statements() {
    let source = r#"
//! Uses [`web_sys::Window`] in docs only.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = console_log::init() {
        web_sys::console::warn_1(&err.to_string().into());
    }
}

pub fn spawn() {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(d).await;
    });
    #[cfg(feature = "csr")]
    let handle = gloo_timers::callback::Timeout::new(1, f);
}
"#;
    assert!(ungated_browser_uses(source).is_empty());
}

#[test]
fn gate_scan_ends_gate_with_its_block() {
    let source = r#"
fn post() {
    #[cfg(feature = "csr")]
    {
        gloo_net::http::Request::post(url);
    }
    gloo_net::http::Request::get(url);
}
"#;
    assert_eq!(ungated_browser_uses(source), vec![7]);
}
