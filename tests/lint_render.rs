//! Lint: key-hint text (`[X]`) drawn without a click target.
//!
//! Anything that reads like a button on screen must also be tappable. Page
//! bodies register targets through `push_clickable()` (or `push_cta()`), so a
//! plain `cl.push(...)` whose string literal contains a `[X]` hint renders a
//! button that does nothing on touch screens.
//!
//! Scans every `render.rs` under `src/pages/`, plus `src/chrome.rs`.

use std::fs;
use std::path::Path;

/// True if `s` contains a single-character bracket hint like `[C]` or `[5]`.
fn contains_bracket_key(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(3).any(|w| {
        w[0] == '['
            && w[2] == ']'
            && (w[1].is_ascii_alphanumeric() || "-=!~{}|\\".contains(w[1]))
    })
}

/// `(line_number, line)` of every non-clickable `push(` with a bracket hint.
fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") || !contains_bracket_key(line) {
                return false;
            }
            let clickable = line.contains("push_clickable(") || line.contains("push_cta(");
            line.contains(".push(") && !clickable
        })
        .map(|(i, line)| (i + 1, line.trim().to_string()))
        .collect()
}

fn visit_render_files(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_render_files(&path, violations);
        } else if path.file_name().is_some_and(|n| n == "render.rs") {
            lint_file(&path, violations);
        }
    }
}

fn lint_file(path: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(source) = fs::read_to_string(path) else {
        return;
    };
    for (line_num, line) in find_bracket_key_in_push(&source) {
        violations.push((path.display().to_string(), line_num, line));
    }
}

#[test]
fn no_bracket_keys_in_non_clickable_push() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut violations = Vec::new();
    visit_render_files(&root.join("src/pages"), &mut violations);
    lint_file(&root.join("src/chrome.rs"), &mut violations);

    if !violations.is_empty() {
        let mut msg = String::from(
            "Found [X] key hints in non-clickable cl.push() calls.\n\
             Use push_clickable() or push_cta() so the hint is tappable.\n\n",
        );
        for (file, line_num, line) in &violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

#[test]
fn page_render_files_exist() {
    let pages = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/pages");
    for page in ["home", "about", "services", "investments", "contact"] {
        assert!(
            pages.join(page).join("render.rs").exists(),
            "{} has no render.rs",
            page
        );
    }
}

mod detector {
    use super::*;

    #[test]
    fn flags_hint_in_plain_push() {
        let source = r#"cl.push(Line::from(" [C] Contact  [5] Jump"));"#;
        assert_eq!(find_bracket_key_in_push(source).len(), 1);
    }

    #[test]
    fn allows_clickable_lines() {
        let source = r#"cl.push_clickable(Line::from(" [S] Send Message"), SEND);"#;
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = r#"// cl.push(Line::from(" [A] All"));"#;
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn reports_line_numbers() {
        let source = "let a = 1;\ncl.push(Line::from(\"[R] vetted\"));\n";
        assert_eq!(find_bracket_key_in_push(source)[0].0, 2);
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[I]"));
        assert!(contains_bracket_key("[1]"));
        assert!(contains_bracket_key("[-]"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[II]"));
        assert!(!contains_bracket_key("[image: office]"));
        assert!(!contains_bracket_key("☑ consent"));
    }
}
