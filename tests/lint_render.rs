//! Lint: detect bracket-key text (`[X]`) rendered without click registration.
//!
//! Every `[X]`-style key hint a wizard screen displays must also be a click
//! target registered through `push_clickable()`.
//!
//! `cl.push(Line::from(... "[R]..." ...))` renders the hint but leaves it
//! untappable on touch screens.
//!
//! This test scans every screen under `src/wizard/screens/` and flags
//! `push(` calls whose string arguments contain bracket-key patterns, or
//! that take a line from a hint builder (`key_hint`, `career_line`).

use std::fs;
use std::path::Path;

/// Check if a string literal contains a bracket-key pattern like `[R]`, `[-]`, `[1]`.
fn contains_bracket_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 3 {
        return false;
    }
    for i in 0..bytes.len() - 2 {
        if bytes[i] == b'[' && bytes[i + 2] == b']' {
            let ch = bytes[i + 1];
            if ch.is_ascii_alphanumeric() || b"-=!~{}|\\".contains(&ch) {
                return true;
            }
        }
    }
    false
}

/// Functions whose result is a line drawn with a `[X]` hint.
const HINT_BUILDERS: [&str; 2] = ["key_hint(", "career_line("];

fn calls_hint_builder(s: &str) -> bool {
    HINT_BUILDERS.iter().any(|b| s.contains(b))
}

/// Scan source for `push(` calls (non-clickable) that render a bracket key.
fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();
    // A `.push(` whose argument starts on the next line.
    let mut open_push = false;

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        // Skip comments
        if trimmed.starts_with("//") || trimmed.starts_with("///") {
            continue;
        }

        let continues_push = std::mem::take(&mut open_push);
        let has_push = line.contains(".push(");
        let has_clickable = line.contains("push_clickable(") || line.contains("push_back(");
        if has_push && !has_clickable && trimmed.ends_with(".push(") {
            open_push = true;
            continue;
        }

        let renders_hint = contains_bracket_key(line) || calls_hint_builder(line);
        if renders_hint && ((has_push && !has_clickable) || continues_push) {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

#[test]
fn no_bracket_keys_in_non_clickable_push() {
    let screens_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/wizard/screens");
    let mut all_violations = Vec::new();

    visit_screen_files(&screens_dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found bracket-key text [X] in non-clickable cl.push() calls.\n\
             Register them with push_clickable() or a helper like push_back().\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

fn visit_screen_files(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_screen_files(&path, violations);
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            let file_violations = find_bracket_key_in_push(&source);
            let display_path = path.display().to_string();
            for (line_num, line) in file_violations {
                violations.push((display_path.clone(), line_num, line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_bracket_key_in_push() {
        let source = r#"cl.push(Line::from(" [R] View Complete Roadmap"));"#;
        let violations = find_bracket_key_in_push(source);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn detects_key_hint_in_push() {
        let source = r#"cl.push(key_hint("R", "View Complete Roadmap"));"#;
        assert_eq!(find_bracket_key_in_push(source).len(), 1);
    }

    #[test]
    fn detects_career_line_in_push() {
        let source = r#"cl.push(career_line(&key, career));"#;
        assert_eq!(find_bracket_key_in_push(source).len(), 1);
    }

    #[test]
    fn detects_hint_on_the_line_after_push() {
        let source = "cl.push(\n    key_hint(\"1\", option.label),\n);";
        let violations = find_bracket_key_in_push(source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].0, 2);
    }

    #[test]
    fn allows_hint_on_the_line_after_push_clickable() {
        let source = "cl.push_clickable(\n    key_hint(\"1\", option.label),\n    CHOICE_BASE,\n);";
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn allows_building_a_hint_before_pushing_it() {
        let source = "let mut line = key_hint(key, \"\");\nline.spans.pop();\ncl.push_clickable(line, NEXT);";
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn allows_push_clickable() {
        let source = r#"cl.push_clickable(key_hint("R", "View Complete Roadmap"), START_ROADMAP);"#;
        let violations = find_bracket_key_in_push(source);
        assert!(violations.is_empty());
    }

    #[test]
    fn allows_push_back() {
        let source = r#"push_back(&mut footer); // [-] Back"#;
        let violations = find_bracket_key_in_push(source);
        assert!(violations.is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = r#"// cl.push(Line::from(" [1] School Student"));"#;
        let violations = find_bracket_key_in_push(source);
        assert!(violations.is_empty());
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[R]"));
        assert!(contains_bracket_key("[E]"));
        assert!(contains_bracket_key("[1]"));
        assert!(contains_bracket_key("[0]"));
        assert!(contains_bracket_key("[-]"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[II]"));
        assert!(!contains_bracket_key("abc"));
    }
}
