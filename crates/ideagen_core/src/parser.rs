//! Turns raw model output into an ordered list of ideas.
//!
//! The model is asked for a JSON array of strings but frequently wraps it in
//! prose, or ignores the instruction and answers with a numbered list. Both
//! shapes are accepted; nothing here can fail.

/// Extract ideas from free-form model output.
///
/// Tries the bracketed JSON array first and falls back to one idea per
/// non-empty line with bullets and numbering stripped. Order follows the
/// source text. Returns an empty list when nothing usable is found.
pub fn extract_ideas(text: &str) -> Vec<String> {
    let text = text.trim();
    if let Some(ideas) = extract_json_array(text) {
        return ideas;
    }
    extract_lines(text)
}

/// Decode the span from the first `[` to the last `]` as an array of strings.
///
/// `None` when there is no such span, it is not valid JSON, or any element is
/// not a string.
fn extract_json_array(text: &str) -> Option<Vec<String>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }

    let items: Vec<String> = serde_json::from_str(&text[start..=end]).ok()?;
    Some(
        items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Line boundaries: `\n`, `\r`, vertical tab, form feed, the C1/FS-RS
/// separators, NEL and the Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn extract_lines(text: &str) -> Vec<String> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(clean_line)
        .collect()
}

/// Strip bullet markers and leading numbering like `1.`, `2)`, `10 ` or `٣.`.
fn clean_line(line: &str) -> Option<String> {
    let mut line = line.trim_start_matches(['-', '•', ' ']);
    if line.starts_with(char::is_numeric) {
        line = line
            .trim_start_matches(|c: char| c.is_numeric() || matches!(c, '.' | ')' | ' '))
            .trim();
    }
    (!line.is_empty()).then(|| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_inside_prose() {
        let ideas = extract_ideas(r#"Here you go: ["Idea A", " Idea B ", ""]"#);
        assert_eq!(ideas, vec!["Idea A", "Idea B"]);
    }

    #[test]
    fn test_array_inside_code_fence() {
        let raw = "```json\n[\"Batch-cook oats\", \"Tofu scramble in 5 minutes\"]\n```";
        assert_eq!(
            extract_ideas(raw),
            vec!["Batch-cook oats", "Tofu scramble in 5 minutes"]
        );
    }

    #[test]
    fn test_numbered_and_bulleted_lines() {
        let raw = "1. Write a post\n- Record a video\n• Share a story";
        assert_eq!(
            extract_ideas(raw),
            vec!["Write a post", "Record a video", "Share a story"]
        );
    }

    #[test]
    fn test_numbering_variants() {
        let raw = "2) Second\n10 Tenth\n3.) Third\n  4 .  Fourth  ";
        assert_eq!(extract_ideas(raw), vec!["Second", "Tenth", "Third", "Fourth"]);
    }

    #[test]
    fn test_bare_carriage_returns_split_lines() {
        assert_eq!(
            extract_ideas("1. Alpha\r2. Beta\r3. Gamma"),
            vec!["Alpha", "Beta", "Gamma"]
        );
        assert_eq!(
            extract_ideas("- One\r\n- Two\u{2028}- Three\x0c- Four"),
            vec!["One", "Two", "Three", "Four"]
        );
    }

    #[test]
    fn test_non_ascii_numbering_is_stripped() {
        assert_eq!(
            extract_ideas("١. Alpha\n٢) Beta\n३ Gamma"),
            vec!["Alpha", "Beta", "Gamma"]
        );
    }

    #[test]
    fn test_non_string_elements_fall_back_to_lines() {
        let raw = "[1, 2, 3]";
        // Falls through to the line path; the single line is neither bullet nor number-led.
        assert_eq!(extract_ideas(raw), vec!["[1, 2, 3]"]);
    }

    #[test]
    fn test_invalid_json_falls_back_to_lines() {
        let raw = "Ideas [draft]:\n1. Morning smoothie bowls\n2. Overnight chia";
        assert_eq!(
            extract_ideas(raw),
            vec!["Ideas [draft]:", "Morning smoothie bowls", "Overnight chia"]
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(extract_ideas("").is_empty());
        assert!(extract_ideas(" \n\t\n ").is_empty());
    }

    #[test]
    fn test_unbalanced_brackets_do_not_panic() {
        assert_eq!(extract_ideas("] backwards ["), vec!["] backwards ["]);
        assert_eq!(extract_ideas("[\"open"), vec!["[\"open"]);
        assert_eq!(extract_ideas("]"), vec!["]"]);
    }

    #[test]
    fn test_garbage_does_not_panic() {
        let garbage = String::from_utf8_lossy(&[0xff, 0x00, b'[', 0xfe, b']', b'\n', 0x80]);
        let _ = extract_ideas(&garbage);
    }

    #[test]
    fn test_lines_made_only_of_markers_are_dropped() {
        assert!(extract_ideas("- \n•\n1.\n2)").is_empty());
    }

    #[test]
    fn test_idempotent_on_clean_output() {
        let first = extract_ideas(r#"["Alpha", "Beta gamma", "Delta"]"#);
        let rejoined = first.join("\n");
        assert_eq!(extract_ideas(&rejoined), first);
    }

    #[test]
    fn test_order_is_preserved() {
        let ideas = extract_ideas(r#"["c", "a", "b"]"#);
        assert_eq!(ideas, vec!["c", "a", "b"]);
    }
}
