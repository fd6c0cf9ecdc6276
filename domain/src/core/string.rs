//! String utilities for the domain layer.

const ELLIPSIS: &str = "...";

/// Build a single-line preview of free text.
///
/// Runs of whitespace (including newlines) collapse to one space. Text longer
/// than `max_chars` characters is cut and suffixed with `...`; the result never
/// exceeds `max_chars` characters, so budgets under 3 get a shortened suffix.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = collapsed.chars().take(keep).collect();
    out.truncate(out.trim_end().len());
    out.push_str(&ELLIPSIS[..max_chars.min(ELLIPSIS.len())]);
    out
}

/// Whether text is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
