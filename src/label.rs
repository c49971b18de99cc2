//! Axis label escaping and line breaking.
//!
//! Labels come straight out of spreadsheet cells and go into LaTeX
//! source, so underscores must be escaped before anything else touches
//! them. Long labels can optionally be broken into multiple lines for
//! the tick area; the wrap is a greedy first-fit over words, which is
//! plenty for short axis text (this is not a paragraph typesetter).

/// Escape a raw cell for use in LaTeX: every `_` becomes `\_`.
///
/// Not idempotent — escaping an already escaped label doubles the
/// backslash. Apply exactly once, before [`wrap_label`].
pub fn escape_label(raw: &str) -> String {
    raw.replace('_', "\\_")
}

/// Break a label into lines of at most `max_line_length` characters,
/// joined with the LaTeX line-break marker `\\`.
///
/// Words are never split: a single word longer than the limit sits alone
/// on its line and overflows. A limit of 0 disables wrapping entirely,
/// as does a label that already fits.
pub fn wrap_label(label: &str, max_line_length: usize) -> String {
    if max_line_length == 0 || label.chars().count() <= max_line_length {
        return label.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in label.split_whitespace() {
        let fits = current.chars().count() + 1 + word.chars().count() <= max_line_length;
        if !current.is_empty() && !fits {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\\\\")
}
