//! Indentation helpers
//!
//! The indent unit is inferred from the document, not configured per
//! buffer. Detection is a heuristic: the first qualifying line decides,
//! and a document mixing styles later on is not reconciled.

use crate::pairs;

/// Unit used when nothing in the document suggests one
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Widest space unit detection will return
const MAX_DETECTED_WIDTH: usize = 4;

/// Leading spaces and tabs of a line
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// Detect the document's indent unit, defaulting to four spaces
pub fn detect_indent_unit<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    detect_indent_unit_or(lines, DEFAULT_INDENT_WIDTH)
}

/// Detect the document's indent unit
///
/// Any line indented with a leading tab makes the unit a tab. Otherwise
/// the first line indented by two or more spaces sets the width, capped
/// at four. With neither, `fallback_width` spaces are returned.
pub fn detect_indent_unit_or<'a, I>(lines: I, fallback_width: usize) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut spaces = None;
    for line in lines {
        let indent = leading_whitespace(line);
        if indent.starts_with('\t') {
            return "\t".to_string();
        }
        if spaces.is_none() && indent.len() >= 2 && !indent.contains('\t') {
            spaces = Some(indent.len().min(MAX_DETECTED_WIDTH));
        }
    }
    " ".repeat(spaces.unwrap_or(fallback_width))
}

/// Indent for a new line whose text will start with `suffix`
///
/// When the suffix opens with a closing bracket, one unit is dropped so
/// the closer lines up with its opener.
pub fn adjust_indent_for_closing(indent: &str, suffix: &str, unit: &str) -> String {
    let closes = suffix.trim().chars().next().is_some_and(pairs::is_closing);
    match indent.strip_suffix(unit) {
        Some(outer) if closes && !unit.is_empty() => outer.to_string(),
        _ => indent.to_string(),
    }
}
