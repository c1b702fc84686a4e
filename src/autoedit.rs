//! Bracket and quote auto-editing
//!
//! Keys are offered here before the default handling. A key this module
//! acts on is consumed; any other key is passed back as `Ignored` for the
//! default insert, delete or tab.

use crate::document::Document;
use crate::indent::{self, DEFAULT_INDENT_WIDTH};
use crate::input::EditKey;
use crate::line::Line;
use crate::pairs;

/// Whether a key was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        self == KeyOutcome::Handled
    }
}

impl From<bool> for KeyOutcome {
    fn from(handled: bool) -> Self {
        if handled {
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }
}

/// Auto-editor settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoEditor {
    /// Indent width used when the document gives no hint
    pub fallback_width: usize,
}

impl Default for AutoEditor {
    fn default() -> Self {
        Self {
            fallback_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Offer a key to the auto-editor with default settings
pub fn handle_key(doc: &mut Document, key: EditKey) -> KeyOutcome {
    AutoEditor::default().handle_key(doc, key)
}

impl AutoEditor {
    pub fn new(fallback_width: usize) -> Self {
        Self { fallback_width }
    }

    /// Offer a key to the auto-editor
    pub fn handle_key(&self, doc: &mut Document, key: EditKey) -> KeyOutcome {
        let outcome = match key {
            EditKey::Enter => {
                self.enter(doc);
                KeyOutcome::Handled
            }
            EditKey::Backspace => delete_pair(doc).into(),
            EditKey::Tab => tab_jump(doc).into(),
            EditKey::Char(ch) => type_char(doc, ch),
        };
        tracing::trace!(?key, ?outcome, pos = doc.position(), "auto-edit");
        outcome
    }

    fn indent_unit(&self, doc: &Document) -> String {
        indent::detect_indent_unit_or(doc.lines().iter().map(Line::text), self.fallback_width)
    }

    /// Newline with bracket-aware indentation
    fn enter(&self, doc: &mut Document) {
        if let Some(range) = doc.selection() {
            doc.delete_range(range.start, range.end);
        }

        let (idx, col) = doc.cursor_line();
        let text = doc.line(idx).map(Line::text).unwrap_or_default();
        let (prefix, suffix) = text.split_at(col.min(text.len()));
        let unclosed = pairs::count_unclosed(prefix);
        let closer_ahead = suffix
            .trim_start()
            .chars()
            .next()
            .is_some_and(pairs::is_closing);
        let current = indent::leading_whitespace(text).to_string();
        let gap = suffix.len() - suffix.trim_start().len();
        let suffix = suffix.trim_start().to_string();
        let unit = self.indent_unit(doc);

        // The closer moves to its own line without the blanks before it
        if closer_ahead && gap > 0 {
            let pos = doc.position();
            doc.delete_range(pos, pos + gap);
        }

        if unclosed > 0 && closer_ahead {
            // Cursor on a deeper line, closer on its own line below
            doc.insert_at_cursor(&format!("\n{current}{unit}"));
            let inner = doc.position();
            doc.insert_at_cursor(&format!("\n{current}"));
            doc.set_position(inner);
        } else if unclosed > 0 {
            doc.insert_at_cursor(&format!("\n{current}{unit}"));
        } else {
            let adjusted = indent::adjust_indent_for_closing(&current, &suffix, &unit);
            doc.insert_at_cursor(&format!("\n{adjusted}"));
        }
    }
}

fn type_char(doc: &mut Document, ch: char) -> KeyOutcome {
    let pos = doc.position();
    if let Some(close) = pairs::closing_for(ch) {
        insert_pair(doc, ch, close);
        KeyOutcome::Handled
    } else if pairs::is_quote(ch) {
        if !doc.has_selection() && doc.char_at(pos) == Some(ch) {
            doc.move_right(1);
        } else {
            insert_pair(doc, ch, ch);
        }
        KeyOutcome::Handled
    } else if pairs::is_closing(ch) && !doc.has_selection() && doc.char_at(pos) == Some(ch) {
        doc.move_right(1);
        KeyOutcome::Handled
    } else {
        KeyOutcome::Ignored
    }
}

fn insert_pair(doc: &mut Document, open: char, close: char) {
    doc.insert_at_cursor(&format!("{open}{close}"));
    doc.move_left(1);
}

/// Delete an empty pair around the cursor
fn delete_pair(doc: &mut Document) -> bool {
    if doc.has_selection() {
        return false;
    }
    let pos = doc.position();
    match (doc.char_before(pos), doc.char_at(pos)) {
        (Some(open), Some(close)) if pairs::is_pair(open, close) => {
            doc.delete_range(pos - open.len_utf8(), pos + close.len_utf8());
            true
        }
        _ => false,
    }
}

/// Step over a closer or quote under the cursor
fn tab_jump(doc: &mut Document) -> bool {
    if doc.has_selection() {
        return false;
    }
    match doc.char_at(doc.position()) {
        Some(ch) if pairs::is_closing(ch) || pairs::is_quote(ch) => doc.move_right(1),
        _ => false,
    }
}
