//! Document representation - a line table plus a cursor
//!
//! Positions are absolute byte offsets into the document text, where the
//! break between two lines counts as one byte. The same unit is used for
//! highlight spans within a line, so a span's bounds plus the line's start
//! offset locate it in the document.

use std::ops::Range;

use crate::line::Line;

/// A document containing text, a cursor and an optional selection
#[derive(Debug, Clone)]
pub struct Document {
    /// Lines of text; there is always at least one
    lines: Vec<Line>,
    /// Cursor position
    cursor: usize,
    /// Other end of the selection, if any
    anchor: Option<usize>,
    /// Lines whose text changed since the last `take_dirty`
    dirty: Option<Range<usize>>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
            cursor: 0,
            anchor: None,
            dirty: Some(0..1),
        }
    }

    /// Create a document from text, cursor at the start
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<Line> = text
            .split('\n')
            .map(|l| Line::from(l.strip_suffix('\r').unwrap_or(l)))
            .collect();
        let count = lines.len();
        Self {
            lines,
            cursor: 0,
            anchor: None,
            dirty: Some(0..count),
        }
    }

    /// Full text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Total length in bytes
    pub fn len(&self) -> usize {
        self.lines.iter().map(Line::len).sum::<usize>() + self.lines.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by index
    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    /// Get a mutable line by index
    pub fn line_mut(&mut self, idx: usize) -> Option<&mut Line> {
        self.lines.get_mut(idx)
    }

    /// Get all lines
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Line index and column for an offset, `None` past the end
    pub fn locate(&self, offset: usize) -> Option<(usize, usize)> {
        let mut start = 0;
        for (idx, line) in self.lines.iter().enumerate() {
            let end = start + line.len();
            if offset <= end {
                return Some((idx, offset - start));
            }
            start = end + 1;
        }
        None
    }

    /// Offset of the first byte of a line
    pub fn line_start(&self, idx: usize) -> usize {
        self.lines[..idx.min(self.lines.len())]
            .iter()
            .map(|l| l.len() + 1)
            .sum()
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Line index and column of the cursor
    pub fn cursor_line(&self) -> (usize, usize) {
        self.locate(self.cursor).unwrap_or((self.lines.len() - 1, 0))
    }

    /// Move the cursor, clearing any selection
    ///
    /// The position is clamped to the document and snapped back to a
    /// character boundary.
    pub fn set_position(&mut self, pos: usize) {
        self.cursor = self.snap(pos);
        self.anchor = None;
    }

    /// Select from `anchor` to `pos`, leaving the cursor at `pos`
    pub fn select(&mut self, anchor: usize, pos: usize) {
        let anchor = self.snap(anchor);
        self.cursor = self.snap(pos);
        self.anchor = (anchor != self.cursor).then_some(anchor);
    }

    /// Selected range, if any
    pub fn selection(&self) -> Option<Range<usize>> {
        self.anchor
            .map(|anchor| anchor.min(self.cursor)..anchor.max(self.cursor))
    }

    pub fn has_selection(&self) -> bool {
        self.anchor.is_some()
    }

    /// Character starting at `offset`
    ///
    /// Returns `\n` at the end of every line but the last, and `None` at
    /// the end of the document or for an offset that is out of range.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        let (idx, col) = self.locate(offset)?;
        let text = self.lines[idx].text();
        if col < text.len() {
            text.get(col..)?.chars().next()
        } else if idx + 1 < self.lines.len() {
            Some('\n')
        } else {
            None
        }
    }

    /// Character ending at `offset`
    pub fn char_before(&self, offset: usize) -> Option<char> {
        let (idx, col) = self.locate(offset)?;
        if col == 0 {
            return (idx > 0).then_some('\n');
        }
        self.lines[idx].text().get(..col)?.chars().next_back()
    }

    /// Move the cursor right by `count` characters
    ///
    /// Returns false if the cursor could not move at all.
    pub fn move_right(&mut self, count: usize) -> bool {
        let start = self.cursor;
        for _ in 0..count {
            match self.char_at(self.cursor) {
                Some(ch) => self.cursor += ch.len_utf8(),
                None => break,
            }
        }
        self.anchor = None;
        self.cursor != start
    }

    /// Move the cursor left by `count` characters
    pub fn move_left(&mut self, count: usize) -> bool {
        let start = self.cursor;
        for _ in 0..count {
            match self.char_before(self.cursor) {
                Some(ch) => self.cursor -= ch.len_utf8(),
                None => break,
            }
        }
        self.anchor = None;
        self.cursor != start
    }

    /// Insert text at the cursor, replacing the selection
    ///
    /// The cursor ends up after the inserted text.
    pub fn insert_at_cursor(&mut self, text: &str) {
        if let Some(range) = self.selection() {
            self.delete_range(range.start, range.end);
        }
        let at = self.cursor;
        if self.insert(at, text) {
            self.cursor = at + text.len();
        }
    }

    fn insert(&mut self, offset: usize, text: &str) -> bool {
        let Some((first, col)) = self.locate(offset) else {
            return false;
        };
        let tail = self.lines[first].split_off(col);
        let mut parts = text.split('\n');
        if let Some(head) = parts.next() {
            self.lines[first].append_str(head);
        }
        let mut last = first;
        for part in parts {
            last += 1;
            self.lines.insert(last, Line::from(part));
        }
        self.lines[last].append_str(&tail);
        self.mark_dirty(first, first + 1, last + 1);
        true
    }

    /// Delete a byte range, returning the removed text
    ///
    /// The range is clamped to the document and both ends are snapped back
    /// to character boundaries; the cursor keeps its place relative to the
    /// surrounding text.
    pub fn delete_range(&mut self, start: usize, end: usize) -> String {
        let end = self.snap(end);
        let start = self.snap(start.min(end));
        if start >= end {
            return String::new();
        }
        let (Some((first, c1)), Some((last, c2))) = (self.locate(start), self.locate(end)) else {
            return String::new();
        };

        let removed = if first == last {
            self.lines[first].delete_range(c1, c2)
        } else {
            let tail = self.lines[last].text()[c2..].to_string();
            let mut removed = self.lines[first].split_off(c1);
            for line in self.lines.drain(first + 1..=last) {
                removed.push('\n');
                removed.push_str(line.text());
            }
            removed.truncate(removed.len() - tail.len());
            self.lines[first].append_str(&tail);
            removed
        };

        self.cursor = match self.cursor {
            pos if pos >= end => pos - (end - start),
            pos if pos > start => start,
            pos => pos,
        };
        self.anchor = None;
        self.mark_dirty(first, last + 1, first + 1);
        removed
    }

    /// Lines to re-highlight since the last call, clamped to the current table
    pub fn take_dirty(&mut self) -> Option<Range<usize>> {
        let range = self.dirty.take()?;
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        (start < end).then_some(start..end)
    }

    // Lines `first..old_end` were replaced by `first..new_end`. Pending
    // dirty lines below the edit move with it. The line after an edit is
    // always included: its incoming state came from a line that has
    // changed or gone.
    fn mark_dirty(&mut self, first: usize, old_end: usize, new_end: usize) {
        let shift = |line: usize| {
            if line >= old_end {
                line - old_end + new_end
            } else {
                line.min(new_end)
            }
        };
        let edited = first..new_end + 1;
        self.dirty = Some(match self.dirty.take() {
            Some(prev) => shift(prev.start).min(edited.start)..shift(prev.end).max(edited.end),
            None => edited,
        });
    }

    fn snap(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.len());
        while pos > 0 {
            match self.locate(pos) {
                Some((idx, col)) if self.lines[idx].text().is_char_boundary(col) => break,
                _ => pos -= 1,
            }
        }
        pos
    }

    // Default key handling, used when the auto-editor lets a key through

    /// Insert a typed character
    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_at_cursor(ch.encode_utf8(&mut buf));
    }

    /// Insert a line break
    pub fn insert_newline(&mut self) {
        self.insert_at_cursor("\n");
    }

    /// Insert a tab character
    pub fn insert_tab(&mut self) {
        self.insert_at_cursor("\t");
    }

    /// Delete the selection, or the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if let Some(range) = self.selection() {
            self.delete_range(range.start, range.end);
            return true;
        }
        match self.char_before(self.cursor) {
            Some(ch) => {
                let end = self.cursor;
                self.delete_range(end - ch.len_utf8(), end);
                true
            }
            None => false,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
