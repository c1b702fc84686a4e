//! Line representation
//!
//! Each line of a document is one record in the document's line table.
//! Besides its text, a line carries the highlight state persisted at its
//! end and the spans from its last highlight pass.

use crate::syntax::{BlockState, Span};

/// A single line of text in a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// The text content (without trailing newline)
    text: String,
    /// Multiline state at the end of this line
    state: BlockState,
    /// Spans from the last highlight pass
    spans: Vec<Span>,
}

impl Line {
    /// Create a new empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line from a string
    pub fn from_string(text: String) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the line is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Delete a range of bytes and return the deleted text
    pub fn delete_range(&mut self, start: usize, end: usize) -> String {
        self.text.drain(start..end).collect()
    }

    /// Split the line at byte position, returning the remainder
    pub fn split_off(&mut self, byte_pos: usize) -> String {
        self.text.split_off(byte_pos)
    }

    /// Append a string to this line
    pub fn append_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Highlight state at the end of this line
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Spans from the last highlight pass
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Store the outcome of a highlight pass
    pub fn set_highlight(&mut self, spans: Vec<Span>, state: BlockState) {
        self.spans = spans;
        self.state = state;
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::from_string(s.to_string())
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}
