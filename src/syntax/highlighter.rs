//! Per-document syntax highlighter
//!
//! The `Highlighter` holds the format table and the active language's
//! pattern tables, and keeps a document's per-line highlight state current.

use std::sync::Arc;

use super::language::{LanguageDefinition, LanguageId};
use super::registry::LanguageRegistry;
use super::rules::{BlockHighlight, BlockState};
use super::style::{resolve_styles, FormatTable, Span, StyledRun};
use crate::document::Document;

/// Highlights blocks of one document in its active language
#[derive(Debug, Clone)]
pub struct Highlighter {
    registry: Arc<LanguageRegistry>,
    formats: FormatTable,
    active: Option<Arc<LanguageDefinition>>,
}

impl Highlighter {
    /// Create a highlighter with no active language
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        Self {
            registry,
            formats: FormatTable::new(),
            active: None,
        }
    }

    /// Switch the active language
    ///
    /// Unknown names and `None` turn highlighting off. Returns true when
    /// the active language changed and the document needs a full
    /// re-highlight.
    pub fn set_language(&mut self, name: Option<&str>) -> bool {
        let next = name.and_then(|name| self.registry.lookup(name));
        let unchanged = match (&self.active, &next) {
            (Some(current), Some(next)) => Arc::ptr_eq(current, next),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }

        match &next {
            Some(lang) => tracing::debug!(language = lang.name(), "syntax language set"),
            None => tracing::debug!(requested = ?name, "syntax highlighting off"),
        }
        self.active = next;
        true
    }

    /// Registry languages are looked up in
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// The active language, if any
    pub fn language(&self) -> Option<LanguageId> {
        self.active.as_ref().map(|lang| lang.id)
    }

    /// The active language's tables, if any
    pub fn definition(&self) -> Option<&Arc<LanguageDefinition>> {
        self.active.as_ref()
    }

    pub fn formats(&self) -> &FormatTable {
        &self.formats
    }

    /// Highlight one block given the previous block's outgoing state
    pub fn highlight_block(&self, text: &str, incoming: BlockState) -> BlockHighlight {
        match &self.active {
            Some(lang) => lang.highlight_block(text, incoming),
            None => BlockHighlight {
                spans: Vec::new(),
                state: BlockState::PLAIN,
            },
        }
    }

    /// Resolve a block's spans into styled runs for painting
    pub fn styled(&self, len: usize, spans: &[Span]) -> Vec<StyledRun> {
        resolve_styles(len, spans, &self.formats)
    }

    /// Highlight every line of a document from the top
    pub fn rehighlight(&self, doc: &mut Document) {
        doc.take_dirty();
        let mut state = BlockState::PLAIN;
        for idx in 0..doc.line_count() {
            if let Some(line) = doc.line_mut(idx) {
                let result = self.highlight_block(line.text(), state);
                state = result.state;
                line.set_highlight(result.spans, result.state);
            }
        }
    }

    /// Re-highlight the lines edited since the last pass
    ///
    /// Keeps going past the edited lines while a line's outgoing state
    /// differs from the one it stored, so an opened or closed region
    /// reaches every line it affects. Returns the number of lines
    /// highlighted.
    pub fn refresh(&self, doc: &mut Document) -> usize {
        let Some(range) = doc.take_dirty() else {
            return 0;
        };

        let mut idx = range.start;
        let mut changed = false;
        while idx < doc.line_count() && (idx < range.end || changed) {
            let incoming = match idx {
                0 => BlockState::PLAIN,
                _ => doc.line(idx - 1).map_or(BlockState::PLAIN, |line| line.state()),
            };
            let Some(line) = doc.line_mut(idx) else {
                break;
            };
            let result = self.highlight_block(line.text(), incoming);
            changed = result.state != line.state();
            line.set_highlight(result.spans, result.state);
            idx += 1;
        }
        idx - range.start
    }
}
