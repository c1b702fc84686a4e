//! Language definitions for syntax highlighting
//!
//! This module provides the `LanguageId` sum type and the
//! `LanguageDefinition` that combines a language's single-line pattern
//! table with its multiline rules.

use std::fmt;

use super::rules::{
    next_boundary, BlockHighlight, BlockState, MultilineRule, PatternRule, MAX_MULTILINE_RULES,
};
use super::spans::SpanSet;
use super::style::Span;
use crate::error::{EditorError, Result};

/// Languages with a built-in pattern table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    Python,
    JavaScript,
    Rust,
    C,
}

impl LanguageId {
    pub const ALL: [LanguageId; 4] = [
        LanguageId::Python,
        LanguageId::JavaScript,
        LanguageId::Rust,
        LanguageId::C,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::JavaScript => "javascript",
            LanguageId::Rust => "rust",
            LanguageId::C => "c",
        }
    }

    /// Resolve a language name or alias, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Some(LanguageId::Python),
            "javascript" | "js" | "ecmascript" => Some(LanguageId::JavaScript),
            "rust" | "rs" => Some(LanguageId::Rust),
            "c" | "h" => Some(LanguageId::C),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete language definition for syntax highlighting
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Which language this table describes
    pub id: LanguageId,
    /// File extensions, lowercase and without the dot
    pub extensions: Vec<String>,
    /// Single-line rules in priority order (highest first)
    pub patterns: Vec<PatternRule>,
    /// Multiline rules; the index of each is its block state bit
    pub multiline: Vec<MultilineRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(id: LanguageId) -> Self {
        Self {
            id,
            extensions: Vec::new(),
            patterns: Vec::new(),
            multiline: Vec::new(),
        }
    }

    /// Name used in error messages and pattern construction
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_ascii_lowercase());
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Stable, so equal priorities keep insertion order
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Add a multiline rule
    pub fn add_multiline(&mut self, rule: MultilineRule) -> Result<()> {
        if self.multiline.len() >= MAX_MULTILINE_RULES {
            return Err(EditorError::TooManyMultiline {
                language: self.name().to_string(),
                count: self.multiline.len() + 1,
            });
        }
        self.multiline.push(rule);
        Ok(())
    }

    /// Highlight one block of text
    ///
    /// `incoming` is the previous block's outgoing state. Spans come back
    /// in application order: single-line matches first, then multiline
    /// regions, which override anything they cover when painted.
    pub fn highlight_block(&self, text: &str, incoming: BlockState) -> BlockHighlight {
        let mut claimed = SpanSet::new();
        let mut spans = Vec::new();

        for rule in &self.patterns {
            for range in rule.matches(text) {
                if claimed.overlaps(&range) {
                    continue;
                }
                spans.push(Span::new(range.start, range.end, rule.kind));
                claimed.insert(range);
            }
        }

        let mut state = incoming;
        for (index, rule) in self.multiline.iter().enumerate() {
            let mut pos = 0;

            if incoming.is_inside(index) {
                match rule.find_end(text, 0) {
                    Some(end) => {
                        spans.push(Span::new(0, end.end, rule.kind));
                        claimed.insert(0..end.end);
                        state.leave(index);
                        pos = end.end;
                    }
                    None => {
                        spans.push(Span::new(0, text.len(), rule.kind));
                        claimed.insert(0..text.len());
                        continue;
                    }
                }
            }

            while let Some(start) = rule.find_start(text, pos) {
                if claimed.overlaps(&start) {
                    pos = next_boundary(text, start.start);
                    continue;
                }
                match rule.find_end(text, start.end) {
                    Some(end) => {
                        spans.push(Span::new(start.start, end.end, rule.kind));
                        claimed.insert(start.start..end.end);
                        pos = end.end;
                    }
                    None => {
                        spans.push(Span::new(start.start, text.len(), rule.kind));
                        claimed.insert(start.start..text.len());
                        state.enter(index);
                        break;
                    }
                }
            }
        }

        spans.retain(|span| !span.is_empty());

        if state != incoming {
            tracing::trace!(
                language = self.name(),
                from = incoming.bits(),
                to = state.bits(),
                "block state changed"
            );
        }

        BlockHighlight { spans, state }
    }
}
