//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types used to match and tokenize
//! source code, and the per-block state that carries multiline
//! constructs from one line to the next.

use std::ops::Range;

use regex::Regex;

use super::tokens::TokenKind;
use crate::error::{EditorError, Result};

/// Number of multiline rules a block state can track
pub const MAX_MULTILINE_RULES: usize = u32::BITS as usize;

fn compile(language: &str, name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| EditorError::Pattern {
        language: language.to_string(),
        name: name.to_string(),
        source,
    })
}

/// A single-line pattern rule
///
/// Matches a regex and assigns a token kind to the match. When `group`
/// is non-zero only that capture group is highlighted, which lets a rule
/// require context (`def` before a function name) without claiming it.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for debugging and error messages
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token kind to assign to matches
    pub kind: TokenKind,
    /// Priority (higher = earlier in the table)
    pub priority: i32,
    /// Capture group holding the token, 0 for the whole match
    pub group: usize,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(
        language: &str,
        name: &str,
        pattern: &str,
        kind: TokenKind,
        priority: i32,
    ) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: compile(language, name, pattern)?,
            kind,
            priority,
            group: 0,
        })
    }

    /// Create a rule that highlights only capture group `group`
    pub fn with_group(
        language: &str,
        name: &str,
        pattern: &str,
        kind: TokenKind,
        priority: i32,
        group: usize,
    ) -> Result<Self> {
        let mut rule = Self::new(language, name, pattern, kind, priority)?;
        if group >= rule.pattern.captures_len() {
            return Err(EditorError::Message(format!(
                "pattern `{name}` in {language} table has no capture group {group}"
            )));
        }
        rule.group = group;
        Ok(rule)
    }

    /// All non-empty token ranges this rule matches in `text`, left to right
    pub fn matches(&self, text: &str) -> Vec<Range<usize>> {
        if self.group == 0 {
            return self
                .pattern
                .find_iter(text)
                .map(|m| m.range())
                .filter(|r| !r.is_empty())
                .collect();
        }
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(self.group))
            .map(|m| m.range())
            .filter(|r| !r.is_empty())
            .collect()
    }
}

/// A multi-line construct rule (block comments, fenced strings)
///
/// The region opens at a `start` match and runs through the next `end`
/// match, which may sit on a later line.
#[derive(Debug, Clone)]
pub struct MultilineRule {
    /// Name for debugging and error messages
    pub name: String,
    /// Pattern that starts the construct
    pub start: Regex,
    /// Pattern that ends the construct
    pub end: Regex,
    /// Token kind for this construct
    pub kind: TokenKind,
}

impl MultilineRule {
    /// Create a new multiline rule
    pub fn new(
        language: &str,
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        kind: TokenKind,
    ) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            start: compile(language, name, start_pattern)?,
            end: compile(language, name, end_pattern)?,
            kind,
        })
    }

    /// First non-empty start match at or after `from`
    pub fn find_start(&self, text: &str, from: usize) -> Option<Range<usize>> {
        find_non_empty(&self.start, text, from)
    }

    /// First non-empty end match at or after `from`
    pub fn find_end(&self, text: &str, from: usize) -> Option<Range<usize>> {
        find_non_empty(&self.end, text, from)
    }
}

fn find_non_empty(regex: &Regex, text: &str, from: usize) -> Option<Range<usize>> {
    if from > text.len() {
        return None;
    }
    let mut pos = from;
    while pos <= text.len() {
        let m = regex.find_at(text, pos)?;
        if !m.range().is_empty() {
            return Some(m.range());
        }
        pos = next_boundary(text, m.start());
    }
    None
}

/// Byte offset of the char boundary after `pos`
pub(crate) fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |ch| pos + ch.len_utf8())
}

/// Per-block multiline state
///
/// Bit `k` is set when the block ends inside multiline rule `k` of the
/// active language. The value is persisted with each line and handed to
/// the next line as its incoming state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockState(u32);

impl BlockState {
    /// State outside every multiline construct
    pub const PLAIN: BlockState = BlockState(0);

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Check whether the block is inside multiline rule `index`
    pub fn is_inside(&self, index: usize) -> bool {
        index < MAX_MULTILINE_RULES && self.0 & (1 << index) != 0
    }

    /// Mark multiline rule `index` as open
    pub fn enter(&mut self, index: usize) {
        if index < MAX_MULTILINE_RULES {
            self.0 |= 1 << index;
        }
    }

    /// Mark multiline rule `index` as closed
    pub fn leave(&mut self, index: usize) {
        if index < MAX_MULTILINE_RULES {
            self.0 &= !(1 << index);
        }
    }

    /// Check we're outside every multiline construct
    pub fn is_plain(&self) -> bool {
        self.0 == 0
    }
}

/// Result of highlighting a single block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHighlight {
    /// Style assignments, in the order they must be applied
    pub spans: Vec<super::style::Span>,
    /// State at end of block (incoming state for the next one)
    pub state: BlockState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("Test", "number", r"\d+", TokenKind::Number, 50).unwrap();
        assert_eq!(rule.matches("abc 123 def 45"), vec![4..7, 12..14]);
        assert!(rule.matches("no numbers").is_empty());
    }

    #[test]
    fn test_pattern_rule_group() {
        let rule = PatternRule::with_group(
            "Test",
            "def",
            r"\bdef\s+([A-Za-z_]\w*)",
            TokenKind::Function,
            70,
            1,
        )
        .unwrap();
        assert_eq!(rule.matches("def foo(): def bar"), vec![4..7, 15..18]);
    }

    #[test]
    fn test_missing_group_rejected() {
        let err = PatternRule::with_group("Test", "bad", r"\w+", TokenKind::Keyword, 1, 1);
        assert!(matches!(err, Err(EditorError::Message(_))));
    }

    #[test]
    fn test_malformed_pattern_fails() {
        let err = PatternRule::new("Test", "broken", r"(unclosed", TokenKind::Keyword, 1);
        match err {
            Err(EditorError::Pattern { language, name, .. }) => {
                assert_eq!(language, "Test");
                assert_eq!(name, "broken");
            }
            other => panic!("expected pattern error, got {other:?}"),
        }
        assert!(MultilineRule::new("Test", "m", r"/\*", r"[", TokenKind::Comment).is_err());
    }

    #[test]
    fn test_zero_length_matches_skipped() {
        let rule = PatternRule::new("Test", "maybe", r"x*", TokenKind::Keyword, 1).unwrap();
        assert_eq!(rule.matches("ab xx c"), vec![3..5]);

        let ml = MultilineRule::new("Test", "empty", r"a*", r"b*", TokenKind::String).unwrap();
        assert_eq!(ml.find_start("zza", 0), Some(2..3));
        assert_eq!(ml.find_end("zz", 0), None);
    }

    #[test]
    fn test_multiline_rule() {
        let rule =
            MultilineRule::new("Test", "block_comment", r"/\*", r"\*/", TokenKind::Comment).unwrap();
        assert_eq!(rule.find_start("a /* comment */", 0), Some(2..4));
        assert_eq!(rule.find_end("a /* comment */", 4), Some(13..15));
        assert_eq!(rule.find_end("a /* comment", 4), None);
        assert_eq!(rule.find_start("/*", 3), None);
    }

    #[test]
    fn test_block_state_bits() {
        let mut state = BlockState::default();
        assert!(state.is_plain());

        state.enter(0);
        state.enter(3);
        assert!(state.is_inside(0));
        assert!(!state.is_inside(1));
        assert!(state.is_inside(3));
        assert_eq!(state.bits(), 0b1001);

        state.leave(0);
        state.leave(3);
        assert!(state.is_plain());
        assert!(!state.is_inside(40));
    }
}
