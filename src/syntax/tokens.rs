//! Token kinds for syntax highlighting
//!
//! This module defines the semantic token kinds that pattern tables
//! assign to matched text, and their default visual styles.

use super::style::{Color, Style};

/// Semantic token kinds for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Language keywords (def, if, fn, const, ...)
    Keyword,
    /// String literals, including multiline ones
    String,
    /// Line and block comments
    Comment,
    /// Numeric literals
    Number,
    /// Function names at definition or call sites
    Function,
    /// Operators (+, -, ==, ...)
    Operator,
    /// Type names
    Type,
    /// Constants (True, null, SCREAMING_CASE)
    Constant,
    /// Attributes and decorators
    Attribute,
    /// Special identifiers (self, this, string prefixes)
    Special,
    /// Preprocessor directives
    Preprocessor,
    /// Macro invocations
    Macro,
}

impl TokenKind {
    /// Every kind, in declaration order
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Keyword,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Number,
        TokenKind::Function,
        TokenKind::Operator,
        TokenKind::Type,
        TokenKind::Constant,
        TokenKind::Attribute,
        TokenKind::Special,
        TokenKind::Preprocessor,
        TokenKind::Macro,
    ];

    /// Get the default style for this kind
    pub fn default_style(&self) -> Style {
        match self {
            TokenKind::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenKind::String => Style::fg(Color::Green),
            TokenKind::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenKind::Number => Style::fg(Color::Cyan),
            TokenKind::Function => Style::fg(Color::Blue),
            TokenKind::Operator => Style::fg(Color::BrightWhite),
            TokenKind::Type => Style::fg(Color::Yellow),
            TokenKind::Constant => Style::fg(Color::BrightRed),
            TokenKind::Attribute => Style::fg(Color::BrightBlue),
            TokenKind::Special => Style::fg(Color::BrightYellow),
            TokenKind::Preprocessor => Style::fg(Color::BrightMagenta),
            TokenKind::Macro => Style::fg(Color::BrightCyan),
        }
    }

    /// Get a human-readable name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::String => "String",
            TokenKind::Comment => "Comment",
            TokenKind::Number => "Number",
            TokenKind::Function => "Function",
            TokenKind::Operator => "Operator",
            TokenKind::Type => "Type",
            TokenKind::Constant => "Constant",
            TokenKind::Attribute => "Attribute",
            TokenKind::Special => "Special",
            TokenKind::Preprocessor => "Preprocessor",
            TokenKind::Macro => "Macro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_bold_comment_italic() {
        let keyword = TokenKind::Keyword.default_style();
        assert!(keyword.bold);
        assert!(!keyword.italic);

        let comment = TokenKind::Comment.default_style();
        assert!(comment.italic);
    }

    #[test]
    fn test_every_kind_is_styled() {
        for kind in TokenKind::ALL {
            assert!(!kind.default_style().is_default(), "{} has no style", kind.name());
        }
    }
}
