//! Style types for text rendering
//!
//! Highlighting produces [`Span`]s tagged with a [`TokenKind`]; the
//! [`FormatTable`] turns those kinds into visual [`Style`]s when a line is
//! painted.

use std::collections::HashMap;

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};

use super::tokens::TokenKind;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    fn to_terminal(self) -> Option<TermColor> {
        let color = match self {
            Color::Default => return None,
            Color::Black => TermColor::Black,
            Color::Red => TermColor::DarkRed,
            Color::Green => TermColor::DarkGreen,
            Color::Yellow => TermColor::DarkYellow,
            Color::Blue => TermColor::DarkBlue,
            Color::Magenta => TermColor::DarkMagenta,
            Color::Cyan => TermColor::DarkCyan,
            Color::White => TermColor::Grey,
            Color::BrightBlack => TermColor::DarkGrey,
            Color::BrightRed => TermColor::Red,
            Color::BrightGreen => TermColor::Green,
            Color::BrightYellow => TermColor::Yellow,
            Color::BrightBlue => TermColor::Blue,
            Color::BrightMagenta => TermColor::Magenta,
            Color::BrightCyan => TermColor::Cyan,
            Color::BrightWhite => TermColor::White,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Convert to a crossterm style for terminal output
    pub fn to_content_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg.to_terminal();
        style.background_color = self.bg.to_terminal();
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.italic {
            style.attributes.set(Attribute::Italic);
        }
        if self.underline {
            style.attributes.set(Attribute::Underlined);
        }
        style
    }
}

/// A highlighted range of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Token kind assigned to the range
    pub kind: TokenKind,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        Self { start, end, kind }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A run of text sharing one style, produced for painting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRun {
    pub start: usize,
    pub end: usize,
    pub style: Style,
}

/// Token kind to style mapping
///
/// Built once per highlighter. Switching languages never touches it.
#[derive(Debug, Clone)]
pub struct FormatTable {
    formats: HashMap<TokenKind, Style>,
}

impl FormatTable {
    /// Build the table from each kind's default style
    pub fn new() -> Self {
        let formats = TokenKind::ALL
            .into_iter()
            .map(|kind| (kind, kind.default_style()))
            .collect();
        Self { formats }
    }

    /// Look up the style for a kind
    pub fn get(&self, kind: TokenKind) -> Style {
        self.formats.get(&kind).copied().unwrap_or_default()
    }

    /// Override the style of one kind
    pub fn set(&mut self, kind: TokenKind, style: Style) {
        self.formats.insert(kind, style);
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for FormatTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten ordered spans into contiguous styled runs covering `0..len`
///
/// Spans are applied in order, so a later span overrides an earlier one
/// wherever they overlap. Unstyled gaps come out with the default style.
pub fn resolve_styles(len: usize, spans: &[Span], formats: &FormatTable) -> Vec<StyledRun> {
    let mut cells: Vec<Style> = vec![Style::default(); len];
    for span in spans {
        let end = span.end.min(len);
        if span.start >= end {
            continue;
        }
        let style = formats.get(span.kind);
        for cell in &mut cells[span.start..end] {
            *cell = style;
        }
    }

    let mut runs: Vec<StyledRun> = Vec::new();
    for (pos, style) in cells.into_iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.style == style => run.end = pos + 1,
            _ => runs.push(StyledRun {
                start: pos,
                end: pos + 1,
                style,
            }),
        }
    }
    runs
}
