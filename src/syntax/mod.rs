//! Syntax highlighting module
//!
//! This module provides the pattern-driven highlighter:
//! - Token kinds and their styles
//! - Per-language single-line and multiline pattern tables
//! - The per-block highlight pass and its carried-over state

mod builtin;
mod highlighter;
mod language;
mod registry;
mod rules;
mod spans;
mod style;
mod tokens;

pub use highlighter::Highlighter;
pub use language::{LanguageDefinition, LanguageId};
pub use registry::LanguageRegistry;
pub use rules::{BlockHighlight, BlockState, MultilineRule, PatternRule, MAX_MULTILINE_RULES};
pub use spans::SpanSet;
pub use style::{resolve_styles, Color, FormatTable, Span, Style, StyledRun};
pub use tokens::TokenKind;
