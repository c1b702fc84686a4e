//! retroedit - syntax highlighting and bracket auto-editing for a code editor
//!
//! The crate is the editing core of a vintage-styled editor: a
//! pattern-driven highlighter that carries multiline state from line to
//! line, and an auto-editor that pairs brackets and quotes and indents
//! new lines as they are typed.

pub mod autoedit;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod indent;
pub mod input;
pub mod line;
pub mod pairs;
pub mod syntax;

pub use autoedit::{handle_key, AutoEditor, KeyOutcome};
pub use config::Config;
pub use document::Document;
pub use editor::{gutter_width, TextEditor};
pub use error::{EditorError, Result};
pub use indent::{adjust_indent_for_closing, detect_indent_unit, leading_whitespace};
pub use input::EditKey;
pub use line::Line;
pub use pairs::count_unclosed;
