//! Editor state - a document with highlighting and auto-editing

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::autoedit::{AutoEditor, KeyOutcome};
use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::input::EditKey;
use crate::syntax::{Highlighter, LanguageId, LanguageRegistry, StyledRun};

/// Columns taken by the numbers in a line-number gutter
///
/// Wide enough for the largest line number and never narrower than three.
pub fn gutter_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len().max(3)
}

/// A text editing surface
///
/// Every key goes through the auto-editor first when auto pairing is on,
/// then through the default handling, and highlighting is refreshed after
/// each edit.
#[derive(Debug, Clone)]
pub struct TextEditor {
    /// The text being edited
    document: Document,
    /// Highlighter for the current language
    highlighter: Highlighter,
    /// Bracket and quote handling, if enabled
    auto_editor: Option<AutoEditor>,
    /// Whether a language may be activated at all
    highlighting: bool,
    /// Whether lines are painted with a line-number gutter
    line_numbers: bool,
    /// File the text was loaded from
    filename: Option<PathBuf>,
}

impl TextEditor {
    /// Create an editor with an empty document
    pub fn new(registry: Arc<LanguageRegistry>, config: &Config) -> Self {
        Self {
            document: Document::new(),
            highlighter: Highlighter::new(registry),
            auto_editor: config
                .auto_pairs
                .then(|| AutoEditor::new(config.default_indent_width)),
            highlighting: config.highlighting,
            line_numbers: config.line_numbers,
            filename: None,
        }
    }

    /// Load a file, picking the language from its extension
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        self.filename = Some(path.to_path_buf());
        self.set_language_for_path(path);
        self.set_text(&content);
        Ok(())
    }

    /// Get the filename, if any
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Replace the whole text and re-highlight it
    pub fn set_text(&mut self, text: &str) {
        self.document = Document::from_text(text);
        self.highlighter.rehighlight(&mut self.document);
    }

    pub fn text(&self) -> String {
        self.document.text()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Active syntax language, if any
    pub fn language(&self) -> Option<LanguageId> {
        self.highlighter.language()
    }

    /// Switch the syntax language by name
    ///
    /// The whole document is re-highlighted only when the language
    /// actually changes. Returns true in that case.
    pub fn set_syntax_language(&mut self, name: Option<&str>) -> bool {
        let name = name.filter(|_| self.highlighting);
        if !self.highlighter.set_language(name) {
            return false;
        }
        self.highlighter.rehighlight(&mut self.document);
        true
    }

    /// Switch the syntax language to the one registered for a file
    pub fn set_language_for_path(&mut self, path: &Path) -> bool {
        let detected = self.highlighter.registry().detect(path);
        self.set_syntax_language(detected.map(|id| id.name()))
    }

    /// Handle one logical key
    pub fn key_press(&mut self, key: EditKey) {
        let outcome = match &self.auto_editor {
            Some(auto) => auto.handle_key(&mut self.document, key),
            None => KeyOutcome::Ignored,
        };

        if outcome == KeyOutcome::Ignored {
            match key {
                EditKey::Enter => self.document.insert_newline(),
                EditKey::Tab => self.document.insert_tab(),
                EditKey::Char(ch) => self.document.insert_char(ch),
                EditKey::Backspace => {
                    self.document.backspace();
                }
            }
        }

        self.highlighter.refresh(&mut self.document);
    }

    /// Handle a terminal key event
    ///
    /// Returns false for keys the editor does not act on.
    pub fn handle_event(&mut self, event: KeyEvent) -> bool {
        match EditKey::from_key_event(event) {
            Some(key) => {
                self.key_press(key);
                true
            }
            None => false,
        }
    }

    /// Right-aligned gutter text for one line, followed by a space
    ///
    /// `None` when line numbers are off or the line does not exist.
    pub fn gutter(&self, idx: usize) -> Option<String> {
        if !self.line_numbers || idx >= self.document.line_count() {
            return None;
        }
        let width = gutter_width(self.document.line_count());
        Some(format!("{:>width$} ", idx + 1))
    }

    /// Styled runs covering one line, for painting
    pub fn styled_line(&self, idx: usize) -> Vec<StyledRun> {
        match self.document.line(idx) {
            Some(line) => self.highlighter.styled(line.len(), line.spans()),
            None => Vec::new(),
        }
    }
}
