//! Language registry
//!
//! This module provides the `LanguageRegistry`, loaded once at startup,
//! which maps language ids, names and file extensions to their pattern
//! tables.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::builtin;
use super::language::{LanguageDefinition, LanguageId};
use crate::error::Result;

/// All loaded language definitions
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    /// Loaded language definitions, shared with highlighters
    languages: HashMap<LanguageId, Arc<LanguageDefinition>>,
    /// Lowercase extension to language mapping
    extension_map: HashMap<String, LanguageId>,
}

impl LanguageRegistry {
    /// Create an empty registry (nothing highlights)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in languages
    ///
    /// Every pattern is compiled here, so a malformed table is reported
    /// before any text is highlighted.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::empty();
        for lang in builtin::all_languages()? {
            registry.add_language(lang);
        }
        tracing::debug!(count = registry.languages.len(), "loaded builtin languages");
        Ok(registry)
    }

    /// Add a language definition, replacing any with the same id
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        for ext in &lang.extensions {
            self.extension_map.insert(ext.clone(), lang.id);
        }
        self.languages.insert(lang.id, Arc::new(lang));
    }

    /// Map an extension to a language, overriding the built-in mapping
    pub fn add_extension(&mut self, ext: &str, id: LanguageId) {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        self.extension_map.insert(ext, id);
    }

    /// Get a language definition by id
    pub fn get(&self, id: LanguageId) -> Option<Arc<LanguageDefinition>> {
        self.languages.get(&id).cloned()
    }

    /// Get a language definition by name or alias
    pub fn lookup(&self, name: &str) -> Option<Arc<LanguageDefinition>> {
        LanguageId::from_name(name).and_then(|id| self.get(id))
    }

    /// Detect language from filename
    pub fn detect(&self, filename: &Path) -> Option<LanguageId> {
        let ext = filename.extension()?.to_str()?.to_ascii_lowercase();
        self.extension_map.get(&ext).copied()
    }

    /// List loaded languages
    pub fn languages(&self) -> Vec<LanguageId> {
        let mut ids: Vec<_> = self.languages.keys().copied().collect();
        ids.sort();
        ids
    }
}
