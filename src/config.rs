//! Configuration file support
//!
//! Loads settings from ~/.retroedit.toml (or %USERPROFILE%\.retroedit.toml on Windows)
//!
//! Every key is optional. Example:
//! ```toml
//! # retroedit configuration
//! highlighting = true
//! auto_pairs = true
//! default_indent_width = 2
//! line_numbers = true
//!
//! [extensions]
//! ts = "javascript"
//! pyx = "python"
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EditorError, Result};
use crate::indent::DEFAULT_INDENT_WIDTH;
use crate::syntax::{LanguageId, LanguageRegistry};

const CONFIG_FILE: &str = ".retroedit.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether syntax highlighting is enabled
    pub highlighting: bool,
    /// Whether brackets and quotes are paired as they are typed
    pub auto_pairs: bool,
    /// Indent width when a document's own indentation gives no hint
    pub default_indent_width: usize,
    /// Whether printed lines get a line-number gutter
    pub line_numbers: bool,
    /// Extra file extension to language name mappings
    pub extensions: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlighting: true,
            auto_pairs: true,
            default_indent_width: DEFAULT_INDENT_WIDTH,
            line_numbers: false,
            extensions: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration from the default path
    ///
    /// A missing file gives the defaults. A file that cannot be read or
    /// parsed is logged and also gives the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(EditorError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Config::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents).map_err(|source| EditorError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(contents)?;
        config.default_indent_width = config.default_indent_width.clamp(1, 8);
        Ok(config)
    }

    /// Register the configured extensions with a registry
    ///
    /// Entries naming an unknown language are skipped with a warning.
    pub fn apply_extensions(&self, registry: &mut LanguageRegistry) {
        for (ext, name) in &self.extensions {
            match LanguageId::from_name(name) {
                Some(id) => registry.add_extension(ext, id),
                None => tracing::warn!(extension = %ext, language = %name, "unknown language in config"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
highlighting = false
auto_pairs = false
default_indent_width = 2
line_numbers = true

[extensions]
ts = "javascript"
        "#;

        let config = Config::from_toml_str(contents).unwrap();
        assert!(!config.highlighting);
        assert!(!config.auto_pairs);
        assert_eq!(config.default_indent_width, 2);
        assert!(config.line_numbers);
        assert_eq!(config.extensions.get("ts"), Some(&"javascript".to_string()));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = Config::from_toml_str("auto_pairs = false").unwrap();
        assert!(config.highlighting);
        assert!(!config.auto_pairs);
        assert_eq!(config.default_indent_width, 4);
        assert!(!config.line_numbers);
        assert!(config.extensions.is_empty());

        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_indent_width_clamped() {
        assert_eq!(Config::from_toml_str("default_indent_width = 0").unwrap().default_indent_width, 1);
        assert_eq!(Config::from_toml_str("default_indent_width = 40").unwrap().default_indent_width, 8);
    }

    #[test]
    fn test_malformed_config() {
        assert!(Config::from_toml_str("highlighting = \"yes\"").is_err());
        assert!(Config::from_toml_str("not toml at all").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "highlighting = false").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.highlighting);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "highlighting = [").unwrap();
        assert!(matches!(Config::load_from(bad.path()), Err(EditorError::Config { .. })));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.toml");
        assert!(matches!(Config::load_from(&missing), Err(EditorError::Io(_))));
    }

    #[test]
    fn test_apply_extensions() {
        let mut config = Config::default();
        config.extensions.insert("ts".to_string(), "js".to_string());
        config.extensions.insert("zz".to_string(), "cobol".to_string());

        let mut registry = LanguageRegistry::builtin().unwrap();
        config.apply_extensions(&mut registry);
        assert_eq!(registry.detect(Path::new("a.ts")), Some(LanguageId::JavaScript));
        assert_eq!(registry.detect(Path::new("a.zz")), None);
    }
}
