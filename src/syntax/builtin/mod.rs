//! Built-in language definitions
//!
//! This module provides the static pattern tables for the languages
//! the editor highlights out of the box.

mod c;
mod javascript;
mod python;
mod rust;

use super::language::LanguageDefinition;
use crate::error::Result;

/// Build all built-in language definitions
///
/// Fails on the first malformed pattern.
pub fn all_languages() -> Result<Vec<LanguageDefinition>> {
    Ok(vec![
        python::python_language()?,
        javascript::javascript_language()?,
        rust::rust_language()?,
        c::c_language()?,
    ])
}
