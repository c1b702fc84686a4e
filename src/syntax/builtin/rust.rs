//! Rust language definition

use crate::error::Result;
use crate::syntax::language::{LanguageDefinition, LanguageId};
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenKind;

const NAME: &str = "rust";

/// Code ahead of a comment; char literals keep `'"'` from opening a string
const CODE: &str = r##"(?:'(?:[^'\\]|\\.)'|[^"/]|"(?:[^"\\]|\\.)*"|/\*.*?\*/|/[^/*"])*"##;

/// Create Rust language definition
pub fn rust_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new(LanguageId::Rust);
    lang.add_extension("rs");

    // Block comments (nesting is not tracked)
    lang.add_multiline(MultilineRule::new(NAME, "block_comment", r"/\*", r"\*/", TokenKind::Comment)?)?;
    // Raw strings, single-hash form only
    lang.add_multiline(MultilineRule::new(NAME, "raw_string", r##"r#""##, r##""#"##, TokenKind::String)?)?;
    // Plain strings may run across lines; an escaped quote does not close them
    lang.add_multiline(MultilineRule::new(
        NAME,
        "string",
        "\"",
        r#"(?:^|[^\\])(?:\\\\)*""#,
        TokenKind::String,
    )?)?;

    lang.add_pattern(PatternRule::with_group(
        NAME,
        "line_comment",
        &format!("^{CODE}(//.*)$"),
        TokenKind::Comment,
        100,
        1,
    )?);
    // Lazy prefix, so the first closed comment on the line is the one taken
    lang.add_pattern(PatternRule::with_group(
        NAME,
        "block_comment_inline",
        &format!(r"^{CODE}?(/\*.*?\*/)"),
        TokenKind::Comment,
        99,
        1,
    )?);
    lang.add_pattern(PatternRule::new(NAME, "attribute", r"#!?\[[^\]]*\]", TokenKind::Attribute, 95)?);

    lang.add_pattern(PatternRule::new(NAME, "raw_string_inline", r##"r#".*?"#"##, TokenKind::String, 93)?);
    lang.add_pattern(PatternRule::new(NAME, "string_inline", r#"b?"(?:[^"\\]|\\.)*""#, TokenKind::String, 92)?);
    lang.add_pattern(PatternRule::new(NAME, "char", r"b?'(?:[^'\\]|\\.|\\u\{[0-9a-fA-F]+\})'", TokenKind::String, 90)?);
    lang.add_pattern(PatternRule::new(NAME, "lifetime", r"'[A-Za-z_]\w*", TokenKind::Special, 89)?);

    lang.add_pattern(PatternRule::new(NAME, "macro", r"\b[A-Za-z_]\w*!", TokenKind::Macro, 85)?);
    lang.add_pattern(PatternRule::with_group(
        NAME,
        "fn_name",
        r"\bfn\s+([A-Za-z_]\w*)",
        TokenKind::Function,
        84,
        1,
    )?);

    let keywords = r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|type|union|unsafe|use|where|while)\b";
    lang.add_pattern(PatternRule::new(NAME, "keyword", keywords, TokenKind::Keyword, 80)?);
    lang.add_pattern(PatternRule::new(NAME, "boolean", r"\b(true|false)\b", TokenKind::Constant, 78)?);

    let types = r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64)\b";
    lang.add_pattern(PatternRule::new(NAME, "primitive", types, TokenKind::Type, 75)?);
    lang.add_pattern(PatternRule::new(NAME, "constant", r"\b[A-Z][A-Z0-9_]+\b", TokenKind::Constant, 62)?);
    lang.add_pattern(PatternRule::new(NAME, "type_name", r"\b[A-Z][a-zA-Z0-9_]*\b", TokenKind::Type, 60)?);

    lang.add_pattern(PatternRule::with_group(
        NAME,
        "call",
        r"\b([a-z_]\w*)\s*\(",
        TokenKind::Function,
        58,
        1,
    )?);

    lang.add_pattern(PatternRule::new(NAME, "hex", r"\b0x[0-9a-fA-F_]+\b", TokenKind::Number, 65)?);
    lang.add_pattern(PatternRule::new(NAME, "binary", r"\b0b[01_]+\b", TokenKind::Number, 65)?);
    lang.add_pattern(PatternRule::new(NAME, "octal", r"\b0o[0-7_]+\b", TokenKind::Number, 65)?);
    lang.add_pattern(PatternRule::new(
        NAME,
        "float",
        r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?(?:f32|f64)?\b",
        TokenKind::Number,
        64,
    )?);
    lang.add_pattern(PatternRule::new(
        NAME,
        "integer",
        r"\b\d[\d_]*(?:u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize)?\b",
        TokenKind::Number,
        63,
    )?);

    // No `*` or `/`: they would claim the opening of a block comment
    lang.add_pattern(PatternRule::new(NAME, "operator", r"[+\-%&|^!<>=]+", TokenKind::Operator, 40)?);

    Ok(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::BlockState;
    use crate::syntax::style::Span;

    #[test]
    fn test_rust_keywords() {
        let lang = rust_language().unwrap();
        let result = lang.highlight_block("let mut x = 5;", BlockState::PLAIN);

        assert!(result.spans.contains(&Span::new(0, 3, TokenKind::Keyword)));
        assert!(result.spans.contains(&Span::new(4, 7, TokenKind::Keyword)));
        assert!(result.spans.contains(&Span::new(12, 13, TokenKind::Number)));
    }

    #[test]
    fn test_rust_comment() {
        let lang = rust_language().unwrap();
        let result = lang.highlight_block("// this is a comment", BlockState::PLAIN);

        assert_eq!(result.spans, vec![Span::new(0, 20, TokenKind::Comment)]);
    }

    #[test]
    fn test_rust_macro() {
        let lang = rust_language().unwrap();
        let result = lang.highlight_block("println!(\"test\");", BlockState::PLAIN);

        assert!(result.spans.contains(&Span::new(0, 8, TokenKind::Macro)));
        assert!(result.spans.contains(&Span::new(9, 15, TokenKind::String)));
        assert!(result.state.is_plain());
    }

    #[test]
    fn test_rust_string_spans_lines() {
        let lang = rust_language().unwrap();
        let first = lang.highlight_block("let s = \"first", BlockState::PLAIN);
        assert!(first.state.is_inside(2));

        let escaped = lang.highlight_block(r#"with \" inside"#, first.state);
        assert!(escaped.state.is_inside(2));

        let closed = lang.highlight_block("last\"; let", escaped.state);
        assert!(closed.spans.contains(&Span::new(0, 5, TokenKind::String)));
        assert!(closed.spans.contains(&Span::new(7, 10, TokenKind::Keyword)));
        assert!(closed.state.is_plain());
    }

    #[test]
    fn test_rust_char_is_not_a_string_start() {
        let lang = rust_language().unwrap();
        let result = lang.highlight_block("let q = '\"';", BlockState::PLAIN);

        assert!(result.spans.contains(&Span::new(8, 11, TokenKind::String)));
        assert!(result.state.is_plain());
    }

    #[test]
    fn test_rust_comment_marker_in_string() {
        let lang = rust_language().unwrap();
        let result = lang.highlight_block(r#"let u = "http://x"; // c"#, BlockState::PLAIN);

        assert!(result.spans.contains(&Span::new(8, 18, TokenKind::String)));
        assert!(result.spans.contains(&Span::new(20, 24, TokenKind::Comment)));
        assert_eq!(result.spans.iter().filter(|s| s.kind == TokenKind::Comment).count(), 1);
    }
}
