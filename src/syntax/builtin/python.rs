//! Python language definition

use crate::error::Result;
use crate::syntax::language::{LanguageDefinition, LanguageId};
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenKind;

const NAME: &str = "python";

/// Code ahead of a comment: anything but quotes and `#`, or a whole string
const CODE: &str = r##"(?:[^"'#]|"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')*"##;

/// Create Python language definition
pub fn python_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new(LanguageId::Python);
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");

    // Triple-quoted strings (docstrings) are the only constructs that span lines
    lang.add_multiline(MultilineRule::new(NAME, "triple_double", r#"""""#, r#"""""#, TokenKind::String)?)?;
    lang.add_multiline(MultilineRule::new(NAME, "triple_single", r"'''", r"'''", TokenKind::String)?)?;

    lang.add_pattern(PatternRule::with_group(
        NAME,
        "comment",
        &format!("^{CODE}(#.*)$"),
        TokenKind::Comment,
        100,
        1,
    )?);
    lang.add_pattern(PatternRule::new(NAME, "decorator", r"@[A-Za-z_][\w.]*", TokenKind::Attribute, 95)?);

    // Closed triple-quoted strings on one line
    lang.add_pattern(PatternRule::new(NAME, "triple_double_inline", r#"""".*?""""#, TokenKind::String, 92)?);
    lang.add_pattern(PatternRule::new(NAME, "triple_single_inline", r"'''.*?'''", TokenKind::String, 92)?);

    // String prefixes: f"", r'', b"", rb''
    lang.add_pattern(PatternRule::with_group(
        NAME,
        "string_prefix",
        r#"\b([fFrRbBuU]{1,2})["']"#,
        TokenKind::Special,
        91,
        1,
    )?);

    // Never empty and never starting inside a run of quotes, so no part of
    // an opening `"""` or `'''` is claimed as a one-line string
    lang.add_pattern(PatternRule::with_group(
        NAME,
        "double_string",
        r#"(?:^|[^"])("(?:[^"\\]|\\.)+")"#,
        TokenKind::String,
        90,
        1,
    )?);
    lang.add_pattern(PatternRule::with_group(
        NAME,
        "single_string",
        r"(?:^|[^'])('(?:[^'\\]|\\.)+')",
        TokenKind::String,
        90,
        1,
    )?);

    lang.add_pattern(PatternRule::with_group(
        NAME,
        "def_name",
        r"\bdef\s+([A-Za-z_]\w*)",
        TokenKind::Function,
        85,
        1,
    )?);
    lang.add_pattern(PatternRule::with_group(
        NAME,
        "class_name",
        r"\bclass\s+([A-Za-z_]\w*)",
        TokenKind::Type,
        85,
        1,
    )?);

    let keywords = r"\b(and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield|match|case)\b";
    lang.add_pattern(PatternRule::new(NAME, "keyword", keywords, TokenKind::Keyword, 80)?);
    lang.add_pattern(PatternRule::new(NAME, "constant", r"\b(True|False|None|__\w+__)\b", TokenKind::Constant, 78)?);
    lang.add_pattern(PatternRule::new(NAME, "self", r"\b(self|cls)\b", TokenKind::Special, 77)?);

    let builtins = r"\b(abs|all|any|bin|bool|bytearray|bytes|callable|chr|classmethod|dict|dir|divmod|enumerate|eval|exec|filter|float|format|frozenset|getattr|globals|hasattr|hash|hex|id|input|int|isinstance|issubclass|iter|len|list|locals|map|max|min|next|object|oct|open|ord|pow|print|property|range|repr|reversed|round|set|setattr|slice|sorted|staticmethod|str|sum|super|tuple|type|vars|zip)\b";
    lang.add_pattern(PatternRule::new(NAME, "builtin", builtins, TokenKind::Function, 75)?);

    lang.add_pattern(PatternRule::with_group(
        NAME,
        "call",
        r"\b([A-Za-z_]\w*)\s*\(",
        TokenKind::Function,
        70,
        1,
    )?);

    // Numbers
    lang.add_pattern(PatternRule::new(NAME, "hex", r"\b0[xX][0-9a-fA-F_]+\b", TokenKind::Number, 65)?);
    lang.add_pattern(PatternRule::new(NAME, "binary", r"\b0[bB][01_]+\b", TokenKind::Number, 65)?);
    lang.add_pattern(PatternRule::new(NAME, "octal", r"\b0[oO][0-7_]+\b", TokenKind::Number, 65)?);
    lang.add_pattern(PatternRule::new(
        NAME,
        "float",
        r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?j?\b",
        TokenKind::Number,
        64,
    )?);
    lang.add_pattern(PatternRule::new(NAME, "integer", r"\b\d[\d_]*j?\b", TokenKind::Number, 63)?);

    lang.add_pattern(PatternRule::new(NAME, "operator", r"[+\-*/%&|^!<>=~]+", TokenKind::Operator, 40)?);

    Ok(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::BlockState;
    use crate::syntax::style::Span;

    fn has(spans: &[Span], start: usize, end: usize, kind: TokenKind) -> bool {
        spans.contains(&Span::new(start, end, kind))
    }

    #[test]
    fn test_python_def() {
        let lang = python_language().unwrap();
        let result = lang.highlight_block("def foo():", BlockState::PLAIN);

        assert!(has(&result.spans, 0, 3, TokenKind::Keyword));
        assert!(has(&result.spans, 4, 7, TokenKind::Function));
        assert!(result.state.is_plain());
    }

    #[test]
    fn test_python_comment_claims_keywords() {
        let lang = python_language().unwrap();
        let result = lang.highlight_block("x = 1  # if else", BlockState::PLAIN);

        assert!(has(&result.spans, 7, 16, TokenKind::Comment));
        assert!(!result.spans.iter().any(|s| s.kind == TokenKind::Keyword));
    }

    #[test]
    fn test_python_docstring_opens_region() {
        let lang = python_language().unwrap();
        let result = lang.highlight_block("x = \"\"\"", BlockState::PLAIN);

        assert!(has(&result.spans, 4, 7, TokenKind::String));
        assert!(result.state.is_inside(0));
        assert!(!result.state.is_inside(1));
    }

    #[test]
    fn test_python_docstring_on_one_line() {
        let lang = python_language().unwrap();
        let result = lang.highlight_block("x = \"\"\"string\"\"\"", BlockState::PLAIN);

        assert!(has(&result.spans, 4, 16, TokenKind::String));
        assert!(result.state.is_plain());
    }

    #[test]
    fn test_python_triple_quote_in_comment() {
        let lang = python_language().unwrap();
        let result = lang.highlight_block("# \"\"\"This is not a string", BlockState::PLAIN);

        assert_eq!(result.spans.len(), 1);
        assert_eq!(result.spans[0].kind, TokenKind::Comment);
        assert!(result.state.is_plain());
    }

    #[test]
    fn test_python_strings_and_prefix() {
        let lang = python_language().unwrap();
        let result = lang.highlight_block("name = f\"John {x}\"", BlockState::PLAIN);

        assert!(has(&result.spans, 7, 8, TokenKind::Special));
        assert!(has(&result.spans, 8, 18, TokenKind::String));
    }

    #[test]
    fn test_python_unicode_comment() {
        let lang = python_language().unwrap();
        let text = "# Comment with unicode: 你好世界 🌍";
        let result = lang.highlight_block(text, BlockState::PLAIN);

        assert!(has(&result.spans, 0, text.len(), TokenKind::Comment));
    }

    #[test]
    fn test_python_long_line() {
        let lang = python_language().unwrap();
        let text = format!("x = {}2", "1 + ".repeat(1000));
        let result = lang.highlight_block(&text, BlockState::PLAIN);

        let numbers = result.spans.iter().filter(|s| s.kind == TokenKind::Number).count();
        assert_eq!(numbers, 1001);
    }

    #[test]
    fn test_python_hash_in_string_is_not_a_comment() {
        let lang = python_language().unwrap();
        let result = lang.highlight_block(r#"s = "a # b""#, BlockState::PLAIN);

        assert!(has(&result.spans, 4, 11, TokenKind::String));
        assert!(!result.spans.iter().any(|s| s.kind == TokenKind::Comment));

        let after = lang.highlight_block("t = 'x'  # note", BlockState::PLAIN);
        assert!(has(&after.spans, 4, 7, TokenKind::String));
        assert!(has(&after.spans, 9, 15, TokenKind::Comment));
    }

    #[test]
    fn test_python_docstring_with_quoted_word() {
        let lang = python_language().unwrap();
        let result = lang.highlight_block(r#"    """Return the "name" field"#, BlockState::PLAIN);

        assert!(result.state.is_inside(0));
        assert!(has(&result.spans, 18, 24, TokenKind::String));
        assert_eq!(result.spans.last(), Some(&Span::new(4, 30, TokenKind::String)));
    }
}
