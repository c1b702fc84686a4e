//! JavaScript language definition

use crate::error::Result;
use crate::syntax::language::{LanguageDefinition, LanguageId};
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenKind;

const NAME: &str = "javascript";

/// Code ahead of a comment: whole strings, template literals and block
/// comments, or any other character that does not start one
const CODE: &str = r##"(?:[^"'`/]|"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`|/\*.*?\*/|/[^/*"'`])*"##;

/// Create JavaScript language definition
pub fn javascript_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new(LanguageId::JavaScript);
    lang.add_extension("js");
    lang.add_extension("mjs");
    lang.add_extension("cjs");
    lang.add_extension("jsx");

    lang.add_multiline(MultilineRule::new(NAME, "block_comment", r"/\*", r"\*/", TokenKind::Comment)?)?;
    // Template literals; the closing backtick must not be escaped
    lang.add_multiline(MultilineRule::new(
        NAME,
        "template",
        r"`",
        r"(?:^|[^\\])(?:\\\\)*`",
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

    lang.add_pattern(PatternRule::new(NAME, "template_inline", r"`(?:[^`\\]|\\.)*`", TokenKind::String, 92)?);
    lang.add_pattern(PatternRule::new(NAME, "double_string", r#""(?:[^"\\]|\\.)*""#, TokenKind::String, 90)?);
    lang.add_pattern(PatternRule::new(NAME, "single_string", r"'(?:[^'\\]|\\.)*'", TokenKind::String, 90)?);

    lang.add_pattern(PatternRule::with_group(
        NAME,
        "function_name",
        r"\bfunction\s*\*?\s*([A-Za-z_$][\w$]*)",
        TokenKind::Function,
        85,
        1,
    )?);
    lang.add_pattern(PatternRule::with_group(
        NAME,
        "class_name",
        r"\bclass\s+([A-Za-z_$][\w$]*)",
        TokenKind::Type,
        85,
        1,
    )?);

    let keywords = r"\b(async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|from|function|if|import|in|instanceof|let|new|of|return|static|super|switch|throw|try|typeof|var|void|while|with|yield)\b";
    lang.add_pattern(PatternRule::new(NAME, "keyword", keywords, TokenKind::Keyword, 80)?);
    lang.add_pattern(PatternRule::new(
        NAME,
        "constant",
        r"\b(true|false|null|undefined|NaN|Infinity)\b",
        TokenKind::Constant,
        78,
    )?);
    lang.add_pattern(PatternRule::new(NAME, "this", r"\bthis\b", TokenKind::Special, 77)?);

    lang.add_pattern(PatternRule::with_group(
        NAME,
        "call",
        r"([A-Za-z_$][\w$]*)\s*\(",
        TokenKind::Function,
        70,
        1,
    )?);

    lang.add_pattern(PatternRule::new(NAME, "hex", r"\b0[xX][0-9a-fA-F_]+n?\b", TokenKind::Number, 65)?);
    lang.add_pattern(PatternRule::new(
        NAME,
        "number",
        r"\b\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?n?\b",
        TokenKind::Number,
        63,
    )?);

    // `*` and `/` stay unclaimed so a `/*` can still open a block comment
    lang.add_pattern(PatternRule::new(NAME, "operator", r"[+\-%&|^!<>=~?:]+", TokenKind::Operator, 40)?);

    Ok(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::BlockState;
    use crate::syntax::style::Span;

    #[test]
    fn test_javascript_function() {
        let lang = javascript_language().unwrap();
        let result = lang.highlight_block("function foo() { return 42; }", BlockState::PLAIN);

        assert!(result.spans.contains(&Span::new(0, 8, TokenKind::Keyword)));
        assert!(result.spans.contains(&Span::new(9, 12, TokenKind::Function)));
        assert!(result.spans.contains(&Span::new(17, 23, TokenKind::Keyword)));
        assert!(result.spans.contains(&Span::new(24, 26, TokenKind::Number)));
    }

    #[test]
    fn test_javascript_block_comment_spans_lines() {
        let lang = javascript_language().unwrap();
        let first = lang.highlight_block("let a = 1; /* start", BlockState::PLAIN);
        assert!(first.spans.contains(&Span::new(11, 19, TokenKind::Comment)));
        assert!(first.state.is_inside(0));

        let last = lang.highlight_block("end */ const b", first.state);
        assert!(last.spans.contains(&Span::new(0, 6, TokenKind::Comment)));
        assert!(last.spans.contains(&Span::new(7, 12, TokenKind::Keyword)));
        assert!(last.state.is_plain());
    }

    #[test]
    fn test_javascript_template_literal() {
        let lang = javascript_language().unwrap();
        let first = lang.highlight_block("const s = `line one", BlockState::PLAIN);
        assert!(first.state.is_inside(1));

        let escaped = lang.highlight_block(r"still \` open", first.state);
        assert!(escaped.state.is_inside(1));

        let closed = lang.highlight_block("done`;", escaped.state);
        assert!(closed.spans.contains(&Span::new(0, 5, TokenKind::String)));
        assert!(closed.state.is_plain());
    }

    #[test]
    fn test_javascript_comment_marker_in_string() {
        let lang = javascript_language().unwrap();
        let result = lang.highlight_block(r#"const url = "/*";"#, BlockState::PLAIN);

        assert!(result.spans.contains(&Span::new(12, 16, TokenKind::String)));
        assert!(result.state.is_plain());
    }

    #[test]
    fn test_javascript_url_in_string_is_not_a_comment() {
        let lang = javascript_language().unwrap();
        let result = lang.highlight_block(r#"const url = "http://x.com";"#, BlockState::PLAIN);

        assert!(result.spans.contains(&Span::new(12, 26, TokenKind::String)));
        assert!(!result.spans.iter().any(|s| s.kind == TokenKind::Comment));
    }

    #[test]
    fn test_javascript_comment_after_string() {
        let lang = javascript_language().unwrap();
        let result = lang.highlight_block(r#"a = "x"; // hi"#, BlockState::PLAIN);

        assert!(result.spans.contains(&Span::new(4, 7, TokenKind::String)));
        assert!(result.spans.contains(&Span::new(9, 14, TokenKind::Comment)));

        let mixed = lang.highlight_block("/* if */ x // b", BlockState::PLAIN);
        assert!(mixed.spans.contains(&Span::new(0, 8, TokenKind::Comment)));
        assert!(mixed.spans.contains(&Span::new(11, 15, TokenKind::Comment)));
        assert!(!mixed.spans.iter().any(|s| s.kind == TokenKind::Keyword));
    }
}
