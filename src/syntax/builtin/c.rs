//! C/C++ language definition

use crate::error::Result;
use crate::syntax::language::{LanguageDefinition, LanguageId};
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenKind;

const NAME: &str = "c";

/// Code ahead of a comment: whole strings, char literals and block
/// comments, or any other character that does not start one
const CODE: &str = r##"(?:[^"'/]|"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|/\*.*?\*/|/[^/*"'])*"##;

/// Create C language definition (also works for C++)
pub fn c_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new(LanguageId::C);
    for ext in ["c", "h", "cpp", "hpp", "cc", "cxx"] {
        lang.add_extension(ext);
    }

    lang.add_multiline(MultilineRule::new(NAME, "block_comment", r"/\*", r"\*/", TokenKind::Comment)?)?;

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
    lang.add_pattern(PatternRule::new(NAME, "preprocessor", r"^\s*#\s*\w+", TokenKind::Preprocessor, 95)?);
    lang.add_pattern(PatternRule::new(NAME, "include_path", r"<[\w./]+\.h(?:pp)?>", TokenKind::String, 94)?);

    lang.add_pattern(PatternRule::new(NAME, "string", r#""(?:[^"\\]|\\.)*""#, TokenKind::String, 92)?);
    lang.add_pattern(PatternRule::new(NAME, "char", r"'(?:[^'\\]|\\.)'", TokenKind::String, 90)?);

    let keywords = r"\b(auto|break|case|char|const|continue|default|do|double|else|enum|extern|float|for|goto|if|inline|int|long|register|restrict|return|short|signed|sizeof|static|struct|switch|typedef|union|unsigned|void|volatile|while)\b";
    lang.add_pattern(PatternRule::new(NAME, "keyword", keywords, TokenKind::Keyword, 80)?);

    let cpp_keywords = r"\b(bool|catch|class|constexpr|decltype|delete|explicit|friend|mutable|namespace|new|noexcept|nullptr|operator|private|protected|public|template|this|throw|true|false|try|typename|using|virtual)\b";
    lang.add_pattern(PatternRule::new(NAME, "cpp_keyword", cpp_keywords, TokenKind::Keyword, 79)?);

    let types = r"\b(size_t|ptrdiff_t|intptr_t|uintptr_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t|FILE)\b";
    lang.add_pattern(PatternRule::new(NAME, "type", types, TokenKind::Type, 75)?);
    lang.add_pattern(PatternRule::new(NAME, "constant", r"\b(NULL|EOF|[A-Z][A-Z0-9_]{2,})\b", TokenKind::Constant, 74)?);

    lang.add_pattern(PatternRule::with_group(
        NAME,
        "call",
        r"\b([A-Za-z_]\w*)\s*\(",
        TokenKind::Function,
        70,
        1,
    )?);

    lang.add_pattern(PatternRule::new(NAME, "hex", r"\b0[xX][0-9a-fA-F]+[uUlL]*\b", TokenKind::Number, 65)?);
    lang.add_pattern(PatternRule::new(
        NAME,
        "float",
        r"\b\d+\.\d*(?:[eE][+-]?\d+)?[fFlL]?",
        TokenKind::Number,
        64,
    )?);
    lang.add_pattern(PatternRule::new(NAME, "integer", r"\b\d+[uUlL]*\b", TokenKind::Number, 63)?);

    // No `*` or `/`: they would claim the opening of a block comment
    lang.add_pattern(PatternRule::new(NAME, "operator", r"[+\-%&|^!<>=~?:]+", TokenKind::Operator, 40)?);

    Ok(lang)
}
