//! Bracket and quote pair tables

/// Opening brackets and their closers
pub const BRACKETS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// Quotes that pair with themselves
pub const QUOTES: [char; 2] = ['"', '\''];

/// Closer for an opening bracket
pub fn closing_for(open: char) -> Option<char> {
    BRACKETS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|&(_, close)| close)
}

pub fn is_opening(ch: char) -> bool {
    closing_for(ch).is_some()
}

pub fn is_closing(ch: char) -> bool {
    BRACKETS.iter().any(|&(_, close)| close == ch)
}

pub fn is_quote(ch: char) -> bool {
    QUOTES.contains(&ch)
}

/// True if `open` followed by `close` is a pair the editor inserted
pub fn is_pair(open: char, close: char) -> bool {
    closing_for(open) == Some(close) || (is_quote(open) && open == close)
}

/// Count brackets opened but not closed in `text`
///
/// Brackets inside `"`, `'` or backtick quoted runs are ignored, and a
/// backslash escapes the character after it. A closer that does not
/// match the innermost open bracket is skipped, so `(]` counts as one.
pub fn count_unclosed(text: &str) -> usize {
    let mut stack: Vec<char> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for ch in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' || ch == '`' => quote = Some(ch),
            None => {
                if let Some(close) = closing_for(ch) {
                    stack.push(close);
                } else if is_closing(ch) && stack.last() == Some(&ch) {
                    stack.pop();
                }
            }
        }
    }

    stack.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pair_tables() {
        assert_eq!(closing_for('('), Some(')'));
        assert_eq!(closing_for('{'), Some('}'));
        assert_eq!(closing_for(')'), None);
        assert!(is_closing(']'));
        assert!(!is_closing('('));
        assert!(is_pair('[', ']'));
        assert!(is_pair('\'', '\''));
        assert!(!is_pair('(', ']'));
        assert!(!is_pair('"', '\''));
    }

    #[test]
    fn test_count_unclosed() {
        assert_eq!(count_unclosed("("), 1);
        assert_eq!(count_unclosed("()"), 0);
        assert_eq!(count_unclosed("([{"), 3);
        assert_eq!(count_unclosed("()(["), 2);
        assert_eq!(count_unclosed("(())"), 0);
        assert_eq!(count_unclosed("foo(bar, [1, 2"), 2);
        assert_eq!(count_unclosed(""), 0);
    }

    #[test]
    fn test_brackets_in_quotes_ignored() {
        assert_eq!(count_unclosed("\")(\""), 0);
        assert_eq!(count_unclosed("')('"), 0);
        assert_eq!(count_unclosed("`(`"), 0);
        assert_eq!(count_unclosed("print(\"(\""), 1);
        assert_eq!(count_unclosed("\"it's (\" ("), 1);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(count_unclosed(r#""(\""#), 0);
        assert_eq!(count_unclosed(r#""\\" ("#), 1);
        assert_eq!(count_unclosed(r"\("), 0);
    }

    #[test]
    fn test_mismatched_closer_is_ignored() {
        assert_eq!(count_unclosed("(]"), 1);
        assert_eq!(count_unclosed(")("), 1);
        assert_eq!(count_unclosed("}}}"), 0);
    }

    fn balanced() -> impl Strategy<Value = String> {
        let leaf = "[a-z ,.0-9]{0,4}".prop_map(String::from);
        leaf.prop_recursive(4, 32, 4, |inner| {
            (
                prop::sample::select(BRACKETS.to_vec()),
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|((open, close), parts)| {
                    format!("{open}{}{close}", parts.concat())
                })
        })
    }

    proptest! {
        #[test]
        fn prop_count_bounded_by_openers(s in "\\PC{0,40}") {
            let openers = s.chars().filter(|&c| is_opening(c)).count();
            prop_assert!(count_unclosed(&s) <= openers);
        }

        #[test]
        fn prop_balanced_counts_zero(s in balanced()) {
            prop_assert_eq!(count_unclosed(&s), 0);
        }
    }
}
