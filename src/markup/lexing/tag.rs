//! Tag reader
//!
//! Scans one tag starting at a `<`. Quotes (`'` or `"`) make `>` and `:`
//! literal until the matching quote; inside a quote a backslash escapes the
//! active quote character or another backslash. Outside quotes the body is
//! split on unescaped `:`, where `\:` and `\\` are the only escapes.
//!
//! A tag that never terminates, or whose body is empty, is not a tag at all:
//! [read_tag] returns `None` and the caller keeps the `<` as text.

use std::ops::Range;

const TAG_CLOSE: u8 = b'>';
const ESCAPE: u8 = b'\\';
const SINGLE_QUOTE: u8 = b'\'';
const DOUBLE_QUOTE: u8 = b'"';
const ARG_SEPARATOR: char = ':';

/// A tag read from the source, valid for one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    /// Byte range of the whole tag, `<` through `>`.
    pub span: Range<usize>,
    /// First segment, ASCII-lowercased. Keeps a leading `!` if present.
    pub name: String,
    pub args: Vec<String>,
    pub closing: bool,
    pub self_closing: bool,
}

impl TagToken {
    /// Index to resume scanning from.
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The tag exactly as written.
    pub fn raw<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.clone()]
    }
}

/// Reads the tag whose `<` sits at byte `start` of `source`.
pub fn read_tag(source: &str, start: usize) -> Option<TagToken> {
    let Some(close) = find_close(source.as_bytes(), start + 1) else {
        log::trace!(target: "quickmm.lexing", "unterminated tag at {}", start);
        return None;
    };

    let content = source[start + 1..close].trim();
    let closing = content.starts_with('/');
    let self_closing = !closing && content.len() > 1 && content.ends_with('/');
    let mut body = content;
    if closing {
        body = &body[1..];
    } else if self_closing {
        body = &body[..body.len() - 1];
    }
    let body = body.trim();
    if body.is_empty() {
        log::trace!(target: "quickmm.lexing", "empty tag body at {}", start);
        return None;
    }

    let Some(mut parts) = split_args(body) else {
        log::trace!(target: "quickmm.lexing", "unterminated quote in tag at {}", start);
        return None;
    };
    let name = parts.remove(0).to_ascii_lowercase();
    let token = TagToken {
        span: start..close + 1,
        name,
        args: parts,
        closing,
        self_closing,
    };
    log::trace!(target: "quickmm.lexing", "read tag {:?}", token);
    Some(token)
}

/// Finds the `>` that ends a tag body, skipping over quoted spans.
fn find_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut escaped = false;
    for (index, &byte) in bytes.iter().enumerate().skip(from) {
        match quote {
            Some(active) => {
                if escaped {
                    escaped = false;
                } else if byte == ESCAPE {
                    escaped = true;
                } else if byte == active {
                    quote = None;
                }
            }
            None => match byte {
                SINGLE_QUOTE | DOUBLE_QUOTE => quote = Some(byte),
                TAG_CLOSE => return Some(index),
                _ => {}
            },
        }
    }
    None
}

/// Splits a tag body into its name and arguments.
///
/// Returns `None` when a quote is left open. The result always holds at
/// least one (possibly empty) segment.
pub fn split_args(body: &str) -> Option<Vec<String>> {
    if !body.contains([ARG_SEPARATOR, '\'', '"', '\\']) {
        return Some(vec![body.to_string()]);
    }

    let mut parts = Vec::with_capacity(4);
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if let Some(active) = quote {
            if ch == '\\' {
                if let Some(&next) = chars.peek() {
                    if next == active || next == '\\' {
                        current.push(next);
                        chars.next();
                        continue;
                    }
                }
            }
            if ch == active {
                quote = None;
            } else {
                current.push(ch);
            }
            continue;
        }
        match ch {
            '\\' => match chars.peek() {
                Some(&next) if next == ARG_SEPARATOR || next == '\\' => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push(ch),
            },
            '\'' | '"' => quote = Some(ch),
            ARG_SEPARATOR => parts.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    if quote.is_some() {
        return None;
    }
    parts.push(current);
    Some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tag(source: &str) -> TagToken {
        read_tag(source, 0).expect("tag to be read")
    }

    #[test]
    fn test_simple_tag() {
        let token = tag("<red>");
        assert_eq!(token.name, "red");
        assert!(token.args.is_empty());
        assert!(!token.closing && !token.self_closing);
        assert_eq!(token.span, 0..5);
    }

    #[test]
    fn test_offset_start() {
        let source = "ab<b>cd";
        let token = read_tag(source, 2).unwrap();
        assert_eq!(token.raw(source), "<b>");
        assert_eq!(token.end(), 5);
    }

    #[test]
    fn test_closing_and_self_closing() {
        let closing = tag("</ bold >");
        assert_eq!(closing.name, "bold");
        assert!(closing.closing && !closing.self_closing);

        let self_closing = tag("< bold / >");
        assert_eq!(self_closing.name, "bold");
        assert!(self_closing.self_closing && !self_closing.closing);

        // closing wins; the trailing slash stays in the name
        let both = tag("</b/>");
        assert!(both.closing && !both.self_closing);
        assert_eq!(both.name, "b/");
    }

    #[test]
    fn test_arguments() {
        let token = tag("<click:run_command:'/say hi: there'>");
        assert_eq!(token.name, "click");
        assert_eq!(token.args, vec!["run_command", "/say hi: there"]);
    }

    #[test]
    fn test_quoted_close_bracket() {
        let token = tag(r#"<hover:show_text:"<red>x</red>">"#);
        assert_eq!(token.args, vec!["show_text", "<red>x</red>"]);
    }

    #[test]
    fn test_name_is_ascii_lowercased_only() {
        assert_eq!(tag("<RED>").name, "red");
        assert_eq!(tag("<ÄBC>").name, "Äbc");
    }

    #[rstest(
        source,
        case::unterminated("<red"),
        case::empty("<>"),
        case::blank("<  >"),
        case::lone_slash("</>"),
        case::open_quote("<a:'b>"),
        case::quoted_close_only("<a:'b>'")
    )]
    fn test_not_a_tag(source: &str) {
        assert_eq!(read_tag(source, 0), None);
    }

    #[rstest(
        body,
        expected,
        case::plain("a", vec!["a"]),
        case::separators("a:b:c", vec!["a", "b", "c"]),
        case::empty_segments("a::", vec!["a", "", ""]),
        case::escaped_separator(r"a:b\:c", vec!["a", "b:c"]),
        case::escaped_escape(r"a:b\\c", vec!["a", r"b\c"]),
        case::other_escape_literal(r"a:\n", vec!["a", r"\n"]),
        case::quote_escapes(r"a:'it\'s'", vec!["a", "it's"]),
        case::other_quote_literal(r#"a:'say "hi"'"#, vec!["a", r#"say "hi""#]),
        case::joined_quotes(r#"a:'x'"y""#, vec!["a", "xy"])
    )]
    fn test_split_args(body: &str, expected: Vec<&str>) {
        assert_eq!(split_args(body).unwrap(), expected);
    }

    #[test]
    fn test_split_args_unterminated_quote() {
        assert_eq!(split_args("a:'b"), None);
    }
}
