//! Locating output calls in raw source text
//!
//! An output call is the substring `printf` (wherever it appears, so the
//! tails of `sprintf(` and `fprintf(` count too), optional whitespace, and
//! `(`. Its argument list runs to the matching `)`; nested
//! parentheses are counted and quoted text is skipped. An unclosed call
//! takes the rest of the text as its arguments.

use crate::text::skip_whitespace;

/// Name of the output function the heuristics look for
pub const OUTPUT_FUNCTION: &str = "printf";

/// One call site of the output function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCall<'a> {
    /// Byte offset of the function name
    pub offset: usize,
    /// Text between the parentheses
    pub args: &'a str,
    /// Whether a matching `)` was found
    pub closed: bool,
}

impl<'a> OutputCall<'a> {
    /// Any `"` or `'` anywhere in the argument list
    pub fn has_quoted_argument(&self) -> bool {
        self.args.contains(['"', '\''])
    }

    /// Contents of the first argument when it is a closed `"..."` literal
    pub fn format_literal(&self) -> Option<&'a str> {
        let body = self.args.trim_start().strip_prefix('"')?;
        let end = literal_end(body)?;
        Some(&body[..end])
    }
}

/// All output calls in source order
pub fn output_calls(source: &str) -> impl Iterator<Item = OutputCall<'_>> {
    source.match_indices(OUTPUT_FUNCTION).filter_map(move |(offset, _)| {
        let open = skip_whitespace(source, offset + OUTPUT_FUNCTION.len());
        if !source[open..].starts_with('(') {
            return None;
        }
        let args_start = open + 1;
        let (args_end, closed) = match matching_paren(source, args_start) {
            Some(end) => (end, true),
            None => (source.len(), false),
        };
        Some(OutputCall {
            offset,
            args: &source[args_start..args_end],
            closed,
        })
    })
}

/// Offset of the `)` closing a list that starts at `from`
fn matching_paren(source: &str, from: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (off, c) in source[from..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' if depth == 0 => return Some(from + off),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Offset of the first `"` not preceded by a backslash
fn literal_end(body: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calls(source: &str) -> Vec<OutputCall<'_>> {
        output_calls(source).collect()
    }

    #[test]
    fn test_finds_calls_in_order() {
        let found = calls(r#"printf("a"); x(); printf ("b", 1);"#);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].args, r#""a""#);
        assert_eq!(found[1].args, r#""b", 1"#);
        assert!(found.iter().all(|c| c.closed));
    }

    #[test]
    fn test_printf_family_tails_are_calls() {
        let found = calls(r#"sprintf(buf, "x"); fprintf(stderr, y);"#);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].offset, 1);
        assert_eq!(found[1].args, "stderr, y");
        assert!(!found[1].has_quoted_argument());
    }

    #[test]
    fn test_name_without_paren_is_not_a_call() {
        assert!(calls("int (*printer)(const char *) = printf;").is_empty());
    }

    #[test]
    fn test_nested_parens_and_quoted_paren() {
        let found = calls(r#"printf("(%d)", f(g(1)));"#);
        assert_eq!(found[0].args, r#""(%d)", f(g(1))"#);
    }

    #[test]
    fn test_unclosed_call_runs_to_end() {
        let found = calls("printf(x");
        assert_eq!(found[0].args, "x");
        assert!(!found[0].closed);
    }

    #[test]
    fn test_quoted_argument_detection() {
        let found = calls(r#"printf(x); printf(msg, 'c'); printf("ok");"#);
        assert!(!found[0].has_quoted_argument());
        assert!(found[1].has_quoted_argument());
        assert!(found[2].has_quoted_argument());
    }

    #[test]
    fn test_format_literal() {
        let found = calls(r#"printf(  "say \"hi\"\n", name); printf(fmt, "x"); printf("open"#);
        assert_eq!(found[0].format_literal(), Some(r#"say \"hi\"\n"#));
        assert_eq!(found[1].format_literal(), None);
        assert_eq!(found[2].format_literal(), None);
    }

    #[test]
    fn test_empty_literal() {
        let found = calls(r#"printf("");"#);
        assert_eq!(found[0].format_literal(), Some(""));
    }
}
