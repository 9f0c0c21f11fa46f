//! Bold inline markup.
//!
//! The only rich-text feature system-wide: `**bold**` runs inside an
//! otherwise plain string. Text is split on `(\*\*.*?\*\*)`; the
//! segments alternate plain / bold, delimiters stripped from the bold
//! ones. No nesting, no other syntax, no escaping of literal `**`.

use std::sync::LazyLock;

use regex::Regex;

use crate::tree::TextSpan;

static BOLD_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*.*?\*\*").unwrap());

/// Split text into alternating plain/bold spans.
///
/// The alternation is preserved exactly as a split produces it: the
/// result always starts and ends with a plain span, which is empty
/// when the text starts or ends with a bold run.
pub fn parse_bold_spans(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut last = 0;
    for m in BOLD_SEGMENT.find_iter(text) {
        spans.push(TextSpan::plain(&text[last..m.start()]));
        spans.push(TextSpan::bold(&text[m.start() + 2..m.end() - 2]));
        last = m.end();
    }
    spans.push(TextSpan::plain(&text[last..]));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_with_trailing_empty() {
        let spans = parse_bold_spans("Hello **world** and **you**");
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("Hello "),
                TextSpan::bold("world"),
                TextSpan::plain(" and "),
                TextSpan::bold("you"),
                TextSpan::plain(""),
            ]
        );
    }

    #[test]
    fn test_no_markup_is_single_span() {
        assert_eq!(parse_bold_spans("plain"), vec![TextSpan::plain("plain")]);
        assert_eq!(parse_bold_spans(""), vec![TextSpan::plain("")]);
    }

    #[test]
    fn test_leading_bold_yields_empty_first_span() {
        let spans = parse_bold_spans("**lead** rest");
        assert_eq!(
            spans,
            vec![
                TextSpan::plain(""),
                TextSpan::bold("lead"),
                TextSpan::plain(" rest"),
            ]
        );
    }

    #[test]
    fn test_unclosed_delimiter_stays_plain() {
        assert_eq!(
            parse_bold_spans("no **close"),
            vec![TextSpan::plain("no **close")]
        );
    }

    #[test]
    fn test_no_nesting() {
        // The lazy match closes at the first `**` it reaches
        let spans = parse_bold_spans("**a **b** c**");
        assert_eq!(
            spans,
            vec![
                TextSpan::plain(""),
                TextSpan::bold("a "),
                TextSpan::plain("b"),
                TextSpan::bold(" c"),
                TextSpan::plain(""),
            ]
        );
    }
}
