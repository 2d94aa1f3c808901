//! Oracle reply parsing
//!
//! The reply is free text. Each line is run through a small grammar:
//!
//! ```text
//! "test" WS+ DIGIT+ WS* "-" WS* LABEL
//! ```
//!
//! `"test"` and `LABEL` are matched case-insensitively, `LABEL` is one of the
//! suite's vocabulary labels, and the grammar may start anywhere in the line
//! (the leftmost successful start wins). `LABEL` is a prefix match, so
//! `Positively` reads as `Positive`. Anything around the match, and any line
//! without a match, is ignored. Parsing never fails.

use tracing::debug;

use crate::types::{LabelVocabulary, ParsedVerdict};

const KEYWORD: &[u8] = b"test";

/// Outcome of running the answer grammar over one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// The line carried an answer
    Matched { index: usize, label: String },
    /// Prose, headers or anything else
    Ignored,
}

impl LineMatch {
    /// Convert a match into a verdict
    pub fn into_verdict(self) -> Option<ParsedVerdict> {
        match self {
            LineMatch::Matched { index, label } => Some(ParsedVerdict { index, label }),
            LineMatch::Ignored => None,
        }
    }
}

/// Extracts verdicts from oracle replies
pub struct ResponseParser;

impl ResponseParser {
    /// Parse every line of `raw`, keeping verdicts in the order they appear.
    ///
    /// Duplicate indices are all kept and absent indices simply do not show
    /// up; both are the grader's concern.
    pub fn parse(raw: &str, vocabulary: &LabelVocabulary) -> Vec<ParsedVerdict> {
        let verdicts: Vec<ParsedVerdict> = raw
            .lines()
            .filter_map(|line| Self::parse_line(line, vocabulary).into_verdict())
            .collect();

        debug!(
            lines = raw.lines().count(),
            verdicts = verdicts.len(),
            "Parsed oracle reply"
        );
        verdicts
    }

    /// Run the answer grammar over a single line
    pub fn parse_line(line: &str, vocabulary: &LabelVocabulary) -> LineMatch {
        let labels = vocabulary.longest_first();
        let bytes = line.as_bytes();
        let mut start = 0;

        while let Some(offset) = find_keyword(&bytes[start..]) {
            let at = start + offset;
            if let Some(found) = match_answer(line, at + KEYWORD.len(), &labels, vocabulary) {
                return found;
            }
            start = at + 1;
        }

        LineMatch::Ignored
    }
}

fn find_keyword(haystack: &[u8]) -> Option<usize> {
    haystack
        .windows(KEYWORD.len())
        .position(|window| window.eq_ignore_ascii_case(KEYWORD))
}

/// Match `WS+ DIGIT+ WS* "-" WS* LABEL` starting at byte `pos`
fn match_answer(
    line: &str,
    pos: usize,
    labels: &[&str],
    vocabulary: &LabelVocabulary,
) -> Option<LineMatch> {
    let bytes = line.as_bytes();

    let after_ws = skip_whitespace(bytes, pos);
    if after_ws == pos {
        return None;
    }

    let digits_end = after_ws
        + bytes[after_ws..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
    if digits_end == after_ws {
        return None;
    }
    // Indices too large for usize are treated as noise.
    let index: usize = line[after_ws..digits_end].parse().ok()?;

    let mut cursor = skip_whitespace(bytes, digits_end);
    if bytes.get(cursor) != Some(&b'-') {
        return None;
    }
    cursor = skip_whitespace(bytes, cursor + 1);

    labels.iter().find_map(|label| {
        let end = cursor + label.len();
        let candidate = line.get(cursor..end)?;
        if !candidate.eq_ignore_ascii_case(label) {
            return None;
        }
        let canonical = vocabulary.canonical(label).unwrap_or(label);
        Some(LineMatch::Matched {
            index,
            label: canonical.to_string(),
        })
    })
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(|b| b.is_ascii_whitespace()) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_way() -> LabelVocabulary {
        LabelVocabulary::four_way()
    }

    #[test]
    fn test_parse_ignores_prose() {
        let raw = "Some preamble text\nTest 1 - Positive\nTrailing notes\nTest 2 - Neutral";
        let verdicts = ResponseParser::parse(raw, &four_way());
        assert_eq!(
            verdicts,
            vec![
                ParsedVerdict::new(1, "Positive"),
                ParsedVerdict::new(2, "Neutral"),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_with_canonical_label() {
        assert_eq!(
            ResponseParser::parse_line("test 1 - POSITIVE", &four_way()),
            LineMatch::Matched {
                index: 1,
                label: "Positive".to_string()
            }
        );
    }

    #[test]
    fn test_whitespace_around_separator() {
        let vocab = four_way();
        for line in ["Test 3-Mixed", "Test   3  -   mixed", "Test\t3 -\tMixed"] {
            assert_eq!(
                ResponseParser::parse_line(line, &vocab),
                LineMatch::Matched {
                    index: 3,
                    label: "Mixed".to_string()
                },
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_markdown_decoration_is_tolerated() {
        let vocab = four_way();
        assert_eq!(
            ResponseParser::parse_line("* **Test 12 - Negative**", &vocab),
            LineMatch::Matched {
                index: 12,
                label: "Negative".to_string()
            }
        );
        assert_eq!(
            ResponseParser::parse_line("- Test 4 - Neutral (plain statement)", &vocab),
            LineMatch::Matched {
                index: 4,
                label: "Neutral".to_string()
            }
        );
    }

    #[test]
    fn test_non_matching_lines_are_ignored() {
        let vocab = four_way();
        for line in [
            "",
            "Test 1: I love it",
            "Test - Positive",
            "Test one - Positive",
            "Test1 - Positive",
            "Test 1 - Happy",
        ] {
            assert_eq!(
                ResponseParser::parse_line(line, &vocab),
                LineMatch::Ignored,
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_label_is_a_prefix_match() {
        let vocab = four_way();
        for (line, index, label) in [
            ("Test 1 - Positively thrilled", 1, "Positive"),
            ("Test 2 - Negatively charged", 2, "Negative"),
            ("Test 3 - Mixed2", 3, "Mixed"),
        ] {
            assert_eq!(
                ResponseParser::parse_line(line, &vocab),
                LineMatch::Matched {
                    index,
                    label: label.to_string()
                },
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_longest_label_wins_over_its_prefix() {
        let vocab = LabelVocabulary::new(["Pos", "Positive"]).unwrap();
        assert_eq!(
            ResponseParser::parse_line("Test 1 - Positive", &vocab),
            LineMatch::Matched {
                index: 1,
                label: "Positive".to_string()
            }
        );
        assert_eq!(
            ResponseParser::parse_line("Test 2 - Possibly", &vocab),
            LineMatch::Matched {
                index: 2,
                label: "Pos".to_string()
            }
        );
    }

    #[test]
    fn test_label_restricted_to_vocabulary() {
        let vocab = LabelVocabulary::three_way();
        assert_eq!(
            ResponseParser::parse_line("Test 1 - Mixed", &vocab),
            LineMatch::Ignored
        );
    }

    #[test]
    fn test_later_start_in_line_can_match() {
        // The first "test" fails the grammar, the second one succeeds.
        let line = "Test results: Test 7 - Positive";
        assert_eq!(
            ResponseParser::parse_line(line, &four_way()),
            LineMatch::Matched {
                index: 7,
                label: "Positive".to_string()
            }
        );
    }

    #[test]
    fn test_duplicates_kept_in_reply_order() {
        let raw = "Test 2 - Negative\nTest 1 - Positive\nTest 2 - Mixed";
        let verdicts = ResponseParser::parse(raw, &four_way());
        assert_eq!(
            verdicts,
            vec![
                ParsedVerdict::new(2, "Negative"),
                ParsedVerdict::new(1, "Positive"),
                ParsedVerdict::new(2, "Mixed"),
            ]
        );
    }

    #[test]
    fn test_out_of_range_and_oversized_indices() {
        let vocab = four_way();
        assert_eq!(
            ResponseParser::parse_line("Test 0 - Positive", &vocab),
            LineMatch::Matched {
                index: 0,
                label: "Positive".to_string()
            }
        );
        assert_eq!(
            ResponseParser::parse_line("Test 99999999999999999999999 - Positive", &vocab),
            LineMatch::Ignored
        );
    }

    #[test]
    fn test_non_ascii_text_does_not_panic() {
        let vocab = four_way();
        let raw = "Kết quả:\nTest 1 - Tích cực\nTést 2 - Positive\nTest 3 - Positive ✓";
        let verdicts = ResponseParser::parse(raw, &vocab);
        assert_eq!(verdicts, vec![ParsedVerdict::new(3, "Positive")]);
    }

    #[test]
    fn test_malformed_reply_yields_nothing() {
        assert!(ResponseParser::parse("Error occurred during processing", &four_way()).is_empty());
        assert!(ResponseParser::parse("", &four_way()).is_empty());
    }
}
