//! Merging rule output and locating findings in the original text.
use serde::Serialize;

use crate::rules::Finding;
use crate::tokenizer::Token;

/// The whole report when no rule found anything.
pub const CORRECT_MESSAGE: &str = "The paragraph is correct.";

/// A byte range in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Finds `needle` in `text` at or after byte offset `start`.
///
/// Returns `None` when the needle is empty, `start` is past the end or not on
/// a character boundary, or there is no further occurrence.
pub fn resolve_span(text: &str, needle: &str, start: usize) -> Option<Span> {
    if needle.is_empty() || start > text.len() || !text.is_char_boundary(start) {
        return None;
    }

    text[start..].find(needle).map(|offset| Span {
        start: start + offset,
        end: start + offset + needle.len(),
    })
}

/// All findings of one run, in rule execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Concatenates per-rule results without reordering or dropping any.
    pub fn aggregate<I>(per_rule: I) -> Report
    where
        I: IntoIterator<Item = Vec<Finding>>,
    {
        Report {
            findings: per_rule.into_iter().flatten().collect(),
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn is_correct(&self) -> bool {
        self.is_empty()
    }

    /// Message lines for display: one per finding, or the single
    /// [`CORRECT_MESSAGE`] when there are none.
    pub fn messages(&self) -> Vec<&str> {
        if self.findings.is_empty() {
            return vec![CORRECT_MESSAGE];
        }
        self.findings.iter().map(|f| f.message.as_str()).collect()
    }

    /// Resolves each finding to a span of `text`, searching from the end of
    /// the previously resolved span so repeated words are not painted twice.
    pub fn highlights(&self, text: &str, tokens: &[Token]) -> Vec<Option<Span>> {
        let mut cursor = 0;

        self.findings
            .iter()
            .map(|finding| {
                let token = tokens.get(finding.token_index)?;
                let span = resolve_span(text, token.text(), cursor)?;
                cursor = span.end;
                Some(span)
            })
            .collect()
    }
}
