//! Words missing from the lexicon, with fuzzy suggestions.
use hashbrown::HashMap;
use itertools::Itertools;
use log::{debug, trace};
use smol_str::SmolStr;

use super::{Finding, Rule, RuleContext, RuleError, RuleId};
use crate::checker::CheckerConfig;
use crate::lexicon::LexiconSource;
use crate::tokenizer::case_handling::lower_case;
use crate::tokenizer::Token;

/// Common function words that are never looked up. Compared lowercased.
pub const STOPLIST: [&str; 24] = [
    "the", "is", "are", "to", "and", "that", "a", "an", "in", "of", "for", "on", "with", "but",
    "he", "she", "it", "they", "we", "you", "not", "as", "this", "at",
];

pub fn is_stopword(word: &str) -> bool {
    STOPLIST.contains(&lower_case(word).as_str())
}

#[derive(Debug, Clone)]
pub struct UnknownWordRule {
    lexicon: LexiconSource,
    n_best: usize,
    cutoff: f32,
}

impl UnknownWordRule {
    pub fn new(lexicon: LexiconSource, config: &CheckerConfig) -> UnknownWordRule {
        UnknownWordRule {
            lexicon,
            n_best: config.n_best,
            cutoff: config.cutoff,
        }
    }

    fn candidates<'a>(&self, tokens: &'a [Token]) -> Vec<&'a Token> {
        tokens
            .iter()
            .filter(|t| t.is_alphabetic() && !is_stopword(t.text()))
            .collect()
    }
}

impl Rule for UnknownWordRule {
    fn id(&self) -> RuleId {
        RuleId::UnknownWord
    }

    fn check(&self, ctx: &RuleContext) -> Result<Vec<Finding>, RuleError> {
        let candidates = self.candidates(ctx.tokens);
        if candidates.is_empty() {
            return Ok(vec![]);
        }

        let lexicon = self
            .lexicon
            .resolve()
            .map_err(|source| RuleError::LexiconUnavailable {
                anchor: candidates.first().map(|t| t.index),
                source,
            })?;

        // Repeated unknown words share one vocabulary scan per run.
        let mut scanned: HashMap<SmolStr, Vec<SmolStr>> = HashMap::new();
        let mut out = vec![];

        for token in candidates {
            if lexicon.is_known(token.text()) {
                trace!("known: {}", token.text);
                continue;
            }

            let suggestions = scanned.entry(token.text.clone()).or_insert_with(|| {
                lexicon
                    .suggest(token.text(), self.n_best, self.cutoff)
                    .into_iter()
                    .map(|s| s.value)
                    .collect()
            });
            debug!("unknown: {} ({} suggestions)", token.text, suggestions.len());

            let message = if suggestions.is_empty() {
                format!(
                    "'{}' not found in WordNet and no suggestions available.",
                    token.text
                )
            } else {
                format!(
                    "'{}' is incorrect. Suggestions: {}",
                    token.text,
                    suggestions.iter().join(", ")
                )
            };
            out.push(Finding::new(RuleId::UnknownWord, token.index, message));
        }

        Ok(out)
    }
}
