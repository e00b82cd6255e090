//! The fixed battery of grammar rules.
//!
//! Every rule is a stateless check over one run's token sequence. Rules do
//! not see each other's output and a failing rule never stops the rest.
use serde::Serialize;

use crate::lexicon::LexiconError;
use crate::tokenizer::Token;

pub mod article;
pub mod comma;
pub mod idiom;
pub mod unknown_word;

pub use self::article::ArticleRule;
pub use self::comma::CommaRule;
pub use self::idiom::IdiomRule;
pub use self::unknown_word::UnknownWordRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    UnknownWord,
    Tense,
    Agreement,
    VerbForm,
    Article,
    Comma,
}

/// A single detected issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// index into the token sequence of the run that produced it
    pub token_index: usize,
    pub message: String,
    pub rule: RuleId,
}

impl Finding {
    pub fn new<S: Into<String>>(rule: RuleId, token_index: usize, message: S) -> Finding {
        Finding {
            token_index,
            message: message.into(),
            rule,
        }
    }
}

/// Input shared by all rules during one run.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub tokens: &'a [Token],
}

impl<'a> RuleContext<'a> {
    pub fn new(tokens: &'a [Token]) -> RuleContext<'a> {
        RuleContext { tokens }
    }

    /// Index of the first token whose text is exactly `word`.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t.text() == word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }
}

/// Errors a rule can report instead of findings.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The lexicon could not be loaded for this run
    #[error("Lexicon unavailable")]
    LexiconUnavailable {
        /// first token the rule would have looked up
        anchor: Option<usize>,
        #[source]
        source: LexiconError,
    },
}

impl RuleError {
    /// The finding that stands in for the rule's output, if it can be
    /// anchored to a token.
    pub fn diagnostic(&self) -> Option<Finding> {
        match self {
            RuleError::LexiconUnavailable { anchor, source } => anchor.map(|index| {
                Finding::new(
                    RuleId::UnknownWord,
                    index,
                    format!("Unknown-word checking is disabled: {}.", source),
                )
            }),
        }
    }
}

pub trait Rule: Send + Sync {
    fn id(&self) -> RuleId;
    fn check(&self, ctx: &RuleContext) -> Result<Vec<Finding>, RuleError>;
}
