//! Running the rule battery over a passage of text.
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::lexicon::LexiconSource;
use crate::report::{Report, Span};
use crate::rules::{ArticleRule, CommaRule, IdiomRule, Rule, RuleContext, UnknownWordRule};
use crate::tokenizer::{tokenize, Token};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// maximum number of suggestions per unknown word
    pub n_best: usize,
    /// minimum similarity ratio for a suggestion
    pub cutoff: f32,
}

impl CheckerConfig {
    pub const fn default() -> CheckerConfig {
        CheckerConfig {
            n_best: 3,
            cutoff: 0.6,
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig::default()
    }
}

/// The result of one run: the tokens it produced and the findings that
/// refer to them.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub text: String,
    pub tokens: Vec<Token>,
    pub report: Report,
}

impl Analysis {
    pub fn messages(&self) -> Vec<&str> {
        self.report.messages()
    }

    pub fn is_correct(&self) -> bool {
        self.report.is_correct()
    }

    pub fn highlights(&self) -> Vec<Option<Span>> {
        self.report.highlights(&self.text, &self.tokens)
    }
}

pub struct Checker {
    rules: Vec<Box<dyn Rule>>,
}

impl Checker {
    /// The standard battery, in execution order: unknown words, the fixed
    /// tense and agreement checks, articles, commas.
    pub fn new(lexicon: LexiconSource, config: &CheckerConfig) -> Checker {
        let mut rules: Vec<Box<dyn Rule>> = vec![Box::new(UnknownWordRule::new(lexicon, config))];
        rules.extend(
            IdiomRule::ALL
                .iter()
                .map(|rule| Box::new(*rule) as Box<dyn Rule>),
        );
        rules.push(Box::new(ArticleRule));
        rules.push(Box::new(CommaRule));

        Checker { rules }
    }

    /// A checker backed by the process-wide WordNet.
    pub fn shared(config: &CheckerConfig) -> Checker {
        Checker::new(LexiconSource::Shared(None), config)
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn check(&self, text: &str) -> Analysis {
        let tokens = tokenize(text);
        let ctx = RuleContext::new(&tokens);
        debug!("checking {} tokens with {} rules", tokens.len(), self.rules.len());

        let per_rule = self.rules.iter().map(|rule| match rule.check(&ctx) {
            Ok(findings) => findings,
            Err(e) => {
                warn!("{:?} rule failed: {}", rule.id(), error_chain(&e));
                e.diagnostic().into_iter().collect()
            }
        });
        let report = Report::aggregate(per_rule);

        debug_assert!(report
            .findings()
            .iter()
            .all(|f| f.token_index < tokens.len()));

        Analysis {
            text: text.to_string(),
            tokens,
            report,
        }
    }
}

impl std::fmt::Debug for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.id()))
            .finish()
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(s) = source {
        out.push_str(": ");
        out.push_str(&s.to_string());
        source = s.source();
    }
    out
}
