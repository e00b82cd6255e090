//! Missing comma before a coordinating conjunction.
//!
//! Fires whenever the token before a conjunction does not end in a comma,
//! so short coordinate phrases ("bread and butter") are flagged too. The
//! first and last tokens are never candidates.
use super::{Finding, Rule, RuleContext, RuleError, RuleId};
use crate::tokenizer::case_handling::lower_case;

pub const CONJUNCTIONS: [&str; 7] = ["and", "but", "so", "for", "yet", "or", "nor"];

#[derive(Debug, Default, Clone, Copy)]
pub struct CommaRule;

impl Rule for CommaRule {
    fn id(&self) -> RuleId {
        RuleId::Comma
    }

    fn check(&self, ctx: &RuleContext) -> Result<Vec<Finding>, RuleError> {
        let inner = &ctx.tokens[..ctx.tokens.len().saturating_sub(1)];
        let out = inner
            .windows(2)
            .filter(|pair| CONJUNCTIONS.contains(&lower_case(pair[1].text()).as_str()))
            .filter(|pair| pair[0].last_char() != Some(','))
            .map(|pair| {
                Finding::new(
                    RuleId::Comma,
                    pair[1].index,
                    format!("Possible missing comma before '{}'.", pair[1].text),
                )
            })
            .collect();

        Ok(out)
    }
}
