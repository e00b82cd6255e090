//! "a" versus "an" by the first letter of the following token.
//!
//! Only spelling is considered, not pronunciation: "a university" is
//! flagged and "an hour" is flagged.
use super::{Finding, Rule, RuleContext, RuleError, RuleId};
use crate::tokenizer::case_handling::{eq_lower, lower_first_char};

const VOWELS: &str = "aeiou";

#[derive(Debug, Default, Clone, Copy)]
pub struct ArticleRule;

impl Rule for ArticleRule {
    fn id(&self) -> RuleId {
        RuleId::Article
    }

    fn check(&self, ctx: &RuleContext) -> Result<Vec<Finding>, RuleError> {
        let mut out = vec![];

        for pair in ctx.tokens.windows(2) {
            let (article, next) = (&pair[0], &pair[1]);
            let starts_with_vowel = lower_first_char(next.text())
                .map(|c| VOWELS.contains(c))
                .unwrap_or(false);

            if eq_lower(article.text(), "a") && starts_with_vowel {
                out.push(Finding::new(
                    RuleId::Article,
                    article.index,
                    format!("Incorrect article: 'a' should be 'an' before '{}'.", next.text),
                ));
            }

            if eq_lower(article.text(), "an") && !starts_with_vowel {
                out.push(Finding::new(
                    RuleId::Article,
                    article.index,
                    format!("Incorrect article: 'an' should be 'a' before '{}'.", next.text),
                ));
            }
        }

        Ok(out)
    }
}
