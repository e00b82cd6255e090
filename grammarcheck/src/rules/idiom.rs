//! Hard-coded tense and agreement checks.
//!
//! Each check only asks whether certain words occur somewhere in the token
//! sequence. Distance and grammatical role are ignored, so unrelated uses
//! of "go" and "yesterday" in one passage still fire the tense check.
use super::{Finding, Rule, RuleContext, RuleError, RuleId};

#[derive(Debug, Clone, Copy)]
pub struct IdiomRule {
    id: RuleId,
    /// all of these must occur; the finding is anchored at the first one
    words: &'static [&'static str],
    message: &'static str,
}

impl IdiomRule {
    pub const GO_YESTERDAY: IdiomRule = IdiomRule {
        id: RuleId::Tense,
        words: &["go", "yesterday"],
        message: "Incorrect tense: 'go' should be 'went'.",
    };

    pub const DONT: IdiomRule = IdiomRule {
        id: RuleId::Agreement,
        words: &["don't"],
        message: "Incorrect usage: 'don't' should be 'doesn't' for singular subjects.",
    };

    pub const WAS_THEY: IdiomRule = IdiomRule {
        id: RuleId::Agreement,
        words: &["was", "they"],
        message: "Subject-verb agreement: 'was' should be 'were' with plural 'they'.",
    };

    pub const SEEN: IdiomRule = IdiomRule {
        id: RuleId::VerbForm,
        words: &["seen"],
        message: "Incorrect form: 'seen' should be 'saw'.",
    };

    pub const ALL: [IdiomRule; 4] = [
        IdiomRule::GO_YESTERDAY,
        IdiomRule::DONT,
        IdiomRule::WAS_THEY,
        IdiomRule::SEEN,
    ];
}

impl Rule for IdiomRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn check(&self, ctx: &RuleContext) -> Result<Vec<Finding>, RuleError> {
        let anchor = match ctx.position(self.words[0]) {
            Some(v) => v,
            None => return Ok(vec![]),
        };

        if self.words[1..].iter().all(|w| ctx.contains(w)) {
            Ok(vec![Finding::new(self.id, anchor, self.message)])
        } else {
            Ok(vec![])
        }
    }
}
