/*! Rule-based grammar checking for short English passages.

A passage is split into word and punctuation tokens, then a fixed battery of
rules runs over the token sequence:

- unknown words, looked up in a [`WordNet`] dictionary with fuzzy
  suggestions for the ones that are missing
- a few hard-coded tense and agreement checks
- "a" versus "an"
- a missing comma before a coordinating conjunction

Each finding is anchored to a token index, and [`Analysis::highlights`]
maps findings back to byte spans of the original text.

[`WordNet`]: https://wordnet.princeton.edu

# Usage examples

```no_run
use grammarcheck::{Checker, CheckerConfig};

let checker = Checker::shared(&CheckerConfig::default());
let analysis = checker.check("He go to school yesterday.");
for message in analysis.messages() {
    println!("{}", message);
}
```

Further examples can be found in `grammarcheck-bin` in the same repository.
*/

pub mod checker;
pub mod lexicon;
pub mod paths;
pub mod report;
pub mod rules;
pub mod tokenizer;
pub mod vfs;

pub use crate::checker::{Analysis, Checker, CheckerConfig};
pub use crate::lexicon::{Lexicon, LexiconError, LexiconSource};
pub use crate::report::{resolve_span, Report, Span, CORRECT_MESSAGE};
pub use crate::rules::{Finding, RuleId};
pub use crate::tokenizer::{tokenize, Token, TokenKind, Tokenize};
