//! Word existence checks and fuzzy suggestions against a lexicon.
use std::path::PathBuf;
use std::sync::Arc;

use smol_str::SmolStr;

pub mod shared;
pub mod similarity;
pub mod suggestion;
pub mod wordnet;

pub use self::suggestion::Suggestion;
pub use self::wordnet::WordNet;

/// Errors that can occur when loading a lexicon.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LexiconError {
    /// No dictionary directory was found in any searched location
    #[error("No WordNet dictionary found ({0} locations searched)")]
    NotFound(usize),

    /// I/O error while reading a dictionary file
    #[error("I/O error reading '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line in a dictionary file could not be parsed
    #[error("Malformed entry in '{}' at line {line}", .path.display())]
    Parse { path: PathBuf, line: usize },

    /// The dictionary loaded but holds no lemmas
    #[error("WordNet dictionary at '{}' contains no lemmas", .0.display())]
    Empty(PathBuf),
}

/// A read-only set of known word forms.
pub trait Lexicon: Send + Sync {
    /// Case-sensitive check that `word` has at least one recorded sense.
    fn is_known(&self, word: &str) -> bool;

    /// Every lemma form in the lexicon, in a stable order. Used as the
    /// candidate set for suggestions.
    fn lemmas(&self) -> &[SmolStr];

    /// Closest lemmas to `word`, best first. Scans the whole vocabulary, so
    /// only call this for words that failed `is_known`.
    fn suggest(&self, word: &str, n_best: usize, cutoff: f32) -> Vec<Suggestion> {
        similarity::suggest(
            word,
            self.lemmas().iter().map(SmolStr::as_str),
            n_best,
            cutoff,
        )
    }
}

/// Where a checker gets its lexicon from on each run.
#[derive(Clone)]
pub enum LexiconSource {
    /// An already loaded lexicon
    Loaded(Arc<dyn Lexicon>),
    /// The process-wide WordNet, loaded on first use from the given
    /// directory or the default search path
    Shared(Option<PathBuf>),
}

impl LexiconSource {
    pub fn resolve(&self) -> Result<Arc<dyn Lexicon>, LexiconError> {
        match self {
            LexiconSource::Loaded(lexicon) => Ok(Arc::clone(lexicon)),
            LexiconSource::Shared(path) => {
                shared::wordnet(path.as_deref()).map(|wn| wn as Arc<dyn Lexicon>)
            }
        }
    }
}

impl std::fmt::Debug for LexiconSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconSource::Loaded(_) => write!(f, "LexiconSource::Loaded"),
            LexiconSource::Shared(path) => write!(f, "LexiconSource::Shared({:?})", path),
        }
    }
}
