//! The process-wide WordNet handle.
//!
//! Loaded on first use and never mutated afterwards. A failed load is not
//! remembered, so a later call tries again; a successful load is reused for
//! the lifetime of the process.
use std::path::Path;
use std::sync::Arc;

use log::info;
use once_cell::sync::OnceCell;

use super::{Lexicon, LexiconError, WordNet};
use crate::paths::{find_wordnet_path, wordnet_search_paths};

static WORDNET: OnceCell<Arc<WordNet>> = OnceCell::new();

/// Returns the shared WordNet, loading it from `path` (or the first
/// dictionary found on the search path) if this is the first successful
/// call. `path` is ignored once a dictionary has been loaded.
pub fn wordnet(path: Option<&Path>) -> Result<Arc<WordNet>, LexiconError> {
    WORDNET
        .get_or_try_init(|| -> Result<Arc<WordNet>, LexiconError> {
            let dir = match path {
                Some(p) => p.to_path_buf(),
                None => find_wordnet_path()
                    .ok_or_else(|| LexiconError::NotFound(wordnet_search_paths().len()))?,
            };
            let wordnet = WordNet::open(&dir)?;
            info!(
                "WordNet loaded from {} ({} lemmas)",
                dir.display(),
                wordnet.lemmas().len()
            );
            Ok(Arc::new(wordnet))
        })
        .map(Arc::clone)
}

/// True once the shared dictionary has been loaded.
pub fn is_loaded() -> bool {
    WORDNET.get().is_some()
}
