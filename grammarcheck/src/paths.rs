//! Locating a WordNet dictionary on disk.
use std::env;
use std::path::{Path, PathBuf};

const SYSTEM_DIRS: &[&str] = &[
    "/usr/share/nltk_data/corpora/wordnet",
    "/usr/local/share/nltk_data/corpora/wordnet",
    "/usr/share/wordnet",
    "/usr/local/share/wordnet",
    "/usr/share/wordnet/dict",
];

/// Directories searched for a WordNet dictionary, most specific first:
/// `WNSEARCHDIR`, each `NLTK_DATA` entry, `~/nltk_data`, then system paths.
pub fn wordnet_search_paths() -> Vec<PathBuf> {
    let mut out = vec![];

    if let Some(dir) = env::var_os("WNSEARCHDIR") {
        out.push(PathBuf::from(dir));
    }

    if let Some(dirs) = env::var_os("NLTK_DATA") {
        out.extend(env::split_paths(&dirs).map(|p| p.join("corpora").join("wordnet")));
    }

    if let Some(home) = env::var_os("HOME") {
        out.push(
            PathBuf::from(home)
                .join("nltk_data")
                .join("corpora")
                .join("wordnet"),
        );
    }

    out.extend(SYSTEM_DIRS.iter().map(PathBuf::from));
    out
}

/// A directory looks like a WordNet dictionary if it has a noun index.
pub fn is_wordnet_dir(path: &Path) -> bool {
    path.join("index.noun").is_file()
}

pub fn find_wordnet_path() -> Option<PathBuf> {
    wordnet_search_paths()
        .into_iter()
        .find(|p| is_wordnet_dir(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_dirs_are_searched_last() {
        let paths = wordnet_search_paths();
        let tail = &paths[paths.len() - SYSTEM_DIRS.len()..];
        assert_eq!(tail[0], PathBuf::from(SYSTEM_DIRS[0]));
    }

    #[test]
    fn detects_dictionary_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_wordnet_dir(dir.path()));
        std::fs::write(dir.path().join("index.noun"), "apple n 1 0 1 0 1\n").unwrap();
        assert!(is_wordnet_dir(dir.path()));
    }
}
