//! A lexicon read from a WordNet `dict/` directory.
//!
//! Existence checks use the lemma index files (`index.noun`, ...) and the
//! morphological exception lists (`noun.exc`, ...). Suggestion candidates are
//! the case-preserving word forms of the synsets in the data files
//! (`data.noun`, ...), in file order. Glosses and pointers are skipped.
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use log::debug;
use smol_str::SmolStr;

use super::{Lexicon, LexiconError};
use crate::vfs::{Filesystem, Fs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl Pos {
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv];

    /// Order in which synsets are enumerated for suggestion candidates.
    pub const SYNSET_ORDER: [Pos; 4] = [Pos::Adj, Pos::Adv, Pos::Noun, Pos::Verb];

    fn name(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adj => "adj",
            Pos::Adv => "adv",
        }
    }

    fn index_file(self) -> String {
        format!("index.{}", self.name())
    }

    fn data_file(self) -> String {
        format!("data.{}", self.name())
    }

    fn exception_file(self) -> String {
        format!("{}.exc", self.name())
    }

    /// Suffix detachment rules as `(suffix, replacement)`.
    fn detachments(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pos::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            Pos::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            Pos::Adj => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            Pos::Adv => &[],
        }
    }
}

#[derive(Debug, Default)]
struct PosTable {
    /// lemma -> number of senses
    senses: HashMap<SmolStr, u32>,
    /// inflected form -> base forms
    exceptions: HashMap<SmolStr, Vec<SmolStr>>,
}

impl PosTable {
    fn has_senses(&self, form: &str) -> bool {
        self.senses.get(form).map(|&n| n > 0).unwrap_or(false)
    }

    fn base_forms(&self, pos: Pos, word: &str) -> Vec<SmolStr> {
        if let Some(bases) = self.exceptions.get(word) {
            return bases.clone();
        }

        pos.detachments()
            .iter()
            .filter_map(|&(suffix, replacement)| {
                word.strip_suffix(suffix)
                    .map(|stem| SmolStr::from(format!("{}{}", stem, replacement)))
            })
            .collect()
    }

    fn knows(&self, pos: Pos, word: &str) -> bool {
        self.has_senses(word)
            || self
                .base_forms(pos, word)
                .iter()
                .any(|form| self.has_senses(form))
    }
}

/// WordNet lemma index with morphological base-form lookup.
#[derive(Debug)]
pub struct WordNet {
    tables: [PosTable; 4],
    lemmas: Vec<SmolStr>,
}

impl WordNet {
    /// Loads the dictionary in `path` from the real filesystem.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<WordNet, LexiconError> {
        WordNet::from_filesystem(&Fs, path)
    }

    pub fn from_filesystem<F: Filesystem, P: AsRef<Path>>(
        fs: &F,
        path: P,
    ) -> Result<WordNet, LexiconError> {
        let path = path.as_ref();
        let mut tables: [PosTable; 4] = Default::default();

        for (pos, table) in Pos::ALL.iter().zip(tables.iter_mut()) {
            let file = path.join(pos.index_file());
            let text = read(fs, &file)?;
            table.senses = parse_index(&file, &text)?;

            let file = path.join(pos.exception_file());
            match fs.read_to_string(&file) {
                Ok(text) => table.exceptions = parse_exceptions(&text),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("No exception list at {}", file.display());
                }
                Err(source) => return Err(LexiconError::Io { path: file, source }),
            }
        }

        let mut lemmas = vec![];
        let mut seen = HashSet::new();

        for pos in Pos::SYNSET_ORDER.iter() {
            let file = path.join(pos.data_file());
            let text = read(fs, &file)?;
            for lemma in parse_data(&file, &text)? {
                if seen.insert(lemma.clone()) {
                    lemmas.push(lemma);
                }
            }
        }

        if lemmas.is_empty() {
            return Err(LexiconError::Empty(path.to_path_buf()));
        }

        debug!(
            "Loaded WordNet from {}: {} lemmas ({} noun, {} verb, {} adj, {} adv)",
            path.display(),
            lemmas.len(),
            tables[0].senses.len(),
            tables[1].senses.len(),
            tables[2].senses.len(),
            tables[3].senses.len(),
        );

        Ok(WordNet { tables, lemmas })
    }

    /// Base forms of `word` that have senses, across all parts of speech.
    pub fn lemmatize(&self, word: &str) -> Vec<SmolStr> {
        let mut out: Vec<SmolStr> = vec![];
        for (pos, table) in Pos::ALL.iter().zip(self.tables.iter()) {
            let forms = std::iter::once(SmolStr::new(word)).chain(table.base_forms(*pos, word));
            for form in forms {
                if table.has_senses(&form) && !out.contains(&form) {
                    out.push(form);
                }
            }
        }
        out
    }
}

impl Lexicon for WordNet {
    fn is_known(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        Pos::ALL
            .iter()
            .zip(self.tables.iter())
            .any(|(pos, table)| table.knows(*pos, word))
    }

    fn lemmas(&self) -> &[SmolStr] {
        &self.lemmas
    }
}

fn read<F: Filesystem>(fs: &F, file: &Path) -> Result<String, LexiconError> {
    fs.read_to_string(file).map_err(|source| LexiconError::Io {
        path: file.to_path_buf(),
        source,
    })
}

/// License and comment lines in the index and data files start with a space.
fn is_entry(line: &str) -> bool {
    !line.is_empty() && !line.starts_with(' ')
}

/// Drops an adjective position marker such as `(a)`, `(p)` or `(ip)`.
fn strip_marker(word: &str) -> &str {
    match word.find('(') {
        Some(i) if i > 0 && word.ends_with(')') => &word[..i],
        _ => word,
    }
}

/// Word forms of every synset, in file order. A data line is
/// `offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] ...`
/// with `w_cnt` in hexadecimal.
fn parse_data(path: &Path, text: &str) -> Result<Vec<SmolStr>, LexiconError> {
    let mut out = vec![];

    for (n, line) in text.lines().enumerate() {
        if !is_entry(line) {
            continue;
        }

        let error = || LexiconError::Parse {
            path: path.to_path_buf(),
            line: n + 1,
        };

        let fields = line.split_whitespace().collect::<Vec<_>>();
        let count = fields
            .get(3)
            .and_then(|c| usize::from_str_radix(c, 16).ok())
            .ok_or_else(error)?;

        for i in 0..count {
            let word = fields.get(4 + 2 * i).ok_or_else(error)?;
            out.push(SmolStr::new(strip_marker(word)));
        }
    }

    Ok(out)
}

fn parse_index(path: &Path, text: &str) -> Result<HashMap<SmolStr, u32>, LexiconError> {
    let mut out = HashMap::new();

    for (n, line) in text.lines().enumerate() {
        if !is_entry(line) {
            continue;
        }

        let mut fields = line.split_whitespace();
        let parsed = match (fields.next(), fields.next(), fields.next()) {
            (Some(lemma), Some(_pos), Some(count)) => {
                count.parse::<u32>().ok().map(|count| (lemma, count))
            }
            _ => None,
        };

        match parsed {
            Some((lemma, count)) => {
                out.insert(SmolStr::new(lemma), count);
            }
            None => {
                return Err(LexiconError::Parse {
                    path: path.to_path_buf(),
                    line: n + 1,
                })
            }
        }
    }

    Ok(out)
}

fn parse_exceptions(text: &str) -> HashMap<SmolStr, Vec<SmolStr>> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let inflected = fields.next()?;
            let bases = fields.map(SmolStr::new).collect::<Vec<_>>();
            if bases.is_empty() {
                None
            } else {
                Some((SmolStr::new(inflected), bases))
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::vfs::memory;

    const LICENSE: &str = "  1 This software and database is being provided to you, the LICENSEE, by  \n";

    /// A tiny WordNet dictionary served from memory.
    pub(crate) fn fixture() -> memory::Filesystem {
        let noun = format!(
            "{}{}",
            LICENSE,
            "apple n 2 3 @ ~ + 2 1 07739125 12633994\n\
             car n 5 3 @ ~ + 5 4 02961779 02963159 02963302 02963394 02963533\n\
             school n 7 3 @ ~ + 7 4 08276720 04146050 08277805 06165290 05939413 07973695 08184861\n\
             paris n 2 2 @ %p 2 1 08932568 08760731\n\
             man n 11 3 @ ~ + 11 8 10287213 09624168 10289039 00024720 03716327 10313872 08200217 10313507 04036303 06190049 10401005\n\
             ice_cream n 1 2 @ ~ 1 1 07614500\n\
             yesterday n 2 1 @ 2 1 15156424 15120823\n\
             paragraph n 1 1 @ 1 0 06392001\n"
        );
        let verb = "go v 30 3 @ ~ + 30 14 01835496 00010435\n\
                    jump v 11 3 @ ~ + 11 5 01963942 00104147\n\
                    run v 41 3 @ ~ + 41 25 01926311 02681795\n\
                    see v 24 3 @ ~ + 24 15 02150510 00591111\n\
                    school v 2 2 @ + 2 0 00829107 00605086\n\
                    check v 25 3 @ ~ + 25 8 00661824 00662589\n\
                    apply v 9 3 @ ~ + 9 6 01158872 00187526\n\
                    be v 13 5 @ ~ $ + ; 13 10 02604760 02616386\n";
        let adj = "ample a 3 1 & 3 0 00014490 01381605 00108224\n\
                   big a 13 2 & + 13 4 01382086 01510444\n\
                   correct a 7 2 ! & 7 4 00631391 00632438\n";
        let adv = "yesterday r 1 0 1 0 00109596\n\
                   very r 2 1 \\ 2 2 00031899 00102286\n";
        let data_adj = format!(
            "{}{}",
            LICENSE,
            "00014490 00 a 01 ample 0 002 & 00013887 a 0000 | more than enough in size or scope or capacity\n\
             01382086 00 a 01 big(a) 0 001 ! 01387319 a 0101 | above average in size or number or quantity\n\
             00631391 00 a 01 correct 0 001 ! 00632438 a 0101 | free from error\n"
        );
        let data_adv = "00031899 02 r 01 very 0 000 | used as an intensifier\n\
                        00109596 02 r 01 yesterday 0 000 | on the day preceding today\n";
        let data_noun = "06392001 10 n 01 paragraph 0 000 | one of several distinct subdivisions of a text\n\
                         02961779 06 n 01 car 0 000 | a motor vehicle with four wheels\n\
                         07739125 13 n 02 apple 0 Malus_pumila 0 000 | fruit with red or yellow or green skin\n\
                         08276720 14 n 01 school 0 000 | an educational institution\n\
                         08932568 15 n 01 Paris 0 000 | the capital and largest city of France\n\
                         10287213 18 n 01 man 0 000 | an adult person who is male\n\
                         07614500 13 n 01 ice_cream 0 000 | frozen dessert\n\
                         15156424 28 n 01 yesterday 0 000 | the day immediately before today\n";
        let data_verb = "01835496 38 v 01 go 0 000 | change location\n\
                         01963942 38 v 01 jump 0 000 | move forward by leaps and bounds\n\
                         01926311 38 v 01 run 0 000 | move fast by using one's feet\n\
                         02150510 39 v 01 see 0 000 | perceive by sight\n\
                         00829107 32 v 01 school 0 000 | educate in or as if in a school\n\
                         00661824 31 v 01 check 0 000 | examine so as to determine accuracy\n\
                         01158872 33 v 01 apply 0 000 | put into service\n\
                         02604760 42 v 01 be 0 000 | have the quality of being\n";
        let verb_exc = "went go\nseen see\nran run\nchecked check\nwas be\nwere be\n";
        let adj_exc = "bigger big\n";

        memory::Filesystem::new()
            .with_file("dict/index.noun", noun)
            .with_file("dict/index.verb", verb)
            .with_file("dict/index.adj", adj)
            .with_file("dict/index.adv", adv)
            .with_file("dict/data.adj", data_adj)
            .with_file("dict/data.adv", data_adv)
            .with_file("dict/data.noun", data_noun)
            .with_file("dict/data.verb", data_verb)
            .with_file("dict/verb.exc", verb_exc)
            .with_file("dict/adj.exc", adj_exc)
    }

    pub(crate) fn wordnet() -> WordNet {
        WordNet::from_filesystem(&fixture(), "dict").unwrap()
    }

    #[test]
    fn known_lemmas() {
        let wn = wordnet();
        assert!(wn.is_known("apple"));
        assert!(wn.is_known("ice_cream"));
        assert!(wn.is_known("yesterday"));
        assert!(!wn.is_known("zxqvbnm"));
        assert!(!wn.is_known(""));
    }

    #[test]
    fn inflections_via_rules() {
        let wn = wordnet();
        assert!(wn.is_known("apples"));
        assert!(wn.is_known("jumped"));
        assert!(wn.is_known("schools"));
        assert!(wn.is_known("men"));
        assert!(wn.is_known("checking"));
    }

    #[test]
    fn inflections_via_exceptions() {
        let wn = wordnet();
        assert!(wn.is_known("went"));
        assert!(wn.is_known("seen"));
        assert!(wn.is_known("bigger"));
        assert_eq!(wn.lemmatize("went"), vec![SmolStr::new("go")]);
    }

    // Lookup does not fold case; capitalized forms of lowercase lemmas are unknown.
    #[test]
    fn lookup_is_case_sensitive() {
        let wn = wordnet();
        assert!(wn.is_known("school"));
        assert!(!wn.is_known("School"));
        assert!(!wn.is_known("APPLE"));
    }

    #[test]
    fn lemma_candidates_follow_data_file_order() {
        let wn = wordnet();
        let lemmas: Vec<&str> = wn.lemmas().iter().map(|s| s.as_str()).collect();
        assert_eq!(&lemmas[..5], &["ample", "big", "correct", "very", "yesterday"]);
        assert_eq!(lemmas.iter().filter(|x| **x == "school").count(), 1);
        assert_eq!(lemmas.iter().filter(|x| **x == "yesterday").count(), 1);
        assert!(lemmas.contains(&"Malus_pumila"));
        assert_eq!(lemmas.len(), 20);
    }

    #[test]
    fn lemma_candidates_keep_case() {
        let wn = wordnet();
        assert!(wn.lemmas().iter().any(|l| l == "Paris"));
        assert!(!wn.lemmas().iter().any(|l| l == "paris"));
        assert!(!wn.is_known("Paris"));

        let suggs = wn.suggest("Pariss", 3, 0.6);
        assert_eq!(suggs[0].value(), "Paris");
        assert!(suggs[0].score() > 0.9);
    }

    #[test]
    fn missing_index_is_an_error() {
        let fs = memory::Filesystem::new().with_file("dict/index.noun", "apple n 1 0 1 0 1\n");
        match WordNet::from_filesystem(&fs, "dict") {
            Err(LexiconError::Io { path, .. }) => assert_eq!(path, Path::new("dict/index.verb")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn malformed_index_is_an_error() {
        let fs = fixture().with_file("dict/index.adv", "very r lots\n");
        match WordNet::from_filesystem(&fs, "dict") {
            Err(LexiconError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let fs = memory::Filesystem::new()
            .with_file("dict/index.noun", LICENSE)
            .with_file("dict/index.verb", "")
            .with_file("dict/index.adj", "")
            .with_file("dict/index.adv", "")
            .with_file("dict/data.adj", LICENSE)
            .with_file("dict/data.adv", "")
            .with_file("dict/data.noun", "")
            .with_file("dict/data.verb", "");
        assert!(matches!(
            WordNet::from_filesystem(&fs, "dict"),
            Err(LexiconError::Empty(_))
        ));
    }

    #[test]
    fn malformed_data_is_an_error() {
        let fs = fixture().with_file("dict/data.noun", "02961779 06 n zz car 0 000 | a car\n");
        match WordNet::from_filesystem(&fs, "dict") {
            Err(LexiconError::Parse { path, line }) => {
                assert_eq!(path, Path::new("dict/data.noun"));
                assert_eq!(line, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn suggestion_ties_follow_data_file_order() {
        // "ample" (data.adj) and "apple" (data.noun) score the same against "aple".
        let wn = wordnet();
        let suggs = wn.suggest("aple", 3, 0.6);
        let values: Vec<&str> = suggs.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec!["ample", "apple", "apply"]);
    }
}
