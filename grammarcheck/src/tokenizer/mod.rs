//! Splitting text into word and punctuation tokens.
//!
//! Boundaries follow Unicode word segmentation (UAX #29), so contractions
//! such as "don't" stay whole. Whitespace segments are dropped.
use serde::Serialize;
use smol_str::SmolStr;
use unic_segment::WordBoundIndices;
use unic_ucd_category::GeneralCategory;

pub mod case_handling;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Contains at least one letter
    Word,
    /// Digits without letters
    Number,
    /// Punctuation, symbols and anything else
    Punctuation,
}

impl TokenKind {
    fn of(segment: &str) -> TokenKind {
        let mut has_number = false;
        for ch in segment.chars() {
            let cat = GeneralCategory::of(ch);
            if cat.is_letter() {
                return TokenKind::Word;
            }
            if cat.is_number() {
                has_number = true;
            }
        }

        if has_number {
            TokenKind::Number
        } else {
            TokenKind::Punctuation
        }
    }
}

/// A single token produced from the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// position within the token sequence
    pub index: usize,
    /// the literal text as it appears in the input
    pub text: SmolStr,
    pub kind: TokenKind,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// True when every character is a letter.
    pub fn is_alphabetic(&self) -> bool {
        !self.text.is_empty()
            && self
                .text
                .chars()
                .all(|c| GeneralCategory::of(c).is_letter())
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }
}

pub trait Tokenize {
    fn tokens(&self) -> Vec<Token>;
}

impl Tokenize for str {
    fn tokens(&self) -> Vec<Token> {
        tokenize(self)
    }
}

/// Splits `text` into an ordered token sequence. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    WordBoundIndices::new(text)
        .map(|(_, segment)| segment)
        .filter(|segment| !segment.chars().all(char::is_whitespace))
        .enumerate()
        .map(|(index, segment)| Token {
            index,
            text: SmolStr::new(segment),
            kind: TokenKind::of(segment),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text.to_string()).collect()
    }

    #[test]
    fn basic() {
        assert_eq!(
            texts("He go to school yesterday."),
            vec!["He", "go", "to", "school", "yesterday", "."]
        );
    }

    #[test]
    fn contractions_stay_whole() {
        assert_eq!(texts("I don't know"), vec!["I", "don't", "know"]);
    }

    #[test]
    fn commas_are_tokens() {
        assert_eq!(texts("I ran, and jumped"), vec!["I", "ran", ",", "and", "jumped"]);
    }

    #[test]
    fn empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn indices_are_sequential() {
        let tokens = "this is an ordinary sentence! \"This was quoted,\"".tokens();
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.index, i);
        }
    }

    #[test]
    fn kinds() {
        let tokens = tokenize("It costs 42 dollars!");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Number,
                TokenKind::Word,
                TokenKind::Punctuation
            ]
        );
    }

    #[test]
    fn alphabetic() {
        let tokens = tokenize("apple don't x2");
        assert!(tokens[0].is_alphabetic());
        assert!(!tokens[1].is_alphabetic());
        assert!(tokens[1].is_word());
        assert!(!tokens[2].is_alphabetic());
    }

    #[test]
    fn deterministic() {
        let msg = "an emoji: (😄), and\t a tab was there and a new line.\n";
        assert_eq!(tokenize(msg), tokenize(msg));
    }
}
