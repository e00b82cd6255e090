//! Suggestion for an unknown word.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;
use std::cmp::Ordering::Equal;

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A candidate replacement for an unknown word
pub struct Suggestion {
    /// the suggested lemma
    pub value: SmolStr,
    /// similarity ratio in `0.0..=1.0`, higher is closer
    pub score: f32,
    /// position of the lemma in the candidate ordering, used to break ties
    #[serde(skip)]
    pub rank: usize,
}

impl Suggestion {
    pub fn new(value: SmolStr, score: f32, rank: usize) -> Suggestion {
        Suggestion { value, score, rank }
    }

    /// gets the suggested lemma
    pub fn value(&self) -> &str {
        &self.value
    }

    /// gets the similarity ratio of the suggestion
    pub fn score(&self) -> f32 {
        self.score
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Best first: higher score, then earlier candidate.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        let x = other.score.partial_cmp(&self.score).unwrap_or(Equal);

        if let Equal = x {
            return self
                .rank
                .cmp(&other.rank)
                .then_with(|| self.value.cmp(&other.value));
        }

        x
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Equal
    }
}

impl Eq for Suggestion {}
