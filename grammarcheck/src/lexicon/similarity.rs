//! Sequence similarity in the Ratcliff/Obershelp style.
//!
//! The ratio is `2 * M / T` where `T` is the combined length of both
//! strings and `M` is the number of characters in the matching blocks found
//! by repeatedly taking the longest common substring and recursing on the
//! pieces to its left and right.
use log::trace;

use super::Suggestion;

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as
/// `(start_a, start_b, len)`. Among equally long blocks the one starting
/// earliest in `a` wins, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut next = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            next[col] = if a[i] == b[j] { prev[col - 1] + 1 } else { 0 };
            let k = next[col];
            if k > best_len {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_len = k;
            }
        }
        std::mem::swap(&mut prev, &mut next);
    }

    (best_i, best_j, best_len)
}

/// Total length of all matching blocks between `a` and `b`.
pub fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        if alo >= ahi || blo >= bhi {
            continue;
        }

        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }

        total += k;
        queue.push((alo, i, blo, j));
        queue.push((i + k, ahi, j + k, bhi));
    }

    total
}

#[inline(always)]
fn ratio_of(matches: usize, len: usize) -> f32 {
    if len == 0 {
        1.0
    } else {
        2.0 * matches as f32 / len as f32
    }
}

/// Similarity of two strings in `0.0..=1.0`.
///
/// Not symmetric: blocks are searched earliest-in-`a` first, so swapping the
/// arguments can change the score. Suggestions pass the candidate as `a` and
/// the queried word as `b`.
pub fn ratio(a: &str, b: &str) -> f32 {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    ratio_of(matching_chars(&a, &b), a.len() + b.len())
}

/// Ranks `candidates` by similarity to `word` and keeps at most `n_best`
/// scoring at least `cutoff`, best first. Ties keep candidate order.
pub fn suggest<'a, I>(word: &str, candidates: I, n_best: usize, cutoff: f32) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a str>,
{
    if n_best == 0 {
        return vec![];
    }

    let query = word.chars().collect::<Vec<_>>();
    let mut scanned = 0usize;
    let mut out = vec![];

    for (rank, candidate) in candidates.into_iter().enumerate() {
        scanned += 1;
        let chars = candidate.chars().collect::<Vec<_>>();
        let total = query.len() + chars.len();

        // Upper bound: every character of the shorter string matches.
        if ratio_of(query.len().min(chars.len()), total) < cutoff {
            continue;
        }

        let score = ratio_of(matching_chars(&chars, &query), total);
        if score >= cutoff {
            out.push(Suggestion::new(candidate.into(), score, rank));
        }
    }

    out.sort();
    out.truncate(n_best);
    trace!(
        "suggest {:?}: scanned {} candidates, kept {}",
        word,
        scanned,
        out.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical() {
        assert_eq!(ratio("apple", "apple"), 1.0);
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn disjoint() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn known_ratios() {
        // "abcd" / "bcde": block "bcd" -> 2 * 3 / 8
        assert!((ratio("abcd", "bcde") - 0.75).abs() < 1e-6);
        // "aple" / "apple": blocks "ple", then "a" -> 2 * 4 / 9
        assert!((ratio("aple", "apple") - 8.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn matching_blocks_recurse_both_sides() {
        let a: Vec<char> = "xabcyde".chars().collect();
        let b: Vec<char> = "abczdey".chars().collect();
        // "abc" then "de" on the right
        assert_eq!(matching_chars(&a, &b), 5);
    }

    #[test]
    fn ratio_depends_on_argument_order() {
        assert!((ratio("ample", "lpape") - 0.6).abs() < 1e-6);
        assert!((ratio("lpape", "ample") - 0.4).abs() < 1e-6);
    }

    #[test]
    fn suggest_scores_candidate_against_word() {
        let suggs = suggest("lpape", ["ample"].iter().copied(), 3, 0.6);
        assert_eq!(suggs.len(), 1);
        assert_eq!(suggs[0].value(), "ample");

        assert!(suggest("pepal", ["apply"].iter().copied(), 3, 0.6).is_empty());
    }

    #[test]
    fn suggest_best_first() {
        let candidates = ["apple", "apply", "ample", "banana"];
        let suggs = suggest("appel", candidates.iter().copied(), 3, 0.6);
        let values: Vec<&str> = suggs.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec!["apple", "apply", "ample"]);
        assert!(suggs[0].score() >= suggs[1].score());
    }

    #[test]
    fn suggest_ties_keep_candidate_order() {
        let candidates = ["cart", "care", "card"];
        let suggs = suggest("carx", candidates.iter().copied(), 3, 0.6);
        let values: Vec<&str> = suggs.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec!["cart", "care", "card"]);
    }

    #[test]
    fn suggest_respects_cutoff_and_limit() {
        let candidates = ["apple", "apply", "ample", "maple"];
        assert!(suggest("zxqvbnm", candidates.iter().copied(), 3, 0.6).is_empty());
        assert_eq!(suggest("appl", candidates.iter().copied(), 2, 0.6).len(), 2);
        assert!(suggest("apple", candidates.iter().copied(), 0, 0.6).is_empty());
    }
}
