//! Snippet-to-candidate similarity scoring.
//!
//! Substring matches always score at least 0.5 and fuzzy matches are
//! capped at 0.49, so a genuine substring hit outranks approximate
//! similarity regardless of magnitude.

use std::sync::OnceLock;

use rapidfuzz::distance::indel;
use regex::Regex;

/// Upper bound for fuzzy (non-substring) scores.
const FUZZY_CAP: f64 = 0.49;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

/// Trim, collapse whitespace runs to single spaces, and lowercase.
pub(crate) fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Replace inline markup tags with spaces, then normalize.
pub(crate) fn normalize_stripped(text: &str) -> String {
    normalize(&tag_regex().replace_all(text, " "))
}

/// Symmetric character-level similarity ratio in `[0, 1]`.
pub(crate) fn similarity_ratio(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars())
}

/// Length in chars of the longest common contiguous substring.
fn longest_common_substring(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut best = 0;
    for ch in &a {
        let mut row = vec![0usize; b.len() + 1];
        for (j, other) in b.iter().enumerate() {
            if ch == other {
                row[j + 1] = prev[j] + 1;
                best = best.max(row[j + 1]);
            }
        }
        prev = row;
    }
    best
}

/// Score how well a candidate text matches a query snippet.
///
/// Returns a score in `[0, 1]`. The first applicable rule wins:
///
/// 1. Both strings are normalized twice: with inline markup stripped and
///    with it intact. Substring checks run against both forms, since
///    some matches only succeed one way.
/// 2. Query contained in candidate: `0.5 + coverage * 0.5`, rewarding
///    queries that cover more of a short candidate.
/// 3. Candidate contained in query: `0.5 + coverage * 0.4`.
/// 4. Fuzzy: a blend of edit-distance ratio and longest-common-substring
///    coverage, capped below the substring floor.
///
/// An empty candidate or query always scores 0.0.
pub fn score(candidate: &str, snippet: &str) -> f64 {
    let cand_raw = normalize(candidate);
    let snip_raw = normalize(snippet);
    let cand = normalize_stripped(candidate);
    let snip = normalize_stripped(snippet);

    if cand.is_empty() || snip.is_empty() {
        return 0.0;
    }

    // Substring match, stripped form first.
    for (block, query) in [(&cand, &snip), (&cand_raw, &snip_raw)] {
        let block_len = block.chars().count() as f64;
        let query_len = query.chars().count() as f64;
        if block.contains(query.as_str()) {
            return 0.5 + (query_len / block_len.max(1.0)) * 0.5;
        }
        if query.contains(block.as_str()) {
            return 0.5 + (block_len / query_len.max(1.0)) * 0.4;
        }
    }

    let ratio = similarity_ratio(&cand, &snip);
    let lcs_ratio =
        longest_common_substring(&cand, &snip) as f64 / (snip.chars().count() as f64).max(1.0);

    let raw = (ratio * 0.6 + lcs_ratio * 0.4).max(lcs_ratio * 0.8);
    raw.min(FUZZY_CAP)
}
