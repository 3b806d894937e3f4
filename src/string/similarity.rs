//! String similarity and distance measures

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Measures accepted by [`similarity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityAlgorithm {
    /// `1 - cosine` of the word-count vectors
    CosineDistance,
    /// Positions that differ; both strings must have the same length
    HammingDistance,
    /// `1 - JaccardSimilarity`
    JaccardDistance,
    /// Shared characters over all characters, as sets
    JaccardSimilarity,
    /// Jaro–Winkler similarity in `[0, 1]`
    JaroWinkler,
    /// Single-character edits
    LevenshteinDistance,
    /// Length of the longest common subsequence
    LongestCommonSubsequence,
    /// Characters outside the longest common subsequence, on both sides
    LongestCommonSubsequenceDistance,
}

/// Scores `left` against `right` with the chosen measure.
///
/// Integer distances are returned as whole `f64` values. Only
/// `HammingDistance` can fail, on strings of different lengths.
pub fn similarity(left: &str, right: &str, algorithm: SimilarityAlgorithm) -> Result<f64> {
    let score = match algorithm {
        SimilarityAlgorithm::CosineDistance => cosine_distance(left, right),
        SimilarityAlgorithm::HammingDistance => hamming(left, right)? as f64,
        SimilarityAlgorithm::JaccardDistance => jaccard_distance(left, right),
        SimilarityAlgorithm::JaccardSimilarity => jaccard_similarity(left, right),
        SimilarityAlgorithm::JaroWinkler => jaro_winkler(left, right),
        SimilarityAlgorithm::LevenshteinDistance => levenshtein(left, right) as f64,
        SimilarityAlgorithm::LongestCommonSubsequence => {
            longest_common_subsequence(left, right) as f64
        }
        SimilarityAlgorithm::LongestCommonSubsequenceDistance => {
            longest_common_subsequence_distance(left, right) as f64
        }
    };
    Ok(score)
}

pub fn levenshtein(left: &str, right: &str) -> usize {
    strsim::levenshtein(left, right)
}

pub fn hamming(left: &str, right: &str) -> Result<usize> {
    Ok(strsim::hamming(left, right)?)
}

pub fn jaro_winkler(left: &str, right: &str) -> f64 {
    strsim::jaro_winkler(left, right)
}

/// Two empty strings are identical (`1.0`); one empty string shares nothing.
pub fn jaccard_similarity(left: &str, right: &str) -> f64 {
    let a: HashSet<char> = left.chars().collect();
    let b: HashSet<char> = right.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let shared = a.intersection(&b).count();
    let total = a.union(&b).count();
    shared as f64 / total as f64
}

pub fn jaccard_distance(left: &str, right: &str) -> f64 {
    1.0 - jaccard_similarity(left, right)
}

/// Words are runs of alphanumerics and `_`. Text without words is at
/// distance `1.0` from everything.
pub fn cosine_distance(left: &str, right: &str) -> f64 {
    let a = word_counts(left);
    let b = word_counts(right);

    let dot: f64 = a
        .iter()
        .filter_map(|(word, &n)| b.get(word).map(|&m| (n * m) as f64))
        .sum();
    let denominator = norm(&a) * norm(&b);
    if denominator == 0.0 {
        return 1.0;
    }
    1.0 - dot / denominator
}

fn norm(counts: &HashMap<&str, usize>) -> f64 {
    counts.values().map(|&n| (n * n) as f64).sum::<f64>().sqrt()
}

fn word_counts(text: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in text
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
    {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Counted in characters.
pub fn longest_common_subsequence(left: &str, right: &str) -> usize {
    let a: Vec<char> = left.chars().collect();
    let b: Vec<char> = right.chars().collect();

    // Single rolling row of the classic dynamic-programming table.
    let mut row = vec![0usize; b.len() + 1];
    for ca in &a {
        let mut diagonal = 0;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

pub fn longest_common_subsequence_distance(left: &str, right: &str) -> usize {
    let lcs = longest_common_subsequence(left, right);
    left.chars().count() + right.chars().count() - 2 * lcs
}
