// ============================================================
// TF-IDF Vectorizer
// ============================================================
// Turns strings into sparse, L2-normalised TF-IDF vectors.
//
// Fitting:
//   1. lowercase each training string, tokenize on \b\w+\b
//   2. vocabulary = every distinct token, indexed in sorted order
//   3. idf(t) = ln((1 + n) / (1 + df(t))) + 1
//        n     = number of training strings
//        df(t) = number of training strings containing t
//
// Transforming:
//   count(t) * idf(t) for every known token, unknown tokens are
//   ignored, then the row is scaled to unit length. A string with
//   no known tokens maps to the zero vector.
//
// The fitted state is plain data and round-trips through serde.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("token pattern is valid"));

/// Lower-cased word tokens of `text`, in order of appearance
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ─── SparseVector ─────────────────────────────────────────────────────────────
/// (feature index, weight) pairs sorted by index, zero weights omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }
}

// ─── TfidfVectorizer ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf:        Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and IDF weights from `documents`.
    pub fn fit<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let token_sets: Vec<BTreeSet<String>> = documents
            .into_iter()
            .map(|doc| tokenize(doc).into_iter().collect())
            .collect();

        let vocabulary: BTreeMap<String, usize> = token_sets
            .iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(index, token)| (token.clone(), index))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for token in token_sets.iter().flatten() {
            if let Some(&index) = vocabulary.get(token) {
                df[index] += 1;
            }
        }

        let n   = token_sets.len() as f64;
        let idf = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        tracing::debug!("Vectorizer fitted: {} documents, {} terms", token_sets.len(), vocabulary.len());
        Self { vocabulary, idf }
    }

    /// Vectorize one string with the fitted vocabulary. Never refits.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }

        SparseVector { entries }
    }

    pub fn transform_all(&self, texts: &[&str]) -> Vec<SparseVector> {
        texts.iter().map(|t| self.transform(t)).collect()
    }

    /// Number of distinct terms learned during fitting
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_keeps_single_chars() {
        assert_eq!(tokenize("Senior C Developer, R&D"), vec!["senior", "c", "developer", "r", "d"]);
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let v = TfidfVectorizer::fit(["zeta alpha", "mid"]);
        let column = |term: &str| v.transform(term).entries[0].0;
        assert_eq!(column("alpha"), 0);
        assert_eq!(column("mid"),   1);
        assert_eq!(column("zeta"),  2);
        assert_eq!(v.vocabulary_size(), 3);
    }

    #[test]
    fn test_smoothed_idf() {
        let v = TfidfVectorizer::fit(["a b", "a"]);
        // a appears in both documents, b in one
        assert!((v.idf()[0] - 1.0).abs() < 1e-12);
        assert!((v.idf()[1] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_unit_length() {
        let v   = TfidfVectorizer::fit(["software engineer", "staff engineer", "acme corp"]);
        let vec = v.transform("Software Engineer at Acme");
        assert!((vec.norm() - 1.0).abs() < 1e-9);
        assert_eq!(vec.entries.len(), 3);
    }

    #[test]
    fn test_unknown_text_is_zero_vector() {
        let v = TfidfVectorizer::fit(["software engineer"]);
        let vec = v.transform("quarterly revenue");
        assert!(vec.is_zero());
        assert!(vec.entries.is_empty());
    }
}
