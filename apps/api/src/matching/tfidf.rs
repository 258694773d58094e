//! TF-IDF vector space fitted jointly over a small corpus.
//!
//! Tokens are lowercase runs of two or more word characters with English stop
//! words removed. Weights are raw term counts times the smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, and every document vector is L2-normalized.

use std::collections::{BTreeMap, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::stop_words::is_stop_word;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Sparse document vector: term index -> weight.
pub type SparseVector = HashMap<usize, f64>;

pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

#[derive(Debug)]
pub struct TfIdfSpace {
    vocabulary: BTreeMap<String, usize>,
    vectors: Vec<SparseVector>,
}

impl TfIdfSpace {
    /// Fits the vocabulary and idf weights on `documents` and vectorizes each one.
    /// A corpus with no usable terms yields an empty vocabulary and zero vectors.
    pub fn fit_transform(documents: &[&str]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        let mut vocabulary = BTreeMap::new();
        for term in tokenized.iter().flatten() {
            vocabulary.entry(term.clone()).or_insert(0);
        }
        // Feature indices follow sorted term order.
        for (idx, slot) in vocabulary.values_mut().enumerate() {
            *slot = idx;
        }

        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for term in unique {
                df[vocabulary[term]] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: SparseVector = HashMap::new();
                for term in tokens {
                    *counts.entry(vocabulary[term]).or_insert(0.0) += 1.0;
                }
                for (idx, weight) in counts.iter_mut() {
                    *weight *= idf[*idx];
                }
                l2_normalize(&mut counts);
                counts
            })
            .collect();

        Self {
            vocabulary,
            vectors,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn vector(&self, doc: usize) -> &SparseVector {
        &self.vectors[doc]
    }
}

fn l2_normalize(v: &mut SparseVector) {
    let norm = v.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in v.values_mut() {
            *w /= norm;
        }
    }
}

/// Cosine similarity of two sparse vectors. Zero vectors score `0.0`.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(i, w)| large.get(i).map(|x| w * x))
        .sum();
    let na = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let nb = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    (dot / (na * nb)).clamp(0.0, 1.0)
}
