//! TF-IDF vectorization and the pairwise similarity matrix.
//!
//! Every unit from both versions is represented as a TF-IDF weighted vector
//! over a vocabulary of unigrams and bigrams built from the union of both
//! corpora, so term weights are comparable across versions. Similarity is
//! the cosine of two L2-normalised vectors, which for non-negative weights
//! lands in [0, 1].

use std::collections::HashMap;

/// Dense similarity matrix; rows are old units, columns are new units.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n_old: usize,
    n_new: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create a zero matrix of the given shape.
    #[must_use]
    pub fn zeros(n_old: usize, n_new: usize) -> Self {
        Self {
            n_old,
            n_new,
            data: vec![0.0; n_old * n_new],
        }
    }

    /// Build a matrix from row-major similarity values.
    ///
    /// # Panics
    /// Panics in debug builds if the rows are ragged.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n_old = rows.len();
        let n_new = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == n_new), "ragged rows");
        Self {
            n_old,
            n_new,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of old units (rows).
    #[must_use]
    pub fn n_old(&self) -> usize {
        self.n_old
    }

    /// Number of new units (columns).
    #[must_use]
    pub fn n_new(&self) -> usize {
        self.n_new
    }

    /// Similarity of old unit `i` and new unit `j`.
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n_new + j]
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n_new + j] = value;
    }

    /// True if either dimension is zero (no pair to score).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.n_old == 0 || self.n_new == 0
    }
}

/// Sparse TF-IDF vector: (term id, weight) sorted by term id, L2-normalised.
type SparseVector = Vec<(u32, f64)>;

/// Lowercase a text and split it into word tokens.
///
/// A token is a run of at least two alphanumeric characters, matching the
/// `\b\w\w+\b` convention of common vectorizers; single letters and
/// punctuation carry no lexical signal in this corpus.
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in lowered.chars() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if !current.is_empty() {
            if current.chars().count() >= 2 {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.chars().count() >= 2 {
        tokens.push(current);
    }

    tokens
}

/// Expand tokens into n-grams for the inclusive range `(min_n, max_n)`.
/// Multi-token grams are joined with single spaces.
fn ngrams(tokens: &[String], ngram_range: (usize, usize)) -> Vec<String> {
    let (min_n, max_n) = ngram_range;
    let mut terms = Vec::new();

    for n in min_n..=max_n {
        if n == 0 || n > tokens.len() {
            continue;
        }
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }

    terms
}

/// Build the pairwise cosine similarity matrix between two corpora of
/// normalized texts.
///
/// The vocabulary and document frequencies are fitted on the union of both
/// corpora; term weight is raw count times smooth IDF
/// (`ln((1 + n) / (1 + df)) + 1`), and each document vector is
/// L2-normalised before the dot products.
#[must_use]
pub fn similarity_matrix(
    texts_old: &[String],
    texts_new: &[String],
    ngram_range: (usize, usize),
) -> SimilarityMatrix {
    let mut matrix = SimilarityMatrix::zeros(texts_old.len(), texts_new.len());
    if matrix.is_degenerate() {
        return matrix;
    }

    // Term extraction per document, old corpus first.
    let docs: Vec<Vec<String>> = texts_old
        .iter()
        .chain(texts_new.iter())
        .map(|t| ngrams(&tokenize(t), ngram_range))
        .collect();

    // Shared vocabulary with document frequencies. Term ids are assigned in
    // first-seen order, which is deterministic for a given input order.
    let mut vocabulary: HashMap<String, u32> = HashMap::new();
    let mut document_frequency: Vec<u32> = Vec::new();
    let mut doc_term_counts: Vec<HashMap<u32, f64>> = Vec::with_capacity(docs.len());

    for terms in &docs {
        let mut counts: HashMap<u32, f64> = HashMap::new();
        for term in terms {
            let next_id = vocabulary.len() as u32;
            let id = *vocabulary.entry(term.clone()).or_insert(next_id);
            if id as usize == document_frequency.len() {
                document_frequency.push(0);
            }
            *counts.entry(id).or_insert(0.0) += 1.0;
        }
        for &id in counts.keys() {
            document_frequency[id as usize] += 1;
        }
        doc_term_counts.push(counts);
    }

    let n_docs = docs.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n_docs) / (1.0 + f64::from(df))).ln() + 1.0)
        .collect();

    let vectors: Vec<SparseVector> = doc_term_counts
        .into_iter()
        .map(|counts| to_unit_vector(counts, &idf))
        .collect();

    let (old_vectors, new_vectors) = vectors.split_at(texts_old.len());
    for (i, old_vec) in old_vectors.iter().enumerate() {
        for (j, new_vec) in new_vectors.iter().enumerate() {
            matrix.set(i, j, sparse_dot(old_vec, new_vec).clamp(0.0, 1.0));
        }
    }

    matrix
}

/// Weight raw counts by IDF and L2-normalise into a sorted sparse vector.
fn to_unit_vector(counts: HashMap<u32, f64>, idf: &[f64]) -> SparseVector {
    let mut vector: SparseVector = counts
        .into_iter()
        .map(|(id, count)| (id, count * idf[id as usize]))
        .collect();
    vector.sort_unstable_by_key(|&(id, _)| id);

    let norm = vector.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for entry in &mut vector {
            entry.1 /= norm;
        }
    }
    vector
}

/// Dot product of two id-sorted sparse vectors.
fn sparse_dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let mut dot = 0.0;
    let (mut ia, mut ib) = (0, 0);

    while ia < a.len() && ib < b.len() {
        match a[ia].0.cmp(&b[ib].0) {
            std::cmp::Ordering::Less => ia += 1,
            std::cmp::Ordering::Greater => ib += 1,
            std::cmp::Ordering::Equal => {
                dot += a[ia].1 * b[ib].1;
                ia += 1;
                ib += 1;
            }
        }
    }

    dot
}
