//! Benchmark corpus generation.
//!
//! The corpus is a fixed set of short strings -- a marker character followed by the decimal text
//! of the generation index -- shuffled into a deterministic pseudorandom order.  The shuffle seed
//! is a fixed constant so that every run, and every strategy within a run, inserts and sorts the
//! exact same sequence of values; without that the timings would not be comparable.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Number of strings in the corpus.
pub const CORPUS_SIZE: usize = 200_000;

/// Seed for the shuffle.  Fixed so that shuffled orderings are reproducible across runs.
pub const SHUFFLE_SEED: u64 = 64;

// Prefix for every generated value.  Keeps even the longest values ("#199999") well under the
// inline-storage threshold of the small-string strategy.
const MARKER: char = '#';

/// Builds the corpus of [`CORPUS_SIZE`] short strings, shuffled into the fixed pseudorandom order.
///
/// Value `i` is generated as the marker character followed by the decimal text of `i`, then the
/// whole sequence is permuted with a Fisher-Yates shuffle driven by a generator seeded with
/// [`SHUFFLE_SEED`].  Two invocations produce identical vectors.
pub fn build_shuffled_corpus() -> Vec<String> {
    let mut values: Vec<String> = (0..CORPUS_SIZE).map(|i| format!("{}{}", MARKER, i)).collect();

    let mut prng = StdRng::seed_from_u64(SHUFFLE_SEED);
    values.shuffle(&mut prng);

    values
}

/// Builds the borrowed view over a corpus: one `&str` per value, in corpus order.
///
/// This view is what gets handed to the benchmark core.  Only references cross the boundary --
/// the underlying text is never copied ahead of time -- so each string strategy pays its own real
/// construction cost inside the timed section.  The borrow ties the view's lifetime to the corpus,
/// so the view cannot outlive the data it points into.
pub fn text_refs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
