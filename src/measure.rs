use std::sync::Arc;

use compact_str::CompactString;

use crate::report::TimingSample;
use crate::timer;

/// A string representation that can stand in as a benchmark strategy.
///
/// The capability set is deliberately small: construct from a read-only text reference, and
/// participate in lexicographic ordering (via the `Ord` supertrait).  Appending happens through a
/// plain `Vec` with its default growth policy, since amortized growth cost is part of what is
/// being measured.
///
/// The two strategies under comparison are [`CompactString`] (inline-buffer storage for short
/// content, no heap allocation below the threshold) and [`Arc<str>`] (a separate heap buffer and
/// reference count for every value, regardless of length).  `String` is also admitted as a
/// familiar reference point for the criterion benches.
pub trait BenchString: Ord {
    /// Constructs a new string of this representation by copying the referenced text.
    fn from_text(text: &str) -> Self;
}

impl BenchString for CompactString {
    fn from_text(text: &str) -> Self {
        CompactString::new(text)
    }
}

impl BenchString for Arc<str> {
    fn from_text(text: &str) -> Self {
        Arc::from(text)
    }
}

impl BenchString for String {
    fn from_text(text: &str) -> Self {
        String::from(text)
    }
}

/// Runs the benchmark core for one string strategy and returns its [`TimingSample`].
///
/// Given the shuffled view over the corpus, this times two phases against a freshly constructed
/// `Vec<S>`:
///
/// 1. `push_back`: one `S::from_text` per reference, appended in order.  This isolates the
///    per-element construction and allocation cost of the strategy under append-only growth.
/// 2. `sort`: a full ascending comparison sort of the vector.
///
/// The vector is dropped on return; only the two durations and the supplied label survive.  The
/// strategy is a compile-time type parameter, so nothing inside the timed sections dispatches
/// dynamically.
pub fn measure_push_back_and_sort<S>(shuffled_refs: &[&str], description: &str) -> TimingSample
where
    S: BenchString,
{
    let mut strings: Vec<S> = Vec::new();

    let start = timer::now();
    for text in shuffled_refs {
        strings.push(S::from_text(text));
    }
    let finish = timer::now();
    let push_back_ms = timer::elapsed_ms(start, finish);

    let start = timer::now();
    strings.sort();
    let finish = timer::now();
    let sort_ms = timer::elapsed_ms(start, finish);

    TimingSample::new(description, push_back_ms, sort_ms)
}
