//! High-resolution timer wrappers.
//!
//! The counter is modeled after the classic query-counter/query-frequency pair: [`now`] returns an
//! opaque tick count, [`frequency`] the tick rate, and [`elapsed_ms`] converts a pair of readings
//! into fractional milliseconds.  Ticks are only meaningful for computing differences against
//! other readings from the same process run; they are not absolute timestamps.

use std::sync::OnceLock;
use std::time::Instant;

// Tick rate of the counter.  `Instant` already normalizes the platform counter to nanoseconds, so
// the frequency is a constant rather than a platform query.
const TICKS_PER_SEC: u64 = 1_000_000_000;

// Process-local epoch that all readings are measured against.  Initialized on the first call to
// `now`, so tick values stay small enough to difference exactly in `f64`.
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Reads the monotonic high-resolution counter.
///
/// The returned value is monotonically non-decreasing within a single process run.  If the
/// platform has no monotonic clock, the underlying `Instant::now` aborts the process; there is no
/// fallback timer source, as fabricated timings would be worse than no timings.
pub fn now() -> u64 {
    let epoch = EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_nanos() as u64
}

/// The number of counter ticks per second.
pub fn frequency() -> u64 {
    TICKS_PER_SEC
}

/// Converts a pair of counter readings into a duration in fractional milliseconds.
///
/// The subtraction is performed in floating point, so a `finish` earlier than `start` yields a
/// negative duration rather than a panic.  That ordering is a caller error, not a timer concern.
pub fn elapsed_ms(start: u64, finish: u64) -> f64 {
    (finish as f64 - start as f64) * 1000.0 / frequency() as f64
}
