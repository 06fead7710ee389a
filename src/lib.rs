//! # sso-bench
//!
//! This crate measures the wall-clock cost of two operations -- bulk `push_back` insertion and
//! comparison-based sorting -- across two competing string representations: an inline-buffer
//! ("small string optimization") type that stores short content directly in the string object, and
//! a heap-backed reference-counted type that always allocates a separate buffer.  For the short
//! strings used here, the delta between the two is almost entirely attributable to the inline
//! storage strategy.
//!
//! ## high-level usage
//!
//! `sso-bench` has four main components:
//! - [`timer`], thin wrappers over the platform's monotonic high-resolution counter
//! - [`corpus`], which generates the string data and a deterministic shuffled view over it
//! - [`measure_push_back_and_sort`], the generic benchmark core, parameterized over any type
//!   implementing [`BenchString`]
//! - [`TimingSample`] and [`write_report`], the per-run result record and its printer
//!
//! These components are wired together once, in sequence, by the `sso-bench` binary: it builds the
//! corpus, derives a borrowed view over it, and runs the benchmark core three times per strategy,
//! printing each sample as it is produced.  No aggregation is performed across runs; run-to-run
//! variance is left for the reader of the output to judge.
//!
//! The benchmark core is generic rather than dynamic: the strategy under test is chosen by a type
//! parameter, so each instantiation compiles down to a plain loop over the concrete string type
//! with no dispatch overhead inside the timed sections.
#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]

pub mod corpus;
mod measure;
mod report;
pub mod timer;

pub use crate::measure::{measure_push_back_and_sort, BenchString};
pub use crate::report::{print_report, write_report, TimingSample};
