//! Covers the pieces that produce and render a measurement: the counter arithmetic, the ordering
//! behavior of both string strategies under the benchmark core, and the exact bytes the report
//! printer emits.

use std::sync::Arc;

use compact_str::CompactString;

use sso_bench::{measure_push_back_and_sort, timer, write_report, BenchString, TimingSample};

#[test]
fn elapsed_ms_converts_one_second_of_ticks() {
    let one_second = timer::elapsed_ms(0, timer::frequency());

    assert!((one_second - 1000.0).abs() < 1e-9);
}

#[test]
fn elapsed_ms_is_non_negative_and_proportional() {
    let delta = timer::frequency() / 4;

    let once = timer::elapsed_ms(0, delta);
    let twice = timer::elapsed_ms(0, 2 * delta);

    assert!(once >= 0.0);
    assert!((twice - 2.0 * once).abs() < 1e-9);

    // Shifting both readings by the same amount must not change the result.
    assert!((timer::elapsed_ms(delta, 3 * delta) - twice).abs() < 1e-9);
}

#[test]
fn counter_is_monotonic() {
    let first = timer::now();
    let second = timer::now();

    assert!(second >= first);
    assert!(timer::elapsed_ms(first, second) >= 0.0);
}

fn push_and_sort<S: BenchString>(texts: &[&str]) -> Vec<S> {
    let mut strings: Vec<S> = Vec::new();
    for text in texts {
        strings.push(S::from_text(text));
    }
    strings.sort();
    strings
}

#[test]
fn strategies_sort_lexicographically() {
    let input = ["#2", "#0", "#1"];
    let expected = ["#0", "#1", "#2"];

    let inline = push_and_sort::<CompactString>(&input);
    assert!(inline.iter().map(CompactString::as_str).eq(expected.iter().copied()));

    let heap = push_and_sort::<Arc<str>>(&input);
    assert!(heap.iter().map(|s| &**s).eq(expected.iter().copied()));
}

#[test]
fn sort_preserves_every_element() {
    // Duplicates included, to catch a sort that drops or clones elements.
    let input = ["#10", "#2", "#2", "#0", "#10"];

    let sorted = push_and_sort::<CompactString>(&input);

    assert_eq!(input.len(), sorted.len());
    let mut expected: Vec<&str> = input.to_vec();
    expected.sort_unstable();
    assert!(sorted.iter().map(CompactString::as_str).eq(expected.iter().copied()));
}

#[test]
fn runner_returns_the_supplied_label() {
    let input = ["#2", "#0", "#1"];

    let inline = measure_push_back_and_sort::<CompactString>(&input, "Inline1");
    assert_eq!("Inline1", inline.description());
    assert!(inline.push_back_ms() >= 0.0);
    assert!(inline.sort_ms() >= 0.0);

    let heap = measure_push_back_and_sort::<Arc<str>>(&input, "Heap1");
    assert_eq!("Heap1", heap.description());
    assert!(heap.push_back_ms() >= 0.0);
    assert!(heap.sort_ms() >= 0.0);
}

#[test]
fn report_renders_exactly() {
    let sample = TimingSample::new("X", 1.5, 2.25);

    let mut rendered = Vec::new();
    write_report(&mut rendered, &sample).expect("writing to a Vec cannot fail");

    let expected = "X:\n  push_back : 1.5 ms\n  sort      : 2.25 ms\n\n";
    assert_eq!(expected.as_bytes(), rendered.as_slice());
}
