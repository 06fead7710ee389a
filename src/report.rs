use std::io::{self, Write};

/// The result of a single benchmark run: `push_back` time and sorting time, in milliseconds,
/// plus a label identifying which strategy and iteration produced it.
///
/// Samples are immutable once constructed; the printer reads them without consuming them.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingSample {
    description: String,
    push_back_ms: f64,
    sort_ms: f64,
}

impl TimingSample {
    /// Creates a sample from the two measured durations and a descriptive label.
    pub fn new(description: &str, push_back_ms: f64, sort_ms: f64) -> Self {
        Self {
            description: description.to_string(),
            push_back_ms,
            sort_ms,
        }
    }

    /// The label identifying which strategy and iteration produced this sample.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Time spent appending every corpus value into the container, in milliseconds.
    pub fn push_back_ms(&self) -> f64 {
        self.push_back_ms
    }

    /// Time spent sorting the filled container, in milliseconds.
    pub fn sort_ms(&self) -> f64 {
        self.sort_ms
    }
}

/// Writes a sample's report to the given writer.
///
/// The format is a label line, the two metric lines, and a trailing blank line:
///
/// ```text
/// Inline1:
///   push_back : 11.4503 ms
///   sort      : 57.1182 ms
///
/// ```
pub fn write_report<W: Write>(writer: &mut W, sample: &TimingSample) -> io::Result<()> {
    writeln!(writer, "{}:", sample.description())?;
    writeln!(writer, "  push_back : {} ms", sample.push_back_ms())?;
    writeln!(writer, "  sort      : {} ms", sample.sort_ms())?;
    writeln!(writer)
}

/// Writes a sample's report to standard output.
pub fn print_report(sample: &TimingSample) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, sample)
}
