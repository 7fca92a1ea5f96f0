//! Collection of the steps taken by the simplifier and the solver.
//!
//! Diagnostic verbosity is an injected parameter, not ambient state: callers that want a
//! narration pass a collector, and callers that don't pass `()`, which compiles down to nothing.

use std::fmt::Display;
use std::io::Write;

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}

/// A collector that renders each step to a writer as it is pushed, one step per line.
///
/// This is the diagnostic sink for callers that want the narration streamed (for example to
/// standard output) instead of gathered into a vector. Write errors are ignored; a diagnostic
/// sink must never abort the computation it narrates.
pub struct WriteCollector<W>(pub W);

impl<S: Display, W: Write> StepCollector<S> for WriteCollector<W> {
    fn push(&mut self, step: S) {
        let _ = writeln!(self.0, "{}", step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_collector_renders_steps() {
        let mut collector = WriteCollector(Vec::new());
        StepCollector::<&str>::push(&mut collector, "first");
        StepCollector::<&str>::push(&mut collector, "second");
        assert_eq!(String::from_utf8(collector.0).unwrap(), "first\nsecond\n");
    }
}
