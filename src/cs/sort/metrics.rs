use std::fmt;
use std::time::Duration;

/// Execution statistics gathered by a single selection call.
///
/// The counters are purely observational: they never influence the result.
/// A `Metrics` value is owned by the caller, handed to the selector by
/// mutable reference and read back after the call returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Element comparisons, including the scan that locates the pivot.
    pub comparisons: u64,
    /// Two-element exchanges. Insertion sort shifts are not counted.
    pub swaps: u64,
    /// Buffers allocated on behalf of the call (the working copy).
    pub allocations: u64,
    /// Nesting level of the call currently executing.
    pub recursion_depth: u32,
    pub max_recursion_depth: u32,
    /// Wall-clock time of the top-level call.
    pub elapsed: Duration,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every counter so the value can be reused for another call.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn enter(&mut self) {
        self.recursion_depth += 1;
        if self.recursion_depth > self.max_recursion_depth {
            self.max_recursion_depth = self.recursion_depth;
        }
    }

    pub(crate) fn exit(&mut self) {
        self.recursion_depth -= 1;
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metrics{{comparisons={}, swaps={}, allocations={}, maxRecursionDepth={}, elapsedNanos={}}}",
            self.comparisons,
            self.swaps,
            self.allocations,
            self.max_recursion_depth,
            self.elapsed.as_nanos()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_exit_tracks_maximum() {
        let mut m = Metrics::new();
        m.enter();
        m.enter();
        m.exit();
        m.enter();
        m.exit();
        m.exit();
        assert_eq!(m.recursion_depth, 0);
        assert_eq!(m.max_recursion_depth, 2);
    }

    #[test]
    fn test_reset() {
        let mut m = Metrics {
            comparisons: 10,
            swaps: 3,
            allocations: 1,
            recursion_depth: 0,
            max_recursion_depth: 4,
            elapsed: Duration::from_nanos(99),
        };
        m.reset();
        assert_eq!(m, Metrics::default());
    }

    #[test]
    fn test_display() {
        let m = Metrics {
            comparisons: 12,
            swaps: 5,
            allocations: 1,
            recursion_depth: 0,
            max_recursion_depth: 2,
            elapsed: Duration::from_nanos(1500),
        };
        assert_eq!(
            m.to_string(),
            "Metrics{comparisons=12, swaps=5, allocations=1, maxRecursionDepth=2, elapsedNanos=1500}"
        );
    }
}
