//! One-shot scroll reveal bookkeeping.

use std::collections::BTreeSet;

pub const REVEAL_SELECTOR: &str = ".fade-in-on-scroll";
pub const REVEAL_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Tracks which tagged elements are still waiting to be revealed.
/// Elements are identified by their index in document order.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    pending: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            pending: (0..count).collect(),
        }
    }

    /// Returns `true` exactly once per element: the first time it is seen
    /// intersecting. The caller then adds the class and stops observing it.
    pub fn on_visibility(&mut self, index: usize, intersecting: bool) -> bool {
        intersecting && self.pending.remove(&index)
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_each_element_once() {
        let mut tracker = RevealTracker::new(3);

        assert!(!tracker.on_visibility(1, false));
        assert!(tracker.on_visibility(1, true));
        assert!(!tracker.on_visibility(1, true));
        assert!(!tracker.is_done());

        assert!(tracker.on_visibility(0, true));
        assert!(tracker.on_visibility(2, true));
        assert!(tracker.is_done());
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.on_visibility(7, true));
        assert!(!tracker.is_done());
        assert!(tracker.on_visibility(0, true));
        assert!(tracker.is_done());
    }
}
