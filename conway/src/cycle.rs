// cycle.rs - Detects a field repeating one of its recent states

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::Field;

/// How many past generations are remembered by default.
pub const DEFAULT_HISTORY: usize = 10;

/// Remembers hashes of the last few fields it was shown.
///
/// Catches still lifes, dead grids and oscillators whose period fits in the
/// history. Hash collisions can report a false repeat; for a driver deciding
/// when to stop that is acceptable.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    history: VecDeque<u64>,
    capacity: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY)
    }
}

impl CycleDetector {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { history: VecDeque::with_capacity(capacity), capacity }
    }

    /// Returns true if `field` matches a remembered state, otherwise records it.
    pub fn observe(&mut self, field: &Field) -> bool {
        let hash = hash_field(field);
        if self.history.contains(&hash) {
            return true;
        }
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(hash);
        false
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

fn hash_field(field: &Field) -> u64 {
    let mut hasher = DefaultHasher::new();
    field.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Life;

    #[test_log::test]
    fn blinker_repeats_after_two_generations() {
        let mut life = Life::from_lines(["     ", "     ", " ooo ", "     ", "     "]).unwrap();
        let mut detector = CycleDetector::default();
        assert!(!detector.observe(life.field()));
        life.advance();
        assert!(!detector.observe(life.field()));
        life.advance();
        assert!(detector.observe(life.field()));
    }

    #[test_log::test]
    fn forgets_states_beyond_capacity() {
        let mut life = Life::from_lines(["     ", "     ", " ooo ", "     ", "     "]).unwrap();
        let mut detector = CycleDetector::new(1);
        for _ in 0..4 {
            assert!(!detector.observe(life.field()));
            life.advance();
        }
    }

    #[test_log::test]
    fn reset_clears_history() {
        let life = Life::from_lines(["oo", "oo"]).unwrap();
        let mut detector = CycleDetector::default();
        assert!(!detector.observe(life.field()));
        detector.reset();
        assert!(!detector.observe(life.field()));
        assert!(detector.observe(life.field()));
    }
}
