use super::Entropy;
use std::collections::VecDeque;

/// Replays a fixed script of draws, one per call to [`Entropy::below`].
///
/// Each scripted value is reduced modulo the requested bound, so a script
/// written for a larger bound stays valid. Panics once the script runs dry.
#[derive(Debug, Clone, Default)]
pub struct Scripted(VecDeque<usize>);

impl Scripted {
    /// Draws left in the script.
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<usize>> for Scripted {
    fn from(draws: Vec<usize>) -> Self {
        Self(draws.into())
    }
}

impl<const N: usize> From<[usize; N]> for Scripted {
    fn from(draws: [usize; N]) -> Self {
        Self(draws.into_iter().collect())
    }
}

impl Entropy for Scripted {
    fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "empty range");
        self.0.pop_front().expect("script exhausted") % bound
    }
}
