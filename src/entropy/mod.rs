//! Injected randomness.
//!
//! Permutators, token minting, and shuffling never reach for a global RNG.
//! They are handed an [`Entropy`] at construction, so production code runs on
//! [`Secure`] while tests can replay a fixed script of draws with [`Scripted`].
mod scripted;
mod secure;

pub use scripted::*;
pub use secure::*;

/// A source of uniform integer draws.
pub trait Entropy {
    /// Uniform draw from `0..bound`. `bound` must be positive.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform choice among `items`, or `None` when empty.
    /// Consumes exactly one draw.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        match items.len() {
            0 => None,
            n => Some(items[self.below(n)]),
        }
    }

    /// Fisher-Yates shuffle in place, one draw per swap.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl<E: Entropy> Entropy for &mut E {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        (**self).choose(items)
    }
    fn shuffle<T>(&mut self, items: &mut [T]) {
        (**self).shuffle(items)
    }
}
