use super::Poll;
use crate::Entropy;
use crate::Player;
use crate::Roster;

/// Uniform over the roster, never repeating the previous pick.
#[derive(Debug, Clone)]
pub struct Uniform<E> {
    roster: Roster,
    entropy: E,
    last: Option<Player>,
}

impl<E: Entropy> Uniform<E> {
    pub fn new(roster: Roster, entropy: E) -> Self {
        Self {
            roster,
            entropy,
            last: None,
        }
    }
    pub fn last(&self) -> Option<Player> {
        self.last
    }
}

impl<E: Entropy> Poll for Uniform<E> {
    fn poll(&mut self) -> Player {
        let ref available = self.roster.except(self.last);
        let chosen = self
            .entropy
            .choose(available)
            .expect("roster holds at least 2 players");
        self.last = Some(chosen);
        chosen
    }
}
