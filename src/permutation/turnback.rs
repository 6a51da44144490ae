use super::Poll;
use crate::Entropy;
use crate::Player;
use crate::Roster;

/// Uniform without immediate repeats, plus a single redraw whenever the
/// draw would hand the turn straight back to the player from two turns ago.
///
/// The redraw is one-shot: whatever it yields is accepted, so A-B-A
/// patterns become rarer but remain possible.
#[derive(Debug, Clone)]
pub struct AvoidTurnback<E> {
    roster: Roster,
    entropy: E,
    last: Option<Player>,
    second_last: Option<Player>,
}

impl<E: Entropy> AvoidTurnback<E> {
    pub fn new(roster: Roster, entropy: E) -> Self {
        Self {
            roster,
            entropy,
            last: None,
            second_last: None,
        }
    }
    pub fn last(&self) -> Option<Player> {
        self.last
    }
    pub fn second_last(&self) -> Option<Player> {
        self.second_last
    }
    fn draw(&mut self) -> Player {
        let ref available = self.roster.except(self.last);
        self.entropy
            .choose(available)
            .expect("roster holds at least 2 players")
    }
}

impl<E: Entropy> Poll for AvoidTurnback<E> {
    fn poll(&mut self) -> Player {
        let chosen = match self.draw() {
            turnback if Some(turnback) == self.second_last => self.draw(),
            chosen => chosen,
        };
        self.second_last = self.last;
        self.last = Some(chosen);
        chosen
    }
}
