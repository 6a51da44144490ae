use super::Poll;
use crate::Entropy;
use crate::Generation;
use crate::Player;
use crate::Roster;
use std::collections::HashMap;

/// Weighted by freshness: each player's weight is how many generations
/// have passed since they were last chosen.
///
/// A player never chosen weighs the full `generation`; the player just
/// chosen weighs 1. Immediate repeats stay possible, but a starved player's
/// weight grows every turn until it is picked.
#[derive(Debug, Clone)]
pub struct Generational<E> {
    roster: Roster,
    entropy: E,
    generation: Generation,
    last_chosen: HashMap<Player, Generation>,
    most_recent: Option<Player>,
}

impl<E: Entropy> Generational<E> {
    pub fn new(roster: Roster, entropy: E) -> Self {
        Self {
            roster,
            entropy,
            generation: 1,
            last_chosen: HashMap::new(),
            most_recent: None,
        }
    }
    pub fn generation(&self) -> Generation {
        self.generation
    }
    pub fn most_recent(&self) -> Option<Player> {
        self.most_recent
    }
    /// Freshness weight of every player, in roster order. Always ≥ 1.
    pub fn weights(&self) -> Vec<(Player, Generation)> {
        self.roster
            .iter()
            .map(|p| (*p, self.generation - self.stamp(p)))
            .collect()
    }
    fn stamp(&self, player: &Player) -> Generation {
        self.last_chosen.get(player).copied().unwrap_or(0)
    }
    /// Running sums over the weights; the last entry is the total.
    fn cumulative(&self) -> Vec<(Player, Generation)> {
        self.weights()
            .into_iter()
            .scan(0, |sum, (p, w)| {
                *sum += w;
                Some((p, *sum))
            })
            .collect()
    }
}

impl<E: Entropy> Poll for Generational<E> {
    fn poll(&mut self) -> Player {
        let ref table = self.cumulative();
        let total = table.last().map(|(_, sum)| *sum).expect("non-empty roster");
        let ticket = self.entropy.below(total as usize) as Generation;
        let chosen = table
            .iter()
            .find(|(_, sum)| *sum > ticket)
            .map(|(p, _)| *p)
            .expect("ticket below the weight sum");
        // stamp before advancing so the chosen player re-enters at weight 1
        self.last_chosen.insert(chosen, self.generation);
        self.generation += 1;
        self.most_recent = Some(chosen);
        chosen
    }
}
