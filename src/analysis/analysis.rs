use super::Adjacency;
use crate::Error;
use crate::Player;
use crate::Result;
use crate::Roster;
use crate::Sequence;
use crate::TOP_WAITS;
use crate::Wait;
use std::cmp::Reverse;

/// Wait-time and adjacency statistics for every player on a roster.
///
/// For each player the sequence is cut at that player's appearances, with
/// the start and end as extra cuts. Every piece is one wait sample, the
/// number of pieces is the player's turn count, and the pieces' edges give
/// the [`Adjacency`].
///
/// Rendered as `<top waits> <turn counts> <adjacency...>`, for example
/// `A+1,A+1,B+1,B+1,A+0 3,3 A:?B→BB B:AA→A?` for `ABAB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    waits: Vec<(Player, Wait)>,
    turns: Vec<usize>,
    adjacency: Vec<Adjacency>,
}

impl Analysis {
    pub fn new(sequence: &Sequence, roster: &Roster) -> Result<Self> {
        if sequence.is_empty() {
            return Err(Error::input("cannot analyze an empty sequence"));
        }
        if let Some(stranger) = sequence.iter().find(|p| !roster.contains(p)) {
            return Err(Error::input(format!(
                "{} plays in {} but is not on roster {}",
                stranger, sequence, roster
            )));
        }
        let mut waits = Vec::new();
        let mut turns = Vec::with_capacity(roster.len());
        let mut adjacency = Vec::with_capacity(roster.len());
        for player in roster.iter().copied() {
            let ref segments = Self::segments(sequence, player);
            waits.extend(segments.iter().map(|s| (player, s.len())));
            turns.push(segments.len());
            adjacency.push(Adjacency::from_segments(player, segments));
        }
        waits.sort_by_key(|(player, wait)| (Reverse(*wait), *player));
        waits.truncate(TOP_WAITS);
        Ok(Self {
            waits,
            turns,
            adjacency,
        })
    }

    /// Maximal runs strictly between consecutive appearances of `player`,
    /// including the runs before the first and after the last.
    fn segments(sequence: &Sequence, player: Player) -> Vec<&[Player]> {
        sequence.players().split(|p| *p == player).collect()
    }

    /// The longest waits, longest first, ties broken by player.
    pub fn waits(&self) -> &[(Player, Wait)] {
        &self.waits
    }
    /// Appearances plus one, per player in roster order.
    pub fn turns(&self) -> &[usize] {
        &self.turns
    }
    pub fn adjacency(&self) -> &[Adjacency] {
        &self.adjacency
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let waits = self
            .waits
            .iter()
            .map(|(player, wait)| format!("{}+{}", player, wait))
            .collect::<Vec<String>>()
            .join(",");
        let turns = self
            .turns
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<String>>()
            .join(",");
        let adjacency = self
            .adjacency
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{} {} {}", waits, turns, adjacency)
    }
}
