use crate::BOUNDARY;
use crate::Player;

/// The players immediately before and after each appearance of one player,
/// in order. Sequence boundaries are written as `?`.
///
/// Rendered as `A:?B→BB`: predecessors, an arrow, successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    player: Player,
    predecessors: String,
    successors: String,
}

impl Adjacency {
    /// Reads both chains off the segments between `player`'s appearances.
    ///
    /// Successors are the heads of every segment after the first;
    /// predecessors are the tails of every segment before the last.
    /// An empty segment at a boundary contributes `?`; an empty segment
    /// between two appearances means the player followed itself.
    pub fn from_segments(player: Player, segments: &[&[Player]]) -> Self {
        let n = segments.len();
        let gap = |i: usize| if i == 0 || i == n - 1 { BOUNDARY } else { player.letter() };
        let successors = segments
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, s)| s.first().map(|p| p.letter()).unwrap_or_else(|| gap(i)))
            .collect::<String>();
        let predecessors = segments
            .iter()
            .enumerate()
            .take(n.saturating_sub(1))
            .map(|(i, s)| s.last().map(|p| p.letter()).unwrap_or_else(|| gap(i)))
            .collect::<String>();
        Self {
            player,
            predecessors,
            successors,
        }
    }
    pub fn player(&self) -> Player {
        self.player
    }
    pub fn predecessors(&self) -> &str {
        &self.predecessors
    }
    pub fn successors(&self) -> &str {
        &self.successors
    }
}

impl std::fmt::Display for Adjacency {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let chain = |s: &str| match s {
            "" => BOUNDARY.to_string(),
            s => s.to_string(),
        };
        write!(
            f,
            "{}:{}→{}",
            self.player,
            chain(&self.predecessors),
            chain(&self.successors)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(s: &str) -> Vec<Player> {
        s.chars().map(|c| Player::try_from(c).unwrap()).collect()
    }

    #[test]
    fn boundaries_are_marked() {
        let a = Player::try_from('A').unwrap();
        let (x, y, z) = (players(""), players("B"), players("B"));
        let adjacency = Adjacency::from_segments(a, &[x.as_slice(), y.as_slice(), z.as_slice()]);
        assert_eq!(adjacency.predecessors(), "?B");
        assert_eq!(adjacency.successors(), "BB");
        assert_eq!(adjacency.to_string(), "A:?B→BB");
    }

    #[test]
    fn absent_player_is_all_boundary() {
        let c = Player::try_from('C').unwrap();
        let whole = players("ABAB");
        let adjacency = Adjacency::from_segments(c, &[whole.as_slice()]);
        assert_eq!(adjacency.predecessors(), "");
        assert_eq!(adjacency.successors(), "");
        assert_eq!(adjacency.to_string(), "C:?→?");
    }

    #[test]
    fn interior_gap_is_self() {
        let a = Player::try_from('A').unwrap();
        let (x, y, z) = (players("B"), players(""), players("B"));
        let adjacency = Adjacency::from_segments(a, &[x.as_slice(), y.as_slice(), z.as_slice()]);
        assert_eq!(adjacency.to_string(), "A:BA→AB");
    }
}
