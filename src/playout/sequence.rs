use crate::Arbitrary;
use crate::Error;
use crate::Player;
use crate::Poll;
use crate::Result;

/// An ordered, finished list of turns. Written as the concatenation of
/// player letters, e.g. `ABCAB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence(Vec<Player>);

impl Sequence {
    /// Polls `turns` times, in order.
    pub fn polled(permutator: &mut impl Poll, turns: usize) -> Self {
        (0..turns).map(|_| permutator.poll()).collect()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn players(&self) -> &[Player] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
    /// Times `player` acts in this sequence.
    pub fn count(&self, player: &Player) -> usize {
        self.0.iter().filter(|p| *p == player).count()
    }
}

impl FromIterator<Player> for Sequence {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Player>> for Sequence {
    fn from(players: Vec<Player>) -> Self {
        Self(players)
    }
}

impl From<Sequence> for Vec<Player> {
    fn from(sequence: Sequence) -> Self {
        sequence.0
    }
}

impl TryFrom<&str> for Sequence {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        s.trim().chars().map(Player::try_from).collect()
    }
}

impl Arbitrary for Sequence {
    fn random() -> Self {
        let n = rand::random_range(1..64usize);
        let k = rand::random_range(2..6usize);
        (0..n)
            .map(|_| rand::random_range(0..k))
            .map(|i| Player::try_from(i).expect("within alphabet"))
            .collect()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|p| write!(f, "{}", p))
    }
}
