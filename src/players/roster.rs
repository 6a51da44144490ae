use super::Player;
use crate::Arbitrary;
use crate::Error;
use crate::MAX_PLAYERS;
use crate::Result;
use std::collections::HashSet;

/// The canonical, ordered set of players for one run.
///
/// Always holds at least two distinct players. Analysis output lists
/// per-player columns in this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Roster(Vec<Player>);

impl Roster {
    /// The first `n` letters of the alphabet.
    pub fn new(n: usize) -> Result<Self> {
        if n > MAX_PLAYERS {
            return Err(Error::config(format!(
                "roster of {} exceeds the {} letter alphabet",
                n, MAX_PLAYERS
            )));
        }
        (0..n)
            .map(Player::try_from)
            .collect::<Result<Vec<Player>>>()
            .and_then(Self::try_from)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn players(&self) -> &[Player] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
    pub fn contains(&self, player: &Player) -> bool {
        self.0.contains(player)
    }
    /// Every player except `excluded`, in roster order.
    pub fn except(&self, excluded: Option<Player>) -> Vec<Player> {
        self.0
            .iter()
            .copied()
            .filter(|p| Some(*p) != excluded)
            .collect()
    }
}

impl TryFrom<Vec<Player>> for Roster {
    type Error = Error;
    fn try_from(players: Vec<Player>) -> Result<Self> {
        let unique = players.iter().collect::<HashSet<_>>().len();
        match (players.len(), unique) {
            (n, _) if n < 2 => Err(Error::config(format!(
                "roster needs at least 2 players, got {}",
                n
            ))),
            (n, u) if n != u => Err(Error::config(format!(
                "roster has {} duplicate players",
                n - u
            ))),
            _ => Ok(Self(players)),
        }
    }
}

impl TryFrom<&[Player]> for Roster {
    type Error = Error;
    fn try_from(players: &[Player]) -> Result<Self> {
        Self::try_from(players.to_vec())
    }
}

impl TryFrom<&str> for Roster {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        s.chars()
            .map(Player::try_from)
            .collect::<Result<Vec<Player>>>()
            .and_then(Self::try_from)
    }
}

impl Arbitrary for Roster {
    fn random() -> Self {
        Self::new(rand::random_range(2..=8)).expect("2..=8 fits the alphabet")
    }
}

impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|p| write!(f, "{}", p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabetical_from_count() {
        assert_eq!(Roster::new(3).unwrap().to_string(), "ABC");
        assert_eq!(Roster::new(MAX_PLAYERS).unwrap().len(), MAX_PLAYERS);
    }

    #[test]
    fn too_few_players() {
        assert!(matches!(Roster::new(0), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(Roster::new(1), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(Roster::try_from("A"), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn too_many_players() {
        assert!(matches!(
            Roster::new(MAX_PLAYERS + 1),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn duplicates_rejected() {
        assert!(matches!(Roster::try_from("ABA"), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn keeps_given_order() {
        let roster = Roster::try_from("CAB").unwrap();
        assert_eq!(roster.to_string(), "CAB");
        let a = Player::try_from('A').unwrap();
        assert_eq!(
            roster.except(Some(a)).into_iter().map(char::from).collect::<String>(),
            "CB"
        );
        assert_eq!(roster.except(None).len(), 3);
    }
}
