use crate::Arbitrary;
use crate::Error;
use crate::MAX_PLAYERS;

/// A player at the table, encoded as a single uppercase letter.
///
/// Internally the index into the alphabet: `A` is 0, `B` is 1, and so on.
/// Ordering follows the alphabet, which is the tie-break order for waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player(u8);

impl Player {
    /// Position in the alphabet.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    /// The letter this player is written as.
    pub fn letter(&self) -> char {
        (b'A' + self.0) as char
    }
}

impl TryFrom<usize> for Player {
    type Error = Error;
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < MAX_PLAYERS {
            Ok(Self(index as u8))
        } else {
            Err(Error::config(format!(
                "player index {} exceeds the {} letter alphabet",
                index, MAX_PLAYERS
            )))
        }
    }
}

impl TryFrom<char> for Player {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A'..='Z' => Ok(Self(c as u8 - b'A')),
            _ => Err(Error::input(format!("invalid player {:?}", c))),
        }
    }
}

impl From<Player> for char {
    fn from(player: Player) -> Self {
        player.letter()
    }
}

impl Arbitrary for Player {
    fn random() -> Self {
        Self(rand::random_range(0..MAX_PLAYERS as u8))
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
