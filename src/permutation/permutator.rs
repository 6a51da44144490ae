use super::*;
use crate::Entropy;
use crate::Player;
use crate::Result;
use crate::Roster;

/// One permutator of any [`Policy`], owning its own entropy stream.
#[derive(Debug, Clone)]
pub enum Permutator<E> {
    Uniform(Uniform<E>),
    AvoidTurnback(AvoidTurnback<E>),
    Generational(Generational<E>),
}

impl<E: Entropy> Permutator<E> {
    /// Validates the player set before building.
    /// Fewer than two players, or duplicates, is an invalid configuration.
    pub fn new(policy: Policy, players: &[Player], entropy: E) -> Result<Self> {
        Roster::try_from(players).map(|roster| Self::build(policy, roster, entropy))
    }
    pub fn build(policy: Policy, roster: Roster, entropy: E) -> Self {
        match policy {
            Policy::Uniform => Self::Uniform(Uniform::new(roster, entropy)),
            Policy::AvoidTurnback => Self::AvoidTurnback(AvoidTurnback::new(roster, entropy)),
            Policy::Generational => Self::Generational(Generational::new(roster, entropy)),
        }
    }
    pub fn policy(&self) -> Policy {
        match self {
            Self::Uniform(_) => Policy::Uniform,
            Self::AvoidTurnback(_) => Policy::AvoidTurnback,
            Self::Generational(_) => Policy::Generational,
        }
    }
}

impl<E: Entropy> Poll for Permutator<E> {
    fn poll(&mut self) -> Player {
        match self {
            Self::Uniform(p) => p.poll(),
            Self::AvoidTurnback(p) => p.poll(),
            Self::Generational(p) => p.poll(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::Scripted;
    use crate::Secure;

    #[test]
    fn single_player_is_invalid() {
        let solo = [Player::try_from('A').unwrap()];
        for policy in Policy::all() {
            let built = Permutator::new(policy, &solo, Scripted::default());
            assert!(matches!(built, Err(Error::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn empty_roster_is_invalid() {
        for policy in Policy::all() {
            let built = Permutator::new(policy, &[], Scripted::default());
            assert!(matches!(built, Err(Error::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn remembers_its_policy() {
        let roster = Roster::new(3).unwrap();
        for policy in Policy::all() {
            let permutator = Permutator::build(policy, roster.clone(), Secure::new().unwrap());
            assert_eq!(permutator.policy(), policy);
        }
    }

    #[test]
    fn dispatches_to_the_variant() {
        let roster = Roster::new(3).unwrap();
        let mut uniform = Permutator::build(Policy::Uniform, roster.clone(), Scripted::from([0, 1]));
        assert_eq!(uniform.poll().letter(), 'A');
        assert_eq!(uniform.poll().letter(), 'C');
        let mut generational = Permutator::build(Policy::Generational, roster, Scripted::from([0, 0]));
        assert_eq!(generational.poll().letter(), 'A');
        assert_eq!(generational.poll().letter(), 'A');
    }

    #[test]
    fn polls_stay_on_the_roster() {
        let roster = Roster::try_from("QXZ").unwrap();
        for policy in Policy::all() {
            let mut permutator = Permutator::build(policy, roster.clone(), Secure::new().unwrap());
            assert!((0..128).map(|_| permutator.poll()).all(|p| roster.contains(&p)));
        }
    }
}
