use super::Sequence;
use crate::Entropy;
use crate::Error;
use crate::Permutator;
use crate::Policy;
use crate::Result;
use crate::Roster;
use crate::Turns;

/// One complete sequence drawn from a fresh permutator of some policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playout {
    policy: Policy,
    sequence: Sequence,
}

impl Playout {
    /// Builds a fresh permutator over `roster`, polls it `turns` times,
    /// and drops it. At least one turn is required.
    pub fn draw<E: Entropy>(
        policy: Policy,
        roster: &Roster,
        turns: Turns,
        entropy: E,
    ) -> Result<Self> {
        if turns == 0 {
            return Err(Error::config("a playout needs at least 1 turn"));
        }
        let ref mut permutator = Permutator::build(policy, roster.clone(), entropy);
        let sequence = Sequence::polled(permutator, turns);
        log::debug!("{:<16}{}", policy.name(), sequence);
        Ok(Self { policy, sequence })
    }
    pub fn policy(&self) -> Policy {
        self.policy
    }
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

impl std::fmt::Display for Playout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scripted;
    use crate::Secure;

    #[test]
    fn draws_exactly_turns() {
        let ref roster = Roster::new(3).unwrap();
        for policy in Policy::all() {
            let playout = Playout::draw(policy, roster, 20, Secure::new().unwrap()).unwrap();
            assert_eq!(playout.sequence().len(), 20);
            assert_eq!(playout.policy(), policy);
        }
    }

    #[test]
    fn zero_turns_is_invalid() {
        let ref roster = Roster::new(3).unwrap();
        let drawn = Playout::draw(Policy::Uniform, roster, 0, Scripted::default());
        assert!(matches!(drawn, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn scripted_uniform_playout() {
        let ref roster = Roster::new(3).unwrap();
        let script = Scripted::from([0, 1, 0, 1, 1, 0]);
        let playout = Playout::draw(Policy::Uniform, roster, 6, script).unwrap();
        assert_eq!(playout.to_string(), "ACACBA");
    }

    #[test]
    fn borrowed_entropy_is_consumed() {
        let ref roster = Roster::new(3).unwrap();
        let mut script = Scripted::from([0, 0, 0, 0, 0]);
        Playout::draw(Policy::AvoidTurnback, roster, 3, &mut script).unwrap();
        // A, B, then a turnback to A forces the redraw
        assert_eq!(script.remaining(), 1);
    }
}
