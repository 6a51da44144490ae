use super::Ledger;
use super::Mint;
use super::Record;
use crate::Analysis;
use crate::Entropy;
use crate::Error;
use crate::NUM_PLAYERS;
use crate::Playout;
use crate::Policy;
use crate::Result;
use crate::Roster;
use crate::SAMPLES_EACH;
use crate::Secure;
use crate::TURNS;
use crate::Turns;
use std::collections::BTreeMap;

/// What to draw: `samples` playouts of `turns` turns for every policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    policies: Vec<Policy>,
    roster: Roster,
    turns: Turns,
    samples: usize,
    analyze: bool,
}

impl Default for Batch {
    fn default() -> Self {
        Self {
            policies: Policy::all().to_vec(),
            roster: Roster::new(NUM_PLAYERS).expect("default roster is valid"),
            turns: TURNS,
            samples: SAMPLES_EACH,
            analyze: false,
        }
    }
}

impl Batch {
    pub fn new(
        policies: Vec<Policy>,
        roster: Roster,
        turns: Turns,
        samples: usize,
        analyze: bool,
    ) -> Result<Self> {
        if policies.is_empty() {
            return Err(Error::config("a batch needs at least 1 policy"));
        }
        if turns == 0 {
            return Err(Error::config("a playout needs at least 1 turn"));
        }
        if samples == 0 {
            return Err(Error::config("a batch needs at least 1 sample per policy"));
        }
        Ok(Self {
            policies,
            roster,
            turns,
            samples,
            analyze,
        })
    }
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn turns(&self) -> Turns {
        self.turns
    }
    pub fn samples(&self) -> usize {
        self.samples
    }
    pub fn analyze(&self) -> bool {
        self.analyze
    }
    pub fn size(&self) -> usize {
        self.policies.len() * self.samples
    }

    /// Draws every playout on its own secure stream.
    pub fn run(&self) -> Result<Ledger> {
        self.run_with(Secure::new)
    }

    /// Draws every playout on a fresh stream from `source`, then tokens and
    /// the final shuffle on one more.
    pub fn run_with<E, F>(&self, mut source: F) -> Result<Ledger>
    where
        E: Entropy,
        F: FnMut() -> Result<E>,
    {
        log::info!(
            "drawing {} x {} playouts of {} turns over {}",
            self.policies.len(),
            self.samples,
            self.turns,
            self.roster
        );
        let mut mint = Mint::new(source()?);
        let mut hints = BTreeMap::new();
        let mut records = Vec::with_capacity(self.size());
        for policy in self.policies.iter().copied() {
            for _ in 0..self.samples {
                let playout = Playout::draw(policy, &self.roster, self.turns, source()?)?;
                let analysis = match self.analyze {
                    true => Some(Analysis::new(playout.sequence(), &self.roster)?),
                    false => None,
                };
                let token = mint.issue();
                hints.insert(token.clone(), policy);
                records.push(Record::new(playout, analysis, token));
            }
        }
        mint.into_entropy().shuffle(&mut records);
        Ok(Ledger::new(self.clone(), records, hints))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scripted;
    use std::collections::HashSet;

    #[test]
    fn defaults() {
        let batch = Batch::default();
        assert_eq!(batch.policies(), &Policy::all());
        assert_eq!(batch.roster().to_string(), "ABC");
        assert_eq!(batch.turns(), TURNS);
        assert_eq!(batch.samples(), SAMPLES_EACH);
        assert!(!batch.analyze());
    }

    #[test]
    fn invalid_batches() {
        let roster = Roster::new(3).unwrap();
        let all = Policy::all().to_vec();
        assert!(matches!(Batch::new(vec![], roster.clone(), 20, 5, false), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(Batch::new(all.clone(), roster.clone(), 0, 5, false), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(Batch::new(all, roster, 20, 0, false), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn every_policy_sampled() {
        let ledger = Batch::default().run().unwrap();
        assert_eq!(ledger.records().len(), 15);
        assert_eq!(ledger.hints().len(), 15);
        for policy in Policy::all() {
            assert_eq!(ledger.hints().values().filter(|p| **p == policy).count(), SAMPLES_EACH);
        }
        for record in ledger.records() {
            assert_eq!(ledger.hints().get(record.token()), Some(&record.playout().policy()));
            assert_eq!(record.playout().sequence().len(), TURNS);
            assert!(record.analysis().is_none());
        }
    }

    #[test]
    fn tokens_unique_per_batch() {
        let batch = Batch::new(Policy::all().to_vec(), Roster::new(4).unwrap(), 8, 200, false).unwrap();
        let ledger = batch.run().unwrap();
        let tokens = ledger.records().iter().map(|r| r.token()).collect::<HashSet<_>>();
        assert_eq!(tokens.len(), 600);
    }

    #[test]
    fn analyzed_records() {
        let batch = Batch::new(vec![Policy::Generational], Roster::new(3).unwrap(), 12, 4, true).unwrap();
        let ledger = batch.run().unwrap();
        for record in ledger.records() {
            let analysis = record.analysis().expect("analysis requested");
            assert_eq!(analysis.turns().len(), 3);
            assert!(record.to_string().contains(" -> "));
        }
    }

    #[test]
    fn one_stream_per_playout() {
        let mut opened = 0;
        let batch = Batch::new(Policy::all().to_vec(), Roster::new(3).unwrap(), 4, 2, false).unwrap();
        batch
            .run_with(|| {
                opened += 1;
                Secure::new()
            })
            .unwrap();
        assert_eq!(opened, 1 + batch.size());
    }

    #[test]
    fn entropy_failure_is_fatal() {
        let batch = Batch::default();
        let failed = batch.run_with(|| Err::<Scripted, _>(Error::Entropy("unplugged".to_string())));
        assert!(matches!(failed, Err(Error::Entropy(_))));
    }
}
