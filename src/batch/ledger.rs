use super::Batch;
use super::Record;
use super::Token;
use crate::Policy;
use std::collections::BTreeMap;

/// The outcome of one batch run: shuffled records, and the secret map from
/// each record's token back to the policy that drew it.
#[derive(Debug, Clone)]
pub struct Ledger {
    batch: Batch,
    records: Vec<Record>,
    hints: BTreeMap<Token, Policy>,
}

impl Ledger {
    pub fn new(batch: Batch, records: Vec<Record>, hints: BTreeMap<Token, Policy>) -> Self {
        Self {
            batch,
            records,
            hints,
        }
    }
    pub fn batch(&self) -> &Batch {
        &self.batch
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn hints(&self) -> &BTreeMap<Token, Policy> {
        &self.hints
    }
    /// The token map with policies spelled out, as written to the sidecar.
    pub fn classes(&self) -> BTreeMap<Token, String> {
        self.hints
            .iter()
            .map(|(token, policy)| (token.clone(), policy.name().to_string()))
            .collect()
    }
}
