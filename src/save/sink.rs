use crate::Ledger;
use crate::Result;
use std::path::PathBuf;

/// Somewhere a finished batch can be written, tokens and all.
pub trait Sink {
    /// Persist one ledger, returning where the two files landed.
    fn save(&self, ledger: &Ledger) -> Result<Saved>;
}

/// Locations of a saved batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub playouts: PathBuf,
    pub hints: PathBuf,
}

/// The playouts file body: a commented header describing the batch,
/// a blank line, then one record per line.
pub fn document(ledger: &Ledger, hints: &str) -> String {
    let batch = ledger.batch();
    let quoted = |items: Vec<String>| {
        items
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<String>>()
            .join(", ")
    };
    let policies = batch.policies().iter().map(|p| p.to_string()).collect();
    let players = batch.roster().iter().map(|p| p.to_string()).collect();
    let mut text = String::new();
    text.push_str(&format!("# Permutators: [{}]\n", quoted(policies)));
    text.push_str(&format!("# Players: [{}]\n", quoted(players)));
    text.push_str(&format!("# Turns: {}\n", batch.turns()));
    text.push_str(&format!("# Samples for each permutator: {}\n", batch.samples()));
    text.push_str(&format!("# Filename hints: {}\n", hints));
    text.push('\n');
    for record in ledger.records() {
        text.push_str(&record.to_string());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Batch;
    use crate::Policy;
    use crate::Roster;

    #[test]
    fn header_then_records() {
        let batch = Batch::new(vec![Policy::Uniform, Policy::Generational], Roster::new(2).unwrap(), 6, 3, false).unwrap();
        let ledger = batch.run().unwrap();
        let text = document(&ledger, "hints_7.json");
        let lines = text.lines().collect::<Vec<&str>>();
        assert_eq!(lines[0], "# Permutators: ['uniform', 'generational']");
        assert_eq!(lines[1], "# Players: ['A', 'B']");
        assert_eq!(lines[2], "# Turns: 6");
        assert_eq!(lines[3], "# Samples for each permutator: 3");
        assert_eq!(lines[4], "# Filename hints: hints_7.json");
        assert_eq!(lines[5], "");
        assert_eq!(lines.len(), 6 + 6);
        for (line, record) in lines[6..].iter().zip(ledger.records()) {
            assert_eq!(*line, record.to_string());
            assert!(line.ends_with(record.token().as_str()));
        }
    }
}
