use crate::Result;
use crate::Token;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The hints sidecar: which policy each token stands for, and the exact
/// playouts file those tokens appear in.
///
/// ```json
/// {
///     "classes": { "0f3c…": "uniform", … },
///     "filename_playouts": "playouts_1700000000123456789.txt"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hints {
    classes: BTreeMap<Token, String>,
    filename_playouts: String,
}

impl Hints {
    pub fn new(classes: BTreeMap<Token, String>, filename_playouts: String) -> Self {
        Self {
            classes,
            filename_playouts,
        }
    }
    pub fn classes(&self) -> &BTreeMap<Token, String> {
        &self.classes
    }
    pub fn filename_playouts(&self) -> &str {
        &self.filename_playouts
    }
    /// read from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
    /// pretty-printed JSON, as written to disk
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for Hints {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.classes
            .iter()
            .try_for_each(|(token, name)| writeln!(f, "{} {}", token, name))
    }
}
