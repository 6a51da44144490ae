use super::Token;
use crate::Analysis;
use crate::Playout;

/// One line of the playouts file: a playout, optionally its analysis, and
/// the token standing in for its policy.
///
/// - bare: `ACBCAB  # 3f9a…`
/// - analyzed: `ACBCAB -> A+2,… 3,3,3 A:?C→CB …  # 3f9a…`
#[derive(Debug, Clone)]
pub struct Record {
    playout: Playout,
    analysis: Option<Analysis>,
    token: Token,
}

impl Record {
    pub fn new(playout: Playout, analysis: Option<Analysis>, token: Token) -> Self {
        Self {
            playout,
            analysis,
            token,
        }
    }
    pub fn playout(&self) -> &Playout {
        &self.playout
    }
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }
    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.analysis {
            None => write!(f, "{}  # {}", self.playout, self.token),
            Some(a) => write!(f, "{} -> {}  # {}", self.playout, a, self.token),
        }
    }
}
