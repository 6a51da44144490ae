use crate::Entropy;
use crate::Error;
use crate::Result;
use crate::TOKEN_ALPHABET;
use crate::TOKEN_BYTES;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;

/// Opaque label hiding which policy produced a playout.
///
/// Lowercase hex, so it never contains a player letter, and always holds at
/// least one of `a`-`f`, so it never matches a run of digits such as a
/// timestamp. All tokens share one length, so distinct tokens are never
/// substrings of one another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    pub const LENGTH: usize = 2 * TOKEN_BYTES;

    pub fn as_str(&self) -> &str {
        &self.0
    }
    fn draw(entropy: &mut impl Entropy) -> String {
        (0..Self::LENGTH)
            .map(|_| TOKEN_ALPHABET[entropy.below(TOKEN_ALPHABET.len())] as char)
            .collect()
    }
    fn lettered(s: &str) -> bool {
        s.chars().any(|c| c.is_ascii_alphabetic())
    }
}

impl TryFrom<&str> for Token {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        let hex = s.bytes().all(|b| TOKEN_ALPHABET.contains(&b));
        match (s.len() == Self::LENGTH, hex, Self::lettered(s)) {
            (true, true, true) => Ok(Self(s.to_string())),
            _ => Err(Error::input(format!("malformed token {:?}", s))),
        }
    }
}

impl TryFrom<String> for Token {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        Self::try_from(s.as_str())
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues tokens that are pairwise distinct for its lifetime.
#[derive(Debug)]
pub struct Mint<E> {
    entropy: E,
    issued: HashSet<Token>,
}

impl<E: Entropy> Mint<E> {
    pub fn new(entropy: E) -> Self {
        Self {
            entropy,
            issued: HashSet::new(),
        }
    }
    /// A fresh token, redrawing on the rare all-digit or repeated draw.
    pub fn issue(&mut self) -> Token {
        loop {
            let candidate = Token::draw(&mut self.entropy);
            if !Token::lettered(&candidate) {
                continue;
            }
            let token = Token(candidate);
            if self.issued.insert(token.clone()) {
                return token;
            }
            log::debug!("token collision on {}, redrawing", token);
        }
    }
    pub fn issued(&self) -> usize {
        self.issued.len()
    }
    /// Hands the entropy stream back, e.g. to shuffle with.
    pub fn into_entropy(self) -> E {
        self.entropy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scripted;
    use crate::Secure;

    #[test]
    fn pairwise_distinct() {
        let mut mint = Mint::new(Secure::new().unwrap());
        let tokens = (0..4096).map(|_| mint.issue()).collect::<HashSet<_>>();
        assert_eq!(tokens.len(), 4096);
        assert_eq!(mint.issued(), 4096);
    }

    #[test]
    fn redraws_repeats_and_digits() {
        // first draw "a000…", second repeats it, third is all digits, fourth "b000…"
        let mut script = Vec::new();
        script.extend([10].into_iter().chain([0; 15]));
        script.extend([10].into_iter().chain([0; 15]));
        script.extend([1; 16]);
        script.extend([11].into_iter().chain([0; 15]));
        let mut mint = Mint::new(Scripted::from(script));
        assert_eq!(mint.issue().as_str(), "a000000000000000");
        assert_eq!(mint.issue().as_str(), "b000000000000000");
        assert_eq!(mint.into_entropy().remaining(), 0);
    }

    #[test]
    fn disjoint_from_players() {
        let mut mint = Mint::new(Secure::new().unwrap());
        for _ in 0..256 {
            let token = mint.issue();
            assert_eq!(token.as_str().len(), Token::LENGTH);
            assert!(!token.as_str().chars().any(|c| c.is_ascii_uppercase()));
            assert!(Token::try_from(token.as_str()).is_ok());
        }
    }

    #[test]
    fn rejects_malformed() {
        assert!(Token::try_from("0123456789012345").is_err());
        assert!(Token::try_from("abc").is_err());
        assert!(Token::try_from("ABCDEF0123456789").is_err());
        assert!(Token::try_from("abcdef0123456789").is_ok());
    }

    #[test]
    fn serializes_as_string() {
        let token = Token::try_from("abcdef0123456789").unwrap();
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"abcdef0123456789\"");
        assert_eq!(serde_json::from_str::<Token>(&json).unwrap(), token);
        assert!(serde_json::from_str::<Token>("\"nope\"").is_err());
    }
}
