use crate::Error;

/// The kinds of permutator a batch can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    Uniform,
    AvoidTurnback,
    Generational,
}

impl Policy {
    /// Every policy, in the order batches emit them by default.
    pub const fn all() -> [Self; 3] {
        [Self::Uniform, Self::AvoidTurnback, Self::Generational]
    }
    /// Name written to the hints sidecar and substituted on reveal.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::AvoidTurnback => "avoid_turnback",
            Self::Generational => "generational",
        }
    }
}

impl TryFrom<&str> for Policy {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|p| p.name() == s.trim().to_lowercase())
            .ok_or_else(|| Error::input(format!("unknown policy {:?}", s)))
    }
}

impl std::str::FromStr for Policy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
