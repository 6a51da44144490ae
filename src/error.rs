use thiserror::Error;

/// Result alias for fallible playout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while drawing, analyzing, saving, or revealing playouts.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected at construction: roster, turn count, sample count, or policy list.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Rejected at call time: empty sequences, unparseable players or policies.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The hints sidecar describes a different playouts file.
    #[error("hints describe {recorded} but {requested} was given")]
    ConsistencyMismatch { recorded: String, requested: String },

    /// A playouts or hints file is missing or misnamed.
    #[error("not found: {0}")]
    NotFound(String),

    /// The secure randomness source could not be opened.
    #[error("entropy unavailable: {0}")]
    Entropy(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
    pub(crate) fn input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_condition() {
        let err = Error::config("roster needs at least 2 players, got 1");
        assert!(err.to_string().starts_with("invalid configuration"));
        assert!(err.to_string().contains("got 1"));
        let err = Error::ConsistencyMismatch {
            recorded: "playouts_1.txt".to_string(),
            requested: "playouts_2.txt".to_string(),
        };
        assert!(err.to_string().contains("playouts_1.txt"));
        assert!(err.to_string().contains("playouts_2.txt"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
    }
}
