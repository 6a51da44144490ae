use crate::Error;
use crate::Hints;
use crate::Result;
use crate::Stamp;
use std::path::Path;

/// A playouts file with every token replaced by its policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    hints: Hints,
    text: String,
}

impl Reveal {
    /// Reads `playouts_<ts>.txt` and the `hints_<ts>.json` beside it.
    ///
    /// Fails with [`Error::NotFound`] if either file is missing or the name
    /// has the wrong shape, and with [`Error::ConsistencyMismatch`] if the
    /// sidecar was written for a different playouts file.
    pub fn open(path: &Path) -> Result<Self> {
        let stamp = Stamp::try_from(path)?;
        let sidecar = path.with_file_name(stamp.hints());
        for file in [path, sidecar.as_path()] {
            if !file.is_file() {
                return Err(Error::NotFound(file.display().to_string()));
            }
        }
        let hints = Hints::load(&sidecar)?;
        if hints.filename_playouts() != stamp.playouts() {
            return Err(Error::ConsistencyMismatch {
                recorded: hints.filename_playouts().to_string(),
                requested: stamp.playouts(),
            });
        }
        let ref text = std::fs::read_to_string(path)?;
        log::debug!("revealing {} tokens in {}", hints.classes().len(), path.display());
        Ok(Self {
            text: Self::unveil(text, &hints),
            hints,
        })
    }

    /// Literal substitution of every token by its policy name,
    /// with trailing newlines dropped.
    pub fn unveil(text: &str, hints: &Hints) -> String {
        hints
            .classes()
            .iter()
            .fold(text.to_string(), |text, (token, name)| {
                text.replace(token.as_str(), name)
            })
            .trim_end_matches('\n')
            .to_string()
    }

    pub fn hints(&self) -> &Hints {
        &self.hints
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.hints, self.text)
    }
}
