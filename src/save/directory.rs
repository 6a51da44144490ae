use super::*;
use crate::Ledger;
use crate::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Writes each batch as a fresh `playouts_<ts>.txt` / `hints_<ts>.json`
/// pair under one directory. Never overwrites an existing file, and never
/// leaves half a pair behind.
#[derive(Debug, Clone)]
pub struct Directory(PathBuf);

impl Directory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }
    pub fn root(&self) -> &Path {
        &self.0
    }
    /// Saves under an explicit stamp rather than the current time.
    pub fn save_as(&self, ledger: &Ledger, stamp: &Stamp) -> Result<Saved> {
        std::fs::create_dir_all(&self.0)?;
        let playouts = self.0.join(stamp.playouts());
        let hints = self.0.join(stamp.hints());
        let ref json = Hints::new(ledger.classes(), stamp.playouts()).to_json()?;
        Self::create(&playouts, &document(ledger, &stamp.hints()))?;
        if let Err(e) = Self::create(&hints, json) {
            // never leave a playouts file without its sidecar
            std::fs::remove_file(&playouts)?;
            return Err(e);
        }
        log::info!("written to {} and {}", hints.display(), playouts.display());
        Ok(Saved { playouts, hints })
    }
    fn create(path: &Path, contents: &str) -> Result<()> {
        let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }
}

impl Sink for Directory {
    fn save(&self, ledger: &Ledger) -> Result<Saved> {
        self.save_as(ledger, &Stamp::now())
    }
}
