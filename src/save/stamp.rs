use crate::Error;
use crate::HINTS_PREFIX;
use crate::HINTS_SUFFIX;
use crate::PLAYOUTS_PREFIX;
use crate::PLAYOUTS_SUFFIX;
use crate::Result;
use std::path::Path;

/// Shared suffix tying a playouts file to its hints sidecar:
/// `playouts_<stamp>.txt` pairs with `hints_<stamp>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stamp(String);

impl Stamp {
    /// Nanoseconds since the Unix epoch.
    pub fn now() -> Self {
        Self(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time moves slow")
                .as_nanos()
                .to_string(),
        )
    }
    pub fn playouts(&self) -> String {
        format!("{}{}{}", PLAYOUTS_PREFIX, self.0, PLAYOUTS_SUFFIX)
    }
    pub fn hints(&self) -> String {
        format!("{}{}{}", HINTS_PREFIX, self.0, HINTS_SUFFIX)
    }
}

impl From<&str> for Stamp {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Recovers the stamp from a playouts file path.
impl TryFrom<&Path> for Stamp {
    type Error = Error;
    fn try_from(path: &Path) -> Result<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_prefix(PLAYOUTS_PREFIX))
            .and_then(|name| name.strip_suffix(PLAYOUTS_SUFFIX))
            .filter(|stamp| !stamp.is_empty())
            .map(Self::from)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "{} is not a {}<stamp>{} file",
                    path.display(),
                    PLAYOUTS_PREFIX,
                    PLAYOUTS_SUFFIX
                ))
            })
    }
}

impl std::fmt::Display for Stamp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_filenames() {
        let stamp = Stamp::from("1700000000123456789");
        assert_eq!(stamp.playouts(), "playouts_1700000000123456789.txt");
        assert_eq!(stamp.hints(), "hints_1700000000123456789.json");
    }

    #[test]
    fn bijective_path() {
        let stamp = Stamp::now();
        let ref path = Path::new("some/dir").join(stamp.playouts());
        assert_eq!(Stamp::try_from(path.as_path()).unwrap(), stamp);
    }

    #[test]
    fn misnamed_files() {
        for name in ["hints_1.json", "playouts_.txt", "playouts_1.json", "notes.txt"] {
            let stamp = Stamp::try_from(Path::new(name));
            assert!(matches!(stamp, Err(Error::NotFound(_))), "{}", name);
        }
    }
}
