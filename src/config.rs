use std::path::{Path, PathBuf};

use crate::error::Error;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = ".doclinks.toml";

/// Project configuration loaded from `.doclinks.toml`. Relative paths are
/// resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output root for rendered pages and `links.json`.
    pub destination: PathBuf,
    /// Doclet JSON file exported by the documentation generator.
    pub doclets: PathBuf,
    /// Template directory.
    pub templates: PathBuf,
}

/// Raw TOML structure for `.doclinks.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct DoclinksTomlConfig {
    /// Output root.
    #[serde(default)]
    destination: Option<PathBuf>,
    /// Doclet JSON file.
    #[serde(default)]
    doclets: Option<PathBuf>,
    /// Template directory.
    #[serde(default)]
    templates: Option<PathBuf>,
}

impl Config {
    /// Defaults: `doclets.json`, `templates/`, and `out/` under the root.
    fn defaults_under(root: &Path) -> Self {
        return Self {
            destination: root.join("out"),
            doclets: root.join("doclets.json"),
            templates: root.join("templates"),
        };
    }

    /// Load config from `.doclinks.toml` in the given root directory.
    /// Returns defaults if the file doesn't exist. A file that exists but is
    /// malformed is an error, never a silent fallback.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::defaults_under(root));
            },
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };

        let raw: DoclinksTomlConfig = toml::from_str(&content)?;
        let defaults = Self::defaults_under(root);
        return Ok(Self {
            destination: raw.destination.map_or(defaults.destination, |p| return root.join(p)),
            doclets: raw.doclets.map_or(defaults.doclets, |p| return root.join(p)),
            templates: raw.templates.map_or(defaults.templates, |p| return root.join(p)),
        });
    }

    /// Replace the destination, e.g. from a command-line flag.
    #[must_use]
    pub fn with_destination(self, destination: Option<PathBuf>) -> Self {
        return match destination {
            None => self,
            Some(destination) => Self { destination, ..self },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::load(root.path()).unwrap();
        assert_eq!(config.doclets, root.path().join("doclets.json"));
        assert_eq!(config.templates, root.path().join("templates"));
        assert_eq!(config.destination, root.path().join("out"));
    }

    #[test]
    fn values_are_relative_to_root() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join(CONFIG_FILE), "destination = \"site\"\n").unwrap();

        let config = Config::load(root.path()).unwrap();
        assert_eq!(config.destination, root.path().join("site"));
        assert_eq!(config.doclets, root.path().join("doclets.json"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join(CONFIG_FILE), "destination = [").unwrap();
        assert!(matches!(Config::load(root.path()), Err(Error::TomlDe(_))));
    }

    #[test]
    fn flag_overrides_destination() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::load(root.path())
            .unwrap()
            .with_destination(Some(PathBuf::from("/tmp/elsewhere")));
        assert_eq!(config.destination, PathBuf::from("/tmp/elsewhere"));
    }
}
