use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::catalog::{self, Example, EXAMPLES};
use crate::error::{Error, Result};

/// Runner settings, usually read from a `patterns.toml`.
///
/// Every field is optional; a missing file section means the default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Print a heading before each example.
    pub headers: bool,
    /// Allow ANSI colour in headings.
    pub color: bool,
    /// Examples run by `patterns all`. Empty means every example.
    pub examples: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            headers: true,
            color: true,
            examples: Vec::new(),
        }
    }
}

impl RunnerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded runner config");
        Ok(config)
    }

    /// The examples this config selects, in the order it names them.
    pub fn selected(&self) -> Result<Vec<&'static Example>> {
        if self.examples.is_empty() {
            return Ok(EXAMPLES.iter().collect());
        }
        self.examples
            .iter()
            .map(|name| catalog::lookup(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_is_default() {
        let config = RunnerConfig::from_toml_str("").unwrap();
        assert_eq!(config, RunnerConfig::default());
        assert!(config.headers && config.color);
        assert_eq!(config.selected().unwrap().len(), EXAMPLES.len());
    }

    #[test]
    fn test_partial_config() {
        let config = RunnerConfig::from_toml_str(
            r#"
            color = false
            examples = ["visitor", "builder"]
            "#,
        )
        .unwrap();
        assert!(config.headers);
        assert!(!config.color);

        let names: Vec<_> = config.selected().unwrap().iter().map(|e| e.name).collect();
        assert_eq!(names, ["visitor", "builder"]);
    }

    #[test]
    fn test_unknown_example_is_rejected() {
        let config = RunnerConfig::from_toml_str(r#"examples = ["builder", "bulider"]"#).unwrap();
        assert!(matches!(config.selected(), Err(Error::UnknownExample(name)) if name == "bulider"));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            RunnerConfig::from_toml_str("headers = \"yes\""),
            Err(Error::ParseConfig(_))
        ));
        assert!(matches!(
            RunnerConfig::from_toml_str("colour = true"),
            Err(Error::ParseConfig(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "headers = false").unwrap();
        writeln!(file, "examples = [\"observer\"]").unwrap();

        let config = RunnerConfig::load(file.path()).unwrap();
        assert!(!config.headers);
        assert_eq!(config.examples, ["observer"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        match RunnerConfig::load(&path) {
            Err(Error::ReadConfig { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ReadConfig, got {:?}", other),
        }
    }
}
