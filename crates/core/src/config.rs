use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::FormworkError;

/// Name of the optional configuration file, looked up in the
/// directory the generator is invoked from.
pub const CONFIG_FILE: &str = "formwork.toml";

/// How the model list is discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStrategy {
    /// Best-effort text scan of the app's `models.py`.
    Scan,
    /// Introspection of the live Django app registry via the
    /// project's Python interpreter.
    Registry,
}

impl FromStr for SourceStrategy {
    type Err = FormworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(Self::Scan),
            "registry" => Ok(Self::Registry),
            other => Err(FormworkError::configuration(format!(
                "Unknown model source '{}'. Expected 'scan' or 'registry'",
                other
            ))),
        }
    }
}

impl fmt::Display for SourceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan => write!(f, "scan"),
            Self::Registry => write!(f, "registry"),
        }
    }
}

/// Generator settings from `formwork.toml`, with defaults for every
/// field so the file itself is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Selected model-discovery strategy.
    pub source: SourceStrategy,
    /// App-name override. Defaults to the invocation directory's basename.
    pub app: Option<String>,
    /// Python interpreter used by the registry strategy.
    pub python: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: SourceStrategy::Scan,
            app: None,
            python: "python3".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    generator: Option<GeneratorConfig>,
}

impl GeneratorConfig {
    /// Load configuration from `formwork.toml` in `dir`, falling back
    /// to defaults when the file is absent.
    pub fn load(dir: &Path) -> Result<Self, FormworkError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        Ok(file.generator.unwrap_or_default())
    }
}
