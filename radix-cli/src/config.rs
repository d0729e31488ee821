use std::path::{Path, PathBuf};

use radix_core::BuildOptions;

use crate::project_path::ProjectPath;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct Output {
    #[serde(default = "default_true")]
    pub sorted: bool,

    /// 0 prints every completion.
    #[serde(default)]
    pub limit: usize,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            sorted: true,
            limit: 0,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub trie: BuildOptions,

    #[serde(default)]
    pub output: Output,
}

impl Config {
    /// A bare name is looked up in the project config directory, anything
    /// else is taken as a path.
    pub fn config_path(config_name: &str) -> Option<PathBuf> {
        let path = Path::new(config_name);
        if path.components().count() > 1 || path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            ProjectPath::config_dir().map(|dir| dir.join(config_name))
        }
    }

    pub fn load(config_name: &str) -> color_eyre::Result<Self> {
        match Self::config_path(config_name) {
            Some(path) if path.exists() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    fn read(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content)?)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }
}
