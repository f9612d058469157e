use crate::checker::policy::CheckPolicy;
use crate::checker::suggestions::DEFAULT_MAX_DISTANCE;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".spellpad.toml";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Reference corpus; the embedded English list is used when unset
    pub corpus: Option<PathBuf>,
    pub max_suggestions: usize,
    pub max_edit_distance: usize,
    pub skip_numbers: bool,
    pub skip_single_chars: bool,
    pub ignore_patterns: Vec<String>,
}

/// One configuration file as written; absent keys leave lower layers alone
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    pub corpus: Option<PathBuf>,
    pub max_suggestions: Option<usize>,
    pub max_edit_distance: Option<usize>,
    pub skip_numbers: Option<bool>,
    pub skip_single_chars: Option<bool>,
    pub ignore_patterns: Option<Vec<String>>,
}

fn default_max_suggestions() -> usize {
    7
}

fn default_max_edit_distance() -> usize {
    DEFAULT_MAX_DISTANCE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: None,
            max_suggestions: default_max_suggestions(),
            max_edit_distance: default_max_edit_distance(),
            skip_numbers: false,
            skip_single_chars: false,
            ignore_patterns: Vec::new(),
        }
    }
}

/// Settings given on the command line; `None`/`false` means "not given"
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub corpus: Option<PathBuf>,
    pub max_suggestions: Option<usize>,
    pub max_edit_distance: Option<usize>,
    pub skip_numbers: bool,
    pub skip_single_chars: bool,
    pub ignore_patterns: Vec<String>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        Ok(config.apply(overrides))
    }

    pub fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Check policy described by this configuration
    pub fn policy(&self) -> crate::Result<CheckPolicy> {
        CheckPolicy::new(
            self.skip_numbers,
            self.skip_single_chars,
            &self.ignore_patterns,
        )
    }

    /// Layer `file` over this configuration
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(corpus) = file.corpus {
            self.corpus = Some(corpus);
        }
        if let Some(limit) = file.max_suggestions {
            self.max_suggestions = limit;
        }
        if let Some(distance) = file.max_edit_distance {
            self.max_edit_distance = distance;
        }
        if let Some(skip) = file.skip_numbers {
            self.skip_numbers = skip;
        }
        if let Some(skip) = file.skip_single_chars {
            self.skip_single_chars = skip;
        }
        if let Some(patterns) = file.ignore_patterns {
            self.ignore_patterns = patterns;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(corpus) = overrides.corpus {
            self.corpus = Some(corpus);
        }
        if let Some(limit) = overrides.max_suggestions {
            self.max_suggestions = limit;
        }
        if let Some(distance) = overrides.max_edit_distance {
            self.max_edit_distance = distance;
        }
        self.skip_numbers |= overrides.skip_numbers;
        self.skip_single_chars |= overrides.skip_single_chars;
        self.ignore_patterns.extend(overrides.ignore_patterns);
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellpad").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_suggestions, 7);
        assert_eq!(config.max_edit_distance, 2);
        assert!(!config.skip_numbers);
        assert!(config.corpus.is_none());
    }

    fn layer(toml_text: &str) -> ConfigFile {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_merge_configs() {
        let merged = Config::default().merge(layer("max_suggestions = 3\nskip_numbers = true"));
        assert_eq!(merged.max_suggestions, 3);
        assert_eq!(merged.max_edit_distance, 2);
        assert!(merged.skip_numbers);
    }

    #[test]
    fn test_local_layer_keeps_unset_global_values() {
        let global = layer("skip_numbers = true\nskip_single_chars = true\nmax_suggestions = 3");
        let local = layer("corpus = \"words.txt\"");

        let merged = Config::default().merge(global).merge(local);
        assert!(merged.skip_numbers);
        assert!(merged.skip_single_chars);
        assert_eq!(merged.max_suggestions, 3);
        assert_eq!(merged.corpus, Some(PathBuf::from("words.txt")));
    }

    #[test]
    fn test_local_layer_can_restore_defaults() {
        let global = layer("skip_numbers = true\nmax_suggestions = 3\nignore_patterns = [\"[0-9]+\"]");
        let local = layer("skip_numbers = false\nmax_suggestions = 7\nignore_patterns = []");

        let merged = Config::default().merge(global).merge(local);
        assert_eq!(merged, Config::default());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config {
            max_suggestions: 3,
            ignore_patterns: vec!["[0-9]+".to_string()],
            ..Default::default()
        }
        .apply(Overrides {
            max_suggestions: Some(5),
            skip_single_chars: true,
            ignore_patterns: vec!["[A-Z]+".to_string()],
            ..Default::default()
        });

        assert_eq!(config.max_suggestions, 5);
        assert!(config.skip_single_chars);
        assert_eq!(config.ignore_patterns.len(), 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "skip_numbers = true\ncorpus = \"words.txt\"\n").unwrap();

        let file = Config::from_file(&path).unwrap();
        assert_eq!(file.skip_numbers, Some(true));
        assert_eq!(file.max_suggestions, None);

        let config = Config::default().merge(file);
        assert!(config.skip_numbers);
        assert_eq!(config.corpus, Some(PathBuf::from("words.txt")));
        assert_eq!(config.max_suggestions, 7);
    }

    #[test]
    fn test_policy_from_config() {
        let config = Config {
            ignore_patterns: vec!["(".to_string()],
            ..Default::default()
        };
        assert!(config.policy().is_err());
    }
}
