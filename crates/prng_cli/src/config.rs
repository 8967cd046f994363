//! Optional JSON configuration.
//!
//! Lookup order: `--config <path>`, then `<config dir>/prngs/config.json` if it exists, then
//! built-in defaults. Command-line flags override whatever the file sets.

use std::fs;
use std::path::{Path, PathBuf};

use prngs::{Algorithm, GeneratorConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::args::Args;
use crate::error::CliError;

pub const DEMO_SEED: i64 = 125;

fn default_count() -> usize {
    50
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub seed: Option<i64>,
    #[serde(default)]
    pub carry: Option<i64>,
    #[serde(default = "default_count")]
    pub count: usize,
    // Generators printed by `demo`, in order.
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
    #[serde(default)]
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            carry: None,
            count: default_count(),
            algorithms: default_algorithms(),
            json: false,
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("prngs").join("config.json"))
}

impl CliConfig {
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match default_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = fs::read_to_string(&path).map_err(|source| CliError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let cfg: Self = serde_json::from_str(&text)
            .map_err(|source| CliError::ConfigParse {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }
}

/// Effective settings after layering flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub count: usize,
    pub algorithms: Vec<Algorithm>,
    pub json: bool,
}

impl Settings {
    pub fn resolve(args: &Args, cfg: &CliConfig) -> Self {
        Self {
            generator: GeneratorConfig {
                seed: args.seed.or(cfg.seed),
                carry: args.carry.or(cfg.carry),
            },
            count: args.count.unwrap_or(cfg.count),
            algorithms: cfg.algorithms.clone(),
            json: args.json || cfg.json,
        }
    }

    /// The demo always runs from a fixed seed unless one was given.
    pub fn demo_generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(self.generator.seed.unwrap_or(DEMO_SEED)),
            carry: self.generator.carry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn empty_object_is_defaults() {
        let cfg: CliConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, CliConfig::default());
        assert_eq!(cfg.count, 50);
        assert_eq!(cfg.algorithms, Algorithm::ALL.to_vec());
    }

    #[test]
    fn algorithm_names_in_config() {
        let cfg: CliConfig =
            serde_json::from_str(r#"{"algorithms": ["xor", "lcg", "xorshift"], "seed": 9}"#)
                .unwrap();
        assert_eq!(
            cfg.algorithms,
            vec![Algorithm::Xorshift, Algorithm::Lcg, Algorithm::Xorshift]
        );
        assert_eq!(cfg.seed, Some(9));
    }

    #[test]
    fn flags_override_file() {
        let cfg = CliConfig {
            seed: Some(1),
            carry: Some(2),
            count: 3,
            algorithms: vec![Algorithm::Bbs],
            json: false,
        };
        let args = args::parse(
            ["--seed", "10", "--count", "4", "--json"]
                .iter()
                .map(|s| s.to_string()),
        )
        .unwrap();

        let s = Settings::resolve(&args, &cfg);
        assert_eq!(s.generator.seed, Some(10));
        assert_eq!(s.generator.carry, Some(2));
        assert_eq!(s.count, 4);
        assert_eq!(s.algorithms, vec![Algorithm::Bbs]);
        assert!(s.json);
    }

    #[test]
    fn demo_falls_back_to_fixed_seed() {
        let args = args::parse(Vec::new()).unwrap();
        let s = Settings::resolve(&args, &CliConfig::default());
        assert_eq!(s.generator.seed, None);
        assert_eq!(s.demo_generator().seed, Some(DEMO_SEED));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("prngs-config-that-does-not-exist.json");
        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("prngs-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"seed": 125, "count": 3, "json": true}"#).unwrap();
        let cfg = CliConfig::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(cfg.seed, Some(125));
        assert_eq!(cfg.count, 3);
        assert!(cfg.json);
        assert_eq!(cfg.algorithms, Algorithm::ALL.to_vec());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!("prngs-bad-{}.json", std::process::id()));
        fs::write(&path, "{ seed: ").unwrap();
        let err = CliConfig::load(Some(&path)).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, CliError::ConfigParse { .. }));
    }
}
