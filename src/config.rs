//! Application configuration
//!
//! Defaults are usable as-is; builder methods and environment variables
//! override them. Recognized variables:
//!
//! - `DICEBOX_MODEL` - path of the OBJ model
//! - `DICEBOX_SEED` - `u64` seed for the roll random source
//! - `DICEBOX_VSYNC` - `1`/`true` or `0`/`false`

use std::path::PathBuf;

use log::warn;

use crate::animation::RollConfig;

pub const MODEL_ENV: &str = "DICEBOX_MODEL";
pub const SEED_ENV: &str = "DICEBOX_SEED";
pub const VSYNC_ENV: &str = "DICEBOX_VSYNC";

/// Top-level configuration for the dice application
#[derive(Debug, Clone, PartialEq)]
pub struct DiceConfig {
    pub model_path: PathBuf,
    pub window_title: String,
    pub window_size: (u32, u32),
    pub vsync: bool,
    /// Fixed seed for reproducible rolls, `None` to seed from the OS
    pub seed: Option<u64>,
    pub roll: RollConfig,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("assets/dice.obj"),
            window_title: "Dicebox".to_string(),
            window_size: (1200, 800),
            vsync: true,
            seed: None,
            roll: RollConfig::default(),
        }
    }
}

impl DiceConfig {
    /// Default configuration with environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from a variable lookup.
    ///
    /// Unparsable values are logged and ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(MODEL_ENV).filter(|p| !p.is_empty()) {
            self.model_path = PathBuf::from(path);
        }

        if let Some(seed) = lookup(SEED_ENV) {
            match seed.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => warn!("Ignoring {}={:?}: {}", SEED_ENV, seed, e),
            }
        }

        if let Some(vsync) = lookup(VSYNC_ENV) {
            match parse_flag(&vsync) {
                Some(vsync) => self.vsync = vsync,
                None => warn!("Ignoring {}={:?}: expected 0/1/true/false", VSYNC_ENV, vsync),
            }
        }

        self
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_roll(mut self, roll: RollConfig) -> Self {
        self.roll = roll;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = DiceConfig::default().with_env_overrides(lookup_from(&[]));
        assert_eq!(config, DiceConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = DiceConfig::default().with_env_overrides(lookup_from(&[
            (MODEL_ENV, "models/d6.obj"),
            (SEED_ENV, " 1234 "),
            (VSYNC_ENV, "off"),
        ]));

        assert_eq!(config.model_path, PathBuf::from("models/d6.obj"));
        assert_eq!(config.seed, Some(1234));
        assert!(!config.vsync);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = DiceConfig::default().with_env_overrides(lookup_from(&[
            (SEED_ENV, "not-a-number"),
            (VSYNC_ENV, "maybe"),
            (MODEL_ENV, ""),
        ]));

        assert_eq!(config, DiceConfig::default());
    }

    #[test]
    fn test_builder_methods() {
        let config = DiceConfig::default()
            .with_model_path("bunny.obj")
            .with_window_size(640, 480)
            .with_seed(5)
            .with_vsync(false);

        assert_eq!(config.model_path, PathBuf::from("bunny.obj"));
        assert_eq!(config.window_size, (640, 480));
        assert_eq!(config.seed, Some(5));
        assert!(!config.vsync);
    }
}
