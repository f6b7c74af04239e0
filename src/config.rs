use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::Predictions;

/// Starting score of each prediction before boosters are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Baselines {
    pub reply: i32,
    pub favorite: i32,
    pub click: i32,
    pub repost: i32,
    pub follow_author: i32,
}

impl Default for Baselines {
    fn default() -> Self {
        let predictions = Predictions::default();
        Self {
            reply: predictions.reply,
            favorite: predictions.favorite,
            click: predictions.click,
            repost: predictions.repost,
            follow_author: predictions.follow_author,
        }
    }
}

impl Baselines {
    pub fn to_predictions(&self) -> Predictions {
        Predictions {
            reply: self.reply,
            favorite: self.favorite,
            click: self.click,
            repost: self.repost,
            follow_author: self.follow_author,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateWeights {
    pub predictions: f64,
    pub content_quality: f64,
    pub format: f64,
    pub safety: f64,
}

impl Default for AggregateWeights {
    fn default() -> Self {
        Self {
            predictions: 0.5,
            content_quality: 0.2,
            format: 0.15,
            safety: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub ideal_min_chars: usize,
    pub ideal_max_chars: usize,
    pub short_chars: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            ideal_min_chars: 100,
            ideal_max_chars: 200,
            short_chars: 50,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub baselines: Baselines,
    pub aggregate: AggregateWeights,
    pub format: FormatConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                EngineConfig::default()
            }
        } else {
            EngineConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| format!("failed to create config dir: {}", err))?;
            }
        }
        let payload = self.to_toml()?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|err| format!("failed to serialize config: {}", err))
    }

    fn apply_env_overrides(&mut self) {
        override_from_env("POST_OPTIMIZER_REPLY_BASELINE", &mut self.baselines.reply);
        override_from_env("POST_OPTIMIZER_FAVORITE_BASELINE", &mut self.baselines.favorite);
        override_from_env("POST_OPTIMIZER_CLICK_BASELINE", &mut self.baselines.click);
        override_from_env("POST_OPTIMIZER_REPOST_BASELINE", &mut self.baselines.repost);
        override_from_env(
            "POST_OPTIMIZER_FOLLOW_BASELINE",
            &mut self.baselines.follow_author,
        );
        override_from_env(
            "POST_OPTIMIZER_PREDICTION_WEIGHT",
            &mut self.aggregate.predictions,
        );
        override_from_env(
            "POST_OPTIMIZER_QUALITY_WEIGHT",
            &mut self.aggregate.content_quality,
        );
        override_from_env("POST_OPTIMIZER_FORMAT_WEIGHT", &mut self.aggregate.format);
        override_from_env("POST_OPTIMIZER_SAFETY_WEIGHT", &mut self.aggregate.safety);
    }
}

fn override_from_env<T: FromStr>(name: &str, target: &mut T) {
    if let Ok(value) = env::var(name) {
        if let Ok(parsed) = value.trim().parse::<T>() {
            *target = parsed;
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("POST_OPTIMIZER_CONFIG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/engine.toml")))
}
