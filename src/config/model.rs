//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the gallery works without a config file.

use crate::error::{ConfigError, ConfigResult};
use crate::rating::adjust::A11yLabels;
use crate::rating::Granularity;
use crate::widget::{AnimationConfig, DisplayProps, StarRatingProps};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub rating: RatingConfig,
    #[serde(default)]
    pub labels: A11yLabels,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied to every rating in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    #[serde(default = "default_max_stars")]
    pub max_stars: usize,
    #[serde(default = "default_star_size")]
    pub star_size: u16,
    #[serde(default = "default_star_spacing")]
    pub star_spacing: u16,
    /// Colour name or `#rrggbb`.
    #[serde(default = "default_color")]
    pub color: String,
    /// Unset means "same as `color`".
    #[serde(default)]
    pub empty_color: Option<String>,
    #[serde(default)]
    pub step: Granularity,
    #[serde(default = "default_true")]
    pub enable_swiping: bool,
    #[serde(default)]
    pub right_to_left: bool,
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            max_stars: default_max_stars(),
            star_size: default_star_size(),
            star_spacing: default_star_spacing(),
            color: default_color(),
            empty_color: None,
            step: Granularity::default(),
            enable_swiping: true,
            right_to_left: false,
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl RatingConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_stars == 0 {
            return Err(ConfigError::NoStars);
        }
        parse_color(&self.color)?;
        if let Some(empty) = &self.empty_color {
            parse_color(empty)?;
        }
        Ok(())
    }

    pub fn to_props(&self, labels: &A11yLabels) -> ConfigResult<StarRatingProps> {
        self.validate()?;
        let display = DisplayProps {
            max_stars: self.max_stars,
            star_size: self.star_size.max(1),
            star_spacing: self.star_spacing,
            color: parse_color(&self.color)?,
            empty_color: self.empty_color.as_deref().map(parse_color).transpose()?,
            step: self.step,
            right_to_left: self.right_to_left,
            ..DisplayProps::default()
        };
        Ok(StarRatingProps {
            display,
            enable_swiping: self.enable_swiping,
            animation: AnimationConfig {
                delay: Duration::from_millis(self.settle_delay_ms),
                ..AnimationConfig::default()
            },
            labels: labels.clone(),
        })
    }
}

/// Diagnostic log settings. `RUST_LOG` overrides `level` when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

pub fn parse_color(s: &str) -> ConfigResult<Color> {
    Color::from_str(s.trim()).map_err(|_| ConfigError::InvalidColor(s.to_string()))
}

fn default_max_stars() -> usize {
    5
}
fn default_star_size() -> u16 {
    2
}
fn default_star_spacing() -> u16 {
    1
}
fn default_color() -> String {
    "#fdd835".to_string()
}
fn default_true() -> bool {
    true
}
fn default_settle_delay_ms() -> u64 {
    300
}
fn default_log_level() -> String {
    "warn".to_string()
}
// `<data_local_dir>/starling/logs`, e.g. `~/.local/share/starling/logs` on Linux.
fn default_log_dir() -> String {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("starling").join("logs").display().to_string(),
        None => "~/.local/share/starling/logs".to_string(),
    }
}
