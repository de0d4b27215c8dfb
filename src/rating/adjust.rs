//! Staged rating for assistive-technology adjustment.
//!
//! The staged value moves with increment/decrement actions and only becomes
//! the committed rating when the user activates. External rating updates are
//! the only way it is resynchronised.

use super::{format_rating, Granularity};
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the staged value in every label template.
pub const VALUE_TOKEN: &str = "%value%";

/// Replace every `%value%` in `template` with `value`.
pub fn fill_template(template: &str, value: f64) -> String {
    template.replace(VALUE_TOKEN, &format_rating(value))
}

/// Label templates read out by assistive technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct A11yLabels {
    /// Widget label; may contain `%value%`.
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_increment_label")]
    pub increment: String,
    #[serde(default = "default_decrement_label")]
    pub decrement: String,
    #[serde(default = "default_activate_label")]
    pub activate: String,
    /// Announced while adjusting; may contain `%value%`.
    #[serde(default = "default_adjustment_label")]
    pub adjustment: String,
}

impl Default for A11yLabels {
    fn default() -> Self {
        Self {
            label: default_label(),
            increment: default_increment_label(),
            decrement: default_decrement_label(),
            activate: default_activate_label(),
            adjustment: default_adjustment_label(),
        }
    }
}

fn default_label() -> String {
    "star rating. %value% stars. use custom actions to set rating.".to_string()
}
fn default_increment_label() -> String {
    "increment".to_string()
}
fn default_decrement_label() -> String {
    "decrement".to_string()
}
fn default_activate_label() -> String {
    "activate (default)".to_string()
}
fn default_adjustment_label() -> String {
    "%value% stars".to_string()
}

/// Accessibility actions the rating understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum A11yAction {
    Increment,
    Decrement,
    Activate,
}

/// What an accessibility action produced.
#[derive(Debug, Clone, PartialEq)]
pub enum A11yOutcome {
    /// Text to announce after an increment or decrement.
    Announce(String),
    /// Staged value to commit as the new rating.
    Commit(f64),
}

/// Accessibility value range: `now` lies in `[min, max]` in step units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct A11yValue {
    pub min: u32,
    pub max: u32,
    pub now: i64,
}

impl A11yValue {
    pub fn new(rating: f64, max_stars: usize, granularity: Granularity) -> Self {
        let multiplier = granularity.multiplier();
        Self {
            min: 0,
            max: max_stars as u32 * multiplier,
            now: (rating * f64::from(multiplier)).round() as i64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdjustableRating {
    staged: f64,
    max_stars: usize,
    granularity: Granularity,
}

impl AdjustableRating {
    pub fn new(rating: f64, max_stars: usize, granularity: Granularity) -> Self {
        Self {
            staged: rating,
            max_stars,
            granularity,
        }
    }

    pub fn staged(&self) -> f64 {
        self.staged
    }

    /// Resynchronise with an externally supplied rating.
    pub fn sync(&mut self, rating: f64) {
        self.staged = rating;
    }

    pub fn reconfigure(&mut self, max_stars: usize, granularity: Granularity) {
        self.max_stars = max_stars;
        self.granularity = granularity;
    }

    /// Step up, saturating at `max_stars`. Returns the value to announce.
    pub fn increment(&mut self) -> f64 {
        let max = self.max_stars as f64;
        if self.staged >= max {
            return max;
        }
        self.staged = (self.staged + self.granularity.step_size()).min(max);
        self.staged
    }

    /// Step down, saturating at 0. Returns the value to announce.
    pub fn decrement(&mut self) -> f64 {
        if self.staged <= 0.0 {
            return 0.0;
        }
        self.staged = (self.staged - self.granularity.step_size()).max(0.0);
        self.staged
    }

    pub fn apply(&mut self, action: A11yAction, labels: &A11yLabels) -> A11yOutcome {
        let outcome = match action {
            A11yAction::Increment => {
                A11yOutcome::Announce(fill_template(&labels.adjustment, self.increment()))
            }
            A11yAction::Decrement => {
                A11yOutcome::Announce(fill_template(&labels.adjustment, self.decrement()))
            }
            A11yAction::Activate => A11yOutcome::Commit(self.staged),
        };
        tracing::debug!(?action, staged = self.staged, "accessibility action");
        outcome
    }

    /// Widget label with the staged value substituted.
    pub fn label(&self, labels: &A11yLabels) -> String {
        fill_template(&labels.label, self.staged)
    }
}
