//! Launch records and the per-site outcome counts derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary launch outcome, stored in the dataset's `class` column as 1 / 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Map a raw `class` value onto an outcome. Anything but 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// Numeric class value as plotted on the scatter chart's y axis.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    /// Display label used in the pie chart and hover text.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Successful",
            Outcome::Failure => "Failed",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One launch attempt. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }
}

/// Number of launches with a given outcome at a given site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOutcomeCount {
    pub launch_site: String,
    pub outcome: Outcome,
    /// "Successful" or "Failed"
    pub result: String,
    pub count: usize,
    /// Hover text, e.g. `"CCAFS LC-40\n 7 Successful Launches"`
    pub hover: String,
}

impl SiteOutcomeCount {
    pub fn new(launch_site: impl Into<String>, outcome: Outcome, count: usize) -> Self {
        let launch_site = launch_site.into();
        let hover = format!("{}\n {} {} Launches", launch_site, count, outcome.label());
        Self {
            launch_site,
            outcome,
            result: outcome.label().to_string(),
            count,
            hover,
        }
    }
}
