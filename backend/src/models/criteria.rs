//! Filter criteria built from the dashboard controls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the "all sites" dropdown entry.
pub const ALL_SITES: &str = "ALL";

/// Display text of the "all sites" dropdown entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Dropdown selection: every site, or one specific site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a dropdown value.
    ///
    /// Only the exact `"ALL"` sentinel selects every site. Any other value is
    /// kept verbatim, so an empty or padded name matches no launch site.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Value as sent by the dropdown.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// Text substituted into chart titles.
    pub fn display_name(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_LABEL,
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl Serialize for SiteSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for SiteSelection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SiteSelection::parse(&value))
    }
}

/// Inclusive payload mass range in kilograms.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.min && payload_mass_kg <= self.max
    }

    /// Normalize a requested range against the dataset bounds.
    ///
    /// Missing or non-finite bounds fall back to the dataset bound, a reversed
    /// range is swapped, and both ends are clamped into `bounds`.
    pub fn normalized(min: Option<f64>, max: Option<f64>, bounds: PayloadRange) -> Self {
        let min = min.filter(|v| v.is_finite()).unwrap_or(bounds.min);
        let max = max.filter(|v| v.is_finite()).unwrap_or(bounds.max);
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: lo.clamp(bounds.min, bounds.max),
            max: hi.clamp(bounds.min, bounds.max),
        }
    }
}

/// Transient filter built for one dashboard interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl FilterCriteria {
    pub fn new(site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }
}
