//! JSON encode profiles: a reusable set of overrides layered under CLI flags.

use std::error::Error;
use std::fs;
use std::path::Path;

use glitch_core::{
    with_bottom, with_max_height, with_middle, with_randomization, with_top, GlitchError,
    GlitchOption,
};
use serde::Deserialize;

/// Overrides read from `--config`. Absent fields keep the encoder defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodeProfile {
    pub top: Option<bool>,
    pub middle: Option<bool>,
    pub bottom: Option<bool>,
    pub max_height: Option<i64>,
    /// Percentage, 0 through 100.
    pub randomization: Option<i64>,
}

impl EncodeProfile {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let body = fs::read_to_string(path)
            .map_err(|err| format!("failed to read profile {}: {err}", path.display()))?;
        let profile: EncodeProfile = serde_json::from_str(&body)
            .map_err(|err| format!("invalid profile {}: {err}", path.display()))?;
        tracing::debug!(path = %path.display(), ?profile, "loaded encode profile");
        Ok(profile)
    }

    /// Converts the profile into validated options, rejecting out-of-range values.
    pub fn to_options(&self) -> Result<Vec<GlitchOption>, GlitchError> {
        let mut options = Vec::new();
        if let Some(v) = self.top {
            options.push(with_top(v));
        }
        if let Some(v) = self.middle {
            options.push(with_middle(v));
        }
        if let Some(v) = self.bottom {
            options.push(with_bottom(v));
        }
        if let Some(v) = self.max_height {
            options.push(with_max_height(v)?);
        }
        if let Some(v) = self.randomization {
            options.push(with_randomization(v)?);
        }
        Ok(options)
    }
}
