//! Encoder configuration and the validated option constructors.

use serde::Serialize;

use crate::errors::{ErrorInfo, GlitchError};

/// Default number of marks per side, per base character.
pub const DEFAULT_MAX_HEIGHT: u32 = 15;
/// Default randomization, as a percentage of the max height.
pub const DEFAULT_RANDOMIZATION_PERCENT: u8 = 100;

/// Validated encoder settings.
///
/// Values are only reachable through [`GlitchConfig::default`] and
/// [`GlitchConfig::from_options`], so `randomization_percent` always lies in
/// `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlitchConfig {
    include_top: bool,
    include_middle: bool,
    include_bottom: bool,
    max_height: u32,
    randomization_percent: u8,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            include_top: true,
            include_middle: true,
            include_bottom: true,
            max_height: DEFAULT_MAX_HEIGHT,
            randomization_percent: DEFAULT_RANDOMIZATION_PERCENT,
        }
    }
}

impl GlitchConfig {
    /// Applies `options` over the defaults; later options win.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = GlitchOption>,
    {
        let mut config = Self::default();
        for option in options {
            config.apply(option);
        }
        config
    }

    /// Applies a single override in place.
    pub fn apply(&mut self, option: GlitchOption) {
        match option.0 {
            OptionKind::Top(v) => self.include_top = v,
            OptionKind::Middle(v) => self.include_middle = v,
            OptionKind::Bottom(v) => self.include_bottom = v,
            OptionKind::MaxHeight(v) => self.max_height = v,
            OptionKind::Randomization(v) => self.randomization_percent = v,
        }
    }

    /// Whether marks are stacked above each character.
    pub fn include_top(&self) -> bool {
        self.include_top
    }

    /// Whether one overlay mark is drawn through each character.
    pub fn include_middle(&self) -> bool {
        self.include_middle
    }

    /// Whether marks are stacked below each character.
    pub fn include_bottom(&self) -> bool {
        self.include_bottom
    }

    /// Upper bound on top (and bottom) marks per character.
    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Percentage of `max_height` that may be randomly shaved off.
    pub fn randomization_percent(&self) -> u8 {
        self.randomization_percent
    }

    /// Share of `max_height` that may be randomly shaved off, in `[0, 1]`.
    pub fn randomization_fraction(&self) -> f64 {
        f64::from(self.randomization_percent) / 100.0
    }

    /// Smallest per-side count this configuration can produce.
    pub fn min_height(&self) -> u32 {
        let shaved = u64::from(self.randomization_percent) * u64::from(self.max_height) / 100;
        self.max_height.saturating_sub(shaved as u32)
    }

    /// Upper bound of the random amount subtracted from `max_height`.
    ///
    /// Computed from the integer percentage so whole results stay exact.
    pub(crate) fn randomization_span(&self) -> f64 {
        f64::from(self.randomization_percent) * f64::from(self.max_height) / 100.0
    }
}

/// A single validated override for [`GlitchConfig`].
///
/// Build options with [`with_top`], [`with_middle`], [`with_bottom`],
/// [`with_max_height`] and [`with_randomization`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchOption(OptionKind);

#[derive(Debug, Clone, Copy, PartialEq)]
enum OptionKind {
    Top(bool),
    Middle(bool),
    Bottom(bool),
    MaxHeight(u32),
    Randomization(u8),
}

/// Toggles marks above the characters.
pub fn with_top(enabled: bool) -> GlitchOption {
    GlitchOption(OptionKind::Top(enabled))
}

/// Toggles the overlay mark through the characters.
pub fn with_middle(enabled: bool) -> GlitchOption {
    GlitchOption(OptionKind::Middle(enabled))
}

/// Toggles marks below the characters.
pub fn with_bottom(enabled: bool) -> GlitchOption {
    GlitchOption(OptionKind::Bottom(enabled))
}

/// Sets how many marks go on top and bottom of each character.
///
/// Rejects negative heights.
pub fn with_max_height(height: i64) -> Result<GlitchOption, GlitchError> {
    if height < 0 {
        tracing::debug!(height, "rejected negative max height");
        return Err(GlitchError::Config(
            ErrorInfo::new("negative-max-height", "max height cannot be less than 0")
                .with_context("max_height", height)
                .with_hint("use 0 to disable top and bottom marks"),
        ));
    }
    let height = u32::try_from(height).map_err(|_| {
        GlitchError::Config(
            ErrorInfo::new("max-height-too-large", "max height does not fit in 32 bits")
                .with_context("max_height", height)
                .with_hint("use a height of at most 4294967295"),
        )
    })?;
    Ok(GlitchOption(OptionKind::MaxHeight(height)))
}

/// Sets the randomization percentage, 0 through 100.
///
/// With a max height of 100, 20% yields between 80 and 100 marks per side and
/// 70% yields between 30 and 100.
pub fn with_randomization(percent: i64) -> Result<GlitchOption, GlitchError> {
    if !(0..=100).contains(&percent) {
        tracing::debug!(percent, "rejected randomization percentage");
        return Err(GlitchError::Config(
            ErrorInfo::new(
                "randomization-out-of-range",
                "randomization needs to be between 0 and 100",
            )
            .with_context("randomization", percent)
            .with_hint("pass a whole percentage from 0 to 100"),
        ));
    }
    Ok(GlitchOption(OptionKind::Randomization(percent as u8)))
}
