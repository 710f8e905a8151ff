// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Lower zoom limit used when no valid override is configured.
pub const DEFAULT_MIN_ZOOM: f64 = 0.5;

/// Upper zoom limit used when no valid override is configured.
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;

/// Reason a zoom range override was refused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomBoundsError {
    /// The minimum is not strictly above [`DEFAULT_MIN_ZOOM`] (or is NaN).
    MinTooSmall {
        /// The rejected minimum.
        min: f64,
    },
    /// The minimum is not strictly below the maximum.
    Inverted {
        /// The rejected minimum.
        min: f64,
        /// The maximum it was compared against.
        max: f64,
    },
}

impl fmt::Display for ZoomBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinTooSmall { min } => write!(
                f,
                "minimum zoom {min} must be greater than {DEFAULT_MIN_ZOOM}"
            ),
            Self::Inverted { min, max } => write!(
                f,
                "minimum zoom {min} must be less than maximum zoom {max}"
            ),
        }
    }
}

impl core::error::Error for ZoomBoundsError {}

/// Validated `[min, max]` range for the content scale factor.
///
/// Overrides are only accepted while `DEFAULT_MIN_ZOOM < min < max`. Anything
/// else is refused and the previous range is kept, so a `ZoomBounds` is
/// always usable for clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBounds {
    min: f64,
    max: f64,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ZoomBounds {
    /// Returns the lower limit.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper limit.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Replaces both limits, or reports why the pair was refused.
    ///
    /// On error the current range is left untouched.
    pub fn try_set(&mut self, min: f64, max: f64) -> Result<(), ZoomBoundsError> {
        validate(min, max)?;
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Replaces both limits, keeping the current range if the pair is invalid.
    pub fn set(&mut self, min: f64, max: f64) {
        if let Err(err) = self.try_set(min, max) {
            log::warn!("ignoring zoom bounds ({min}, {max}): {err}");
        }
    }

    /// Replaces the lower limit, validated against the current upper limit.
    pub fn set_min(&mut self, min: f64) {
        self.set(min, self.max);
    }

    /// Replaces the upper limit, validated against the current lower limit.
    ///
    /// Only `max > min` is checked, so this also works while the lower limit
    /// is still at its default.
    pub fn set_max(&mut self, max: f64) {
        match check_order(self.min, max) {
            Ok(()) => self.max = max,
            Err(err) => log::warn!("ignoring maximum zoom {max}: {err}"),
        }
    }

    /// Clamps `scale` into the range.
    ///
    /// NaN is mapped to the lower limit.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min;
        }
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies within the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

fn validate(min: f64, max: f64) -> Result<(), ZoomBoundsError> {
    if min.is_nan() || min <= DEFAULT_MIN_ZOOM {
        return Err(ZoomBoundsError::MinTooSmall { min });
    }
    check_order(min, max)
}

fn check_order(min: f64, max: f64) -> Result<(), ZoomBoundsError> {
    if !max.is_finite() || min >= max {
        return Err(ZoomBoundsError::Inverted { min, max });
    }
    Ok(())
}
