//! Configuration errors.
//!
//! The animation engines themselves never fail at runtime; anything that can go
//! wrong is caught when the configuration is built.

use thiserror::Error;

/// A configuration value the engines cannot run with.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The particle field needs at least one particle.
	#[error("particle count must be positive")]
	ZeroCount,

	/// No glyphs to choose from.
	#[error("glyph palette is empty")]
	EmptyPalette,

	/// A palette entry renders as nothing.
	#[error("glyph palette entry {index} is blank")]
	BlankGlyph {
		/// Position of the offending entry.
		index: usize,
	},

	/// A size or width that must be strictly positive.
	#[error("{name} must be positive and finite, got {value}")]
	NonPositive {
		/// Field name.
		name: &'static str,
		/// Rejected value.
		value: f64,
	},

	/// A magnitude that must be zero or more.
	#[error("{name} must be non-negative and finite, got {value}")]
	Negative {
		/// Field name.
		name: &'static str,
		/// Rejected value.
		value: f64,
	},

	/// NaN or infinite where a plain number is required.
	#[error("{name} must be finite, got {value}")]
	NotFinite {
		/// Field name.
		name: &'static str,
		/// Rejected value.
		value: f64,
	},

	/// Opacity bounds outside `[0, 1]` or inverted.
	#[error("opacity range {min}..{max} must satisfy 0 <= min <= max <= 1")]
	OpacityRange {
		/// Lower bound.
		min: f64,
		/// Upper bound.
		max: f64,
	},

	/// Debounce needs a quiet period to wait for.
	#[error("resize debounce must be at least 1 ms")]
	ZeroDebounce,

	/// The embedded JSON could not be decoded.
	#[error("invalid hero config JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Rejects NaN and infinities.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
	if value.is_finite() {
		Ok(value)
	} else {
		Err(ConfigError::NotFinite { name, value })
	}
}

/// Requires `value > 0`.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
	if value.is_finite() && value > 0.0 {
		Ok(value)
	} else {
		Err(ConfigError::NonPositive { name, value })
	}
}

/// Requires `value >= 0`.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, ConfigError> {
	if value.is_finite() && value >= 0.0 {
		Ok(value)
	} else {
		Err(ConfigError::Negative { name, value })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages_name_the_field() {
		let err = positive("glyph_size", 0.0).unwrap_err();
		assert_eq!(err.to_string(), "glyph_size must be positive and finite, got 0");

		let err = non_negative("max_speed", -1.0).unwrap_err();
		assert!(err.to_string().starts_with("max_speed"));
	}

	#[test]
	fn test_nan_is_rejected_everywhere() {
		assert!(finite("phase", f64::NAN).is_err());
		assert!(positive("amplitude", f64::NAN).is_err());
		assert!(non_negative("speed", f64::INFINITY).is_err());
		assert_eq!(non_negative("speed", 0.0).unwrap(), 0.0);
	}
}
