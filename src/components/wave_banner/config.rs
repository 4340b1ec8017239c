//! Wave shape and motion settings.

use serde::Deserialize;

use crate::components::theme::{Color, WAVE_SLATE};
use crate::error::{ConfigError, finite, positive};

/// Waveform configuration. Build through [`WaveConfig::validate`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
	/// Peak displacement in px.
	pub amplitude: f64,
	/// Radians per px.
	pub frequency: f64,
	/// Phase advance per tick, in radians.
	pub speed: f64,
	/// Baseline as a fraction of the surface height (0.5 = middle).
	pub vertical_offset: f64,
	/// Stroke color.
	pub color: Color,
	/// Stroke width in px.
	pub line_width: f64,
}

impl Default for WaveConfig {
	fn default() -> Self {
		Self {
			amplitude: 30.0,
			frequency: 0.01,
			speed: 0.03,
			vertical_offset: 0.7,
			color: WAVE_SLATE,
			line_width: 5.0,
		}
	}
}

impl WaveConfig {
	/// Checks every field, returning the config unchanged when usable.
	pub fn validate(self) -> Result<Self, ConfigError> {
		finite("amplitude", self.amplitude)?;
		finite("frequency", self.frequency)?;
		finite("speed", self.speed)?;
		finite("vertical_offset", self.vertical_offset)?;
		finite("color.a", self.color.a)?;
		positive("line_width", self.line_width)?;
		Ok(self)
	}
}
