//! Page-supplied configuration for both hero layers.

use serde::Deserialize;

use crate::components::emoji_field::FieldConfig;
use crate::components::wave_banner::WaveConfig;
use crate::error::ConfigError;

/// Settings for the whole hero section. Every field is optional in JSON.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
	/// Floating emoji layer.
	pub field: FieldConfig,
	/// Waveform layer.
	pub wave: WaveConfig,
}

impl HeroConfig {
	/// Validates both layers.
	pub fn validate(self) -> Result<Self, ConfigError> {
		Ok(Self {
			field: self.field.validate()?,
			wave: self.wave.validate()?,
		})
	}

	/// Decodes and validates a JSON document.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		serde_json::from_str::<Self>(json)?.validate()
	}
}
