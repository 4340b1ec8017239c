//! Tunables for the floating emoji field.

use serde::Deserialize;

use crate::components::theme::default_palette;
use crate::error::{ConfigError, non_negative, positive};

/// Particle field configuration. Build through [`FieldConfig::validate`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Particles per population.
	pub count: usize,
	/// Glyphs drawn uniformly at seed time.
	pub palette: Vec<String>,
	/// Approximate glyph bounding box in px, used for the travel bounds.
	pub glyph_size: f64,
	/// Per-axis velocity bound in px/tick.
	pub max_speed: f64,
	/// Rotation speed bound in degrees/tick.
	pub max_rotation_speed: f64,
	/// Lowest particle opacity.
	pub opacity_min: f64,
	/// Highest particle opacity.
	pub opacity_max: f64,
	/// Rendered font size in px.
	pub font_size: f64,
	/// Quiet period before a resize reseeds the field.
	pub resize_debounce_ms: u32,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 30,
			palette: default_palette(),
			glyph_size: 32.0,
			max_speed: 0.25,
			max_rotation_speed: 0.1,
			opacity_min: 0.1,
			opacity_max: 0.6,
			font_size: 32.0,
			resize_debounce_ms: 250,
		}
	}
}

impl FieldConfig {
	/// Checks every field, returning the config unchanged when usable.
	pub fn validate(self) -> Result<Self, ConfigError> {
		if self.count == 0 {
			return Err(ConfigError::ZeroCount);
		}
		if self.palette.is_empty() {
			return Err(ConfigError::EmptyPalette);
		}
		if let Some(index) = self.palette.iter().position(|g| g.trim().is_empty()) {
			return Err(ConfigError::BlankGlyph { index });
		}
		positive("glyph_size", self.glyph_size)?;
		positive("font_size", self.font_size)?;
		non_negative("max_speed", self.max_speed)?;
		non_negative("max_rotation_speed", self.max_rotation_speed)?;
		let (min, max) = (self.opacity_min, self.opacity_max);
		if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
			return Err(ConfigError::OpacityRange { min, max });
		}
		if self.resize_debounce_ms == 0 {
			return Err(ConfigError::ZeroDebounce);
		}
		Ok(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_are_valid() {
		let cfg = FieldConfig::default().validate().unwrap();
		assert_eq!(cfg.count, 30);
		assert_eq!(cfg.palette.len(), 12);
		assert_eq!(cfg.glyph_size, 32.0);
	}

	#[test]
	fn test_rejects_caller_mistakes() {
		let zero = FieldConfig {
			count: 0,
			..Default::default()
		};
		assert!(matches!(zero.validate(), Err(ConfigError::ZeroCount)));

		let empty = FieldConfig {
			palette: vec![],
			..Default::default()
		};
		assert!(matches!(empty.validate(), Err(ConfigError::EmptyPalette)));

		let blank = FieldConfig {
			palette: vec!["🚀".into(), " ".into()],
			..Default::default()
		};
		assert!(matches!(
			blank.validate(),
			Err(ConfigError::BlankGlyph { index: 1 })
		));

		let inverted = FieldConfig {
			opacity_min: 0.7,
			opacity_max: 0.2,
			..Default::default()
		};
		assert!(matches!(
			inverted.validate(),
			Err(ConfigError::OpacityRange { .. })
		));

		let glyph = FieldConfig {
			glyph_size: -4.0,
			..Default::default()
		};
		assert!(matches!(
			glyph.validate(),
			Err(ConfigError::NonPositive {
				name: "glyph_size",
				..
			})
		));
	}

	#[test]
	fn test_partial_json_keeps_defaults() {
		let cfg: FieldConfig = serde_json::from_str(r#"{"count": 5, "palette": ["🦀"]}"#).unwrap();
		assert_eq!(cfg.count, 5);
		assert_eq!(cfg.palette, vec!["🦀".to_string()]);
		assert_eq!(cfg.max_speed, 0.25);
		assert_eq!(cfg.resize_debounce_ms, 250);
	}
}
