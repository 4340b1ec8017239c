//! Visual defaults for the hero layers.
//!
//! Provides the color type and the stock emoji palette.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	#[cfg(test)]
	fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string; hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Soft slate used for the wave stroke.
pub const WAVE_SLATE: Color = Color::rgba(163, 177, 198, 0.5);

/// Neumorphic page background the layers sit on.
pub const PAGE_BACKGROUND: Color = Color::rgb(224, 229, 236);

/// Stock emoji palette for the floating field.
pub const DEFAULT_GLYPHS: [&str; 12] = [
	"😀", "🚀", "🎉", "💡", "💖", "✨", "🌟", "🎈", "🍕", "🍦", "😎", "🥳",
];

/// Owned copy of [`DEFAULT_GLYPHS`].
pub fn default_palette() -> Vec<String> {
	DEFAULT_GLYPHS.iter().map(|g| g.to_string()).collect()
}
