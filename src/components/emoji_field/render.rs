//! Canvas projection of the emoji field.
//!
//! Sprites rotate about the center of their glyph box, the same pivot a CSS
//! `translate(...) rotate(...)` transform uses, with the particle's opacity as
//! the global alpha.

use web_sys::CanvasRenderingContext2d;

use super::config::FieldConfig;
use super::particles::Sprite;

/// Clears the surface and draws every sprite.
pub fn render<'a>(
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	config: &FieldConfig,
	sprites: impl Iterator<Item = Sprite<'a>>,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	ctx.set_font(&format!("{}px sans-serif", config.font_size));
	ctx.set_text_baseline("top");
	ctx.set_fill_style_str("#000");

	let half = config.glyph_size / 2.0;
	for sprite in sprites {
		draw_sprite(ctx, &sprite, half);
	}

	ctx.set_global_alpha(1.0);
}

fn draw_sprite(ctx: &CanvasRenderingContext2d, sprite: &Sprite<'_>, half: f64) {
	ctx.save();
	let _ = ctx.translate(sprite.x + half, sprite.y + half);
	let _ = ctx.rotate(sprite.rotation.to_radians());
	ctx.set_global_alpha(sprite.opacity);
	let _ = ctx.fill_text(sprite.glyph, -half, -half);
	ctx.restore();
}
