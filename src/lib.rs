//! hero-motion: animated hero background for the community landing page.
//!
//! This crate provides two independent WASM canvas layers for the hero
//! section: a field of floating, bouncing emoji and a travelling sine-wave
//! background, each driven by its own cancellable frame loop.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod error;
pub mod random;

use components::hero_text::HeroHeadline;
use components::theme::PAGE_BACKGROUND;

pub use components::emoji_field::{EmojiField, FieldConfig};
pub use components::wave_banner::{WaveBanner, WaveConfig};
pub use config::HeroConfig;
pub use error::ConfigError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hero-motion: logging initialized");
}

/// Load hero settings from a script element with id="hero-config".
/// Expected format: JSON with optional { field: {...}, wave: {...} }.
/// Falls back to defaults when the element is absent or invalid.
fn load_hero_config() -> HeroConfig {
	let Some(json_text) = hero_config_text() else {
		return HeroConfig::default();
	};

	match HeroConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"hero-motion: loaded config ({} particles, {} glyphs)",
				config.field.count,
				config.field.palette.len()
			);
			config
		}
		Err(e) => {
			warn!("hero-motion: ignoring hero config: {}", e);
			HeroConfig::default()
		}
	}
}

fn hero_config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("hero-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Renders the hero section with both animated layers behind the headline.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let HeroConfig { field, wave } = load_hero_config();
	let hero_style = format!(
		"position: relative; overflow: hidden; min-height: 80vh; background: {};",
		PAGE_BACKGROUND.to_css()
	);

	view! {
		<Html attr:lang="id" attr:dir="ltr" />
		<Title text="IMPHNEN" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero" style=hero_style>
			<WaveBanner config=wave />
			<EmojiField config=field />
			<div class="hero-content" style="position: relative; z-index: 2;">
				<HeroHeadline />
			</div>
		</section>
	}
}
