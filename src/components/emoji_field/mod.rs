//! Floating emoji layer.
//!
//! A fixed-size population of glyphs drifts across the hero section, bouncing
//! elastically off its edges while slowly spinning:
//! - Pure seeding and stepping over particle slices ([`initialize`], [`advance`])
//! - A [`ParticleField`] controller with injectable randomness
//! - A canvas-backed [`EmojiField`] component with debounced reseed on resize
//!
//! # Example
//!
//! ```ignore
//! use hero_motion::{EmojiField, FieldConfig};
//!
//! view! {
//!     <section style="position: relative; height: 480px;">
//!         <EmojiField config=FieldConfig::default() />
//!     </section>
//! }
//! ```

mod component;
pub mod config;
pub mod particles;
mod render;

pub use component::EmojiField;
pub use config::FieldConfig;
pub use particles::{Bounds, Particle, ParticleField, Sprite, advance, initialize};
