//! Waveform background layer.
//!
//! A single sine curve whose phase advances every frame, stroked across a
//! canvas that tracks its container's size.

mod component;
pub mod config;
mod render;
pub mod wave;

pub use component::WaveBanner;
pub use config::WaveConfig;
pub use wave::{Surface, WaveRenderer, WaveState, wave_y};
