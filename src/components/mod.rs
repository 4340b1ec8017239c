//! Hero section layers and the plumbing they share.

mod canvas;
pub mod debounce;
pub mod emoji_field;
pub mod frame_loop;
pub mod hero_text;
pub mod theme;
pub mod wave_banner;
