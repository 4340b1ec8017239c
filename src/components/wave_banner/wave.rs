//! Phase-driven sine curve painted across a drawing surface.

use log::debug;

use super::config::WaveConfig;
use crate::error::ConfigError;

/// Minimal drawing surface the wave needs.
pub trait Surface {
	/// Clears `width` x `height` from the origin.
	fn clear(&self, width: f64, height: f64);
	/// Starts a new path at a point.
	fn start_path(&self, x: f64, y: f64);
	/// Adds a straight segment to the current path.
	fn extend_path(&self, x: f64, y: f64);
	/// Strokes the current path.
	fn stroke_path(&self, style: &str, line_width: f64);
}

/// Animated state of the curve.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveState {
	/// Accumulated phase in radians; never wrapped.
	pub phase: f64,
	/// Surface width in px.
	pub width: u32,
	/// Surface height in px.
	pub height: u32,
}

/// Curve height at column `x` for a given phase.
pub fn wave_y(x: f64, phase: f64, height: f64, config: &WaveConfig) -> f64 {
	(x * config.frequency + phase).sin() * config.amplitude + height * config.vertical_offset
}

/// Owns the wave state and, once available, the surface it paints.
pub struct WaveRenderer<S> {
	config: WaveConfig,
	stroke_style: String,
	state: WaveState,
	surface: Option<S>,
}

impl<S: Surface> WaveRenderer<S> {
	/// Renderer at phase zero with no surface yet. Rejects an invalid config.
	pub fn new(config: WaveConfig) -> Result<Self, ConfigError> {
		let config = config.validate()?;
		let stroke_style = config.color.to_css();
		Ok(Self {
			config,
			stroke_style,
			state: WaveState::default(),
			surface: None,
		})
	}

	/// Takes ownership of the surface and paints it right away.
	pub fn attach(&mut self, surface: S) {
		self.surface = Some(surface);
		self.repaint();
	}

	/// Whether a surface is attached.
	pub fn has_surface(&self) -> bool {
		self.surface.is_some()
	}

	/// The attached surface.
	#[cfg(test)]
	fn surface(&self) -> Option<&S> {
		self.surface.as_ref()
	}

	/// Current phase and size.
	pub fn state(&self) -> WaveState {
		self.state
	}

	/// Advances the phase one tick and repaints.
	pub fn tick(&mut self) {
		self.state.phase += self.config.speed;
		self.repaint();
	}

	/// Adopts a new surface size and repaints immediately at the current phase.
	///
	/// A zero dimension means the container is not laid out yet; the call is
	/// ignored and `false` returned.
	pub fn resize(&mut self, width: u32, height: u32) -> bool {
		if width == 0 || height == 0 {
			debug!("hero-motion: wave resize to {}x{} ignored", width, height);
			return false;
		}
		self.state.width = width;
		self.state.height = height;
		self.repaint();
		true
	}

	/// Clears and strokes the curve. Returns `false` when there is no surface.
	pub fn repaint(&self) -> bool {
		let Some(surface) = &self.surface else {
			return false;
		};
		let (width, height) = (self.state.width as f64, self.state.height as f64);
		surface.clear(width, height);
		if self.state.width == 0 {
			return true;
		}

		surface.start_path(0.0, wave_y(0.0, self.state.phase, height, &self.config));
		for x in 1..self.state.width {
			let x = x as f64;
			surface.extend_path(x, wave_y(x, self.state.phase, height, &self.config));
		}
		surface.stroke_path(&self.stroke_style, self.config.line_width);
		true
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		Start(f64, f64),
		Extend(f64, f64),
		Stroke(String, f64),
	}

	#[derive(Default)]
	struct Recorder {
		ops: RefCell<Vec<Op>>,
	}

	impl Recorder {
		fn take(&self) -> Vec<Op> {
			self.ops.take()
		}
	}

	impl Surface for Recorder {
		fn clear(&self, width: f64, height: f64) {
			self.ops.borrow_mut().push(Op::Clear(width, height));
		}
		fn start_path(&self, x: f64, y: f64) {
			self.ops.borrow_mut().push(Op::Start(x, y));
		}
		fn extend_path(&self, x: f64, y: f64) {
			self.ops.borrow_mut().push(Op::Extend(x, y));
		}
		fn stroke_path(&self, style: &str, line_width: f64) {
			self.ops.borrow_mut().push(Op::Stroke(style.to_string(), line_width));
		}
	}

	fn renderer(width: u32, height: u32) -> WaveRenderer<Recorder> {
		let mut r = WaveRenderer::new(WaveConfig::default()).unwrap();
		r.attach(Recorder::default());
		r.resize(width, height);
		r.surface().unwrap().take();
		r
	}

	fn points(ops: &[Op]) -> Vec<(f64, f64)> {
		ops.iter()
			.filter_map(|op| match *op {
				Op::Start(x, y) | Op::Extend(x, y) => Some((x, y)),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn test_wave_y_formula() {
		let cfg = WaveConfig::default();
		for phase in [0.0_f64, 0.03, 1.7, 123.456] {
			for x in [0.0_f64, 1.0, 250.0, 999.0] {
				let expected = (x * 0.01 + phase).sin() * 30.0 + 400.0 * 0.7;
				assert!((wave_y(x, phase, 400.0, &cfg) - expected).abs() < 1e-9);
			}
		}
	}

	#[test]
	fn test_repaint_draws_one_open_path_per_column() {
		let mut r = renderer(200, 100);
		r.tick();
		let ops = r.surface().unwrap().take();

		assert_eq!(ops[0], Op::Clear(200.0, 100.0));
		assert!(matches!(ops[1], Op::Start(x, _) if x == 0.0));
		assert_eq!(
			ops.last(),
			Some(&Op::Stroke("rgba(163, 177, 198, 0.5)".to_string(), 5.0))
		);
		let pts = points(&ops);
		assert_eq!(pts.len(), 200);
		let phase = r.state().phase;
		for (i, (x, y)) in pts.into_iter().enumerate() {
			assert_eq!(x, i as f64);
			let expected = (x * 0.01 + phase).sin() * 30.0 + 100.0 * 0.7;
			assert!((y - expected).abs() < 1e-9);
		}
	}

	#[test]
	fn test_tick_advances_phase_by_speed() {
		let mut r = renderer(10, 10);
		for _ in 0..100 {
			r.tick();
		}
		assert!((r.state().phase - 3.0).abs() < 1e-9);
	}

	#[test]
	fn test_resize_repaints_immediately_with_new_size() {
		let mut r = renderer(300, 150);
		for _ in 0..7 {
			r.tick();
		}
		r.surface().unwrap().take();
		let phase = r.state().phase;

		assert!(r.resize(640, 480));
		let state = r.state();
		assert_eq!((state.width, state.height), (640, 480));
		assert_eq!(state.phase, phase);

		let ops = r.surface().unwrap().take();
		assert_eq!(ops[0], Op::Clear(640.0, 480.0));
		let pts = points(&ops);
		assert_eq!(pts.len(), 640);
		let expected = phase.sin() * 30.0 + 480.0 * 0.7;
		assert!((pts[0].1 - expected).abs() < 1e-9);
	}

	#[test]
	fn test_zero_size_resize_is_ignored() {
		let mut r = renderer(300, 150);
		assert!(!r.resize(0, 150));
		assert!(!r.resize(300, 0));
		assert_eq!((r.state().width, r.state().height), (300, 150));
		assert!(r.surface().unwrap().take().is_empty());
	}

	#[test]
	fn test_missing_surface_skips_paint_but_keeps_time() {
		let mut r: WaveRenderer<Recorder> = WaveRenderer::new(WaveConfig::default()).unwrap();
		assert!(r.resize(100, 50));
		assert!(!r.repaint());
		r.tick();
		r.tick();
		assert!((r.state().phase - 0.06).abs() < 1e-12);

		r.attach(Recorder::default());
		let ops = r.surface().unwrap().take();
		assert_eq!(ops[0], Op::Clear(100.0, 50.0));
		assert_eq!(points(&ops).len(), 100);
	}

	#[test]
	fn test_renderer_rejects_invalid_config() {
		let cfg = WaveConfig {
			line_width: 0.0,
			..Default::default()
		};
		let err = WaveRenderer::<Recorder>::new(cfg).err();
		assert!(matches!(err, Some(ConfigError::NonPositive { name: "line_width", .. })));

		let cfg = WaveConfig {
			speed: f64::NAN,
			..Default::default()
		};
		assert!(WaveRenderer::<Recorder>::new(cfg).is_err());
	}
}
