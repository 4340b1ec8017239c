//! Floating emoji particles with elastic bounces off the container edges.
//!
//! Seeding and stepping are pure functions over particle slices; the
//! [`ParticleField`] controller owns the current population and replaces it
//! wholesale each tick.

use std::rc::Rc;

use log::{debug, info};

use super::config::FieldConfig;
use crate::error::ConfigError;
use crate::random::RandomSource;

/// A single drifting glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Identity for matching sprites across frames.
	pub id: usize,
	/// Display symbol, fixed at creation.
	pub glyph: Rc<str>,
	/// Container-local position in px.
	pub x: f64,
	/// Container-local position in px.
	pub y: f64,
	/// Horizontal velocity in px/tick.
	pub vx: f64,
	/// Vertical velocity in px/tick.
	pub vy: f64,
	/// Degrees; accumulates without wrapping.
	pub rotation: f64,
	/// Degrees per tick.
	pub rotation_speed: f64,
	/// Fixed at creation.
	pub opacity: f64,
}

/// What the host needs to draw one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite<'a> {
	/// Particle identity.
	pub id: usize,
	/// Symbol to draw.
	pub glyph: &'a str,
	/// Top-left x in px.
	pub x: f64,
	/// Top-left y in px.
	pub y: f64,
	/// Degrees.
	pub rotation: f64,
	/// `[0, 1]`.
	pub opacity: f64,
}

/// Container size plus the glyph box that must stay inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Container width in px.
	pub width: f64,
	/// Container height in px.
	pub height: f64,
	/// Approximate glyph box in px.
	pub glyph_size: f64,
}

impl Bounds {
	/// Largest x a glyph may occupy; zero when the container is narrower than a glyph.
	pub fn max_x(&self) -> f64 {
		(self.width - self.glyph_size).max(0.0)
	}

	/// Largest y a glyph may occupy; zero when the container is shorter than a glyph.
	pub fn max_y(&self) -> f64 {
		(self.height - self.glyph_size).max(0.0)
	}

	/// Whether the container has a usable, measured size.
	pub fn is_measurable(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}
}

impl Particle {
	/// One tick later. Each axis reflects and clamps independently.
	pub fn advanced(&self, bounds: Bounds) -> Self {
		let (x, vx) = reflect(self.x + self.vx, self.vx, bounds.max_x());
		let (y, vy) = reflect(self.y + self.vy, self.vy, bounds.max_y());
		Self {
			x,
			y,
			vx,
			vy,
			rotation: self.rotation + self.rotation_speed,
			..self.clone()
		}
	}

	/// Render tuple for the host.
	pub fn sprite(&self) -> Sprite<'_> {
		Sprite {
			id: self.id,
			glyph: &self.glyph,
			x: self.x,
			y: self.y,
			rotation: self.rotation,
			opacity: self.opacity,
		}
	}
}

fn reflect(pos: f64, vel: f64, max: f64) -> (f64, f64) {
	if pos < 0.0 || pos > max {
		(pos.clamp(0.0, max), -vel)
	} else {
		(pos, vel)
	}
}

/// Creates a fresh population of `config.count` particles inside `bounds`.
///
/// Positions are drawn over the region a glyph can occupy, so a new population
/// already satisfies the containment rule that [`advance`] maintains.
pub fn initialize<R: RandomSource + ?Sized>(
	bounds: Bounds,
	config: &FieldConfig,
	rng: &mut R,
) -> Vec<Particle> {
	(0..config.count)
		.map(|id| {
			let glyph = Rc::from(config.palette[rng.index(config.palette.len())].as_str());
			let x = rng.next_unit() * bounds.max_x();
			let y = rng.next_unit() * bounds.max_y();
			let vx = rng.symmetric(config.max_speed);
			let vy = rng.symmetric(config.max_speed);
			let rotation = rng.next_unit() * 360.0;
			let rotation_speed = rng.symmetric(config.max_rotation_speed);
			let opacity = rng.between(config.opacity_min, config.opacity_max);
			Particle {
				id,
				glyph,
				x,
				y,
				vx,
				vy,
				rotation,
				rotation_speed,
				opacity,
			}
		})
		.collect()
}

/// Steps every particle once, returning the new population.
pub fn advance(particles: &[Particle], bounds: Bounds) -> Vec<Particle> {
	particles.iter().map(|p| p.advanced(bounds)).collect()
}

/// Owns the live population, its container and its random source.
pub struct ParticleField<R> {
	config: FieldConfig,
	particles: Vec<Particle>,
	bounds: Bounds,
	rng: R,
}

impl<R: RandomSource> ParticleField<R> {
	/// Empty field; call [`reseed`](Self::reseed) once the container is measured.
	///
	/// The config is validated first, so a field never seeds from an empty
	/// palette or an inverted opacity range.
	pub fn new(config: FieldConfig, rng: R) -> Result<Self, ConfigError> {
		let config = config.validate()?;
		let glyph_size = config.glyph_size;
		Ok(Self {
			config,
			particles: Vec::new(),
			bounds: Bounds {
				width: 0.0,
				height: 0.0,
				glyph_size,
			},
			rng,
		})
	}

	/// Replaces the population for a container of `width` x `height`.
	///
	/// Returns `false` and keeps the current population when the container
	/// is not measurable yet.
	pub fn reseed(&mut self, width: f64, height: f64) -> bool {
		let bounds = Bounds {
			width,
			height,
			glyph_size: self.config.glyph_size,
		};
		if !bounds.is_measurable() {
			debug!("hero-motion: container {}x{} not measurable, seed skipped", width, height);
			return false;
		}
		self.particles = initialize(bounds, &self.config, &mut self.rng);
		self.bounds = bounds;
		info!(
			"hero-motion: seeded {} particles in {}x{}",
			self.particles.len(),
			width,
			height
		);
		true
	}

	/// Advances the population one tick.
	pub fn step(&mut self) {
		if self.particles.is_empty() {
			return;
		}
		self.particles = advance(&self.particles, self.bounds);
	}

	/// Render tuples for the current population.
	pub fn sprites(&self) -> impl Iterator<Item = Sprite<'_>> {
		self.particles.iter().map(Particle::sprite)
	}

	/// Current population.
	#[cfg(test)]
	fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Container the population lives in.
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Active configuration.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::{RngSource, Sequence};

	const EPS: f64 = 1e-9;

	fn bounds(width: f64, height: f64) -> Bounds {
		Bounds {
			width,
			height,
			glyph_size: 32.0,
		}
	}

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			id: 0,
			glyph: Rc::from("🚀"),
			x,
			y,
			vx,
			vy,
			rotation: 10.0,
			rotation_speed: 0.5,
			opacity: 0.4,
		}
	}

	fn assert_contained(particles: &[Particle], b: Bounds) {
		for p in particles {
			assert!(p.x >= 0.0 && p.x <= b.max_x(), "x {} escaped 0..{}", p.x, b.max_x());
			assert!(p.y >= 0.0 && p.y <= b.max_y(), "y {} escaped 0..{}", p.y, b.max_y());
		}
	}

	#[test]
	fn test_seed_draws_in_documented_order() {
		let cfg = FieldConfig {
			count: 1,
			..Default::default()
		};
		let mut rng = Sequence::new(&[0.5, 0.25, 0.5, 0.75, 0.0, 0.5, 0.0, 0.5]);
		let p = &initialize(bounds(100.0, 100.0), &cfg, &mut rng)[0];

		assert_eq!(&*p.glyph, "🌟");
		assert!((p.x - 17.0).abs() < EPS);
		assert!((p.y - 34.0).abs() < EPS);
		assert!((p.vx - 0.125).abs() < EPS);
		assert!((p.vy + 0.25).abs() < EPS);
		assert!((p.rotation - 180.0).abs() < EPS);
		assert!((p.rotation_speed + 0.1).abs() < EPS);
		assert!((p.opacity - 0.35).abs() < EPS);
	}

	#[test]
	fn test_seed_count_and_ranges() {
		let cfg = FieldConfig::default();
		let mut rng = RngSource::seeded(3);
		for _ in 0..20 {
			let b = bounds(640.0, 360.0);
			let ps = initialize(b, &cfg, &mut rng);
			assert_eq!(ps.len(), 30);
			assert_contained(&ps, b);
			for (i, p) in ps.iter().enumerate() {
				assert_eq!(p.id, i);
				assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
				assert!(p.rotation_speed.abs() <= 0.1);
				assert!((0.0..360.0).contains(&p.rotation));
				assert!((0.1..0.6).contains(&p.opacity));
				assert!(cfg.palette.iter().any(|g| g.as_str() == &*p.glyph));
			}
		}
	}

	#[test]
	fn test_reseed_twice_both_contained() {
		let cfg = FieldConfig::default();
		let mut rng = RngSource::seeded(11);
		let b = bounds(300.0, 200.0);
		let first = initialize(b, &cfg, &mut rng);
		let second = initialize(b, &cfg, &mut rng);
		assert_eq!(first.len(), second.len());
		assert_ne!(first, second);
		assert_contained(&first, b);
		assert_contained(&second, b);
	}

	#[test]
	fn test_plain_tick_moves_and_spins() {
		let p = particle(10.0, 20.0, 0.3, -0.2).advanced(bounds(100.0, 100.0));
		assert!((p.x - 10.3).abs() < EPS);
		assert!((p.y - 19.8).abs() < EPS);
		assert!((p.rotation - 10.5).abs() < EPS);
		assert_eq!(p.vx, 0.3);
		assert_eq!(p.vy, -0.2);
	}

	#[test]
	fn test_reflection_at_far_edge() {
		let b = bounds(100.0, 100.0);
		let p = particle(100.0 - 32.0 - 0.1, 50.0, 0.5, 0.0).advanced(b);
		assert_eq!(p.vx, -0.5);
		assert_eq!(p.x, 68.0);
	}

	#[test]
	fn test_reflection_at_near_edge_is_per_axis() {
		let b = bounds(100.0, 100.0);
		let p = particle(0.1, 30.0, -0.5, 0.2).advanced(b);
		assert_eq!(p.x, 0.0);
		assert_eq!(p.vx, 0.5);
		// y untouched by the x collision
		assert!((p.y - 30.2).abs() < EPS);
		assert_eq!(p.vy, 0.2);
		// rotation ignores collisions
		assert!((p.rotation - 10.5).abs() < EPS);
	}

	#[test]
	fn test_advance_leaves_input_alone() {
		let before = vec![particle(67.9, 67.9, 0.5, 0.5)];
		let after = advance(&before, bounds(100.0, 100.0));
		assert_eq!(before[0].x, 67.9);
		assert_eq!(before[0].vx, 0.5);
		assert_eq!(after[0].vx, -0.5);
	}

	#[test]
	fn test_end_to_end_single_particle() {
		let b = bounds(100.0, 100.0);
		let mut p = particle(0.0, 0.0, 0.3, 0.2);

		p = p.advanced(b);
		assert!((p.x - 0.3).abs() < EPS);
		assert!((p.y - 0.2).abs() < EPS);

		let mut ticks = 1;
		while p.vx > 0.0 {
			let next_x = p.x + p.vx;
			p = p.advanced(b);
			ticks += 1;
			if next_x > 68.0 {
				break;
			}
			assert_eq!(p.vx, 0.3, "flipped early at tick {ticks}");
		}
		assert_eq!(p.vx, -0.3);
		assert_eq!(p.x, 68.0);
		assert!(ticks > 200 && ticks < 240);
	}

	#[test]
	fn test_containment_over_long_runs() {
		let cfg = FieldConfig {
			count: 50,
			max_speed: 9.0,
			..Default::default()
		};
		let mut rng = RngSource::seeded(99);
		for (w, h) in [(640.0, 360.0), (33.0, 500.0), (20.0, 20.0)] {
			let b = bounds(w, h);
			let mut ps = initialize(b, &cfg, &mut rng);
			for _ in 0..5_000 {
				ps = advance(&ps, b);
				assert_contained(&ps, b);
			}
		}
	}

	#[test]
	fn test_invariant_attributes_survive_ticks() {
		let cfg = FieldConfig::default();
		let mut rng = RngSource::seeded(5);
		let b = bounds(200.0, 120.0);
		let start = initialize(b, &cfg, &mut rng);
		let mut ps = start.clone();
		for _ in 0..3_000 {
			ps = advance(&ps, b);
		}
		for (a, z) in start.iter().zip(&ps) {
			assert_eq!(a.id, z.id);
			assert_eq!(a.glyph, z.glyph);
			assert_eq!(a.opacity, z.opacity);
			assert_eq!(a.rotation_speed, z.rotation_speed);
			assert_eq!(a.vx.abs(), z.vx.abs());
			assert_eq!(a.vy.abs(), z.vy.abs());
		}
	}

	#[test]
	fn test_field_skips_unmeasurable_container() {
		let mut field = ParticleField::new(FieldConfig::default(), RngSource::seeded(1)).unwrap();
		assert!(!field.reseed(0.0, 400.0));
		assert!(field.particles().is_empty());
		field.step();

		assert!(field.reseed(400.0, 300.0));
		let kept = field.particles().to_vec();
		assert!(!field.reseed(400.0, f64::NAN));
		assert_eq!(field.particles(), &kept[..]);
		assert_eq!(field.bounds().width, 400.0);
	}

	#[test]
	fn test_field_resize_replaces_population() {
		let mut field = ParticleField::new(FieldConfig::default(), RngSource::seeded(8)).unwrap();
		field.reseed(800.0, 600.0);
		for _ in 0..10 {
			field.step();
		}
		field.reseed(120.0, 90.0);
		let b = field.bounds();
		assert_eq!((b.width, b.height), (120.0, 90.0));
		assert_eq!(field.particles().len(), 30);
		assert_contained(field.particles(), b);
	}

	#[test]
	fn test_sprites_project_render_tuple() {
		let mut field = ParticleField::new(
			FieldConfig {
				count: 3,
				..Default::default()
			},
			RngSource::seeded(2),
		)
		.unwrap();
		field.reseed(300.0, 300.0);
		field.step();
		let sprites: Vec<_> = field.sprites().collect();
		assert_eq!(sprites.len(), 3);
		for (s, p) in sprites.iter().zip(field.particles()) {
			assert_eq!(s.id, p.id);
			assert_eq!(s.glyph, &*p.glyph);
			assert_eq!((s.x, s.y, s.rotation, s.opacity), (p.x, p.y, p.rotation, p.opacity));
		}
	}

	#[test]
	fn test_field_rejects_empty_palette() {
		let cfg = FieldConfig {
			palette: vec![],
			..Default::default()
		};
		let err = ParticleField::new(cfg, RngSource::seeded(1)).err();
		assert!(matches!(err, Some(ConfigError::EmptyPalette)));
	}

	#[test]
	fn test_field_rejects_inverted_opacity() {
		let cfg = FieldConfig {
			opacity_min: 0.9,
			opacity_max: -3.0,
			..Default::default()
		};
		let err = ParticleField::new(cfg, RngSource::seeded(1)).err();
		assert!(matches!(err, Some(ConfigError::OpacityRange { .. })));
	}
}
