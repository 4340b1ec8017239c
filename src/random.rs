//! Injectable randomness for particle seeding.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
	/// Next sample in `[0, 1)`.
	fn next_unit(&mut self) -> f64;

	/// Uniform sample in `[-magnitude, magnitude)`.
	fn symmetric(&mut self, magnitude: f64) -> f64 {
		(self.next_unit() - 0.5) * 2.0 * magnitude
	}

	/// Uniform sample in `[min, max)`.
	fn between(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_unit() * (max - min)
	}

	/// Uniform index in `0..len`; zero when `len` is zero.
	fn index(&mut self, len: usize) -> usize {
		((self.next_unit() * len as f64) as usize).min(len.saturating_sub(1))
	}
}

/// Adapts any [`rand::Rng`] to [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
	/// Seeded standard generator.
	pub fn seeded(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> RandomSource for RngSource<R> {
	fn next_unit(&mut self) -> f64 {
		self.0.gen_range(0.0..1.0)
	}
}

/// Seed derived from the page's own entropy; differs per page load.
pub fn browser_seed() -> u64 {
	let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let now = js_sys::Date::now() as u64;
	(noise << 32) ^ now
}

/// Replays a fixed list of samples, wrapping around.
#[cfg(test)]
pub(crate) struct Sequence {
	values: Vec<f64>,
	cursor: usize,
}

#[cfg(test)]
impl Sequence {
	pub(crate) fn new(values: &[f64]) -> Self {
		Self {
			values: values.to_vec(),
			cursor: 0,
		}
	}
}

#[cfg(test)]
impl RandomSource for Sequence {
	fn next_unit(&mut self) -> f64 {
		let v = self.values[self.cursor % self.values.len()];
		self.cursor += 1;
		v
	}
}
