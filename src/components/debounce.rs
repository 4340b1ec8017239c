//! Collapses bursts of resize signals into one event after a quiet period.

use wasm_bindgen::prelude::*;

/// One-shot timer primitive.
pub trait TimerHost {
	/// Identifies an armed timer.
	type Handle: Copy + PartialEq;

	/// Arms a timer for `delay_ms`. `None` when the host cannot.
	fn set_timeout(&mut self, delay_ms: u32) -> Option<Self::Handle>;

	/// Disarms a timer. Unknown or elapsed handles are ignored.
	fn clear_timeout(&mut self, handle: Self::Handle);
}

/// Trailing-edge debouncer.
pub struct Debouncer<H: TimerHost> {
	host: H,
	delay_ms: u32,
	pending: Option<H::Handle>,
}

impl<H: TimerHost> Debouncer<H> {
	/// Debouncer with the given quiet period.
	pub fn new(host: H, delay_ms: u32) -> Self {
		Self {
			host,
			delay_ms,
			pending: None,
		}
	}

	/// Restarts the quiet period.
	pub fn signal(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.host.clear_timeout(handle);
		}
		self.pending = self.host.set_timeout(self.delay_ms);
	}

	/// Called when a timer elapses; `true` if it was the live one.
	#[cfg(test)]
	fn fire(&mut self, handle: H::Handle) -> bool {
		if self.pending == Some(handle) {
			self.pending = None;
			true
		} else {
			false
		}
	}

	/// Called when the host's only armed timer elapses, for hosts that do not
	/// pass the handle back. `true` if a quiet period was running.
	pub fn elapsed(&mut self) -> bool {
		self.pending.take().is_some()
	}

	/// Disarms any pending timer. Idempotent.
	pub fn cancel(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.host.clear_timeout(handle);
		}
	}

	/// Whether a quiet period is running.
	#[cfg(test)]
	fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}

/// `window.setTimeout` as a [`TimerHost`]; every timer runs the same callback.
pub struct Timeouts {
	callback: Closure<dyn FnMut()>,
}

impl Timeouts {
	/// Host whose timers invoke `on_elapsed`.
	pub fn new(on_elapsed: impl FnMut() + 'static) -> Self {
		Self {
			callback: Closure::new(on_elapsed),
		}
	}
}

impl TimerHost for Timeouts {
	type Handle = i32;

	fn set_timeout(&mut self, delay_ms: u32) -> Option<i32> {
		let window = web_sys::window()?;
		window
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				self.callback.as_ref().unchecked_ref(),
				delay_ms as i32,
			)
			.ok()
	}

	fn clear_timeout(&mut self, handle: i32) {
		if let Some(window) = web_sys::window() {
			window.clear_timeout_with_handle(handle);
		}
	}
}
