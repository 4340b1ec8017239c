//! Self-rescheduling per-frame loop with first-class cancellation.
//!
//! [`FrameLoop`] is the state machine: it owns an [`Animation`], asks a
//! [`FrameHost`] for the next frame, and on each activation runs exactly one
//! frame before asking again. Stopping cancels the pending request and makes
//! any callback that was already queued a no-op.
//!
//! In the browser, [`spawn_frame_loop`] binds the machine to
//! `requestAnimationFrame` and returns a [`FrameLoopHandle`] the host component
//! keeps until unmount.

use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::prelude::*;

/// One engine driven by the loop.
pub trait Animation {
	/// Advance one tick and paint or project the result.
	fn frame(&mut self);
}

/// Display refresh primitive: register for the next frame, cancel a registration.
pub trait FrameHost {
	/// Identifies a pending registration.
	type Handle: Copy;

	/// Registers for the next frame. `None` when the host cannot schedule.
	fn request_frame(&mut self) -> Option<Self::Handle>;

	/// Drops a pending registration.
	fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum LoopState<H> {
	Idle,
	Scheduled(H),
	Stopped,
}

/// Explicit render loop: `start`, one `on_frame` per display refresh, `stop`.
pub struct FrameLoop<H: FrameHost, A> {
	host: H,
	animation: A,
	state: LoopState<H::Handle>,
	frames: u64,
}

impl<H: FrameHost, A: Animation> FrameLoop<H, A> {
	/// Idle loop; nothing runs until [`start`](Self::start).
	pub fn new(host: H, animation: A) -> Self {
		Self {
			host,
			animation,
			state: LoopState::Idle,
			frames: 0,
		}
	}

	/// Schedules the first frame. Returns whether a frame is pending.
	///
	/// Starting a running loop changes nothing. A stopped loop stays stopped.
	pub fn start(&mut self) -> bool {
		match self.state {
			LoopState::Idle => {
				self.schedule();
				self.is_running()
			}
			LoopState::Scheduled(_) => true,
			LoopState::Stopped => false,
		}
	}

	/// Runs one activation: tick and paint, then reschedule.
	///
	/// Returns `false` without touching the animation when no frame is
	/// pending, which covers callbacks that fire after [`stop`](Self::stop).
	pub fn on_frame(&mut self) -> bool {
		if !matches!(self.state, LoopState::Scheduled(_)) {
			return false;
		}
		self.state = LoopState::Idle;
		self.animation.frame();
		self.frames += 1;
		self.schedule();
		true
	}

	/// Cancels the pending frame. Safe to call any number of times.
	pub fn stop(&mut self) {
		match mem::replace(&mut self.state, LoopState::Stopped) {
			LoopState::Scheduled(handle) => {
				self.host.cancel_frame(handle);
				debug!("hero-motion: frame loop stopped after {} frames", self.frames);
			}
			LoopState::Idle | LoopState::Stopped => {}
		}
	}

	/// Whether a frame is pending.
	pub fn is_running(&self) -> bool {
		matches!(self.state, LoopState::Scheduled(_))
	}

	/// Whether [`stop`](Self::stop) has been called.
	#[cfg(test)]
	fn is_stopped(&self) -> bool {
		matches!(self.state, LoopState::Stopped)
	}

	/// Activations run so far.
	#[cfg(test)]
	fn frames(&self) -> u64 {
		self.frames
	}

	/// The driven animation.
	#[cfg(test)]
	fn animation(&self) -> &A {
		&self.animation
	}

	/// The driven animation, mutably (resize, reseed).
	pub fn animation_mut(&mut self) -> &mut A {
		&mut self.animation
	}

	fn schedule(&mut self) {
		match self.host.request_frame() {
			Some(handle) => self.state = LoopState::Scheduled(handle),
			None => {
				warn!("hero-motion: host refused to schedule a frame, loop idle");
				self.state = LoopState::Idle;
			}
		}
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `window.requestAnimationFrame` as a [`FrameHost`].
pub struct AnimationFrames {
	callback: FrameCallback,
}

impl FrameHost for AnimationFrames {
	type Handle = i32;

	fn request_frame(&mut self) -> Option<i32> {
		let window = web_sys::window()?;
		let callback = self.callback.borrow();
		let callback = callback.as_ref()?;
		window
			.request_animation_frame(callback.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: i32) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle);
		}
	}
}

/// A running browser frame loop. Stops itself when dropped.
pub struct FrameLoopHandle<A: Animation + 'static> {
	inner: Rc<RefCell<FrameLoop<AnimationFrames, A>>>,
	callback: FrameCallback,
}

impl<A: Animation + 'static> FrameLoopHandle<A> {
	/// Runs `f` against the animation between frames.
	pub fn with_animation<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
		f(self.inner.borrow_mut().animation_mut())
	}

	/// Cancels the loop and releases the JS callback. Idempotent.
	pub fn stop(&self) {
		if let Ok(mut inner) = self.inner.try_borrow_mut() {
			inner.stop();
		}
		self.callback.borrow_mut().take();
	}
}

impl<A: Animation + 'static> Drop for FrameLoopHandle<A> {
	fn drop(&mut self) {
		self.stop();
	}
}

/// Starts `animation` on `requestAnimationFrame`.
///
/// The JS callback only holds a weak reference to the loop, so dropping the
/// handle is enough to end the chain.
pub fn spawn_frame_loop<A: Animation + 'static>(animation: A) -> FrameLoopHandle<A> {
	let callback: FrameCallback = Rc::new(RefCell::new(None));
	let inner = Rc::new(RefCell::new(FrameLoop::new(
		AnimationFrames {
			callback: callback.clone(),
		},
		animation,
	)));

	let weak: Weak<RefCell<FrameLoop<AnimationFrames, A>>> = Rc::downgrade(&inner);
	*callback.borrow_mut() = Some(Closure::new(move || {
		if let Some(frame_loop) = weak.upgrade() {
			frame_loop.borrow_mut().on_frame();
		}
	}));

	if inner.borrow_mut().start() {
		debug!("hero-motion: frame loop started");
	}
	FrameLoopHandle { inner, callback }
}
