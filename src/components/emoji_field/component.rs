//! Leptos component hosting the floating emoji field.
//!
//! The component measures its parent, seeds a [`ParticleField`], and hands the
//! field to a frame loop that steps and draws it once per animation frame.
//! Window resizes are debounced and then reseed the field from scratch.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::{info, warn};
use rand::rngs::StdRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::FieldConfig;
use super::particles::ParticleField;
use super::render;
use crate::components::canvas::{context_2d, fill_surface, parent_rect_size, set_canvas_size};
use crate::components::debounce::{Debouncer, Timeouts};
use crate::components::frame_loop::{Animation, FrameLoopHandle, spawn_frame_loop};
use crate::random::{RngSource, browser_seed};

/// Field plus the canvas it draws into once a context is available.
struct EmojiScene {
	field: ParticleField<RngSource<StdRng>>,
	canvas: HtmlCanvasElement,
	ctx: Option<CanvasRenderingContext2d>,
}

impl EmojiScene {
	/// Measures the container again and reseeds against it.
	fn remeasure(&mut self) {
		let (w, h) = parent_rect_size(&self.canvas);
		if self.field.reseed(w, h) {
			set_canvas_size(&self.canvas, w, h);
		}
	}
}

impl Animation for EmojiScene {
	fn frame(&mut self) {
		let canvas = &self.canvas;
		if fill_surface(&mut self.ctx, || context_2d(canvas)) {
			info!("hero-motion: emoji surface became available");
		}
		self.field.step();
		let Some(ctx) = &self.ctx else {
			return;
		};
		let bounds = self.field.bounds();
		render::render(
			ctx,
			bounds.width,
			bounds.height,
			self.field.config(),
			self.field.sprites(),
		);
	}
}

/// Everything that must be torn down on unmount.
struct FieldMount {
	frames: FrameLoopHandle<EmojiScene>,
	resize: Debouncer<Timeouts>,
	on_resize: Closure<dyn FnMut()>,
}

impl FieldMount {
	fn unmount(mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		}
		self.resize.cancel();
		self.frames.stop();
		info!("hero-motion: emoji field unmounted");
	}
}

type MountSlot = Rc<RefCell<Option<FieldMount>>>;

/// Absolutely positioned canvas of drifting emoji filling its parent.
///
/// The parent must be positioned (`relative`/`absolute`) so the canvas can
/// cover it. An invalid `config` is logged and the field stays empty.
#[component]
pub fn EmojiField(#[prop(default = FieldConfig::default())] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mount: MountSlot = Rc::new(RefCell::new(None));
	let mount_init = mount.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mount_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let mut field = match ParticleField::new(config.clone(), RngSource::seeded(browser_seed())) {
			Ok(field) => field,
			Err(e) => {
				warn!("hero-motion: emoji field not started: {}", e);
				return;
			}
		};
		let ctx = context_2d(&canvas);
		if ctx.is_none() {
			warn!("hero-motion: emoji canvas has no 2d context yet, painting skipped");
		}

		let (w, h) = parent_rect_size(&canvas);
		set_canvas_size(&canvas, w, h);
		field.reseed(w, h);

		let frames = spawn_frame_loop(EmojiScene { field, canvas, ctx });

		let weak = Rc::downgrade(&mount_init);
		let resize = Debouncer::new(
			Timeouts::new(reseed_after_quiet(weak.clone())),
			config.resize_debounce_ms,
		);
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			if let Some(slot) = weak.upgrade() {
				if let Some(m) = slot.borrow_mut().as_mut() {
					m.resize.signal();
				}
			}
		});
		let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

		*mount_init.borrow_mut() = Some(FieldMount {
			frames,
			resize,
			on_resize,
		});
		info!("hero-motion: emoji field mounted at {}x{}", w, h);
	});

	let mount_cleanup = SendWrapper::new(mount);
	on_cleanup(move || {
		if let Some(m) = mount_cleanup.borrow_mut().take() {
			m.unmount();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="emoji-field"
			style="position: absolute; inset: 0; pointer-events: none; z-index: 1;"
		/>
	}
}

/// Timer callback: once the quiet period ends, reseed against the new size.
fn reseed_after_quiet(slot: Weak<RefCell<Option<FieldMount>>>) -> impl FnMut() + 'static {
	move || {
		let Some(slot) = slot.upgrade() else {
			return;
		};
		let mut slot = slot.borrow_mut();
		let Some(m) = slot.as_mut() else {
			return;
		};
		if m.resize.elapsed() {
			m.frames.with_animation(EmojiScene::remeasure);
		}
	}
}
