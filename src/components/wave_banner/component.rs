//! Leptos component hosting the waveform background.
//!
//! The canvas is sized to its parent, painted once right away, then repainted
//! every animation frame. Window resizes apply immediately (no debounce) so the
//! curve never shows at a stale size.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::WaveConfig;
use super::wave::WaveRenderer;
use crate::components::canvas::{context_2d, parent_offset_size, set_canvas_size};
use crate::components::frame_loop::{Animation, FrameLoopHandle, spawn_frame_loop};

/// Renderer plus the canvas it may (re)acquire a context from.
struct WaveScene {
	renderer: WaveRenderer<CanvasRenderingContext2d>,
	canvas: HtmlCanvasElement,
}

impl WaveScene {
	fn fit_to_parent(&mut self) {
		let (w, h) = parent_offset_size(&self.canvas);
		if w <= 0.0 || h <= 0.0 {
			return;
		}
		set_canvas_size(&self.canvas, w, h);
		self.renderer.resize(w as u32, h as u32);
	}
}

impl Animation for WaveScene {
	fn frame(&mut self) {
		if !self.renderer.has_surface() {
			if let Some(ctx) = context_2d(&self.canvas) {
				info!("hero-motion: wave surface became available");
				self.renderer.attach(ctx);
			}
		}
		self.renderer.tick();
	}
}

struct WaveMount {
	frames: FrameLoopHandle<WaveScene>,
	on_resize: Closure<dyn FnMut()>,
}

impl WaveMount {
	fn unmount(self) {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		}
		self.frames.stop();
		info!("hero-motion: wave banner unmounted");
	}
}

/// Full-size canvas with a slowly travelling sine wave.
///
/// The parent must be positioned so the canvas can cover it. An invalid
/// `config` is logged and the banner stays blank.
#[component]
pub fn WaveBanner(#[prop(default = WaveConfig::default())] config: WaveConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mount: Rc<RefCell<Option<WaveMount>>> = Rc::new(RefCell::new(None));
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

		let renderer = match WaveRenderer::new(config.clone()) {
			Ok(renderer) => renderer,
			Err(e) => {
				warn!("hero-motion: wave banner not started: {}", e);
				return;
			}
		};
		let mut scene = WaveScene {
			renderer,
			canvas: canvas.clone(),
		};
		match context_2d(&canvas) {
			Some(ctx) => scene.renderer.attach(ctx),
			None => warn!("hero-motion: wave canvas has no 2d context yet, painting skipped"),
		}
		scene.fit_to_parent();
		let state = scene.renderer.state();

		let frames = spawn_frame_loop(scene);

		let weak = Rc::downgrade(&mount_init);
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			if let Some(slot) = weak.upgrade() {
				if let Some(m) = slot.borrow().as_ref() {
					m.frames.with_animation(WaveScene::fit_to_parent);
				}
			}
		});
		let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

		*mount_init.borrow_mut() = Some(WaveMount { frames, on_resize });
		info!(
			"hero-motion: wave banner mounted at {}x{}",
			state.width, state.height
		);
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
			class="wave-banner"
			style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: 0; opacity: 0.6; pointer-events: none;"
		/>
	}
}
