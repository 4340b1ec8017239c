//! Canvas lookups shared by the hero layers.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

/// The canvas's 2d context, if the browser hands one out.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Bounding-rect size of the canvas's parent; `(0, 0)` when detached.
pub fn parent_rect_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|parent| {
			let rect = parent.get_bounding_client_rect();
			(rect.width(), rect.height())
		})
		.unwrap_or((0.0, 0.0))
}

/// Layout (`offsetWidth`/`offsetHeight`) size of the canvas's parent; `(0, 0)` when detached.
pub fn parent_offset_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
		.map(|parent| (parent.offset_width() as f64, parent.offset_height() as f64))
		.unwrap_or((0.0, 0.0))
}

/// Sets the drawing buffer size, which also clears it.
pub fn set_canvas_size(canvas: &HtmlCanvasElement, width: f64, height: f64) {
	canvas.set_width(width.max(0.0) as u32);
	canvas.set_height(height.max(0.0) as u32);
}

/// Fills an empty surface slot from `acquire`, returning whether it was
/// empty before and is filled now. A filled slot is left untouched.
pub fn fill_surface<T>(slot: &mut Option<T>, acquire: impl FnOnce() -> Option<T>) -> bool {
	if slot.is_some() {
		return false;
	}
	*slot = acquire();
	slot.is_some()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fill_surface_retries_until_available() {
		let mut slot: Option<u8> = None;
		let mut attempts = 0;
		for _ in 0..3 {
			assert!(!fill_surface(&mut slot, || {
				attempts += 1;
				None
			}));
		}
		assert_eq!(attempts, 3);
		assert!(fill_surface(&mut slot, || Some(7)));
		assert_eq!(slot, Some(7));

		// once filled, no more lookups
		assert!(!fill_surface(&mut slot, || panic!("looked up again")));
		assert_eq!(slot, Some(7));
	}
}
