//! Canvas 2d context as a wave [`Surface`].

use web_sys::CanvasRenderingContext2d;

use super::wave::Surface;

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn start_path(&self, x: f64, y: f64) {
		self.begin_path();
		self.move_to(x, y);
	}

	fn extend_path(&self, x: f64, y: f64) {
		self.line_to(x, y);
	}

	fn stroke_path(&self, style: &str, line_width: f64) {
		self.set_stroke_style_str(style);
		self.set_line_width(line_width);
		self.stroke();
	}
}
