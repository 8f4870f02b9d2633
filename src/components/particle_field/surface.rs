//! Drawing primitives the particle field needs from its render target.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// A 2D render target: clear, stroke a line, fill a circle.
pub trait Surface {
	/// Clear the rectangle `(0, 0, width, height)`.
	fn clear(&mut self, width: f64, height: f64);

	/// Stroke a straight line from `from` to `to`.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);

	/// Fill a circle of `radius` around `center`.
	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, TAU);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}
}
