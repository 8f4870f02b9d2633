//! Visual tuning for the particle backdrop.
//!
//! Every constant the field uses (density, link distance, opacities, speeds)
//! lives in [`FieldStyle`] so it can be overridden from site configuration.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba()` form, used for canvas stroke and fill styles.
	pub fn to_css(self) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}

/// Tuning for the particle field: how many nodes, how they move, and how
/// links and nodes are drawn.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Surface area (square px) per node. Node count is `floor(W*H / density)`.
	pub density: f64,
	/// Pairs closer than this are linked.
	pub link_distance: f64,
	/// Link opacity at zero distance; falls off linearly to 0 at `link_distance`.
	pub link_opacity: f64,
	/// Stroke width of link lines.
	pub link_width: f64,
	/// Fill opacity of every node.
	pub node_opacity: f64,
	/// Per-axis velocity is drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Smallest node radius.
	pub radius_min: f64,
	/// Largest node radius.
	pub radius_max: f64,
	/// Base color for links and nodes; its alpha is replaced per element.
	pub color: Color,
}

impl FieldStyle {
	/// Number of nodes for a `width` x `height` surface.
	pub fn node_count(&self, width: f64, height: f64) -> usize {
		if self.density <= 0.0 {
			return 0;
		}
		let count = (width * height / self.density).floor();
		if count.is_finite() && count > 0.0 {
			count as usize
		} else {
			0
		}
	}

	/// Whether two nodes `distance` apart are linked.
	pub fn links(&self, distance: f64) -> bool {
		distance < self.link_distance
	}

	/// Opacity of a link between two nodes `distance` apart. Zero at and
	/// beyond `link_distance`.
	pub fn link_alpha(&self, distance: f64) -> f64 {
		((1.0 - distance / self.link_distance) * self.link_opacity).max(0.0)
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			density: 18_000.0,
			link_distance: 130.0,
			link_opacity: 0.18,
			link_width: 0.6,
			node_opacity: 0.55,
			max_speed: 0.14,
			radius_min: 0.5,
			radius_max: 2.0,
			color: Color::rgb(0, 212, 200),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_count_follows_area_density() {
		let style = FieldStyle::default();
		assert_eq!(style.node_count(1920.0, 1080.0), 115);
		assert_eq!(style.node_count(180.0, 100.0), 1);
		assert_eq!(style.node_count(179.0, 100.0), 0);
		assert_eq!(style.node_count(0.0, 1080.0), 0);
		assert_eq!(style.node_count(-50.0, 1080.0), 0);
		assert_eq!(style.node_count(f64::NAN, 1080.0), 0);
	}

	#[test]
	fn link_alpha_fades_linearly_to_zero_at_threshold() {
		let style = FieldStyle::default();
		assert_eq!(style.link_alpha(0.0), 0.18);
		assert!((style.link_alpha(65.0) - 0.09).abs() < 1e-12);
		assert!(style.link_alpha(130.0 - 1e-9) < 1e-10);
		assert_eq!(style.link_alpha(130.0), 0.0);
		assert_eq!(style.link_alpha(500.0), 0.0);
		assert!(style.links(129.9));
		assert!(!style.links(130.0));
	}

	#[test]
	fn link_alpha_is_monotonically_decreasing() {
		let style = FieldStyle::default();
		let alphas: Vec<f64> = (0..130)
			.map(|d| style.link_alpha(d as f64))
			.collect();
		assert!(alphas.windows(2).all(|w| w[0] > w[1]));
	}

	#[test]
	fn style_overrides_keep_unspecified_defaults() {
		let style: FieldStyle =
			serde_json::from_str(r#"{ "link_distance": 90, "color": { "r": 255, "g": 0, "b": 0 } }"#)
				.unwrap();
		assert_eq!(style.link_distance, 90.0);
		assert_eq!(style.color, Color::rgb(255, 0, 0));
		assert_eq!(style.density, 18_000.0);
	}

	#[test]
	fn css_color_carries_alpha() {
		let teal = FieldStyle::default().color.with_alpha(0.55);
		assert_eq!(teal.to_css(), "rgba(0,212,200,0.55)");
	}
}
