//! The particle field: drifting nodes joined by proximity links.
//!
//! Nodes bounce elastically inside the surface and every pair closer than
//! [`FieldStyle::link_distance`] is joined by a line that fades with distance.
//! The pairwise check is O(n²) per frame; n stays small because the node
//! count is tied to surface area.

use rand::Rng;

use super::surface::Surface;
use super::theme::FieldStyle;

/// A single drifting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub r: f64,
}

/// A proximity link between nodes `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub distance: f64,
	pub alpha: f64,
}

/// Owns the node set for one surface and advances it frame by frame.
///
/// The random source is injected so layouts are reproducible under a seeded
/// generator.
pub struct ParticleField<R> {
	nodes: Vec<Node>,
	width: f64,
	height: f64,
	style: FieldStyle,
	rng: R,
}

impl<R: Rng> ParticleField<R> {
	/// An empty field; call [`resize`](Self::resize) to populate it.
	pub fn new(style: FieldStyle, rng: R) -> Self {
		Self {
			nodes: Vec::new(),
			width: 0.0,
			height: 0.0,
			style,
			rng,
		}
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn style(&self) -> &FieldStyle {
		&self.style
	}

	/// Adopt new surface dimensions and rebuild the whole node set.
	///
	/// Negative or non-finite dimensions count as zero.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = sanitize(width);
		self.height = sanitize(height);

		let count = self.style.node_count(self.width, self.height);
		let (speed, r_min, r_max) = (
			self.style.max_speed,
			self.style.radius_min,
			self.style.radius_max,
		);

		self.nodes.clear();
		self.nodes.reserve(count);
		for _ in 0..count {
			let x = self.rng.r#gen::<f64>() * self.width;
			let y = self.rng.r#gen::<f64>() * self.height;
			let vx = (self.rng.r#gen::<f64>() - 0.5) * 2.0 * speed;
			let vy = (self.rng.r#gen::<f64>() - 0.5) * 2.0 * speed;
			let r = r_min + self.rng.r#gen::<f64>() * (r_max - r_min);
			self.nodes.push(Node { x, y, vx, vy, r });
		}
	}

	/// Every pair of nodes currently close enough to be linked.
	pub fn links(&self) -> Vec<Link> {
		let mut links = Vec::new();
		for (a, n1) in self.nodes.iter().enumerate() {
			for (offset, n2) in self.nodes[a + 1..].iter().enumerate() {
				let (dx, dy) = (n1.x - n2.x, n1.y - n2.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if self.style.links(distance) {
					links.push(Link {
						a,
						b: a + 1 + offset,
						distance,
						alpha: self.style.link_alpha(distance),
					});
				}
			}
		}
		links
	}

	/// Move every node by its velocity, reflecting off the surface edges.
	///
	/// Positions are not clamped; a node may sit up to one step outside the
	/// surface before its reversed velocity brings it back.
	pub fn advance(&mut self) {
		let (w, h) = (self.width, self.height);
		for n in &mut self.nodes {
			n.x += n.vx;
			n.y += n.vy;
			if n.x < 0.0 || n.x > w {
				n.vx = -n.vx;
			}
			if n.y < 0.0 || n.y > h {
				n.vy = -n.vy;
			}
		}
	}

	/// One animation step: clear, draw links, draw nodes, then advance.
	pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		surface.clear(self.width, self.height);

		let color = self.style.color;
		for link in self.links() {
			let (n1, n2) = (&self.nodes[link.a], &self.nodes[link.b]);
			surface.stroke_line(
				(n1.x, n1.y),
				(n2.x, n2.y),
				color.with_alpha(link.alpha),
				self.style.link_width,
			);
		}

		let fill = color.with_alpha(self.style.node_opacity);
		for n in &self.nodes {
			surface.fill_circle((n.x, n.y), n.r, fill);
		}

		self.advance();
	}

	/// Replace the node set outright.
	#[cfg(test)]
	pub(crate) fn set_nodes(&mut self, nodes: Vec<Node>) {
		self.nodes = nodes;
	}
}

fn sanitize(dimension: f64) -> f64 {
	if dimension.is_finite() && dimension > 0.0 {
		dimension
	} else {
		0.0
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::theme::Color;
	use super::*;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		Line(f64),
		Circle(f64),
	}

	#[derive(Default)]
	struct Recorder(Vec<Op>);

	impl Surface for Recorder {
		fn clear(&mut self, width: f64, height: f64) {
			self.0.push(Op::Clear(width, height));
		}

		fn stroke_line(&mut self, _: (f64, f64), _: (f64, f64), color: Color, _: f64) {
			self.0.push(Op::Line(color.a));
		}

		fn fill_circle(&mut self, _: (f64, f64), _: f64, color: Color) {
			self.0.push(Op::Circle(color.a));
		}
	}

	fn field(width: f64, height: f64) -> ParticleField<SmallRng> {
		let mut field = ParticleField::new(FieldStyle::default(), SmallRng::seed_from_u64(42));
		field.resize(width, height);
		field
	}

	fn node(x: f64, y: f64, vx: f64, vy: f64) -> Node {
		Node { x, y, vx, vy, r: 1.0 }
	}

	#[test]
	fn resize_builds_nodes_within_configured_ranges() {
		let field = field(1280.0, 720.0);
		assert_eq!(field.nodes().len(), 51);
		for n in field.nodes() {
			assert!((0.0..1280.0).contains(&n.x));
			assert!((0.0..720.0).contains(&n.y));
			assert!((-0.14..0.14).contains(&n.vx));
			assert!((-0.14..0.14).contains(&n.vy));
			assert!((0.5..2.0).contains(&n.r));
		}
	}

	#[test]
	fn resize_replaces_the_whole_set() {
		let mut field = field(1280.0, 720.0);
		field.resize(400.0, 450.0);
		assert_eq!(field.nodes().len(), 10);
		assert!(field.nodes().iter().all(|n| n.x < 400.0 && n.y < 450.0));
		field.resize(0.0, 0.0);
		assert!(field.nodes().is_empty());
	}

	#[test]
	fn same_seed_gives_same_layout() {
		assert_eq!(field(900.0, 600.0).nodes(), field(900.0, 600.0).nodes());
	}

	#[test]
	fn advance_reflects_on_exit_only() {
		let mut field = field(100.0, 100.0);
		field.set_nodes(vec![
			node(99.95, 50.0, 0.1, 0.0),
			node(50.0, 0.05, 0.0, -0.1),
			node(50.0, 50.0, 0.1, 0.1),
		]);

		field.advance();

		let n = field.nodes();
		assert!(n[0].x > 100.0);
		assert_eq!(n[0].vx, -0.1);
		assert!(n[1].y < 0.0);
		assert_eq!(n[1].vy, 0.1);
		assert_eq!((n[2].vx, n[2].vy), (0.1, 0.1));

		field.advance();
		let n = field.nodes();
		assert!(n[0].x <= 100.0);
		assert_eq!(n[0].vx, -0.1);
		assert!(n[1].y >= 0.0);
		assert_eq!(n[1].vy, 0.1);
	}

	#[test]
	fn links_only_join_close_pairs() {
		let mut field = field(500.0, 500.0);
		field.set_nodes(vec![
			node(0.0, 0.0, 0.0, 0.0),
			node(30.0, 40.0, 0.0, 0.0),
			node(300.0, 300.0, 0.0, 0.0),
			node(300.0, 430.0, 0.0, 0.0),
		]);

		let links = field.links();

		assert_eq!(links.len(), 1);
		assert_eq!((links[0].a, links[0].b), (0, 1));
		assert_eq!(links[0].distance, 50.0);
		assert!((links[0].alpha - (1.0 - 50.0 / 130.0) * 0.18).abs() < 1e-12);
	}

	#[test]
	fn render_frame_draws_in_order_then_advances() {
		let mut field = field(500.0, 500.0);
		field.set_nodes(vec![node(10.0, 10.0, 1.0, 0.0), node(20.0, 10.0, 0.0, 1.0)]);
		let mut surface = Recorder::default();

		field.render_frame(&mut surface);

		assert_eq!(surface.0.len(), 4);
		assert_eq!(surface.0[0], Op::Clear(500.0, 500.0));
		assert!(matches!(surface.0[1], Op::Line(a) if (a - (1.0 - 10.0 / 130.0) * 0.18).abs() < 1e-12));
		assert_eq!(surface.0[2], Op::Circle(0.55));
		assert_eq!(surface.0[3], Op::Circle(0.55));
		assert_eq!((field.nodes()[0].x, field.nodes()[1].y), (11.0, 11.0));
	}
}
