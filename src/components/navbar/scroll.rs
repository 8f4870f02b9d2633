//! Scroll-position rules for the navbar: the "scrolled" look and which
//! section link is active.

use serde::Deserialize;

/// Thresholds for navbar scroll behaviour.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
	/// The navbar gets its `scrolled` class once the page is scrolled past this.
	pub scrolled_after: f64,
	/// How far below the viewport top a section must reach to count as current.
	pub active_offset: f64,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			scrolled_after: 30.0,
			active_offset: 100.0,
		}
	}
}

/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
	pub id: String,
	pub top: f64,
	pub height: f64,
}

impl SectionBounds {
	pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
		Self {
			id: id.into(),
			top,
			height,
		}
	}

	/// Half-open: `top <= y < top + height`.
	pub fn contains(&self, y: f64) -> bool {
		y >= self.top && y < self.top + self.height
	}
}

impl NavConfig {
	pub fn is_scrolled(&self, scroll_y: f64) -> bool {
		scroll_y > self.scrolled_after
	}

	/// Whether `section`'s link should be highlighted at `scroll_y`.
	pub fn is_active(&self, section: &SectionBounds, scroll_y: f64) -> bool {
		section.contains(scroll_y + self.active_offset)
	}

	/// Ids of every section whose link should be highlighted.
	pub fn active_sections<'a>(
		&self,
		sections: &'a [SectionBounds],
		scroll_y: f64,
	) -> impl Iterator<Item = &'a str> {
		let probe = scroll_y + self.active_offset;
		sections
			.iter()
			.filter(move |s| s.contains(probe))
			.map(|s| s.id.as_str())
	}
}
