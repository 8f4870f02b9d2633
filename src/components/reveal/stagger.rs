//! Timing for reveal-on-scroll.
//!
//! Elements that enter the viewport together are revealed one after another,
//! each delayed by its position among its `.reveal` siblings, with the delay
//! capped so long lists do not lag behind the scroll. Hero elements get their
//! own stagger on page load.

use std::time::Duration;

use serde::Deserialize;

use crate::schedule::Scheduler;

/// Reveal timing and intersection tuning.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	/// Extra delay per sibling index.
	pub step_ms: u64,
	/// Upper bound on the sibling delay.
	pub max_delay_ms: u64,
	/// Visible fraction at which an element counts as intersecting.
	pub threshold: f64,
	/// Intersection root margin, CSS syntax.
	pub root_margin: String,
	/// Delay before the first hero element is revealed on load.
	pub hero_initial_ms: u64,
	/// Extra delay per hero element.
	pub hero_step_ms: u64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			step_ms: 80,
			max_delay_ms: 400,
			threshold: 0.12,
			root_margin: "0px 0px -40px 0px".to_string(),
			hero_initial_ms: 200,
			hero_step_ms: 130,
		}
	}
}

impl RevealConfig {
	/// Delay for the `index`-th `.reveal` element within its parent.
	pub fn sibling_delay(&self, index: usize) -> Duration {
		let ms = (index as u64)
			.saturating_mul(self.step_ms)
			.min(self.max_delay_ms);
		Duration::from_millis(ms)
	}

	/// Delay for the `index`-th hero element after page load.
	pub fn hero_delay(&self, index: usize) -> Duration {
		let ms = self
			.hero_initial_ms
			.saturating_add((index as u64).saturating_mul(self.hero_step_ms));
		Duration::from_millis(ms)
	}
}

/// Schedules reveal callbacks according to a [`RevealConfig`].
pub struct Revealer<C> {
	config: RevealConfig,
	scheduler: C,
}

impl<C: Scheduler> Revealer<C> {
	pub fn new(config: RevealConfig, scheduler: C) -> Self {
		Self { config, scheduler }
	}

	pub fn config(&self) -> &RevealConfig {
		&self.config
	}

	/// Run `reveal` once the sibling stagger for `index` has elapsed.
	pub fn reveal_sibling(&self, index: usize, reveal: impl FnOnce() + 'static) {
		let _ = self
			.scheduler
			.set_timeout(self.config.sibling_delay(index), Box::new(reveal));
	}

	/// Stagger the hero reveals in order.
	pub fn reveal_hero<F>(&self, reveals: impl IntoIterator<Item = F>)
	where
		F: FnOnce() + 'static,
	{
		for (i, reveal) in reveals.into_iter().enumerate() {
			let _ = self
				.scheduler
				.set_timeout(self.config.hero_delay(i), Box::new(reveal));
		}
	}
}
