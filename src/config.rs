//! Site-wide configuration.
//!
//! Every behaviour ships with working defaults; a page can override any
//! subset by embedding JSON in `<script id="site-config" type="application/json">`:
//!
//! ```json
//! { "field": { "link_distance": 100 }, "contact": { "endpoint": "https://formspree.io/f/xxxx" } }
//! ```

use serde::Deserialize;

use crate::components::contact::ContactConfig;
use crate::components::navbar::NavConfig;
use crate::components::particle_field::FieldStyle;
use crate::components::reveal::RevealConfig;

/// Configuration for all page behaviours.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	pub field: FieldStyle,
	pub nav: NavConfig,
	pub reveal: RevealConfig,
	pub contact: ContactConfig,
}

impl SiteConfig {
	/// Parse overrides; sections and keys that are absent keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_all_defaults() {
		assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
	}

	#[test]
	fn partial_overrides_merge_with_defaults() {
		let config = SiteConfig::from_json(
			r#"{
				"field": { "density": 9000, "node_opacity": 0.4 },
				"reveal": { "max_delay_ms": 240 },
				"contact": { "endpoint": "https://example.test/f/1" }
			}"#,
		)
		.unwrap();

		assert_eq!(config.field.density, 9000.0);
		assert_eq!(config.field.node_opacity, 0.4);
		assert_eq!(config.field.link_distance, 130.0);
		assert_eq!(config.reveal.max_delay_ms, 240);
		assert_eq!(config.reveal.step_ms, 80);
		assert_eq!(config.nav, NavConfig::default());
		assert_eq!(config.contact.endpoint, "https://example.test/f/1");
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(SiteConfig::from_json("{ field: }").is_err());
		assert!(SiteConfig::from_json(r#"{ "nav": { "scrolled_after": "far" } }"#).is_err());
	}
}
