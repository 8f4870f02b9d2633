//! portfolio-site: client-side behaviour for a single-page portfolio.
//!
//! This crate compiles to WASM and attaches to an existing static page: an
//! animated particle backdrop behind the hero, navbar scroll highlighting, a
//! mobile menu toggle, reveal-on-scroll animations and a contact form that
//! posts to a form-delivery endpoint.

use leptos::mount::mount_to;
use leptos::prelude::*;
use any_spawner::Executor;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlScriptElement};

pub mod components;
pub mod config;
mod dom;
pub mod schedule;

pub use components::particle_field::{FieldStyle, ParticleField, ParticleFieldCanvas, RenderLoop};
pub use config::SiteConfig;
pub use schedule::{BrowserScheduler, ManualScheduler, Scheduler};

use components::contact::attach_contact_form;
use components::navbar::{attach_menu_toggle, attach_scroll_spy};
use components::reveal::attach_reveal;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Load overrides from a script element with id="site-config".
/// Falls back to defaults when the element is absent or malformed.
fn load_site_config() -> SiteConfig {
	let Some(element) = dom::element_by_id("site-config") else {
		debug!("portfolio: no site-config element, using defaults");
		return SiteConfig::default();
	};
	let Ok(script) = element.dyn_into::<HtmlScriptElement>() else {
		warn!("portfolio: #site-config is not a script element, using defaults");
		return SiteConfig::default();
	};
	let json_text = script.text().unwrap_or_default();

	match SiteConfig::from_json(&json_text) {
		Ok(config) => {
			info!("portfolio: loaded site config");
			config
		}
		Err(e) => {
			warn!("portfolio: failed to parse site config: {}", e);
			SiteConfig::default()
		}
	}
}

/// Mount the particle backdrop into the element with id="hero-canvas-host".
fn mount_backdrop(style: FieldStyle) -> Option<()> {
	let host: HtmlElement = dom::element_by_id("hero-canvas-host")?.dyn_into().ok()?;
	mount_to(host, move || view! { <ParticleFieldCanvas style=style /> }).forget();
	Some(())
}

/// Attach every behaviour to the current page. Pieces whose markup is
/// missing are skipped.
pub fn start() {
	// Already initialized is fine.
	let _ = Executor::init_wasm_bindgen();
	let config = load_site_config();

	let attached = [
		("backdrop", mount_backdrop(config.field.clone())),
		("scroll spy", attach_scroll_spy(config.nav.clone())),
		("menu toggle", attach_menu_toggle()),
		("reveal", attach_reveal(config.reveal.clone())),
		("contact form", attach_contact_form(config.contact.clone())),
	];
	for (name, result) in attached {
		if result.is_none() {
			debug!("portfolio: {} not attached", name);
		}
	}
	info!("portfolio: behaviours attached");
}
