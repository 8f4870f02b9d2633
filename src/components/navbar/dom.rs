//! Wires navbar behaviour onto the page markup.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::menu::MenuState;
use super::scroll::{NavConfig, SectionBounds};
use crate::dom;

/// Toggle the navbar's `scrolled` class and the active section link on every
/// scroll, and once right away.
pub fn attach_scroll_spy(config: NavConfig) -> Option<()> {
	let window = web_sys::window()?;
	let Some(navbar) = dom::element_by_id("navbar") else {
		warn!("portfolio: #navbar not found, scroll spy disabled");
		return None;
	};
	let links = dom::query_all(".nav-links a");
	let sections = dom::query_all("section[id]");
	debug!(
		"portfolio: scroll spy over {} sections, {} links",
		sections.len(),
		links.len()
	);

	let win = window.clone();
	let update = move || {
		let scroll_y = win.scroll_y().unwrap_or(0.0);
		dom::set_class(&navbar, "scrolled", config.is_scrolled(scroll_y));

		for section in &sections {
			let Some(bounds) = section_bounds(section) else {
				continue;
			};
			let active = config.is_active(&bounds, scroll_y);
			let href = format!("#{}", bounds.id);
			for link in &links {
				if link.get_attribute("href").as_deref() == Some(href.as_str()) {
					dom::set_class(link, "active", active);
				}
			}
		}
	};

	update();
	dom::listen_passive(&window, "scroll", move |_| update()).then_some(())
}

fn section_bounds(section: &Element) -> Option<SectionBounds> {
	let html = section.dyn_ref::<HtmlElement>()?;
	Some(SectionBounds::new(
		section.id(),
		html.offset_top() as f64,
		html.offset_height() as f64,
	))
}

struct MenuView {
	toggle: Element,
	links: Element,
}

impl MenuView {
	fn show(&self, state: MenuState) {
		dom::set_class(&self.links, "open", state.is_open());
		dom::set_class(&self.toggle, "open", state.is_open());
		let _ = self
			.toggle
			.set_attribute("aria-expanded", state.aria_expanded());
	}
}

/// Open/close the mobile menu from `#nav-toggle`; any nav link click closes it.
pub fn attach_menu_toggle() -> Option<()> {
	let (Some(toggle), Some(links)) = (
		dom::element_by_id("nav-toggle"),
		dom::element_by_id("nav-links"),
	) else {
		warn!("portfolio: #nav-toggle or #nav-links not found, menu toggle disabled");
		return None;
	};

	let state = Rc::new(Cell::new(MenuState::default()));
	let view = Rc::new(MenuView {
		toggle: toggle.clone(),
		links,
	});

	let (state_toggle, view_toggle) = (state.clone(), view.clone());
	dom::listen(&toggle, "click", move |_| {
		let mut menu = state_toggle.get();
		menu.toggle();
		state_toggle.set(menu);
		view_toggle.show(menu);
	});

	for link in dom::query_all(".nav-links a") {
		let (state_close, view_close) = (state.clone(), view.clone());
		dom::listen(&link, "click", move |_| {
			let mut menu = state_close.get();
			menu.close();
			state_close.set(menu);
			view_close.show(menu);
		});
	}
	Some(())
}
