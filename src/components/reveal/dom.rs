//! Wires reveal-on-scroll onto `.reveal` elements.

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use super::stagger::{RevealConfig, Revealer};
use crate::dom;
use crate::schedule::BrowserScheduler;

const REVEAL: &str = ".reveal";
const IN_VIEW: &str = "in-view";

/// Observe every `.reveal` element and add `in-view` to it, staggered, the
/// first time it scrolls into view. Hero reveals run on window `load`.
pub fn attach_reveal(config: RevealConfig) -> Option<()> {
	let revealer = Rc::new(Revealer::new(config, BrowserScheduler));
	attach_hero_reveal(revealer.clone());

	let targets = dom::query_all(REVEAL);
	if targets.is_empty() {
		debug!("portfolio: no .reveal elements on the page");
		return None;
	}

	let revealer_cb = revealer.clone();
	let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				observer.unobserve(&target);
				let el = target.clone();
				revealer_cb.reveal_sibling(sibling_index(&target), move || {
					dom::set_class(&el, IN_VIEW, true)
				});
			}
		},
	);

	let init = IntersectionObserverInit::new();
	init.set_threshold(&JsValue::from_f64(revealer.config().threshold));
	init.set_root_margin(&revealer.config().root_margin);
	let observer = match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
		Ok(observer) => observer,
		Err(e) => {
			warn!("portfolio: IntersectionObserver unavailable: {:?}", e);
			return None;
		}
	};
	cb.forget();

	for target in &targets {
		observer.observe(target);
	}
	debug!("portfolio: observing {} reveal elements", targets.len());
	Some(())
}

/// Position of `target` among the `.reveal` elements under its parent.
fn sibling_index(target: &Element) -> usize {
	let Some(parent) = target.parent_element() else {
		return 0;
	};
	let Ok(list) = parent.query_selector_all(REVEAL) else {
		return 0;
	};
	let node: &Node = target;
	dom::elements(&list)
		.iter()
		.position(|el| el.is_same_node(Some(node)))
		.unwrap_or(0)
}

fn attach_hero_reveal(revealer: Rc<Revealer<BrowserScheduler>>) {
	let run = move || {
		let reveals = dom::query_all("#hero .reveal")
			.into_iter()
			.map(|el| move || dom::set_class(&el, IN_VIEW, true));
		revealer.reveal_hero(reveals);
	};

	let Some(window) = web_sys::window() else {
		return;
	};
	let loaded = window
		.document()
		.is_some_and(|d| d.ready_state() == "complete");
	if loaded {
		run();
	} else {
		let mut run = Some(run);
		dom::listen(&window, "load", move |_| {
			if let Some(run) = run.take() {
				run();
			}
		});
	}
}
