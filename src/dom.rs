//! Small helpers over `web_sys` for wiring behavior onto existing markup.
//!
//! Listeners attached here live for the lifetime of the page, so their
//! closures are handed to the JS side with `forget`.

use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, NodeList};

pub fn document() -> Option<Document> {
	web_sys::window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
	document()?.get_element_by_id(id)
}

/// Collect a `NodeList` into elements, skipping non-element nodes.
pub fn elements(list: &NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

pub fn query_all(selector: &str) -> Vec<Element> {
	document()
		.and_then(|d| d.query_selector_all(selector).ok())
		.map(|list| elements(&list))
		.unwrap_or_default()
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
	let _ = element.class_list().toggle_with_force(class, on);
}

/// Attach a page-lifetime event listener.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> bool {
	let cb = Closure::<dyn FnMut(Event)>::new(handler);
	let ok = target
		.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
		.is_ok();
	cb.forget();
	ok
}

/// Attach a page-lifetime passive listener (for scroll handlers).
pub fn listen_passive(
	target: &EventTarget,
	event: &str,
	handler: impl FnMut(Event) + 'static,
) -> bool {
	let cb = Closure::<dyn FnMut(Event)>::new(handler);
	let options = AddEventListenerOptions::new();
	options.set_passive(true);
	let ok = target
		.add_event_listener_with_callback_and_add_event_listener_options(
			event,
			cb.as_ref().unchecked_ref(),
			&options,
		)
		.is_ok();
	cb.forget();
	ok
}
