//! Binds the contact form controller to the page's form elements.

use std::rc::Rc;

use leptos::task::spawn_local;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::form::{ContactConfig, ContactForm, FormStatus, FormView};
use super::message::ContactMessage;
use super::transport::HttpTransport;
use crate::dom;
use crate::schedule::BrowserScheduler;

/// [`FormView`] over the real form, its status line and submit button.
pub struct DomFormView {
	form: HtmlFormElement,
	status: Element,
	submit: HtmlButtonElement,
}

impl DomFormView {
	/// Look up `#contact-form`, `#form-status` and `#contact-submit-btn`.
	pub fn from_page() -> Option<Self> {
		Some(Self {
			form: dom::element_by_id("contact-form")?.dyn_into().ok()?,
			status: dom::element_by_id("form-status")?,
			submit: dom::element_by_id("contact-submit-btn")?.dyn_into().ok()?,
		})
	}
}

impl FormView for DomFormView {
	fn show_status(&self, status: &FormStatus) {
		self.status.set_text_content(Some(status.text()));
		self.status.set_class_name(status.class());
	}

	fn set_busy(&self, busy: bool, label: &str) {
		self.submit.set_disabled(busy);
		self.submit.set_text_content(Some(label));
	}

	fn reset(&self) {
		self.form.reset();
	}
}

/// Intercept `#contact-form` submits and deliver them through the configured
/// endpoint.
pub fn attach_contact_form(config: ContactConfig) -> Option<()> {
	let view = match DomFormView::from_page() {
		Some(view) => view,
		None => {
			warn!("portfolio: contact form markup incomplete, form left to the browser");
			return None;
		}
	};
	let form = view.form.clone();
	let transport = HttpTransport::new(config.endpoint.clone(), config.fallback_error.clone());
	info!("portfolio: contact form posts to {}", config.endpoint);
	let controller = Rc::new(ContactForm::new(config, transport, view, BrowserScheduler));

	let form_fields = form.clone();
	dom::listen(&form, "submit", move |ev| {
		ev.prevent_default();
		let message = read_message(&form_fields);
		let controller = controller.clone();
		spawn_local(async move {
			let _ = controller.submit(message).await;
		});
	})
	.then_some(())
}


fn read_message(form: &HtmlFormElement) -> ContactMessage {
	ContactMessage::new(
		&field_value(form, "#contact-name"),
		&field_value(form, "#contact-email"),
		&field_value(form, "#contact-message"),
	)
}

/// Current value of an input or textarea inside `form`; empty when missing.
fn field_value(form: &HtmlFormElement, selector: &str) -> String {
	let Some(el) = form.query_selector(selector).ok().flatten() else {
		return String::new();
	};
	if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
		input.value()
	} else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
		area.value()
	} else {
		String::new()
	}
}
