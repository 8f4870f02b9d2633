//! Contact form controller: validate, send, report, clean up.
//!
//! The controller talks to the page only through [`FormView`] and to the
//! network only through [`ContactTransport`], so the whole submit flow can be
//! driven in tests with mocks and a [`ManualScheduler`].
//!
//! [`ManualScheduler`]: crate::schedule::ManualScheduler

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use super::message::ContactMessage;
use super::transport::ContactTransport;
use crate::schedule::Scheduler;

/// Endpoint and visitor-facing copy for the contact form.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
	/// Form-delivery endpoint receiving the JSON POST.
	pub endpoint: String,
	pub success_message: String,
	/// Shown when the endpoint rejects a message without saying why.
	pub fallback_error: String,
	/// Prefix for every delivery error.
	pub error_prefix: String,
	pub submit_label: String,
	pub sending_label: String,
	/// A success status clears itself after this long.
	pub status_clear_ms: u64,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			endpoint: "https://formspree.io/f/maqdlwne".to_string(),
			success_message: "✓ Message sent! I'll get back to you soon.".to_string(),
			fallback_error: "Something went wrong.".to_string(),
			error_prefix: "✗ ".to_string(),
			submit_label: "Send Message".to_string(),
			sending_label: "Sending…".to_string(),
			status_clear_ms: 5000,
		}
	}
}

/// What the status line under the form shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
	#[default]
	Idle,
	Success(String),
	Error(String),
}

impl FormStatus {
	pub fn text(&self) -> &str {
		match self {
			FormStatus::Idle => "",
			FormStatus::Success(text) | FormStatus::Error(text) => text,
		}
	}

	/// Full `class` attribute for the status element.
	pub fn class(&self) -> &'static str {
		match self {
			FormStatus::Idle => "form-status",
			FormStatus::Success(_) => "form-status success",
			FormStatus::Error(_) => "form-status error",
		}
	}
}

/// The parts of the page the controller updates.
pub trait FormView {
	fn show_status(&self, status: &FormStatus);
	/// Disable (or re-enable) the submit control and relabel it.
	fn set_busy(&self, busy: bool, label: &str);
	/// Clear every input.
	fn reset(&self);
}

/// Re-enables the submit control when dropped, however the submit ends.
struct BusyGuard<'a, V: FormView> {
	view: &'a V,
	label: &'a str,
}

impl<'a, V: FormView> BusyGuard<'a, V> {
	fn engage(view: &'a V, busy_label: &str, label: &'a str) -> Self {
		view.set_busy(true, busy_label);
		Self { view, label }
	}
}

impl<V: FormView> Drop for BusyGuard<'_, V> {
	fn drop(&mut self) {
		self.view.set_busy(false, self.label);
	}
}

/// Drives one contact form.
pub struct ContactForm<T, V, C: Scheduler> {
	config: ContactConfig,
	transport: T,
	view: Rc<V>,
	scheduler: C,
	clear_timer: RefCell<Option<C::TimeoutHandle>>,
}

impl<T, V, C> ContactForm<T, V, C>
where
	T: ContactTransport,
	V: FormView + 'static,
	C: Scheduler,
{
	pub fn new(config: ContactConfig, transport: T, view: V, scheduler: C) -> Self {
		Self {
			config,
			transport,
			view: Rc::new(view),
			scheduler,
			clear_timer: RefCell::new(None),
		}
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn config(&self) -> &ContactConfig {
		&self.config
	}

	/// Validate and send `message`, keeping the view in step. Returns the
	/// status that was shown.
	///
	/// Invalid input is reported without touching the network. Whatever the
	/// outcome of sending, the submit control ends up enabled again.
	pub async fn submit(&self, message: ContactMessage) -> FormStatus {
		if let Err(e) = message.validate() {
			debug!("portfolio: contact form rejected locally: {}", e);
			let status = FormStatus::Error(e.to_string());
			self.show(&status);
			return status;
		}

		let _busy = BusyGuard::engage(
			&*self.view,
			&self.config.sending_label,
			&self.config.submit_label,
		);

		let status = match self.transport.send(&message).await {
			Ok(()) => {
				self.view.reset();
				FormStatus::Success(self.config.success_message.clone())
			}
			Err(e) => {
				warn!("portfolio: contact form delivery failed: {}", e);
				FormStatus::Error(format!("{}{}", self.config.error_prefix, e))
			}
		};

		self.show(&status);
		if matches!(status, FormStatus::Success(_)) {
			self.schedule_clear();
		}
		status
	}

	fn show(&self, status: &FormStatus) {
		if let Some(handle) = self.clear_timer.borrow_mut().take() {
			self.scheduler.clear_timeout(handle);
		}
		self.view.show_status(status);
	}

	fn schedule_clear(&self) {
		let view = self.view.clone();
		let handle = self.scheduler.set_timeout(
			Duration::from_millis(self.config.status_clear_ms),
			Box::new(move || view.show_status(&FormStatus::Idle)),
		);
		*self.clear_timer.borrow_mut() = handle;
	}
}
