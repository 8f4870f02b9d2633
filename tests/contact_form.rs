//! End-to-end submit flow of the contact form against a mocked endpoint.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use futures::executor::block_on;
use portfolio_site::ManualScheduler;
use portfolio_site::components::contact::{
	ContactConfig, ContactForm, ContactMessage, ContactTransport, FormStatus, FormView,
	SubmitError, rejection_message,
};

/// Answers every request with a fixed HTTP status and body.
struct Endpoint {
	status: u16,
	body: &'static [u8],
	calls: Cell<usize>,
}

impl Endpoint {
	fn new(status: u16, body: &'static [u8]) -> Self {
		Self {
			status,
			body,
			calls: Cell::new(0),
		}
	}
}

impl ContactTransport for Endpoint {
	async fn send(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
		self.calls.set(self.calls.get() + 1);
		if (200..300).contains(&self.status) {
			Ok(())
		} else {
			Err(SubmitError::Rejected(
				rejection_message(self.body).unwrap_or_else(|| "Something went wrong.".into()),
			))
		}
	}
}

struct Offline;

impl ContactTransport for Offline {
	async fn send(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
		Err(SubmitError::Network("Failed to fetch".into()))
	}
}

#[derive(Default)]
struct Page {
	status: RefCell<FormStatus>,
	busy: RefCell<Vec<(bool, String)>>,
	filled: Cell<bool>,
}

impl Page {
	fn filled() -> Self {
		let page = Self::default();
		page.filled.set(true);
		page
	}

	fn status(&self) -> FormStatus {
		self.status.borrow().clone()
	}

	fn enabled(&self) -> bool {
		self.busy.borrow().last().is_none_or(|(busy, _)| !busy)
	}
}

impl FormView for Page {
	fn show_status(&self, status: &FormStatus) {
		*self.status.borrow_mut() = status.clone();
	}

	fn set_busy(&self, busy: bool, label: &str) {
		self.busy.borrow_mut().push((busy, label.to_string()));
	}

	fn reset(&self) {
		self.filled.set(false);
	}
}

fn form<T: ContactTransport>(transport: T) -> (ContactForm<T, Page, ManualScheduler>, ManualScheduler) {
	let scheduler = ManualScheduler::new();
	let form = ContactForm::new(ContactConfig::default(), transport, Page::filled(), scheduler.clone());
	(form, scheduler)
}

fn valid() -> ContactMessage {
	ContactMessage::new("A", "a@b.com", "hi")
}

#[test]
fn successful_send_resets_and_later_clears() {
	let (form, scheduler) = form(Endpoint::new(200, b"{}"));

	let status = block_on(form.submit(valid()));

	let page = form.view();
	assert_eq!(status.text(), "✓ Message sent! I'll get back to you soon.");
	assert_eq!(page.status(), status);
	assert_eq!(page.status().class(), "form-status success");
	assert!(!page.filled.get());
	assert_eq!(
		*page.busy.borrow(),
		vec![(true, "Sending…".to_string()), (false, "Send Message".to_string())]
	);

	scheduler.advance(Duration::from_millis(4_999));
	assert_eq!(page.status(), status);
	scheduler.advance(Duration::from_millis(1));
	assert_eq!(page.status(), FormStatus::Idle);
	assert_eq!(page.status().class(), "form-status");
}

#[test]
fn invalid_email_never_reaches_the_endpoint() {
	let (form, scheduler) = form(Endpoint::new(200, b"{}"));

	let status = block_on(form.submit(ContactMessage::new("A", "not-an-email", "hi")));

	assert_eq!(status, FormStatus::Error("Please enter a valid email address.".into()));
	assert_eq!(form.view().status().class(), "form-status error");
	assert!(form.view().filled.get());
	assert!(form.view().busy.borrow().is_empty());
	assert_eq!(scheduler.pending_timeouts(), 0);
}

#[test]
fn blank_fields_never_reach_the_endpoint() {
	let (form, _) = form(Endpoint::new(200, b"{}"));

	let status = block_on(form.submit(ContactMessage::new("  ", "a@b.com", "hi")));

	assert_eq!(status.text(), "Please fill in all fields.");
	assert_eq!(form.view().status(), status);
}

#[test]
fn endpoint_rejection_is_reported_and_button_restored() {
	let (form, scheduler) = form(Endpoint::new(422, br#"{ "errors": [{ "message": "bad" }] }"#));

	let status = block_on(form.submit(valid()));

	assert_eq!(status, FormStatus::Error("✗ bad".into()));
	assert_eq!(form.view().status(), status);
	assert!(form.view().enabled());
	assert_eq!(
		form.view().busy.borrow().last(),
		Some(&(false, "Send Message".to_string()))
	);
	assert!(form.view().filled.get());

	scheduler.advance(Duration::from_secs(60));
	assert_eq!(form.view().status(), status);
}

#[test]
fn rejection_without_details_uses_fallback() {
	let (form, _) = form(Endpoint::new(500, b"Internal Server Error"));

	let status = block_on(form.submit(valid()));

	assert_eq!(status.text(), "✗ Something went wrong.");
	assert!(form.view().enabled());
}

#[test]
fn network_failure_is_reported_and_button_restored() {
	let (form, _) = form(Offline);

	let status = block_on(form.submit(valid()));

	assert_eq!(status.text(), "✗ Failed to fetch");
	assert!(form.view().enabled());
}

#[test]
fn newer_status_is_not_wiped_by_an_old_timer() {
	let (form, scheduler) = form(Endpoint::new(200, b"{}"));
	block_on(form.submit(valid()));
	assert_eq!(scheduler.pending_timeouts(), 1);

	scheduler.advance(Duration::from_millis(3_000));
	let status = block_on(form.submit(ContactMessage::default()));
	scheduler.advance(Duration::from_millis(3_000));

	assert_eq!(scheduler.pending_timeouts(), 0);
	assert_eq!(form.view().status(), status);
	assert_eq!(status.text(), "Please fill in all fields.");
}

#[test]
fn endpoint_is_called_once_per_valid_submit() {
	let (form, _) = form(Endpoint::new(200, b"{}"));

	block_on(form.submit(valid()));
	block_on(form.submit(ContactMessage::new("A", "a@b", "hi")));
	block_on(form.submit(valid()));

	assert_eq!(form_calls(&form), 2);
}

fn form_calls(form: &ContactForm<Endpoint, Page, ManualScheduler>) -> usize {
	form.transport().calls.get()
}
