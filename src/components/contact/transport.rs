//! Delivery of contact messages to the form endpoint.

use log::warn;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use thiserror::Error;

use super::message::ContactMessage;

/// Why delivery failed. The display text is shown to the visitor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
	/// The endpoint answered with a non-success status.
	#[error("{0}")]
	Rejected(String),
	/// The request never got an answer.
	#[error("{0}")]
	Network(String),
}

/// Sends a validated message somewhere.
#[allow(async_fn_in_trait, reason = "driven by spawn_local on the main thread")]
pub trait ContactTransport {
	async fn send(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
	errors: Option<Vec<ErrorDetail>>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
	#[serde(default)]
	message: String,
}

/// Pull the visitor-facing text out of an endpoint error body of the form
/// `{ "errors": [{ "message": "..." }, ...] }`. Messages are joined with
/// `", "`. `None` when the body is not JSON or carries no messages.
pub fn rejection_message(body: &[u8]) -> Option<String> {
	let body: ErrorBody = serde_json::from_slice(body).ok()?;
	let messages: Vec<String> = body
		.errors?
		.into_iter()
		.map(|e| e.message)
		.filter(|m| !m.is_empty())
		.collect();
	if messages.is_empty() {
		None
	} else {
		Some(messages.join(", "))
	}
}

/// Posts messages as JSON to a form-delivery endpoint.
pub struct HttpTransport {
	client: reqwest::Client,
	endpoint: String,
	fallback: String,
}

impl HttpTransport {
	/// `fallback` is reported when a rejection carries no usable message.
	pub fn new(endpoint: impl Into<String>, fallback: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint: endpoint.into(),
			fallback: fallback.into(),
		}
	}
}

impl ContactTransport for HttpTransport {
	async fn send(&self, message: &ContactMessage) -> Result<(), SubmitError> {
		let response = self
			.client
			.post(&self.endpoint)
			.header(ACCEPT, "application/json")
			.json(message)
			.send()
			.await
			.map_err(|e| SubmitError::Network(e.to_string()))?;

		let status = response.status();
		if status.is_success() {
			return Ok(());
		}

		let body = response.bytes().await.unwrap_or_default();
		warn!("portfolio: contact endpoint answered {}", status);
		Err(SubmitError::Rejected(
			rejection_message(&body).unwrap_or_else(|| self.fallback.clone()),
		))
	}
}
