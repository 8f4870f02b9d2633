//! Contact form payload and client-side validation.

use serde::Serialize;
use thiserror::Error;

/// Why a message was not sent. The display text is shown to the visitor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("Please fill in all fields.")]
	MissingField,
	#[error("Please enter a valid email address.")]
	InvalidEmail,
}

/// What the visitor typed, trimmed. Serialized as the request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub message: String,
}

impl ContactMessage {
	pub fn new(name: &str, email: &str, message: &str) -> Self {
		Self {
			name: name.trim().to_string(),
			email: email.trim().to_string(),
			message: message.trim().to_string(),
		}
	}

	/// All three fields present, and the email has a `local@domain.tld` shape.
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
			return Err(ValidationError::MissingField);
		}
		if !is_valid_email(&self.email) {
			return Err(ValidationError::InvalidEmail);
		}
		Ok(())
	}
}

/// Loose shape check: one `@`, no whitespace, and a dot inside the domain
/// with something on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c == '@' || c.is_whitespace());
	if !clean(local) || !clean(domain) {
		return false;
	}
	domain
		.char_indices()
		.any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
