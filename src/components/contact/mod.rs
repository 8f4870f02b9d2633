//! Contact form: local validation, JSON delivery to a form endpoint, and a
//! status line that reports the outcome.
//!
//! # Example
//!
//! ```ignore
//! let form = ContactForm::new(ContactConfig::default(), transport, view, BrowserScheduler);
//! let status = form.submit(ContactMessage::new("A", "a@b.com", "hi")).await;
//! ```

mod dom;
mod form;
mod message;
mod transport;

pub use dom::{DomFormView, attach_contact_form};
pub use form::{ContactConfig, ContactForm, FormStatus, FormView};
pub use message::{ContactMessage, ValidationError, is_valid_email};
pub use transport::{ContactTransport, HttpTransport, SubmitError, rejection_message};
