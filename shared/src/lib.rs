//! Types shared by the Smart POS site backend and frontend.
//!
//! - [`contact`]: the contact form schema, validated on both sides
//! - [`response`]: the `/api/contact` response body
//! - [`plans`]: the pricing plan catalog
//! - [`company`]: public contact details
//! - [`content`]: FAQ and testimonial copy

pub mod company;
pub mod contact;
pub mod content;
pub mod plans;
pub mod response;

pub use contact::{validate, ContactForm, ContactSubmission, Field, FieldError, ValidationFailure};
pub use response::ContactResponse;
