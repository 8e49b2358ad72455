//! Core types for the vendor dashboard.
//!
//! Type-safe wrappers for identifiers, email addresses and order statuses.

pub mod email;
pub mod id;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use status::*;
