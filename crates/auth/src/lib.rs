//! `furnish-auth` — pure sign-in form validation.
//!
//! This crate is intentionally decoupled from rendering and from any identity
//! backend: it only decides whether submitted credentials are well-formed.

pub mod credentials;

pub use credentials::{Credentials, CredentialError, MIN_PASSWORD_LEN};
