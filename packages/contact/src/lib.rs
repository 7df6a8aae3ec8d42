//! Contact submission workflow for the GENIUS agency site.
//!
//! One lead inquiry at a time: collect fields, validate synchronously on
//! submit, guard against bots with a honeypot, then issue a single async
//! POST to the external contact endpoint, or simulate it locally when no
//! endpoint is configured. Nothing is persisted; every failure path
//! returns the form to an editable state.

pub mod client;
pub mod config;
pub mod error;
pub mod form;

pub use client::{ContactClient, SubmitOutcome};
pub use config::AppConfig;
pub use error::SubmitError;
pub use form::{ContactForm, Field, Phase};
