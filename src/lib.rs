//! Client Intake — onboarding form backend.
//!
//! Accepts client-onboarding submissions over HTTP, renders a summary with
//! recommended next steps, and best-effort logs each record as a row in a
//! Google Sheet. Duplicate names are rejected with a notice; a search
//! endpoint scans the stored rows by substring.

pub mod config;
pub mod error;
pub mod intake;
pub mod server;
pub mod sheets;
