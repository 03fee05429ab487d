//! Google Sheets persistence adapter.
//!
//! The rest of the backend only sees the [`SheetStore`] trait; the concrete
//! [`SheetsClient`] talks to the Sheets v4 values REST API with a service
//! account token. Every failure surfaces as a `SheetError` for the caller
//! to log and swallow.

pub mod auth;
pub mod client;
pub mod store;

pub use auth::{ServiceAccountKey, TokenProvider};
pub use client::SheetsClient;
pub use store::SheetStore;
