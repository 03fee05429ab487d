//! HTTP surface of the intake backend.

pub mod routes;

pub use routes::{AppState, intake_routes};
