//! formsift HTTP API server.
//!
//! Exposes the document parsing pipeline and the two structuring
//! operations over REST. The structuring endpoints always answer 200 with
//! a string payload; failures travel inside the JSON error envelope.

pub mod routes;
pub mod server;

pub use server::{AppState, start_server};
