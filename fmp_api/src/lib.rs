//! Typed async client for the Financial Modeling Prep REST API.
//!
//! Every endpoint is a method on [`Client`] that returns the decoded JSON
//! rows unchanged, wrapped in an [`Outcome`] so callers can tell an empty
//! answer from a failed call.

mod client;
mod config;
mod endpoints;
mod errors;
mod query;
pub mod types;
pub mod validation;
pub use self::client::Client;
pub use self::config::{ApiVersion, ErrorPolicy, Filenames, Settings};
pub use self::errors::Error;
pub use self::query::{format_date, Params, Query, QueryCommon};
pub use self::types::{Outcome, Payload, Record};
