//! HTTP client for the flowchart generation endpoint.
//!
//! The endpoint is an external collaborator: it accepts user source text and
//! answers with Mermaid syntax. This crate covers exactly one round-trip:
//!
//! - [`GeneratorClient`] issues `POST /generate_mermaid` with a JSON body
//!   carrying the source text under a `code` key
//! - [`GenerateResponse`] decodes the optional `mermaid_syntax` field
//! - [`ClientError`] separates transport failures, non-success statuses
//!   (with the raw body text preserved), and JSON decoding failures
//!
//! No caching, no retries, no request fencing: a faithful single-shot call.
//!
//! # Example
//!
//! ```ignore
//! use flowgen_client::GeneratorClient;
//!
//! let client = GeneratorClient::new("http://127.0.0.1:5000");
//! let response = client.generate("def f():\n    return 1")?;
//! match response.syntax() {
//!     Some(mermaid) => println!("{mermaid}"),
//!     None => println!("nothing to render"),
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::GeneratorClient;
pub use error::ClientError;
pub use types::{GenerateRequest, GenerateResponse};
