//! Display region and HTML presentation for the flowgen orchestrator.
//!
//! This crate owns everything the user actually sees:
//! - [`DisplayRegion`]: the single shared HTML slot whose content is fully
//!   replaced on every state transition (last writer wins)
//! - [`html`]: the fragments for the three terminal display states
//!   (*working* placeholder, *empty* notice, *error* figure)
//! - [`escape_html`]: HTML escaping for text folded into fragments
//!
//! The orchestrator never distinguishes failure causes here; every failure
//! arrives as one message string and renders as one error presentation.

pub mod html;

mod escape;
mod region;

pub use escape::escape_html;
pub use region::DisplayRegion;
