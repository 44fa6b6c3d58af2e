//! Generation orchestrator for flowgen.
//!
//! [`Session::generate`] runs the whole request flow for one piece of user
//! source text: working placeholder, one round-trip to the generation
//! endpoint, then either rendered markup, the empty-result notice, or the
//! single uniform error presentation in the shared [`DisplayRegion`].
//!
//! Failures of every cause — transport, HTTP status, JSON shape, renderer —
//! collapse into one [`GenerateError`]; the presentation never distinguishes
//! them, while the underlying [`FailureCause`] goes to the diagnostic log.
//!
//! [`DisplayRegion`]: flowgen_view::DisplayRegion

mod error;
mod session;
mod source;

pub use error::{FailureCause, GenerateError};
pub use session::{Outcome, Session};
pub use source::SyntaxSource;
