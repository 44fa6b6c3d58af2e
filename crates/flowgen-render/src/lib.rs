//! Rendering-capability seam for flowgen.
//!
//! The library that turns a diagram description into displayable markup is
//! an external collaborator. This crate pins down the contract the
//! orchestrator relies on without implementing that library:
//!
//! - [`DiagramRenderer`]: `submit(id, description)` registers a render and
//!   returns a [`RenderHandle`]; the markup arrives later through the
//!   handle (two-step async contract, one suspension model for callers)
//! - [`RenderCompletion`]: the renderer-side half that delivers the markup
//!   or a failure
//! - [`DiagramId`]: ephemeral identifier, unique per invocation, used only
//!   to namespace the render call
//! - [`EmbedRenderer`]: built-in implementation that emits a client-side
//!   `<pre class="mermaid">` embed and completes immediately
//!
//! Renderers may reject a malformed description up front (`submit` returns
//! an error) or asynchronously (the completion reports a [`RenderError`]).

mod embed;
mod handle;
mod ids;
mod renderer;

pub use embed::EmbedRenderer;
pub use handle::{RenderCompletion, RenderHandle};
pub use ids::DiagramId;
pub use renderer::{DiagramRenderer, RenderError};
