//! HTML fragments for the three terminal display states.
//!
//! Every generation attempt starts with the working placeholder and ends in
//! exactly one of: rendered markup (written verbatim, not produced here),
//! the empty-result notice, or the error figure.

use crate::escape::escape_html;

/// Placeholder shown while a generation request is in flight.
#[must_use]
pub fn working_placeholder() -> &'static str {
    r#"<div class="flowchart-status">Generating flowchart&hellip;</div>"#
}

/// Notice for the valid-but-empty outcome (no diagram description returned).
///
/// This is a normal result, not an error, and must stay visually distinct
/// from [`error_figure`].
#[must_use]
pub fn empty_notice() -> &'static str {
    r#"<div class="flowchart-status">No flowchart to display.</div>"#
}

/// Error presentation: a warning marker followed by the failure message.
///
/// The message is escaped; raw response bodies and renderer errors pass
/// through here unsanitized otherwise.
#[must_use]
pub fn error_figure(message: &str) -> String {
    format!(
        r#"<figure class="flowchart flowchart-error"><pre>&#9888; Flowchart generation failed: {}</pre></figure>"#,
        escape_html(message)
    )
}
