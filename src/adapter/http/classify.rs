//! Transport Error Classification
//!
//! Maps reqwest failures onto `UploadOutcome` variants.

use std::error::Error as StdError;

use crate::domain::entities::upload_outcome::UploadOutcome;

/// Convert an error and all of its sources into one line
pub fn error_chain_to_string(e: &(dyn StdError + 'static)) -> String {
    let mut messages = vec![e.to_string()];
    let mut source = e.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if !messages.contains(&message) {
            messages.push(message);
        }
        source = cause.source();
    }
    messages.join(" | ")
}

/// Check if an error chain describes an elapsed deadline
pub fn is_timeout_message(error_msg: &str) -> bool {
    error_msg.contains("timed out")
        || error_msg.contains("Timeout")
        || error_msg.contains("timeout")
        || error_msg.contains("deadline has elapsed")
}

/// Check if any link of the chain is a reqwest body error
///
/// The request body is the local file stream, so a body error means the
/// file stopped being readable after it was opened. reqwest reports it
/// nested under a send error, never as the outer error.
pub fn is_body_error(e: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(e);
    while let Some(link) = current {
        if link
            .downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_body)
        {
            return true;
        }
        current = link.source();
    }
    false
}

/// Classify a failed request (no HTTP status was received)
pub fn classify_error(err: &reqwest::Error) -> UploadOutcome {
    let message = error_chain_to_string(err);

    if err.is_timeout() || is_timeout_message(&message) {
        return UploadOutcome::ConnectTimeout;
    }
    if is_body_error(err) {
        return UploadOutcome::LocalIo(message);
    }
    UploadOutcome::Transport(message)
}
