//! Log sanitization utilities.
//!
//! Response bodies can carry bearer tokens and personal data; debug logs
//! keep only a bounded prefix of them.

/// Maximum number of body bytes kept in a log line.
const MAX_LOGGED_BYTES: usize = 256;

/// Truncate a response body for safe logging.
///
/// Bodies within the limit pass through unchanged. Longer ones keep a
/// prefix, cut back to a char boundary, followed by the total size.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= MAX_LOGGED_BYTES {
        return body.to_string();
    }
    let cut = (0..=MAX_LOGGED_BYTES)
        .rev()
        .find(|&i| body.is_char_boundary(i))
        .unwrap_or(0);
    format!(
        "{}... [truncated, total {} bytes]",
        &body[..cut],
        body.len()
    )
}
