//! # Formatting Utilities
//!
//! Account formatting for log lines. Ethereum accounts keep their `0x`
//! prefix so the truncated form is still recognizable.

/// Format an account by showing `prefix_len` characters after `0x` and the
/// last `suffix_len` characters.
///
/// If the account is too short to truncate meaningfully it is returned as-is.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (hex_prefix, body) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    // Non-ASCII input cannot be sliced safely by byte offset
    if !body.is_ascii() || body.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    format!(
        "{}{}...{}",
        hex_prefix,
        &body[..prefix_len],
        &body[body.len() - suffix_len..]
    )
}

/// Format an account with a 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
