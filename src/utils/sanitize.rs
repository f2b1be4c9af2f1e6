//! Utilities for sanitizing error messages.
//!
//! Failure messages from the upstream feed end up in the `/state` payload and in
//! logs. Control characters are stripped and the length is bounded.

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can cause
/// issues when displayed in logs or embedded in JSON.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .filter(|c| *c != '\u{7F}')
        .collect()
}

/// Sanitizes and truncates an error message to `MAX_ERROR_MESSAGE_LENGTH` bytes.
///
/// Truncation happens on a character boundary and appends a note with the
/// original length.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let max_len = crate::config::MAX_ERROR_MESSAGE_LENGTH;

    if sanitized.len() <= max_len {
        return sanitized;
    }

    // Leave room for the truncation note
    let mut cut = max_len.saturating_sub(50).min(sanitized.len());
    while !sanitized.is_char_boundary(cut) {
        cut -= 1;
    }
    format!(
        "{}... (truncated, original length: {} chars)",
        &sanitized[..cut],
        sanitized.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_error_message_removes_control_chars() {
        let input = "Error\x00message\x01with\x02control\x03chars\x7F";
        let output = sanitize_error_message(input);
        assert_eq!(output, "Errormessagewithcontrolchars");
    }

    #[test]
    fn test_sanitize_error_message_preserves_whitespace() {
        let input = "Error\nmessage\twith\r\nwhitespace";
        assert_eq!(sanitize_error_message(input), input);
    }

    #[test]
    fn test_sanitize_error_message_preserves_unicode() {
        let input = "Σεισμός στην Κρήτη 🌍";
        assert_eq!(sanitize_error_message(input), input);
    }

    #[test]
    fn test_truncate_short_message_unchanged() {
        let input = "error sending request for url (http://127.0.0.1:1/)";
        assert_eq!(sanitize_and_truncate_error_message(input), input);
    }

    #[test]
    fn test_truncate_long_message() {
        let input = "x".repeat(crate::config::MAX_ERROR_MESSAGE_LENGTH + 100);
        let output = sanitize_and_truncate_error_message(&input);
        assert!(output.len() < input.len());
        assert!(output.contains("(truncated, original length:"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // Multi-byte characters must not be split
        let input = "Κ".repeat(crate::config::MAX_ERROR_MESSAGE_LENGTH);
        let output = sanitize_and_truncate_error_message(&input);
        assert!(output.contains("(truncated"));
    }
}
