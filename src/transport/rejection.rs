//! Diagnostic text extracted from a rejected response.

use crate::http::TransportResponse;

/// Message logged when the endpoint returned no usable body.
pub const NO_MESSAGE_FALLBACK: &str = "No message";

/// Text describing why the endpoint rejected a request.
///
/// The body is decoded as UTF-8 and returned exactly as received. An absent
/// body, or one consisting only of whitespace, yields [`NO_MESSAGE_FALLBACK`].
pub fn rejection_message(response: &TransportResponse) -> String {
    match response.body_text() {
        Some(text) if !text.trim().is_empty() => text,
        _ => NO_MESSAGE_FALLBACK.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, NO_MESSAGE_FALLBACK)]
    #[case(Some(""), NO_MESSAGE_FALLBACK)]
    #[case(Some("  \n"), NO_MESSAGE_FALLBACK)]
    #[case(Some("Payload too large"), "Payload too large")]
    #[case(Some("  padded message\n"), "  padded message\n")]
    #[case(
        Some(r#"{"detail":"bad envelope","causes":["missing header"]}"#),
        r#"{"detail":"bad envelope","causes":["missing header"]}"#
    )]
    fn returns_body_verbatim(#[case] body: Option<&str>, #[case] expected: &str) {
        let response = TransportResponse {
            status: 400,
            body: body.map(|b| b.as_bytes().to_vec()),
        };
        assert_eq!(rejection_message(&response), expected);
    }
}
