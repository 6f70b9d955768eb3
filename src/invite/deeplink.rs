// SPDX-License-Identifier: MPL-2.0
//! RSVP deep-link construction.
//!
//! The messaging app is reached through a custom URL scheme of the shape
//! `<scheme>://chat?number=<E.164 phone>&text=<percent-encoded UTF-8>`.
//! The same URL doubles as the fallback navigation target when no handler
//! for the scheme is installed.

use serde::{Deserialize, Serialize};

/// Where the RSVP message goes: a URL scheme, an E.164 phone number, and
/// the fixed message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpTarget {
    /// Custom URL scheme of the messaging app, e.g. `viber`.
    pub scheme: String,
    /// Recipient in E.164 form, kept verbatim in the query string.
    pub number: String,
    /// Message body, percent-encoded into the `text` parameter.
    pub message: String,
}

impl RsvpTarget {
    /// Builds the chat deep link for this target.
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!(
            "{}://chat?number={}&text={}",
            self.scheme,
            self.number,
            urlencoding::encode(&self.message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> RsvpTarget {
        RsvpTarget {
            scheme: "viber".to_string(),
            number: "+959977123546".to_string(),
            message: "Hey Happy Birthday babe! I am coming🥳".to_string(),
        }
    }

    #[test]
    fn chat_url_has_expected_shape() {
        let url = target().chat_url();
        assert!(url.starts_with("viber://chat?number=+959977123546&text="));
    }

    #[test]
    fn message_is_percent_encoded_including_emoji() {
        let url = target().chat_url();
        assert!(url.contains("text=Hey%20Happy%20Birthday%20babe%21%20I%20am%20coming%F0%9F%A5%B3"));
        // No raw spaces survive the encoding.
        assert!(!url.contains(' '));
    }

    #[test]
    fn number_is_kept_verbatim() {
        let url = target().chat_url();
        assert!(url.contains("number=+959977123546"));
    }
}
