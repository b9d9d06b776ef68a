// SPDX-License-Identifier: MPL-2.0
//! Outgoing-mail deep link composition for the contact form.
//!
//! The app never sends mail itself: it builds a `mailto:` URI with
//! percent-encoded `subject` and `body` query parameters and hands it to the
//! user's configured mail client. There is no delivery signal back.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Studio inbox that receives contact-form drafts.
pub const CONTACT_ADDRESS: &str = "ralphie@fotocicleta.com";

const SUBJECT_PREFIX: &str = "Nuevo Contacto Web: ";
const SUBJECT_FALLBACK: &str = "Sin asunto";

/// Unreserved characters (RFC 3986) pass through; everything else is
/// percent-encoded so line breaks, `&`, `?`, `%` and `=` inside the user's
/// text cannot corrupt the query string.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// The four user-supplied fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl MailDraft {
    /// True when every field has non-whitespace content. Submission is
    /// rejected before composing anything if this is false.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Builds the `mailto:` deep link for this draft.
    ///
    /// Subject: fixed prefix + the user subject (or a fallback literal when
    /// blank). Body: labeled name and email lines followed by the message.
    #[must_use]
    pub fn compose(&self) -> String {
        let subject_text = if self.subject.trim().is_empty() {
            SUBJECT_FALLBACK
        } else {
            self.subject.as_str()
        };
        let subject = format!("{SUBJECT_PREFIX}{subject_text}");
        let body = format!(
            "Nombre: {}\nEmail: {}\n\nMensaje:\n{}",
            self.name, self.email, self.message
        );

        format!(
            "mailto:{}?subject={}&body={}",
            CONTACT_ADDRESS,
            utf8_percent_encode(&subject, QUERY_COMPONENT),
            utf8_percent_encode(&body, QUERY_COMPONENT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn draft() -> MailDraft {
        MailDraft {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            subject: "Campaña".to_string(),
            message: "Hola".to_string(),
        }
    }

    fn decoded_param<'a>(link: &'a str, param: &str) -> String {
        let query = link.split_once('?').expect("link has query").1;
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{param}=")))
            .expect("param present");
        percent_decode_str(raw)
            .decode_utf8()
            .expect("valid utf-8")
            .into_owned()
    }

    #[test]
    fn compose_targets_the_studio_inbox() {
        let link = draft().compose();
        assert!(link.starts_with("mailto:ralphie@fotocicleta.com?"));
    }

    #[test]
    fn subject_carries_prefix_and_user_text() {
        let link = draft().compose();
        assert_eq!(decoded_param(&link, "subject"), "Nuevo Contacto Web: Campaña");
    }

    #[test]
    fn body_labels_every_field() {
        let link = draft().compose();
        let body = decoded_param(&link, "body");
        assert!(body.contains("Nombre: Ana"));
        assert!(body.contains("Email: ana@x.com"));
        assert!(body.contains("Mensaje:\nHola"));
    }

    #[test]
    fn blank_subject_falls_back_to_default_literal() {
        let mut d = draft();
        d.subject = "   ".to_string();
        let link = d.compose();
        assert_eq!(decoded_param(&link, "subject"), "Nuevo Contacto Web: Sin asunto");
    }

    #[test]
    fn reserved_characters_survive_an_encode_decode_round_trip() {
        let mut d = draft();
        d.message = "50% de descuento?\n¿seguro & cierto = sí".to_string();
        let link = d.compose();

        // The raw link never leaks the reserved characters unencoded.
        let query = link.split_once('?').unwrap().1;
        assert!(!query.contains('\n'));
        assert!(!query.contains("? "));
        assert!(!query.split('&').any(|p| p.matches('=').count() > 1));

        let body = decoded_param(&link, "body");
        assert!(body.contains("50% de descuento?"));
        assert!(body.contains("¿seguro & cierto = sí"));
    }

    #[test]
    fn is_complete_requires_every_field() {
        assert!(draft().is_complete());
        for field in 0..4 {
            let mut d = draft();
            match field {
                0 => d.name.clear(),
                1 => d.email.clear(),
                2 => d.subject = " ".to_string(),
                _ => d.message.clear(),
            }
            assert!(!d.is_complete());
        }
    }
}
