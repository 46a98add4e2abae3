//! Form submission parsing and console echo.
//!
//! A [`Submission`] lives for exactly one POST request: built from the
//! body bytes, rendered to the terminal, then dropped. Nothing is
//! validated against a schema and nothing is stored.

use std::fmt::Write as _;

/// One decoded POST body.
pub enum Submission {
    /// `application/x-www-form-urlencoded` body, decoded into fields.
    ///
    /// Field order follows first appearance in the body; repeated names
    /// accumulate values under the same field.
    Fields(Vec<(String, Vec<String>)>),
    /// Any other content type, decoded lossily as text.
    Raw(String),
    /// Body that failed strict decoding or query-string parsing.
    Undecodable {
        /// Message from the failed decode/parse step.
        error: String,
        /// The raw body bytes, kept for the console dump.
        bytes: Vec<u8>,
    },
}

impl Submission {
    /// Parse a POST body according to its declared content type.
    ///
    /// Never fails: decode and parse errors become
    /// [`Submission::Undecodable`] so the caller can log them and still
    /// answer the client with the success page.
    pub fn parse(content_type: Option<&str>, body: &[u8]) -> Self {
        let is_urlencoded = content_type
            .map(|ct| ct.contains("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        if !is_urlencoded {
            return Submission::Raw(String::from_utf8_lossy(body).into_owned());
        }

        let text = match std::str::from_utf8(body) {
            Ok(t) => t,
            Err(e) => {
                return Submission::Undecodable {
                    error: e.to_string(),
                    bytes: body.to_vec(),
                };
            }
        };

        match serde_urlencoded::from_str::<Vec<(String, String)>>(text) {
            Ok(pairs) => Submission::Fields(group_pairs(pairs)),
            Err(e) => Submission::Undecodable {
                error: e.to_string(),
                bytes: body.to_vec(),
            },
        }
    }

    /// Render the bracketed console block for this submission.
    ///
    /// This is the output a developer reads in the terminal while
    /// clicking through the contact form, fenced by fixed-width
    /// separator lines so submissions stand out in scrollback.
    pub fn render(&self) -> String {
        let sep = "=".repeat(50);
        let mut out = String::new();

        let _ = writeln!(out);
        let _ = writeln!(out, "{sep}");
        let _ = writeln!(out, "CONTACT FORM SUBMISSION RECEIVED");
        let _ = writeln!(out, "{sep}");

        match self {
            Submission::Fields(fields) => {
                for (name, values) in fields {
                    let first = values.first().map(String::as_str).unwrap_or("");
                    let _ = writeln!(out, "{name}: {first}");
                }
            }
            Submission::Raw(text) => {
                let _ = writeln!(out, "Raw form data received:");
                let _ = writeln!(out, "{text}");
            }
            Submission::Undecodable { error, bytes } => {
                let _ = writeln!(out, "Error parsing form data: {error}");
                let _ = writeln!(out, "Raw data: {bytes:?}");
            }
        }

        let _ = writeln!(out, "{sep}");
        let _ = writeln!(out, "Form submission simulated successfully!");
        let _ = writeln!(out, "In production this would be handled by the forms backend");
        let _ = writeln!(out, "{sep}");

        out
    }
}

fn group_pairs(pairs: Vec<(String, String)>) -> Vec<(String, Vec<String>)> {
    let mut fields: Vec<(String, Vec<String>)> = Vec::with_capacity(pairs.len());
    for (name, value) in pairs {
        match fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => fields.push((name, vec![value])),
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM_CT: Option<&str> = Some("application/x-www-form-urlencoded");

    #[test]
    fn urlencoded_fields_are_decoded() {
        let sub = Submission::parse(FORM_CT, b"name=Alice&email=a%40b.com");
        let rendered = sub.render();
        assert!(rendered.contains("name: Alice"));
        assert!(rendered.contains("email: a@b.com"));
    }

    #[test]
    fn plus_decodes_to_space() {
        let sub = Submission::parse(FORM_CT, b"message=hello+world");
        assert!(sub.render().contains("message: hello world"));
    }

    #[test]
    fn repeated_field_prints_first_value() {
        let sub = Submission::parse(FORM_CT, b"tag=one&tag=two&tag=three");
        let rendered = sub.render();
        assert!(rendered.contains("tag: one"));
        assert!(!rendered.contains("tag: two"));
    }

    #[test]
    fn empty_value_prints_empty_string() {
        let sub = Submission::parse(FORM_CT, b"name=");
        assert!(sub.render().contains("name: \n"));
    }

    #[test]
    fn charset_parameter_still_counts_as_urlencoded() {
        let sub = Submission::parse(
            Some("application/x-www-form-urlencoded; charset=UTF-8"),
            b"name=Bob",
        );
        assert!(sub.render().contains("name: Bob"));
    }

    #[test]
    fn other_content_type_is_raw_text() {
        let sub = Submission::parse(Some("text/plain"), b"just some text");
        let rendered = sub.render();
        assert!(rendered.contains("Raw form data received:"));
        assert!(rendered.contains("just some text"));
    }

    #[test]
    fn missing_content_type_is_raw_text() {
        let sub = Submission::parse(None, b"whatever");
        assert!(sub.render().contains("Raw form data received:"));
    }

    #[test]
    fn invalid_utf8_in_raw_body_is_replaced_not_fatal() {
        let sub = Submission::parse(Some("application/octet-stream"), &[0xff, 0xfe, b'h', b'i']);
        let rendered = sub.render();
        assert!(rendered.contains("Raw form data received:"));
        assert!(rendered.contains("hi"));
    }

    #[test]
    fn invalid_utf8_urlencoded_body_logs_error_and_bytes() {
        let sub = Submission::parse(FORM_CT, &[b'a', b'=', 0xff, 0xfe]);
        let rendered = sub.render();
        assert!(rendered.contains("Error parsing form data:"));
        assert!(rendered.contains("Raw data:"));
    }

    #[test]
    fn render_is_fenced_by_separators() {
        let rendered = Submission::parse(FORM_CT, b"a=1").render();
        let sep = "=".repeat(50);
        assert_eq!(rendered.matches(&sep).count(), 4);
        assert!(rendered.contains("CONTACT FORM SUBMISSION RECEIVED"));
        assert!(rendered.contains("Form submission simulated successfully!"));
    }
}
