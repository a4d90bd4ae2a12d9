use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Credentials carried by an HTTP Basic `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuthCredentials {
    pub username: String,
    pub password: String,
}

impl BasicAuthCredentials {
    /// Parse an `Authorization` header value.
    ///
    /// Accepts the value with or without its `Basic ` prefix. Any
    /// malformation (bad base64, non-UTF-8 payload, missing `:`) yields
    /// `None` rather than an error; callers treat that as "no credentials".
    /// Only the first two `:`-separated fields are read, so a password
    /// containing `:` is truncated at the first one.
    pub fn parse(header: &str) -> Option<Self> {
        let encoded = header.strip_prefix("Basic ").unwrap_or(header);
        let decoded = STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let mut fields = decoded.split(':');
        let username = fields.next()?;
        let password = fields.next()?;
        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}
