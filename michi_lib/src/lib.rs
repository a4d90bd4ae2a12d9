#[cfg(feature = "url_encoding")]
pub mod url_encoding;
