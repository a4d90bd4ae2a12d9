pub mod url;
pub mod http;
pub mod debug;

pub use michi_lib::url_encoding;

// Re-export the matcher surface
pub use url::{PatternSegment, extract_params, extract_splat, path_matches, split_path};
