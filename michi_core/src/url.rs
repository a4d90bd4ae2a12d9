pub mod segments;
pub mod pattern;

pub use self::segments::{extract_params, extract_splat, path_matches, split_path};
pub use self::pattern::PatternSegment;
