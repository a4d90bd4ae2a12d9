pub mod context;
pub mod cors;
pub mod auth;
pub mod charset;
pub mod body;


pub use context::RouteContext;
pub use auth::BasicAuthCredentials;
pub use cors::CorsSettings;
