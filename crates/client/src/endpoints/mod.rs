//! REST API endpoint implementations.

mod labels;
mod request;
pub mod url_encoding;

pub use labels::{create_label, delete_label, list_labels};
pub use request::send_request;
pub use url_encoding::encode_path_segment;

/// Media type requested from the GitHub REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
