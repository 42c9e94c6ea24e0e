//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the GitHub client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::Path;

// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use gitlabel_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token sent by every test client.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "ghp_test_token";

/// Load a JSON fixture relative to `fixtures/`.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
#[allow(dead_code)]
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A client pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> gitlabel_client::GitHubClient {
    gitlabel_client::GitHubClient::builder()
        .base_url(server.uri())
        .access_token(secrecy::SecretString::new(TEST_TOKEN.to_string().into()))
        .build()
        .expect("client should build")
}
