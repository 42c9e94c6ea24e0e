//! Env file reading.
//!
//! Responsibilities:
//! - Decode the resolved env file with its configured encoding.
//! - Read `KEY=value` pairs without modifying the process environment.
//! - Map dotenvy errors onto `ConfigError` without leaking line contents.
//!
//! Does NOT handle:
//! - Matching keys to settings fields (see env.rs).
//!
//! Invariants:
//! - A missing env file yields no pairs and no error.
//! - The encoding label is only checked once the file is known to exist.
//! - Malformed lines are skipped with a warning; the remaining pairs still load.

use std::io::ErrorKind;
use std::path::Path;

use encoding_rs::Encoding;

use super::error::ConfigError;

/// Read all pairs from the env file at `path`, decoded as `encoding`.
pub(crate) fn read_env_file(
    path: &Path,
    encoding: &str,
) -> Result<Vec<(String, String)>, ConfigError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No env file found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(ConfigError::DotenvIo { kind: e.kind() }),
    };

    let encoding = lookup_encoding(encoding)?;
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(ConfigError::DotenvDecode {
            encoding: encoding.name(),
        });
    }

    let mut pairs = Vec::new();
    for item in dotenvy::from_read_iter(text.as_bytes()) {
        match item {
            Ok(pair) => pairs.push(pair),
            Err(dotenvy::Error::LineParse(_, error_index)) => {
                tracing::warn!(
                    path = %path.display(),
                    error_index,
                    "Skipping malformed line in env file"
                );
            }
            Err(e) => return Err(map_dotenv_error(e)),
        }
    }

    tracing::debug!(
        path = %path.display(),
        encoding = encoding.name(),
        count = pairs.len(),
        "Loaded env file"
    );
    Ok(pairs)
}

/// Find the encoding for `label`, also accepting spellings such as `latin-1`
/// or `utf_8` that differ from a known label only by `-` and `_`.
fn lookup_encoding(label: &str) -> Result<&'static Encoding, ConfigError> {
    let trimmed = label.trim();
    Encoding::for_label(trimmed.as_bytes())
        .or_else(|| Encoding::for_label(trimmed.replace(['-', '_'], "").as_bytes()))
        .ok_or_else(|| ConfigError::UnsupportedEncoding(label.to_string()))
}

fn map_dotenv_error(err: dotenvy::Error) -> ConfigError {
    match err {
        dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
            kind: io_err.kind(),
        },
        _ => ConfigError::DotenvUnknown,
    }
}
