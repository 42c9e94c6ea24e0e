//! Settings type definitions for gitlabel.
//!
//! Responsibilities:
//! - Define the `Settings` object produced by the loader.
//! - Define the static field table that maps variable names onto fields.
//! - Provide a redacted, serializable view for display.
//!
//! Does NOT handle:
//! - Reading any configuration source (see `loader` module).
//! - Writing the YAML file (see `persistence` module).
//!
//! Invariants:
//! - All secret fields use `secrecy::SecretString` to prevent accidental logging.
//! - Every assignable field appears exactly once in `FIELDS`.

mod fields;
mod settings;

pub use fields::{FIELDS, FieldKind, FieldSpec, parse_flag};
pub use settings::{RedactedSettings, Settings};
