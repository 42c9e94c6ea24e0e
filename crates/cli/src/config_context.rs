//! Loaded settings handed to command handlers.
//!
//! Responsibilities:
//! - Carry the settings together with the variable prefix they were loaded under.
//! - Name the variable that sets a field, for error messages.

use gitlabel_config::{FieldSpec, Settings};

/// Settings plus the bootstrap prefix.
pub struct ConfigCommandContext {
    pub settings: Settings,
    pub var_prefix: String,
}

impl ConfigCommandContext {
    pub fn new(settings: Settings, var_prefix: impl Into<String>) -> Self {
        Self {
            settings,
            var_prefix: var_prefix.into(),
        }
    }

    /// Environment variable for `field`, e.g. `GITLABEL_GITHUB_USERNAME`.
    pub fn var_name(&self, field: &str) -> String {
        match FieldSpec::lookup(field) {
            Some(spec) => spec.var_name(&self.var_prefix),
            None => format!("{}_{}", self.var_prefix, field.to_uppercase()),
        }
    }
}
