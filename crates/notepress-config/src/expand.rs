//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::borrow::Cow;

use crate::ConfigError;

/// Expand environment variable references in a config string.
///
/// `field` names the config field being expanded (e.g. `blog.token`) and
/// appears in the error. Strings without `${` pass through unchanged; bare
/// `$VAR` syntax is never expanded.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, lookup)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{0}}} not set", e.cause.var_name),
        })
}

fn lookup(var: &str) -> Result<Option<String>, LookupError> {
    std::env::var(var).map(Some).map_err(|_| LookupError {
        var_name: var.to_owned(),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}
