//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Marker for a `${VAR}` reference that is unset and has no `:-` default;
/// shellexpand's error carries the variable name.
struct MissingVar;

fn lookup(var: &str) -> Result<Option<String>, MissingVar> {
    std::env::var(var).map(Some).map_err(|_| MissingVar)
}

/// Expand environment variable references in a configuration value.
///
/// Values without a `${` are returned as-is; bare `$VAR` syntax is left
/// untouched (only the braced form expands). `field` names the
/// configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    match shellexpand::env_with_context(value, lookup) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(e) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} is not set", e.var_name),
        }),
    }
}
