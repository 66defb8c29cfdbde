use thiserror::Error;

/// Failure to build a usable factquiz configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `FQ_*` variable could not be parsed.
    #[error("cannot load factquiz config: {0}")]
    Figment(#[from] figment::Error),

    /// A field that must be set resolved to an empty string.
    #[error("'{field}' is empty; set it in config.toml or {env_var}")]
    Empty {
        field: &'static str,
        env_var: &'static str,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
