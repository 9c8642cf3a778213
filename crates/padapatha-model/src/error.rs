use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    #[error("base URL must start with http:// or https://, got '{0}'")]
    UnsupportedScheme(String),

    #[error("invalid HTML class name for {role}: '{value}'")]
    InvalidClassName { role: &'static str, value: String },

    #[error("invalid HTML tag name for {role}: '{value}'")]
    InvalidTagName { role: &'static str, value: String },
}
