//! Error types for site initialization and its external collaborators.
//!
//! Component handlers never return these: a missing collaborator disables a
//! feature and is logged. Errors surface only from construction paths
//! (config parsing, selector parsing, browser glue) and from the store.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure to parse one of the supported selector forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unsupported selector syntax {found:?} in {selector:?}")]
    Unsupported { selector: String, found: char },

    #[error("unterminated attribute selector in {0:?}")]
    UnterminatedAttribute(String),
}

/// Durable key-value store failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

/// Startup failure for the site as a whole.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid selector: {0}")]
    Selector(#[from] SelectorError),

    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("browser call failed: {0}")]
    Js(String),
}
