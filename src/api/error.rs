//! Error taxonomy for catalog calls.

use thiserror::Error;

/// Errors that can occur while fetching or decoding catalog responses.
///
/// The enum is `Clone + PartialEq` so it can live inside state variants
/// and be asserted on; transport causes are flattened to strings at the
/// boundary for that reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The remote call itself failed (connection, timeout, HTTP status).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// A resource locator did not yield a numeric item identity.
    #[error("could not derive an item id from locator '{locator}'")]
    Identity { locator: String },
}
