//! Error types for the cookingtemps crate.
//!
//! The conversion and scroll-spy modules are total and never fail; errors
//! only arise on the mailing-list path, where they are categorized so the
//! HTTP layer can map each one to the right status code.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The subscription request carried no usable email address.
    #[error("Email is required.")]
    InvalidEmail,

    /// The server-side provider credential is not configured.
    #[error("Server configuration error.")]
    MissingApiKey,

    /// The upstream contact-list provider rejected the request.
    #[error("{message}")]
    Upstream {
        /// The provider's HTTP status, passed through to the caller.
        status: u16,
        /// The provider's error message, or a generic retry message.
        message: String,
    },

    /// A network-level failure talking to the provider.
    #[error("Unexpected error. Please try again.")]
    Http(#[from] reqwest::Error),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
