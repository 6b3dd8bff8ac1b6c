//! Crate error taxonomy. The typed surface is total; the only fallible
//! boundary is parsing untrusted priority labels.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConciergeError {
    #[error("invalid priority label: {0:?}")]
    InvalidPriority(String),
}
