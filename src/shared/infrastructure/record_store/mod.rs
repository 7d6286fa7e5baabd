// The hosted record store as seen by the core.
//
// Each table gets its own port next to the module that owns it
// (see `modules::*::adapters::outbound`). This module only holds what they
// share: the error type and the REST transport.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("could not decode store response: {0}")]
    Decode(String),

    #[error("record not found: {0}")]
    NotFound(String),
}

pub mod postgrest;
