use std::collections::TryReserveError;

use thiserror::Error;

/// Everything that can stop a relaxation run before it completes.
#[derive(Debug, Error)]
pub enum ComputationFailure {
    #[error("matrix dimension must not be negative, got {n}")]
    NegativeDimension { n: i32 },

    #[error("cannot allocate a {n}x{n} matrix")]
    Allocation {
        n: i32,
        #[source]
        source: TryReserveError,
    },
}
