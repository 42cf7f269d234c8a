use std::num::ParseFloatError;

use thiserror::Error;

/// Reasons a quantity token cannot be turned into a byte count.
#[derive(Debug, Error)]
pub enum QuantityError {
    #[error("empty quantity")]
    EmptyInput,

    #[error("negative value '{input}'")]
    NegativeValue { input: String },

    #[error("malformed number '{input}'")]
    MalformedNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("value '{input}' does not fit in a 64-bit byte count")]
    OutOfRange { input: String },
}
