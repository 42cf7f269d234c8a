use tracing::trace;

use crate::{bytes::units::QUANTITY_SUFFIXES, error::QuantityError};

/// 2^64, the first value that no longer fits in a byte count.
const BYTE_COUNT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Parses a Kubernetes-style quantity into a byte count.
///
/// Accepted forms, checked in this order:
/// - scientific notation: `12e6`, `1.5e9`, `1e-3`
/// - binary suffixes: `Ki`, `Mi`, `Gi`, `Ti`, `Pi`, `Ei`
/// - decimal suffixes: `k`, `K`, `M`, `G`, `T`, `P`, `E`
/// - plain numbers: `1000`, `1.5`
///
/// Fractional byte counts are truncated toward zero.
pub fn parse_quantity(token: &str) -> Result<u64, QuantityError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(QuantityError::EmptyInput);
    }

    if is_scientific(token) {
        return to_byte_count(token, parse_number(token)?, 1.0);
    }

    for &(suffix, multiplier) in &QUANTITY_SUFFIXES {
        if let Some(number) = token.strip_suffix(suffix) {
            trace!(token, suffix, "matched quantity suffix");
            return to_byte_count(token, parse_number(number)?, multiplier);
        }
    }

    to_byte_count(token, parse_number(token)?, 1.0)
}

/// An `e`/`E` only starts an exponent when a digit or sign follows it;
/// otherwise it is the exa suffix (`E`, `Ei`).
fn is_scientific(token: &str) -> bool {
    token
        .find(|c: char| c == 'e' || c == 'E')
        .and_then(|i| token.as_bytes().get(i + 1))
        .is_some_and(|&next| next == b'+' || next == b'-' || next.is_ascii_digit())
}

fn parse_number(number: &str) -> Result<f64, QuantityError> {
    number
        .parse::<f64>()
        .map_err(|source| QuantityError::MalformedNumber {
            input: number.to_string(),
            source,
        })
}

fn to_byte_count(token: &str, value: f64, multiplier: f64) -> Result<u64, QuantityError> {
    if value < 0.0 {
        return Err(QuantityError::NegativeValue {
            input: token.to_string(),
        });
    }

    let bytes = value * multiplier;
    if !bytes.is_finite() || bytes >= BYTE_COUNT_LIMIT {
        return Err(QuantityError::OutOfRange {
            input: token.to_string(),
        });
    }

    Ok(bytes as u64)
}
