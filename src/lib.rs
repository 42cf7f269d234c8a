//! Convert Kubernetes-style byte quantities (`12075408Ki`, `1.5e9`, `500M`)
//! into human readable binary units, either one value at a time or in place
//! inside a JSON document.

pub mod bytes;
pub mod error;
pub mod rewrite;
mod utils;

pub use bytes::{format_value, humanize, parse_quantity, ByteUnitSystem};
pub use error::QuantityError;
pub use rewrite::{rewrite_fields, FieldRewriter};
