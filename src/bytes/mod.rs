pub mod quantity;
pub mod system;
pub mod units;

use crate::error::QuantityError;

pub use quantity::parse_quantity;
pub use system::{humanize, ByteUnitSystem};

const B: &str = "B";

const KIB: &str = "KiB";
const MIB: &str = "MiB";
const GIB: &str = "GiB";
const TIB: &str = "TiB";
const PIB: &str = "PiB";
const EIB: &str = "EiB";

/// Parses a quantity token and renders it with binary units.
pub fn format_value(token: &str) -> Result<String, QuantityError> {
    ByteUnitSystem::Binary.format_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_raw_byte_counts() {
        assert_eq!(format_value("178255984").unwrap(), "170MiB");
        assert_eq!(format_value("293007").unwrap(), "286KiB");
        assert_eq!(format_value("1073741824").unwrap(), "1.00GiB");
    }

    #[test]
    fn formats_binary_suffixed_quantities() {
        assert_eq!(format_value("12075408Ki").unwrap(), "11.5GiB");
        assert_eq!(format_value("100Mi").unwrap(), "100MiB");
        assert_eq!(format_value("1Gi").unwrap(), "1.00GiB");
    }

    #[test]
    fn decimal_suffixes_display_in_binary_units() {
        assert_eq!(format_value("1G").unwrap(), "954MiB");
        assert_eq!(format_value("500M").unwrap(), "477MiB");
    }

    #[test]
    fn propagates_parse_errors() {
        assert!(matches!(
            format_value("invalid"),
            Err(QuantityError::MalformedNumber { .. })
        ));
        assert!(matches!(format_value(""), Err(QuantityError::EmptyInput)));
    }
}
