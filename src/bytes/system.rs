use crate::{
    bytes::{parse_quantity, units::BINARY_UNITS, B},
    error::QuantityError,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ByteUnitSystem {
    /// Exact byte count, no unit.
    Raw,
    #[default]
    Binary,
}

impl ByteUnitSystem {
    pub fn format(&self, bytes: u64) -> String {
        match self {
            ByteUnitSystem::Raw => format!("{}", bytes),
            ByteUnitSystem::Binary => humanize(bytes),
        }
    }

    pub fn format_token(&self, token: &str) -> Result<String, QuantityError> {
        parse_quantity(token).map(|bytes| self.format(bytes))
    }
}

/// Renders a byte count in the largest binary unit that keeps the value at
/// or above 1, e.g. `1.50KiB`, `11.5GiB`, `170MiB`.
///
/// Precision depends on the displayed value: two decimals below 10, one
/// below 100, none from 100 up. Counts below 1024 are always whole bytes.
pub fn humanize(bytes: u64) -> String {
    const BASE: f64 = 1024.0;

    if bytes < 1024 {
        return format!("{bytes}{B}");
    }

    let mut value = bytes as f64;
    let mut unit = BINARY_UNITS[0];

    for &next_unit in &BINARY_UNITS[1..] {
        if value < BASE {
            break;
        }
        value /= BASE;
        unit = next_unit;
    }

    if value >= 100.0 {
        format!("{:.0}{}", value, unit)
    } else if value >= 10.0 {
        format!("{:.1}{}", value, unit)
    } else {
        format!("{:.2}{}", value, unit)
    }
}
