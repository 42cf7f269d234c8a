use crate::bytes::*;

/// Display units, one step per power of 1024.
pub const BINARY_UNITS: [&str; 7] = [B, KIB, MIB, GIB, TIB, PIB, EIB];

const KI: f64 = 1024.0;
const K: f64 = 1000.0;

/// Quantity suffixes in the order they are tried. The two-letter binary
/// suffixes must stay ahead of the decimal ones so that "1Ki" is never read
/// as "1K" followed by a stray "i".
pub const QUANTITY_SUFFIXES: [(&str, f64); 13] = [
    // binary (IEC)
    ("Ki", KI),
    ("Mi", KI * KI),
    ("Gi", KI * KI * KI),
    ("Ti", KI * KI * KI * KI),
    ("Pi", KI * KI * KI * KI * KI),
    ("Ei", KI * KI * KI * KI * KI * KI),
    // decimal (SI)
    ("k", K),
    ("K", K),
    ("M", K * K),
    ("G", K * K * K),
    ("T", K * K * K * K),
    ("P", K * K * K * K * K),
    ("E", K * K * K * K * K * K),
];
