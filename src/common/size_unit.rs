// SizeUnit
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use humansize::{
    FormatSizeOptions,
    BINARY,
    DECIMAL,
};
use std::str::FromStr;

/// Values accepted by `--unit`, these should match the `FromStr` impl below.
pub const SIZE_UNITS: [&str; 4] = [
    "legacy",
    "binary",
    "decimal",
    "bytes",
];

/// `SizeUnit` represents how we want the bucket sizes to be displayed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SizeUnit {
    /// Two decimal places of KB, MB, GB or TB in multiples of 1024, with
    /// anything smaller than 1KB shown in bytes.
    #[default]
    Legacy,

    /// Represent bucket sizes as human readable using IEC units (multiples of
    /// 1024).
    Binary,

    /// Represent bucket sizes as the number of bytes.
    Bytes,

    /// Represent bucket sizes as human readable using SI units (multiples of
    /// 1000).
    Decimal,
}

impl SizeUnit {
    /// `humansize` options for the `Binary` and `Decimal` units.
    ///
    /// We remove the space from the humansize output so that the sizes remain
    /// sortable by `sort -h`.
    pub fn format_options(&self) -> Option<FormatSizeOptions> {
        match self {
            Self::Binary  => Some(FormatSizeOptions::from(BINARY).space_after_value(false)),
            Self::Decimal => Some(FormatSizeOptions::from(DECIMAL).space_after_value(false)),
            _             => None,
        }
    }
}

/// This converts from the string arguments we receive on the command line to
/// our enum type.
impl FromStr for SizeUnit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary"  => Ok(Self::Binary),
            "bytes"   => Ok(Self::Bytes),
            "decimal" => Ok(Self::Decimal),
            "legacy"  => Ok(Self::Legacy),
            _         => Err("no match"),
        }
    }
}
