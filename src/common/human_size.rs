// HumanSize trait and implementations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::SizeUnit;
use humansize::format_size;
use tracing::debug;

const KB: f64 = 1024.0;
const MB: f64 = KB * KB;
const GB: f64 = MB * KB;
const TB: f64 = GB * KB;

/// Return the given bytes as a human friendly KB, MB, GB or TB string.
///
/// Values below 1KB are shown as a plain byte count, e.g. `512.0 Bytes`.
/// Everything from 1TB upwards is shown in TB.
pub fn humanbytes(bytes: f64) -> String {
    if bytes < KB {
        let unit = if bytes == 1.0 { "Byte" } else { "Bytes" };

        format!("{:?} {}", bytes, unit)
    }
    else if bytes < MB {
        format!("{:.2} KB", bytes / KB)
    }
    else if bytes < GB {
        format!("{:.2} MB", bytes / MB)
    }
    else if bytes < TB {
        format!("{:.2} GB", bytes / GB)
    }
    else {
        format!("{:.2} TB", bytes / TB)
    }
}

/// `HumanSize` trait.
pub trait HumanSize {
    /// Return `self` formatted as requested by `unit`.
    fn humansize(&self, unit: &SizeUnit) -> String;
}

/// `HumanSize` trait implementation for `f64`, the type CloudWatch reports
/// averages in.
impl HumanSize for f64 {
    fn humansize(&self, unit: &SizeUnit) -> String {
        debug!("humansize: size {}, unit {:?}", self, unit);

        // Negative and NaN averages saturate to 0 here.
        let bytes = *self as u64;

        match unit.format_options() {
            Some(options) => format_size(bytes, options),
            None => match unit {
                SizeUnit::Bytes => bytes.to_string(),
                _               => humanbytes(*self),
            },
        }
    }
}
