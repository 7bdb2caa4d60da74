// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod bucket_sizer;
mod client_config;
mod error;
mod human_size;
mod region;
mod size_unit;

pub use bucket::*;
pub use bucket_sizer::*;
pub use client_config::*;
pub use error::*;
pub use human_size::*;
pub use region::*;
pub use size_unit::*;
