//! Range-based histograms.
//!
//! A [`RangeHistogram`] is a sorted collection of non-overlapping [`Bin`]s, where each bin covers a closed interval
//! `[from, to]` of some ordered value type and carries a count. Bins are added one at a time, and every insertion
//! re-validates the whole histogram, so point lookups via [`BinLookup::find_bin`] always resolve to at most one bin.
//!
//! # Example
//!
//! ```
//! use range_histogram::{BinLookup as _, RangeHistogram};
//!
//! let mut histogram = RangeHistogram::new();
//! histogram.add_bin(1, 10, 1)?.add_bin(11, 20, 0)?;
//!
//! let bin = histogram.find_bin(&15).unwrap();
//! assert_eq!(bin.label(" to "), "11 to 20");
//! assert!(!histogram.contains(&0));
//! # Ok::<(), range_histogram::HistogramError>(())
//! ```
//!
//! # Overlap policy
//!
//! How strictly neighboring bins are separated depends on the [`DomainKind`] of the endpoint type. Real-valued bins
//! (`f32`, `f64`) may touch at a shared boundary, since a boundary value on a continuous scale has no width. Integral
//! and discrete bins (integers, strings, and so on) must be strictly disjoint.
#![deny(warnings)]
#![deny(missing_docs)]

mod bin;
pub use self::bin::Bin;

mod config;
pub use self::config::{HistogramConfiguration, InsertionMode};

mod error;
pub use self::error::{ConfigurationError, ErrorKind, HistogramError};

pub mod format;

mod histogram;
pub use self::histogram::{BinLookup, RangeHistogram};

mod value;
pub use self::value::{BinValue, DomainKind};
