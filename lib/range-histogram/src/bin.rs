//! Histogram bin representation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{HistogramError, IncomparableEndpoints, InvertedRange, MissingEndpoint};
use crate::value::{BinValue, DomainKind};

/// A histogram bin.
///
/// A bin covers the closed interval `[from, to]` and carries the number of observations within that interval. Bins are
/// immutable once constructed.
///
/// # Ordering and equality
///
/// Bins have two distinct notions of sameness. [`compare`][Self::compare] orders bins solely by where they start, and is
/// used to keep histograms sorted: two bins that start at the same value compare as equal even when they end at different
/// values or have different counts. Equality (`==`), on the other hand, requires the start, end, and count to all be
/// equal. As the two would be inconsistent with each other, `Bin` does not implement `Ord`.
///
/// Neither applies any tolerance when comparing real-valued endpoints: two bins whose starts are numerically close but
/// not exactly equal, such as `12.3 / 3.0` and `4.1`, are neither equal nor compare as equal.
#[derive(Clone, Debug)]
pub struct Bin<T> {
    from: T,
    to: T,
    count: i64,
}

impl<T: BinValue> Bin<T> {
    /// Creates a new `Bin` covering `[from, to]` with the given count.
    ///
    /// The count is not validated, and may be zero or negative.
    ///
    /// # Errors
    ///
    /// If either endpoint is not comparable (floating-point NaN), or `from` is larger than `to`, an error is returned.
    pub fn new(from: T, to: T, count: i64) -> Result<Self, HistogramError> {
        if !from.is_comparable() || !to.is_comparable() {
            return IncomparableEndpoints {
                from: from.to_string(),
                to: to.to_string(),
            }
            .fail();
        }

        if from > to {
            return InvertedRange {
                from: from.to_string(),
                to: to.to_string(),
            }
            .fail();
        }

        Ok(Self { from, to, count })
    }

    /// Creates a new `Bin` from endpoints which may be absent.
    ///
    /// # Errors
    ///
    /// If either endpoint is `None`, an error is returned. Otherwise, the same rules as [`Bin::new`] apply.
    pub fn from_parts(from: Option<T>, to: Option<T>, count: i64) -> Result<Self, HistogramError> {
        match (from, to) {
            (Some(from), Some(to)) => Self::new(from, to, count),
            _ => MissingEndpoint.fail(),
        }
    }

    /// Returns the number of observations within the bin.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Returns the start of the bin.
    pub fn from(&self) -> &T {
        &self.from
    }

    /// Returns the end of the bin.
    pub fn to(&self) -> &T {
        &self.to
    }

    /// Returns the domain kind of the bin's endpoints.
    pub fn kind(&self) -> DomainKind {
        T::KIND
    }

    /// Returns `true` if the bin's endpoints are real-valued.
    pub fn is_real(&self) -> bool {
        T::KIND.is_real()
    }

    /// Returns `true` if the bin's endpoints are numeric.
    pub fn is_numeric(&self) -> bool {
        T::KIND.is_numeric()
    }

    /// Renders the bin as `<from><separator><to>`.
    ///
    /// Numeric endpoints are pretty printed: digits are grouped with commas, and real numbers are rendered with two
    /// fractional digits. Other endpoints are rendered in their natural form.
    ///
    /// ```
    /// use range_histogram::Bin;
    ///
    /// let bin = Bin::new(1000.0, 10000.0, 1234)?;
    /// assert_eq!(bin.label(" to "), "1,000.00 to 10,000.00");
    /// # Ok::<(), range_histogram::HistogramError>(())
    /// ```
    pub fn label(&self, separator: &str) -> String {
        format!("{}{}{}", self.from.pretty_print(), separator, self.to.pretty_print())
    }

    /// Compares this bin to `other` based solely on where each bin starts.
    pub fn compare(&self, other: &Self) -> Ordering {
        // Endpoints are checked for comparability at construction.
        self.from.partial_cmp(&other.from).unwrap_or(Ordering::Equal)
    }

    /// Returns `true` if `value` lies within the bin, inclusive of both endpoints.
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.from && *value <= self.to
    }

    /// Returns `true` if either bin contains one of the other bin's endpoints.
    pub fn overlaps(&self, other: &Self) -> bool {
        other.contains(&self.from) || other.contains(&self.to) || self.contains(&other.from) || self.contains(&other.to)
    }
}

impl<T: BinValue> PartialEq for Bin<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.from == other.from && self.to == other.to
    }
}

// NaN endpoints are rejected at construction, so equality is reflexive even for real-valued bins.
impl<T: BinValue> Eq for Bin<T> {}

impl<T: BinValue> Hash for Bin<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash_value(state);
        self.to.hash_value(state);
        self.count.hash(state);
    }
}

impl<T: BinValue> fmt::Display for Bin<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]: {}", self.from, self.to, self.count)
    }
}
