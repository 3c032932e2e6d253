//! Range histogram implementation.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::bin::Bin;
use crate::config::{HistogramConfiguration, InsertionMode};
use crate::error::{HistogramError, Overlap};
use crate::value::BinValue;

const LABEL_SEPARATOR: &str = "-";

/// Read-only access to a sorted, non-overlapping sequence of bins.
pub trait BinLookup<T: BinValue> {
    /// Returns the bins, sorted by where they start.
    fn bins(&self) -> &[Bin<T>];

    /// Returns the first bin that contains `value`, or `None` if no bin does.
    fn find_bin(&self, value: &T) -> Option<&Bin<T>> {
        self.bins().iter().find(|bin| bin.contains(value))
    }

    /// Returns `true` if any bin contains `value`.
    fn contains(&self, value: &T) -> bool {
        self.find_bin(value).is_some()
    }

    /// Returns the number of bins.
    fn len(&self) -> usize {
        self.bins().len()
    }

    /// Returns `true` if there are no bins.
    fn is_empty(&self) -> bool {
        self.bins().is_empty()
    }

    /// Returns the sum of the counts of all bins.
    ///
    /// The sum saturates at the bounds of `i64` rather than overflowing.
    fn total_count(&self) -> i64 {
        self.bins()
            .iter()
            .map(Bin::count)
            .fold(0i64, |total, count| total.saturating_add(count))
    }
}

/// A histogram made up of ranged bins.
///
/// Bins are added one at a time with [`add_bin`][Self::add_bin]. After each insertion, the bins are kept sorted by where
/// they start and the entire histogram is validated to ensure that no two neighboring bins overlap:
///
/// - real-valued bins may share a boundary, such that `[1.0, 2.0]` followed by `[2.0, 3.0]` is valid
/// - all other bins must be strictly disjoint, such that `[1, 2]` followed by `[2, 3]` is invalid
///
/// When validation fails, what happens to the offending bin depends on the configured [`InsertionMode`].
///
/// Bins are never removed or modified once they have been added.
#[derive(Clone, Debug)]
pub struct RangeHistogram<T> {
    bins: Vec<Bin<T>>,
    insertion_mode: InsertionMode,
}

impl<T: BinValue> RangeHistogram<T> {
    /// Creates a new, empty `RangeHistogram` with the default configuration.
    pub fn new() -> Self {
        Self::with_configuration(&HistogramConfiguration::default())
    }

    /// Creates a new, empty `RangeHistogram` with the given configuration.
    pub fn with_configuration(config: &HistogramConfiguration) -> Self {
        Self {
            bins: Vec::new(),
            insertion_mode: config.insertion_mode,
        }
    }

    /// Returns the insertion mode of this histogram.
    pub fn insertion_mode(&self) -> InsertionMode {
        self.insertion_mode
    }

    /// Returns an iterator over the bins, sorted by where they start.
    pub fn iter(&self) -> std::slice::Iter<'_, Bin<T>> {
        self.bins.iter()
    }

    /// Adds a bin covering `[from, to]` with the given count.
    ///
    /// Returns the histogram itself, to allow chaining insertions.
    ///
    /// # Errors
    ///
    /// If the bin cannot be constructed, an error is returned and the histogram is left unchanged. See [`Bin::new`].
    ///
    /// If the bin overlaps with one of its neighbors, an error is returned. Whether or not the bin remains in the
    /// histogram afterwards depends on the configured [`InsertionMode`].
    pub fn add_bin(&mut self, from: T, to: T, count: i64) -> Result<&mut Self, HistogramError> {
        let bin = Bin::new(from, to, count)?;
        self.insert_bin(bin)
    }

    /// Adds an existing bin.
    ///
    /// # Errors
    ///
    /// If the bin overlaps with one of its neighbors, an error is returned. Whether or not the bin remains in the
    /// histogram afterwards depends on the configured [`InsertionMode`].
    pub fn insert_bin(&mut self, bin: Bin<T>) -> Result<&mut Self, HistogramError> {
        // Placing the bin after every bin that starts at or before it is equivalent to appending it and stably sorting.
        let index = self
            .bins
            .partition_point(|existing| existing.compare(&bin) != Ordering::Greater);
        self.bins.insert(index, bin);

        if let Err(e) = validate(&self.bins) {
            let retained = match self.insertion_mode {
                InsertionMode::Retaining => true,
                InsertionMode::Transactional => {
                    self.bins.remove(index);
                    false
                }
            };

            debug!(error = %e, retained, bins = self.bins.len(), "Rejected bin insertion.");
            return Err(e);
        }

        trace!(
            bin = %self.bins[index].label(LABEL_SEPARATOR),
            count = self.bins[index].count(),
            bins = self.bins.len(),
            "Added bin."
        );

        Ok(self)
    }
}

impl<T: BinValue> BinLookup<T> for RangeHistogram<T> {
    fn bins(&self) -> &[Bin<T>] {
        &self.bins
    }
}

impl<T: BinValue> Default for RangeHistogram<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RangeHistogram<T> {
    type Item = &'a Bin<T>;
    type IntoIter = std::slice::Iter<'a, Bin<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}

/// Checks that no two neighboring bins overlap.
///
/// `bins` must already be sorted by where each bin starts.
fn validate<T: BinValue>(bins: &[Bin<T>]) -> Result<(), HistogramError> {
    for pair in bins.windows(2) {
        let (previous, bin) = (&pair[0], &pair[1]);

        let overlapping = if bin.is_real() {
            // Real-valued bins may touch at a shared boundary.
            bin.from() < previous.to()
        } else {
            previous.overlaps(bin)
        };

        if overlapping {
            return Overlap {
                bin: bin.label(LABEL_SEPARATOR),
                previous: previous.label(LABEL_SEPARATOR),
            }
            .fail();
        }
    }

    Ok(())
}
