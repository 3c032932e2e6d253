use snafu::Snafu;

/// The broad category of a [`HistogramError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A bin could not be constructed from the given arguments.
    ///
    /// Detected before any state is changed.
    InvalidArgument,

    /// A histogram failed validation after an insertion.
    InvalidState,
}

/// A histogram error.
#[derive(Clone, Debug, Eq, PartialEq, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum HistogramError {
    /// One or both bin endpoints were missing.
    #[snafu(display("Bin endpoints 'from' and 'to' must both be present."))]
    MissingEndpoint,

    /// One or both bin endpoints were not comparable, such as floating-point NaN.
    #[snafu(display("Bin endpoints must be comparable (got from={}, to={}).", from, to))]
    IncomparableEndpoints {
        /// Rendered start of the bin.
        from: String,

        /// Rendered end of the bin.
        to: String,
    },

    /// The start of the bin was larger than the end of the bin.
    #[snafu(display("Bin start '{}' may not be larger than bin end '{}'.", from, to))]
    InvertedRange {
        /// Rendered start of the bin.
        from: String,

        /// Rendered end of the bin.
        to: String,
    },

    /// A bin overlapped with its predecessor in the histogram.
    #[snafu(display("The bin '{}' overlaps with the bin '{}'.", bin, previous))]
    Overlap {
        /// Label of the offending bin.
        bin: String,

        /// Label of the bin preceding the offending bin.
        previous: String,
    },
}

impl HistogramError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingEndpoint | Self::IncomparableEndpoints { .. } | Self::InvertedRange { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::Overlap { .. } => ErrorKind::InvalidState,
        }
    }
}

/// A configuration error.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum ConfigurationError {
    /// The configuration could not be extracted.
    #[snafu(display("Failed to extract histogram configuration: {}", source))]
    Extract {
        /// Underlying extraction error.
        #[snafu(source(from(figment::Error, Box::new)))]
        source: Box<figment::Error>,
    },
}
