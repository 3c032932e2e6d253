use std::fmt::Display;
use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

use crate::format::{pretty_print_integer, pretty_print_real};

/// The kind of domain a bin's endpoints are drawn from.
///
/// The domain kind decides how strictly neighboring bins in a histogram must be separated: real-valued bins may share a
/// boundary value, while integral and discrete bins may not.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DomainKind {
    /// Integral numbers, such as `i32` or `u64`.
    Integral,

    /// Floating-point numbers, such as `f32` or `f64`.
    Real,

    /// Ordered values that are not numbers, such as strings.
    Discrete,
}

impl DomainKind {
    /// Returns `true` if this domain is numeric, either integral or real.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integral | Self::Real)
    }

    /// Returns `true` if this domain is real-valued.
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real)
    }
}

/// A value that can be used as the endpoint of a bin.
///
/// Implementations are provided for all primitive integer and floating-point types, as well as `String`, `&str`, `char`,
/// and `bool`.
pub trait BinValue: PartialOrd + Clone + Display {
    /// The domain kind of this type.
    const KIND: DomainKind;

    /// Returns `true` if this value is totally ordered with respect to itself.
    ///
    /// Only floating-point NaN fails this check for the provided implementations.
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }

    /// Renders this value for use in a bin label.
    fn pretty_print(&self) -> String {
        self.to_string()
    }

    /// Feeds this value into the given hasher.
    ///
    /// Values which are equal must hash identically.
    fn hash_value<H: Hasher>(&self, state: &mut H);
}

macro_rules! impl_integral_bin_value {
    ($($ty:ty),*) => {
        $(
            impl BinValue for $ty {
                const KIND: DomainKind = DomainKind::Integral;

                fn pretty_print(&self) -> String {
                    pretty_print_integer(*self)
                }

                fn hash_value<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }
            }
        )*
    };
}

impl_integral_bin_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_real_bin_value {
    ($($ty:ty),*) => {
        $(
            impl BinValue for $ty {
                const KIND: DomainKind = DomainKind::Real;

                fn pretty_print(&self) -> String {
                    pretty_print_real(f64::from(*self))
                }

                // `OrderedFloat` hashes `0.0` and `-0.0` identically, which keeps hashing consistent with equality.
                fn hash_value<H: Hasher>(&self, state: &mut H) {
                    OrderedFloat(*self).hash(state);
                }
            }
        )*
    };
}

impl_real_bin_value!(f32, f64);

macro_rules! impl_discrete_bin_value {
    ($($ty:ty),*) => {
        $(
            impl BinValue for $ty {
                const KIND: DomainKind = DomainKind::Discrete;

                fn hash_value<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }
            }
        )*
    };
}

impl_discrete_bin_value!(String, char, bool);

impl BinValue for &str {
    const KIND: DomainKind = DomainKind::Discrete;

    fn hash_value<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}
