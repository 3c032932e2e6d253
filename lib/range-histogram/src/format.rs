//! Human-readable number rendering.
//!
//! Numbers are rendered with a comma between each group of three integer digits. Real numbers are always rendered with
//! exactly two fractional digits, while integers are rendered without a fractional part at all.

const GROUP_SEPARATOR: char = ',';
const GROUP_SIZE: usize = 3;
const REAL_PRECISION: usize = 2;

/// Renders an integer with digit grouping.
///
/// ```
/// use range_histogram::format::pretty_print_integer;
///
/// assert_eq!(pretty_print_integer(1_000_000), "1,000,000");
/// assert_eq!(pretty_print_integer(-1234), "-1,234");
/// ```
pub fn pretty_print_integer<N: Integer>(value: N) -> String {
    group_digits(&value.to_string())
}

/// Renders a real number with digit grouping and two fractional digits.
///
/// Non-finite values are rendered in their natural form.
///
/// ```
/// use range_histogram::format::pretty_print_real;
///
/// assert_eq!(pretty_print_real(1000.0), "1,000.00");
/// assert_eq!(pretty_print_real(-0.5), "-0.50");
/// ```
pub fn pretty_print_real(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", REAL_PRECISION, value);
    match fixed.split_once('.') {
        Some((integral, fractional)) => format!("{}.{}", group_digits(integral), fractional),
        None => group_digits(&fixed),
    }
}

/// Inserts group separators into a string of decimal digits, with an optional leading sign.
fn group_digits(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / GROUP_SIZE);
    grouped.push_str(sign);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % GROUP_SIZE == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

/// A primitive integer type.
pub trait Integer: std::fmt::Display + private::Sealed {}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl private::Sealed for $ty {}
            impl Integer for $ty {}
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

pub(crate) mod private {
    pub trait Sealed {}
}
