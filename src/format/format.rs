pub const DEFAULT_PRECISION: u16 = 2;

/// Formats `value` in fixed-point notation with exactly `precision` decimals.
///
/// The precision is a `u16` because the formatter rejects anything wider.
///
/// ```
/// use calculator::format_number;
///
/// assert_eq!(format_number(3.14159, 2), "3.14");
/// assert_eq!(format_number(1.0, 0), "1");
/// ```
pub fn format_number(value: f64, precision: u16) -> String {
    format!("{:.*}", usize::from(precision), value)
}

pub fn format_default(value: f64) -> String {
    format_number(value, DEFAULT_PRECISION)
}
