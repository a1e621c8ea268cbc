//! Fixed-point rendering of converted values.

/// Fraction digits needed to print any finite `f64` exactly
/// (the smallest subnormal is 2^-1074).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats `value` with exactly `decimal_places` fraction digits.
///
/// Rounding is half away from zero, applied to the exact binary value of
/// `value`. Negative inputs keep their sign even when they round to zero,
/// matching C's `%.*f`. Non-finite values fall back to `Display`.
///
/// # Examples
///
/// ```
/// use tempconv::format_temperature;
///
/// assert_eq!(format_temperature(98.765, 2), "98.77");
/// assert_eq!(format_temperature(5.0, 0), "5");
/// assert_eq!(format_temperature(2.5, 0), "3");
/// ```
#[must_use]
pub fn format_temperature(value: f64, decimal_places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", exact_precision(decimal_places), value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return exact;
    };

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(decimal_places))
        .collect();
    if fraction
        .as_bytes()
        .get(decimal_places)
        .is_some_and(|&d| d >= b'5')
    {
        increment(&mut digits);
    }

    let split = digits.len() - decimal_places;
    let mut output = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        output.push('-');
    }
    output.extend(digits[..split].iter().map(|&d| char::from(d)));
    if decimal_places > 0 {
        output.push('.');
        output.extend(digits[split..].iter().map(|&d| char::from(d)));
    }
    output
}

/// Digits to print before rounding: every exact digit plus one past the
/// requested places.
const fn exact_precision(decimal_places: usize) -> usize {
    let wanted = decimal_places.saturating_add(1);
    if wanted > EXACT_FRACTION_DIGITS {
        wanted
    } else {
        EXACT_FRACTION_DIGITS
    }
}

/// Adds one unit in the last place to a string of ASCII digits.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
