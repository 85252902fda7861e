//! Luhn algorithm implementation for card number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate card numbers and other identification numbers.
//!
//! Doubling goes through a lookup table, so the inner loop has no branch on
//! the doubled value.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a digit string against the Luhn checksum.
///
/// Fails closed: returns `false` when the string is shorter than two
/// characters or contains anything other than `0`-`9`. Length limits for
/// card numbers are not applied here, see [`crate::format::is_valid_format`].
///
/// # Example
///
/// ```
/// use cc_bankid::luhn::is_valid_luhn;
///
/// assert!(is_valid_luhn("4539148803436467"));
/// assert!(!is_valid_luhn("4539148803436468"));
/// assert!(is_valid_luhn("79927398713"));
/// ```
pub fn is_valid_luhn(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return false;
    }

    let mut sum: u32 = 0;
    let mut double = false;

    for &b in bytes.iter().rev() {
        if !b.is_ascii_digit() {
            return false;
        }
        let digit = b - b'0';
        sum += if double {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
        double = !double;
    }

    sum % 10 == 0
}

/// Validates a slice of digit values (0-9) using the Luhn algorithm.
///
/// Returns `false` for an empty slice or any value above 9.
///
/// # Example
///
/// ```
/// use cc_bankid::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// assert!(!validate(&[10, 1]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    matches!(compute_checksum(digits), Some(sum) if sum % 10 == 0)
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
///
/// The rightmost digit is position 0 and is never doubled. Returns `None`
/// if any value is not a decimal digit.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> Option<u32> {
    weighted_sum(digits, 1)
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation. Returns `None` if any
/// value is not a decimal digit.
///
/// # Example
///
/// ```
/// use cc_bankid::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), Some(1));
/// assert_eq!(generate_check_digit(&[12]), None);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> Option<u8> {
    // Every existing digit moves one place left once the check digit is
    // appended, so the rightmost one here is doubled.
    let sum = weighted_sum(digits, 0)?;
    Some(((10 - (sum % 10)) % 10) as u8)
}

/// Sums digits from the right, doubling those whose position has the given
/// parity.
fn weighted_sum(digits: &[u8], doubled_parity: usize) -> Option<u32> {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            let doubled = *DOUBLE_TABLE.get(digit as usize)?;
            let value = if i % 2 == doubled_parity { doubled } else { digit };
            Some(u32::from(value))
        })
        .sum()
}
