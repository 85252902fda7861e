//! Masking helpers for card numbers that end up in logs or on screen.
//!
//! Only the last four digits (or the BIN plus the last four) are ever shown.

/// Masks a digit string, keeping the last 4 digits.
///
/// Hidden digits are shown as `*` in dash-separated groups of four, with the
/// visible tail as the final group: `****-****-****-1234`. A short last
/// hidden group runs straight into the tail (`****-****-*2222`). Non-digits
/// are ignored, and 4 digits or fewer are hidden entirely.
///
/// # Example
///
/// ```
/// use cc_bankid::mask::mask_string;
///
/// assert_eq!(mask_string("4111111111111111"), "****-****-****-1111");
/// ```
pub fn mask_string(input: &str) -> String {
    let digits = digits_of(input);
    let hidden = match digits.len().checked_sub(4) {
        Some(hidden) if hidden > 0 => hidden,
        _ => return "*".repeat(digits.len()),
    };

    let groups: Vec<String> = (0..hidden)
        .step_by(4)
        .map(|start| "*".repeat((hidden - start).min(4)))
        .collect();
    let joint = if hidden % 4 == 0 { "-" } else { "" };

    format!("{}{}{}", groups.join("-"), joint, &digits[hidden..])
}

/// Masks a digit string, keeping the BIN (first 6) and the last 4 digits.
///
/// Format: `411111******1111`. Strings of 10 digits or fewer fall back to
/// [`mask_string`].
///
/// # Example
///
/// ```
/// use cc_bankid::mask::mask_with_bin;
///
/// assert_eq!(mask_with_bin("4111111111111111"), "411111******1111");
/// ```
pub fn mask_with_bin(input: &str) -> String {
    let digits = digits_of(input);
    let len = digits.len();
    if len <= 10 {
        return mask_string(&digits);
    }

    format!("{}{}{}", &digits[..6], "*".repeat(len - 10), &digits[len - 4..])
}

// ASCII only, so byte offsets into the result are char boundaries.
fn digits_of(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("4111111111111111"), "****-****-****-1111");
        assert_eq!(mask_string("4111-1111-1111-1111"), "****-****-****-1111");
        assert_eq!(mask_string("4111 1111 1111 1111"), "****-****-****-1111");
    }

    #[test]
    fn test_mask_string_odd_lengths() {
        assert_eq!(mask_string("4222222222222"), "****-****-*2222");
        assert_eq!(mask_string("378282246310005"), "****-****-***0005");
        assert_eq!(mask_string("123"), "***");
        assert_eq!(mask_string("1234"), "****");
        assert_eq!(mask_string("12345"), "*2345");
        assert_eq!(mask_string("12345678"), "****-5678");
        assert_eq!(mask_string(""), "");
    }

    #[test]
    fn test_mask_with_bin() {
        assert_eq!(mask_with_bin("4111111111111111"), "411111******1111");
        assert_eq!(mask_with_bin("4222222222222"), "422222***2222");
        assert_eq!(mask_with_bin("1234567890"), "****-**7890");
        assert_eq!(mask_with_bin("4111-1111-1111-1111"), "411111******1111");
        assert_eq!(mask_with_bin("12345678901"), "123456*8901");
    }

    #[test]
    fn test_non_digits_ignored() {
        assert_eq!(mask_string("٤١١١ab4111111111111111"), "****-****-****-1111");
    }
}
