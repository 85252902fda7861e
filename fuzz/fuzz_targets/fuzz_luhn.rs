//! Fuzz target for the Luhn checks.
//!
//! The string and digit-slice entry points must agree, and appending a
//! generated check digit must always produce a valid number.

#![no_main]

use cc_bankid::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();
    let text: String = digits.iter().map(|&d| (b'0' + d) as char).collect();

    if digits.len() >= 2 {
        assert_eq!(luhn::is_valid_luhn(&text), luhn::validate(&digits));
    }

    if !digits.is_empty() && digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits).unwrap();
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }

    // Raw bytes may contain anything; must not panic
    let _ = luhn::validate(data);
    let _ = luhn::generate_check_digit(data);
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = luhn::is_valid_luhn(s);
    }
});
