//! Fuzz target for the full check pipeline.
//!
//! Tests that check_card never panics and never leaks the full number.

#![no_main]

use cc_bankid::bin::{BankRange, RangeTable};
use cc_bankid::{check_card, extract_issuer_id, is_valid};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let table = RangeTable::from_ranges(vec![
        BankRange::new("Wide", 0, 999_999).unwrap(),
        BankRange::new("Shadowed", 400_000, 499_999).unwrap(),
    ]);

    let _ = extract_issuer_id(data);
    let result = check_card(data, &table);
    assert_eq!(result.is_ok(), is_valid(data));

    if let Ok(report) = result {
        // Every non-negative 6-digit BIN lands in the first range
        assert_eq!(report.bank.as_deref(), Some("Wide"));
        assert!(report.masked.contains('*'));
    }
});
