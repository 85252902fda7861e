//! Fuzz target for input cleaning and format checks.

#![no_main]

use cc_bankid::format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let cleaned = format::strip_formatting(data);
    assert!(!cleaned.contains(' ') && !cleaned.contains('-'));

    // The detailed check and the predicate must never disagree
    assert_eq!(
        format::is_valid_format(&cleaned),
        format::check_format(&cleaned).is_ok()
    );
    assert_eq!(
        format::is_valid_format(data),
        format::check_format(data).is_ok()
    );
});
