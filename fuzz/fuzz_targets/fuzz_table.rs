//! Fuzz target for the range table loader.
//!
//! Loading must never panic, and a table that loads must survive being
//! written back out and loaded again unchanged.

#![no_main]

use cc_bankid::bin::TableLoader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(table) = TableLoader::from_reader(data) else {
        return;
    };

    for range in &table {
        assert!(range.low <= range.high);
    }

    let mut written = Vec::new();
    table.write_to(&mut written).unwrap();
    let reloaded = TableLoader::from_reader(written.as_slice()).unwrap();
    assert_eq!(reloaded, table);
});
