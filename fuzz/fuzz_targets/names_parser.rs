//! Fuzz target for NAMES reply token parsing

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_objects::NameListEntry;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.is_empty() || input.len() > 512 {
            return;
        }

        let _ = NameListEntry::parse_all(input);

        if let Ok(entry) = NameListEntry::parse(input) {
            // Accepted tokens render back to themselves
            assert_eq!(entry.to_string(), input);
            let _ = entry.status().prefixes();
        }
    }
});
