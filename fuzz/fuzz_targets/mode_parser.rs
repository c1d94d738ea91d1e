//! Fuzz target for IRC mode string parsing
//!
//! This fuzzer tests the mode parser for robustness against malformed input,
//! and checks that anything it accepts renders to a stable canonical form.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_objects::mode::{ChannelMode, ChannelModeString, ClientModeString, ModeType, UserMode};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        // Skip very long inputs
        if input.len() > 256 {
            return;
        }

        let _ = ClientModeString::parse(input, "", "");

        if let Ok(modes) = ChannelModeString::parse(input, "beIk", "l") {
            let rendered = modes.to_string();
            let reparsed = ChannelModeString::parse(&rendered, "beIk", "l")
                .expect("canonical form must re-parse");
            assert_eq!(reparsed.as_str(), rendered);

            let _ = modes.validate_known();
            let _ = modes.split_chunks(3);
        }

        // Test individual mode character parsing - should never panic
        for ch in input.chars() {
            let _ = ChannelMode::from_char(ch);
            let _ = UserMode::from_char(ch);
        }
    }
});
