//! Fuzz target for the formatting transforms
//!
//! Stripping must be idempotent and the translators must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 512 {
            return;
        }

        let _ = slirc_events::mirc_to_ansi(input);
        let _ = slirc_events::expand_tags(input);

        let once = slirc_events::strip_formatting(input).into_owned();
        let twice = slirc_events::strip_formatting(&once).into_owned();
        assert_eq!(once, twice);
    }
});
