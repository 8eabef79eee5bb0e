//! Fuzz target for event classification
//!
//! The parser claims totality: every line yields exactly one event, with no
//! panics and the raw line preserved. Hold it to that under random input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_events::state::{BotState, ServerState};
use std::str;

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        // Skip empty inputs and very long inputs (over 512 bytes is unusual for IRC)
        if input.is_empty() || input.len() > 512 {
            return;
        }

        let mut server = ServerState::default();
        let mut bot = BotState::with_nickname("kameloso");

        let event = slirc_events::parse::line(input, &mut server, &mut bot);
        assert_eq!(event.raw, input);
    }
});
