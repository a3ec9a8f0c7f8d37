//! Fuzz target for the message-frame parser
//!
//! # Strategy
//!
//! - Arbitrary strings: truncated frames, mismatched indicator groups,
//!   non-letter contamination, pathological lengths
//!
//! # Invariants
//!
//! - NEVER panic on arbitrary input
//! - Accepted messages have a doubled system indicator, a 6-letter
//!   external indicator, and a 2-letter key list indicator

#![no_main]

use libfuzzer_sys::fuzz_target;

use hagelin_core::Procedure;

fuzz_target!(|message: &str| {
    let Ok(parsed) = Procedure::parse_message(message) else {
        return;
    };

    assert!(parsed.system_indicator.is_ascii_uppercase());
    assert_eq!(parsed.external_indicator.len(), 6);
    assert_eq!(parsed.key_list_indicator.len(), 2);
    assert!(parsed.ciphertext.len() >= 5);
    assert!(parsed.ciphertext.chars().all(|c| c.is_ascii_uppercase()));
});
