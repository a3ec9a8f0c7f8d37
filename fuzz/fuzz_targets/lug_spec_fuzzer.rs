//! Fuzz target for the lug-spec parser
//!
//! # Strategy
//!
//! - Arbitrary strings: malformed tokens, oversized repeats, stray
//!   whitespace, non-ASCII input
//! - Round-trip on accepted input: serialize and reparse
//!
//! # Invariants
//!
//! - NEVER panic on arbitrary input
//! - Accepted specs expand to at most 27 bars
//! - `from_key_list(to_key_list(d)) == d` for every accepted drum
//! - Rotation counts never exceed the stored bar count

#![no_main]

use libfuzzer_sys::fuzz_target;

use hagelin_core::Drum;

fuzz_target!(|spec: &str| {
    let Ok(drum) = Drum::from_key_list(spec) else {
        return;
    };

    assert!(drum.bar_count() <= 27);

    let round = Drum::from_key_list(&drum.to_key_list()).expect("canonical spec must reparse");
    assert_eq!(round, drum);

    for mask in 0u8..64 {
        let mut pins = [false; 6];
        for (i, pin) in pins.iter_mut().enumerate() {
            *pin = mask & (1 << i) != 0;
        }
        assert!(usize::from(drum.rotate(pins)) <= drum.bar_count());
    }
});
