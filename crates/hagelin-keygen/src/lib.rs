//! Hagelin Key List Generation
//!
//! Produces random, procedure-valid key lists: a lug configuration drawn
//! from the published selection tables, a dealt pin list, and the letter
//! check that lets an operator verify a transcribed configuration.
//!
//! # Design
//!
//! Generation is a bounded-retry constructive search, not an exhaustive
//! one. The lug search and the pin search each retry up to a configured
//! attempt ceiling and surface exhaustion as a typed error; the caller
//! recovers by invoking generation again with fresh randomness. All
//! randomness is drawn from a caller-supplied `rand::Rng`, so tests run
//! the search deterministically from a seed.

mod data;
mod lugs;
mod pins;

use rand::Rng;
use thiserror::Error;

use hagelin_core::{Converter, ConverterError, DrumError, KeyList, WHEEL_COUNT};

/// Tuning knobs for the generation search.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Attempt ceiling for the overlap-distribution search.
    pub max_lug_attempts: u32,

    /// Attempt ceiling for the pin-list deal.
    pub max_pin_attempts: u32,

    /// Percentage weight for drawing from the Group B table.
    pub group_b_percent: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { max_lug_attempts: 1024, max_pin_attempts: 1024, group_b_percent: 10 }
    }
}

/// Errors from key list generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeygenError {
    /// The requested indicator is not two `A`-`Z` letters.
    #[error("invalid key list indicator {indicator:?}")]
    InvalidIndicator {
        /// The offending indicator.
        indicator: String,
    },

    /// The overlap-distribution search hit its attempt ceiling.
    #[error("lug generation gave up after {attempts} attempts")]
    LugSearchExhausted {
        /// The configured ceiling.
        attempts: u32,
    },

    /// The pin-list deal hit its attempt ceiling.
    #[error("pin list generation gave up after {attempts} attempts")]
    PinSearchExhausted {
        /// The configured ceiling.
        attempts: u32,
    },

    /// A generated drum failed validation (indicates a generator bug).
    #[error("drum error: {0}")]
    Drum(#[from] DrumError),

    /// The letter-check converter rejected the generated configuration
    /// (indicates a generator bug).
    #[error("converter error: {0}")]
    Converter(#[from] ConverterError),
}

/// Random key list generator with an owned random source.
#[derive(Debug)]
pub struct KeyListGenerator<R> {
    rng: R,
    config: GeneratorConfig,
}

impl<R: Rng> KeyListGenerator<R> {
    /// Builds a generator with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, GeneratorConfig::default())
    }

    /// Builds a generator with an explicit configuration.
    pub fn with_config(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }

    /// Generates a random key list labeled with `indicator`.
    ///
    /// The indicator is a label only; it does not influence the search.
    pub fn generate(&mut self, indicator: &str) -> Result<KeyList, KeygenError> {
        if !KeyList::is_valid_indicator(indicator) {
            return Err(KeygenError::InvalidIndicator { indicator: indicator.to_owned() });
        }
        tracing::info!(indicator, "generating key list");

        let lugs = lugs::generate_lugs(&mut self.rng, &self.config)?;
        let pin_list = pins::generate_pin_list(&mut self.rng, &self.config)?;
        let letter_check = letter_check(&lugs, &pin_list)?;

        Ok(KeyList { indicator: indicator.to_owned(), lugs, pin_list, letter_check })
    }
}

/// Computes the letter check for a configuration: the grouped ciphertext of
/// 26 `A`s enciphered from wheel setting `AAAAAA`.
pub fn letter_check(
    lugs: &str,
    pin_list: &[String; WHEEL_COUNT],
) -> Result<String, KeygenError> {
    let mut converter = Converter::new();
    converter.set_drum_lugs(lugs)?;
    for (wheel, pins) in pin_list.iter().enumerate() {
        converter.set_pins(wheel, pins)?;
    }
    converter.set_key_wheels("AAAAAA")?;
    Ok(converter.encrypt(&"A".repeat(26), true, true)?)
}
