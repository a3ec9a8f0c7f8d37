//! The assembled converter: six key wheels, one lug drum, and the
//! substitution step that ties them together.
//!
//! The cipher is reciprocal. Each step reads the six effective-pin states,
//! obtains a bar count from the drum, advances every wheel exactly once, and
//! substitutes through a reversed alphabet shifted by the count. Because the
//! wheel motion depends only on machine state and never on the processed
//! text, running the identical transform over ciphertext from the same
//! starting positions reproduces the rotation sequence and inverts the
//! substitution.

use rand::Rng;
use thiserror::Error;

use crate::drum::{Drum, DrumError};
use crate::keylist::KeyList;
use crate::wheel::{KeyWheel, WHEEL_COUNT, WheelError};

/// The cipher alphabet, listed Z to A.
const CIPHER: &[u8; 26] = b"ZYXWVUTSRQPONMLKJIHGFEDCBA";

/// Errors from converter configuration or operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConverterError {
    /// A wheel index outside `[0, 5]` was supplied.
    #[error("invalid key wheel index {index}")]
    InvalidWheel {
        /// The offending index.
        index: usize,
    },

    /// An input character outside `A`-`Z` (or a disallowed space).
    #[error("illegal input character {ch:?}")]
    IllegalCharacter {
        /// The offending character.
        ch: char,
    },

    /// A wheel-position setting string of the wrong length.
    #[error("wheel setting {setting:?} must be exactly {WHEEL_COUNT} letters")]
    InvalidSetting {
        /// The offending setting string.
        setting: String,
    },

    /// Key wheel error.
    #[error("key wheel error: {0}")]
    Wheel(#[from] WheelError),

    /// Drum or lug-spec error.
    #[error("drum error: {0}")]
    Drum(#[from] DrumError),
}

/// A complete M-209 converter.
///
/// Owns its wheels and drum exclusively; one converter models one physical
/// machine and must not be shared between concurrent sessions.
#[derive(Debug, Clone)]
pub struct Converter {
    wheels: [KeyWheel; WHEEL_COUNT],
    drum: Drum,
    letter_counter: u32,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Builds a converter with all pins ineffective, all lugs neutral, and
    /// every wheel displaying `A`.
    pub fn new() -> Self {
        Self { wheels: KeyWheel::standard_bank(), drum: Drum::empty(), letter_counter: 0 }
    }

    /// Sets the pins on wheel `index` (0 = left-most), marking `effective`
    /// letters effective and all others ineffective.
    pub fn set_pins(&mut self, index: usize, effective: &str) -> Result<(), ConverterError> {
        let wheel =
            self.wheels.get_mut(index).ok_or(ConverterError::InvalidWheel { index })?;
        wheel.set_pins(effective)?;
        Ok(())
    }

    /// Installs a pre-built drum.
    pub fn set_drum(&mut self, drum: Drum) {
        self.drum = drum;
    }

    /// Parses `spec` as key-list lug notation and installs the result.
    ///
    /// The drum is untouched when parsing fails.
    pub fn set_drum_lugs(&mut self, spec: &str) -> Result<(), ConverterError> {
        self.drum = Drum::from_key_list(spec)?;
        Ok(())
    }

    /// Applies a full key list: lugs plus all six pin lists.
    ///
    /// The call is atomic; on any error the previous configuration is kept.
    pub fn configure(&mut self, key_list: &KeyList) -> Result<(), ConverterError> {
        let drum = Drum::from_key_list(&key_list.lugs)?;
        for (i, (wheel, pins)) in self.wheels.iter().zip(&key_list.pin_list).enumerate() {
            for letter in pins.chars() {
                if !wheel.contains(letter) {
                    return Err(WheelError::UnknownLetter { wheel: i + 1, letter }.into());
                }
            }
        }
        for (wheel, pins) in self.wheels.iter_mut().zip(&key_list.pin_list) {
            // Validated above; cannot fail.
            wheel.set_pins(pins)?;
        }
        self.drum = drum;
        tracing::debug!(indicator = %key_list.indicator, "converter configured from key list");
        Ok(())
    }

    /// Sets the position of wheel `index` so that `letter` is displayed.
    pub fn set_key_wheel(&mut self, index: usize, letter: char) -> Result<(), ConverterError> {
        let wheel =
            self.wheels.get_mut(index).ok_or(ConverterError::InvalidWheel { index })?;
        wheel.set_pos(letter)?;
        Ok(())
    }

    /// Sets all six wheel positions from a 6-letter string, left to right.
    ///
    /// The call is atomic: every letter is validated against its wheel
    /// before any wheel moves.
    pub fn set_key_wheels(&mut self, setting: &str) -> Result<(), ConverterError> {
        let letters: Vec<char> = setting.chars().collect();
        if letters.len() != WHEEL_COUNT {
            return Err(ConverterError::InvalidSetting { setting: setting.to_owned() });
        }
        for (i, (wheel, &letter)) in self.wheels.iter().zip(&letters).enumerate() {
            if !wheel.contains(letter) {
                return Err(WheelError::UnknownLetter { wheel: i + 1, letter }.into());
            }
        }
        for (wheel, letter) in self.wheels.iter_mut().zip(letters) {
            // Validated above; cannot fail.
            wheel.set_pos(letter)?;
        }
        Ok(())
    }

    /// Turns every wheel to a uniformly random position and returns the
    /// resulting 6-letter setting.
    pub fn set_random_key_wheels(&mut self, rng: &mut impl Rng) -> String {
        self.wheels.iter_mut().map(|wheel| wheel.set_random_pos(rng)).collect()
    }

    /// The 6-letter string currently displayed across the wheels.
    pub fn wheel_positions(&self) -> String {
        self.wheels.iter().map(KeyWheel::display).collect()
    }

    /// True if `letter` appears on wheel `index`.
    pub fn wheel_contains(&self, index: usize, letter: char) -> bool {
        self.wheels.get(index).is_some_and(|wheel| wheel.contains(letter))
    }

    /// Letters enciphered since the counter was last reset.
    pub fn letter_counter(&self) -> u32 {
        self.letter_counter
    }

    /// Resets the letter counter, as done at the start of each message.
    pub fn reset_letter_counter(&mut self) {
        self.letter_counter = 0;
    }

    /// Encrypts `plaintext`.
    ///
    /// With `spaces`, input spaces are substituted with `Z` before
    /// enciphering; otherwise any character outside `A`-`Z` is an error.
    /// With `group`, the output is broken into 5-letter groups joined by
    /// single spaces.
    pub fn encrypt(
        &mut self,
        plaintext: &str,
        group: bool,
        spaces: bool,
    ) -> Result<String, ConverterError> {
        let mut ciphertext = String::with_capacity(plaintext.len());
        for mut ch in plaintext.chars() {
            if ch == ' ' && spaces {
                ch = 'Z';
            }
            ciphertext.push(self.cipher(ch)?);
        }
        if group {
            Ok(grouped(&ciphertext))
        } else {
            Ok(ciphertext)
        }
    }

    /// Decrypts `ciphertext` by running the reciprocal cipher.
    ///
    /// With `spaces`, space characters in the input are skipped (group
    /// separators). With `z_sub`, each decrypted `Z` is restored to a
    /// space.
    pub fn decrypt(
        &mut self,
        ciphertext: &str,
        spaces: bool,
        z_sub: bool,
    ) -> Result<String, ConverterError> {
        let mut plaintext = String::with_capacity(ciphertext.len());
        for ch in ciphertext.chars() {
            if ch == ' ' && spaces {
                continue;
            }
            let p = self.cipher(ch)?;
            plaintext.push(if z_sub && p == 'Z' { ' ' } else { p });
        }
        Ok(plaintext)
    }

    /// One substitution step: read pins, rotate the drum, advance every
    /// wheel, emit the substituted letter.
    fn cipher(&mut self, ch: char) -> Result<char, ConverterError> {
        if !ch.is_ascii_uppercase() {
            return Err(ConverterError::IllegalCharacter { ch });
        }

        let mut pins = [false; WHEEL_COUNT];
        for (pin, wheel) in pins.iter_mut().zip(&self.wheels) {
            *pin = wheel.is_effective();
        }
        let count = self.drum.rotate(pins);

        // The wheels always advance, after the pins are read and regardless
        // of the substitution outcome.
        for wheel in &mut self.wheels {
            wheel.rotate();
        }
        self.letter_counter += 1;

        let ordinal = i32::from(ch as u8 - b'A');
        let index = usize::try_from((ordinal - i32::from(count)).rem_euclid(26)).unwrap_or(0);
        Ok(CIPHER[index] as char)
    }
}

/// Breaks `text` into 5-letter groups joined by single spaces.
fn grouped(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + text.len() / 5);
    for (i, chunk) in bytes.chunks(5).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_machine() -> Converter {
        let mut converter = Converter::new();
        converter.set_drum_lugs("1-0 2-0*4 0-3 0-4*3 0-5*3 0-6*11 2-5 2-6 3-4 4-5").unwrap();
        let pins =
            ["BFJKLOSTUWXZ", "ABDJKLMORTUV", "EHJKNPQRSX", "ABCHIJLMPQR", "BCDGJLNOPQS", "AEFHIJP"];
        for (i, p) in pins.iter().enumerate() {
            converter.set_pins(i, p).unwrap();
        }
        converter
    }

    #[test]
    fn encrypts_reference_probe() {
        let mut converter = test_machine();
        let probe = "A".repeat(26);
        assert_eq!(
            converter.encrypt(&probe, true, true).unwrap(),
            "OZGPK AFVAJ JYRZW LRJEG MOVLU M"
        );
    }

    #[test]
    fn encryption_is_deterministic() {
        let mut a = test_machine();
        let mut b = test_machine();
        let probe = "A".repeat(26);
        assert_eq!(a.encrypt(&probe, true, true).unwrap(), b.encrypt(&probe, true, true).unwrap());
    }

    #[test]
    fn cipher_is_reciprocal() {
        let mut converter = test_machine();
        converter.set_key_wheels("ABCDEF").unwrap();
        let ciphertext = converter.encrypt("HELLOZWORLD", false, false).unwrap();

        let mut converter = test_machine();
        converter.set_key_wheels("ABCDEF").unwrap();
        assert_eq!(converter.decrypt(&ciphertext, false, false).unwrap(), "HELLOZWORLD");
    }

    #[test]
    fn spaces_substitute_as_z() {
        let mut with_spaces = test_machine();
        let mut explicit = test_machine();
        assert_eq!(
            with_spaces.encrypt("AT DAWN", false, true).unwrap(),
            explicit.encrypt("ATZDAWN", false, false).unwrap()
        );
    }

    #[test]
    fn rejects_illegal_characters() {
        let mut converter = test_machine();
        assert_eq!(
            converter.encrypt("AT DAWN", false, false),
            Err(ConverterError::IllegalCharacter { ch: ' ' })
        );
        assert_eq!(
            converter.encrypt("a", false, true),
            Err(ConverterError::IllegalCharacter { ch: 'a' })
        );
    }

    #[test]
    fn set_key_wheels_requires_six_valid_letters() {
        let mut converter = test_machine();
        assert!(matches!(
            converter.set_key_wheels("ABC"),
            Err(ConverterError::InvalidSetting { .. })
        ));
        // 'Z' is not on wheel 6 (A-Q).
        assert_eq!(
            converter.set_key_wheels("ABCDEZ"),
            Err(ConverterError::Wheel(WheelError::UnknownLetter { wheel: 6, letter: 'Z' }))
        );
    }

    #[test]
    fn set_key_wheels_is_atomic() {
        let mut converter = test_machine();
        converter.set_key_wheels("FFFFFF").unwrap();
        // Wheel 1 would accept 'X' but wheel 6 must reject 'R'; nothing may
        // move.
        assert!(converter.set_key_wheels("XXXXXR").is_err());
        assert_eq!(converter.wheel_positions(), "FFFFFF");
    }

    #[test]
    fn letter_counter_tracks_enciphered_letters() {
        let mut converter = test_machine();
        converter.encrypt("HELLO WORLD", true, true).unwrap();
        assert_eq!(converter.letter_counter(), 11);
        converter.reset_letter_counter();
        assert_eq!(converter.letter_counter(), 0);
    }

    #[test]
    fn invalid_wheel_index_is_rejected() {
        let mut converter = Converter::new();
        assert_eq!(
            converter.set_pins(6, "A"),
            Err(ConverterError::InvalidWheel { index: 6 })
        );
    }

    #[test]
    fn grouping_breaks_into_fives() {
        assert_eq!(grouped("ABCDEFGHIJK"), "ABCDE FGHIJ K");
        assert_eq!(grouped("ABCDE"), "ABCDE");
        assert_eq!(grouped(""), "");
    }
}
