//! Key wheel simulation.
//!
//! Each of the six key wheels carries a fixed cyclic alphabet with one
//! sliding pin per letter. A pin slid to the right is "effective" and can
//! engage the drum bars; a pin slid to the left is "ineffective". The wheel
//! that engages the drum is not read at the letter shown to the operator but
//! at a fixed mechanical offset from it, named by the wheel's guide letter.

use rand::Rng;
use thiserror::Error;

/// Number of key wheels in the machine.
pub const WHEEL_COUNT: usize = 6;

/// Letters on each key wheel, left to right.
///
/// The alphabets shrink from 26 down to 17 letters so the wheel periods are
/// pairwise coprime and the combined pin sequence only repeats after
/// 26 * 25 * 23 * 21 * 19 * 17 letters.
pub const WHEEL_ALPHABETS: [&str; WHEEL_COUNT] = [
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "ABCDEFGHIJKLMNOPQRSTUVXYZ",
    "ABCDEFGHIJKLMNOPQRSTUVX",
    "ABCDEFGHIJKLMNOPQRSTU",
    "ABCDEFGHIJKLMNOPQRS",
    "ABCDEFGHIJKLMNOPQ",
];

/// Guide letter per wheel: the letter under which the drum-engaging pin sits
/// when `A` is displayed to the operator.
const GUIDE_LETTERS: [char; WHEEL_COUNT] = ['P', 'O', 'N', 'M', 'L', 'K'];

/// Total pin count over all six wheels.
pub const TOTAL_PINS: usize = WHEEL_ALPHABETS[0].len()
    + WHEEL_ALPHABETS[1].len()
    + WHEEL_ALPHABETS[2].len()
    + WHEEL_ALPHABETS[3].len()
    + WHEEL_ALPHABETS[4].len()
    + WHEEL_ALPHABETS[5].len();

/// Errors from key wheel operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WheelError {
    /// The requested letter does not appear on this wheel's alphabet.
    #[error("letter {letter:?} is not on key wheel {wheel}")]
    UnknownLetter {
        /// 1-based wheel number, for operator-facing messages.
        wheel: usize,
        /// The offending letter.
        letter: char,
    },
}

/// A single pinned key wheel.
///
/// Positions index into the wheel's alphabet and are always in
/// `[0, alphabet length)`.
#[derive(Debug, Clone)]
pub struct KeyWheel {
    /// 1-based wheel number (1 = left-most).
    number: usize,
    letters: &'static [u8],
    guide_offset: usize,
    pins: Vec<bool>,
    pos: usize,
}

impl KeyWheel {
    /// Builds the standard bank of six wheels, all pins ineffective, all
    /// positions at `A`.
    pub fn standard_bank() -> [Self; WHEEL_COUNT] {
        let mut n = 0;
        WHEEL_ALPHABETS.map(|alphabet| {
            let letters = alphabet.as_bytes();
            let guide = GUIDE_LETTERS[n] as u8;
            n += 1;
            Self {
                number: n,
                letters,
                // The guide letter is always a member of its own alphabet.
                guide_offset: letters.iter().position(|&b| b == guide).unwrap_or(0),
                pins: vec![false; letters.len()],
                pos: 0,
            }
        })
    }

    /// Number of pins (letters) on this wheel.
    pub fn pin_count(&self) -> usize {
        self.letters.len()
    }

    /// Returns the position of `letter` on this wheel, if present.
    fn letter_index(&self, letter: char) -> Option<usize> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.letters.iter().position(|&b| b == letter as u8)
    }

    /// True if `letter` appears on this wheel.
    pub fn contains(&self, letter: char) -> bool {
        self.letter_index(letter).is_some()
    }

    /// Marks every letter in `effective` as an effective pin and all other
    /// pins ineffective.
    ///
    /// The call is atomic: if any letter is not on this wheel, no pin state
    /// changes.
    pub fn set_pins(&mut self, effective: &str) -> Result<(), WheelError> {
        let mut pins = vec![false; self.letters.len()];
        for letter in effective.chars() {
            let index = self
                .letter_index(letter)
                .ok_or(WheelError::UnknownLetter { wheel: self.number, letter })?;
            pins[index] = true;
        }
        self.pins = pins;
        Ok(())
    }

    /// Advances the wheel one position, wrapping at the end of the alphabet.
    pub fn rotate(&mut self) {
        self.pos = (self.pos + 1) % self.letters.len();
    }

    /// Sets the wheel so that `letter` is displayed to the operator.
    pub fn set_pos(&mut self, letter: char) -> Result<(), WheelError> {
        self.pos = self
            .letter_index(letter)
            .ok_or(WheelError::UnknownLetter { wheel: self.number, letter })?;
        Ok(())
    }

    /// Turns the wheel to a uniformly random position and returns the letter
    /// now displayed.
    pub fn set_random_pos(&mut self, rng: &mut impl Rng) -> char {
        self.pos = rng.gen_range(0..self.letters.len());
        self.display()
    }

    /// The letter currently displayed to the operator.
    pub fn display(&self) -> char {
        self.letters[self.pos] as char
    }

    /// Whether the pin currently able to engage the drum is effective.
    ///
    /// The engaging pin sits at the guide-letter offset from the displayed
    /// position, not at the displayed position itself.
    pub fn is_effective(&self) -> bool {
        self.pins[(self.pos + self.guide_offset) % self.letters.len()]
    }
}
