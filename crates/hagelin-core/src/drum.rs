//! Lug drum simulation and the key-list lug notation.
//!
//! The drum cage holds 27 bars, each with two movable lugs. A lug is either
//! aligned with one of the six key wheels or parked in a neutral position.
//! During one revolution every bar whose lugs touch at least one effective
//! pin shifts left once, and the number of shifted bars selects the
//! substitution alphabet for the current letter.
//!
//! Bars with both lugs neutral are not stored; only the number of engaging
//! bars matters, so the bar order is irrelevant to the cipher. Bars are kept
//! sorted and doubles normalized low-to-high so that structurally equal
//! configurations compare equal and [`Drum::to_key_list`] is canonical.

use std::fmt::Write as _;

use thiserror::Error;

use crate::wheel::WHEEL_COUNT;

/// Number of bars in the drum cage.
pub const BAR_COUNT: usize = 27;

/// Errors from drum construction or lug-spec parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrumError {
    /// A lug-spec token was not of the form `m-n` or `m-n*k`.
    #[error("invalid lug pair {token:?}")]
    InvalidLugPair {
        /// The offending token.
        token: String,
    },

    /// More than [`BAR_COUNT`] bars were supplied.
    #[error("too many bars in lug list: {count}")]
    TooManyBars {
        /// Number of bars supplied.
        count: usize,
    },

    /// A lug referenced a wheel index outside `[0, 5]`.
    #[error("lug wheel index {index} out of range")]
    IndexOutOfRange {
        /// The offending 0-based wheel index.
        index: u8,
    },

    /// A two-lug bar referenced the same wheel twice.
    #[error("bar references wheel {index} with both lugs")]
    DuplicateIndex {
        /// The duplicated 0-based wheel index.
        index: u8,
    },
}

/// One drum bar with at least one lug out of neutral.
///
/// Indices are 0-based key wheel positions. A `Double` bar always stores its
/// indices low-to-high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bar {
    /// One lug aligned with a wheel, the other neutral.
    Single(u8),
    /// Both lugs aligned, with two distinct wheels.
    Double(u8, u8),
}

impl Bar {
    /// Validates wheel indices and normalizes `Double` ordering.
    fn normalized(self) -> Result<Self, DrumError> {
        let check = |index: u8| {
            if usize::from(index) < WHEEL_COUNT {
                Ok(index)
            } else {
                Err(DrumError::IndexOutOfRange { index })
            }
        };
        match self {
            Self::Single(a) => Ok(Self::Single(check(a)?)),
            Self::Double(a, b) => {
                let a = check(a)?;
                let b = check(b)?;
                if a == b {
                    return Err(DrumError::DuplicateIndex { index: a });
                }
                Ok(Self::Double(a.min(b), a.max(b)))
            },
        }
    }

    /// True if any lug on this bar touches an effective pin.
    fn engages(self, pins: [bool; WHEEL_COUNT]) -> bool {
        match self {
            Self::Single(a) => pins[usize::from(a)],
            Self::Double(a, b) => pins[usize::from(a)] || pins[usize::from(b)],
        }
    }
}

/// The 27-bar lug cage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drum {
    /// Stored bars, sorted; bars with both lugs neutral are omitted.
    bars: Vec<Bar>,
}

impl Drum {
    /// Builds a drum from a bar list, validating and normalizing it.
    pub fn new(bars: Vec<Bar>) -> Result<Self, DrumError> {
        if bars.len() > BAR_COUNT {
            return Err(DrumError::TooManyBars { count: bars.len() });
        }
        let mut bars =
            bars.into_iter().map(Bar::normalized).collect::<Result<Vec<_>, DrumError>>()?;
        bars.sort_unstable();
        Ok(Self { bars })
    }

    /// A drum with every lug in neutral position.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stored bars, sorted.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars with at least one lug out of neutral.
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Rotates the cage one full revolution against the given pin states and
    /// returns the number of bars that shifted.
    ///
    /// A bar counts once even when both of its lugs touch effective pins,
    /// so the result is always in `[0, 27]`.
    pub fn rotate(&self, pins: [bool; WHEEL_COUNT]) -> u8 {
        let count = self.bars.iter().filter(|bar| bar.engages(pins)).count();
        u8::try_from(count).unwrap_or(27)
    }

    /// Parses a drum from key-list lug notation.
    ///
    /// The notation is whitespace-separated tokens `m-n` or `m-n*k`, where
    /// `m` and `n` are lug positions (`0` = neutral, `1`-`6` = wheel) and
    /// `k` repeats the pair. Nonzero `m` and `n` must differ, and the
    /// expanded token count must not exceed 27; any shortfall is implicitly
    /// all-neutral bars. Example:
    ///
    /// ```text
    /// 1-0 2-0*4 0-3 0-4*3 0-5*3 0-6*11 2-5 2-6 3-4 4-5
    /// ```
    pub fn from_key_list(spec: &str) -> Result<Self, DrumError> {
        let mut bars = Vec::new();
        let mut expanded = 0usize;
        for token in spec.split_whitespace() {
            let (pair, repeat) = parse_token(token)?;
            expanded += repeat;
            if expanded > BAR_COUNT {
                return Err(DrumError::TooManyBars { count: expanded });
            }
            let bar = match pair {
                (0, 0) => None,
                (m, 0) => Some(Bar::Single(m - 1)),
                (0, n) => Some(Bar::Single(n - 1)),
                (m, n) => Some(Bar::Double(m - 1, n - 1)),
            };
            if let Some(bar) = bar {
                for _ in 0..repeat {
                    bars.push(bar);
                }
            }
        }
        Self::new(bars)
    }

    /// Serializes this drum back into canonical key-list lug notation.
    ///
    /// Bars are emitted in sorted order, singles as `m-0`, doubles as `m-n`
    /// with `m < n`, and runs of identical bars collapsed with the `*k`
    /// shorthand. Parsing the result reproduces this drum exactly.
    pub fn to_key_list(&self) -> String {
        let mut out = String::new();
        let mut bars = self.bars.iter().peekable();
        while let Some(&bar) = bars.next() {
            let mut repeat = 1;
            while bars.peek() == Some(&&bar) {
                bars.next();
                repeat += 1;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = match bar {
                Bar::Single(a) => write!(out, "{}-0", a + 1),
                Bar::Double(a, b) => write!(out, "{}-{}", a + 1, b + 1),
            };
            if repeat > 1 {
                let _ = write!(out, "*{repeat}");
            }
        }
        out
    }
}

/// Parses one `m-n` or `m-n*k` token into a lug pair and repeat count.
fn parse_token(token: &str) -> Result<((u8, u8), usize), DrumError> {
    let invalid = || DrumError::InvalidLugPair { token: token.to_owned() };

    let (pair, repeat) = match token.split_once('*') {
        Some((pair, count)) => {
            let repeat: usize = count.parse().map_err(|_| invalid())?;
            if repeat == 0 {
                return Err(invalid());
            }
            (pair, repeat)
        },
        None => (token, 1),
    };

    let (m, n) = pair.split_once('-').ok_or_else(invalid)?;
    let m: u8 = m.parse().map_err(|_| invalid())?;
    let n: u8 = n.parse().map_err(|_| invalid())?;
    if m > 6 || n > 6 {
        return Err(invalid());
    }
    Ok(((m, n), repeat))
}
