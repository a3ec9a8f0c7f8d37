//! The key list record: a named, complete machine configuration.

/// A full daily machine configuration, identified by a two-letter indicator.
///
/// Key lists are immutable once constructed and compare structurally. The
/// `letter_check` field carries the expected ciphertext of the canonical
/// probe (26 `A`s from wheel setting `AAAAAA`) so an operator can verify a
/// transcribed configuration before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyList {
    /// Two-letter identifier, `A`-`Z` only.
    pub indicator: String,

    /// Drum configuration in key-list lug notation.
    pub lugs: String,

    /// Effective-pin letters per wheel, left to right.
    pub pin_list: [String; 6],

    /// Expected grouped ciphertext of the canonical probe.
    pub letter_check: String,
}

impl KeyList {
    /// True if `indicator` is a well-formed key list indicator: exactly two
    /// `A`-`Z` letters.
    pub fn is_valid_indicator(indicator: &str) -> bool {
        indicator.len() == 2 && indicator.chars().all(|c| c.is_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_uppercase_letters() {
        assert!(KeyList::is_valid_indicator("AA"));
        assert!(KeyList::is_valid_indicator("FM"));
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["", "A", "ABC", "a1", "fm", "A ", "1A"] {
            assert!(!KeyList::is_valid_indicator(bad), "{bad:?} should be invalid");
        }
    }
}
