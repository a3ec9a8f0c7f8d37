//! The Army standard operating procedure for framing messages.
//!
//! The procedure wraps a configured converter and produces complete field
//! messages: the ciphertext body framed on both ends by two indicator
//! groups carrying the system indicator (doubled), the external message
//! indicator, and the key list indicator. Wheel starting positions for the
//! body are never transmitted directly; they are derived by enciphering
//! twelve copies of the system indicator from the external-indicator
//! setting and reading off the first valid letter for each wheel.

use rand::Rng;
use thiserror::Error;

use crate::converter::{Converter, ConverterError};
use crate::keylist::KeyList;
use crate::wheel::WHEEL_COUNT;

/// Number of system-indicator repetitions enciphered to derive the internal
/// message indicator.
const INDICATOR_PROBE_LEN: usize = 12;

/// Errors from the message procedure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcedureError {
    /// No key list has been configured.
    #[error("procedure requires a key list")]
    MissingKeyList,

    /// The supplied key list carries a malformed indicator.
    #[error("invalid key list indicator {indicator:?}")]
    InvalidKeyListIndicator {
        /// The offending indicator.
        indicator: String,
    },

    /// The external message indicator was rejected by the wheels.
    #[error("invalid external message indicator {indicator:?}: {source}")]
    ExternalIndicator {
        /// The offending indicator.
        indicator: String,
        /// Why the wheels rejected it.
        source: ConverterError,
    },

    /// The system indicator is not a single `A`-`Z` letter.
    #[error("invalid system indicator {indicator:?}")]
    SystemIndicator {
        /// The offending character.
        indicator: char,
    },

    /// The 12-letter probe did not contain a valid letter for every wheel.
    #[error("could not derive internal indicator from probe {probe:?}")]
    InternalIndicator {
        /// The probe ciphertext that was scanned.
        probe: String,
    },

    /// A received message failed structural validation.
    #[error("malformed message: {reason}")]
    MalformedMessage {
        /// What was wrong with it.
        reason: String,
    },

    /// A received message names a different key list than the configured
    /// one.
    #[error("message was encrypted with key list {found}, not {expected}")]
    KeyListMismatch {
        /// Indicator of the configured key list.
        expected: String,
        /// Indicator recovered from the message.
        found: String,
    },

    /// Converter error during enciphering.
    #[error("converter error: {0}")]
    Converter(#[from] ConverterError),
}

/// Options for [`Procedure::encrypt`].
#[derive(Debug, Clone)]
pub struct MessageOptions {
    /// 6-letter wheel setting to start from; random when absent.
    pub external_indicator: Option<String>,

    /// Single-letter system indicator; random when absent.
    pub system_indicator: Option<char>,

    /// Break the output into 5-letter groups.
    pub group: bool,

    /// Substitute plaintext spaces with `Z` before enciphering.
    pub spaces: bool,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self { external_indicator: None, system_indicator: None, group: true, spaces: true }
    }
}

/// Indicators and body recovered from a framed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    /// The single-letter system indicator.
    pub system_indicator: char,

    /// The 6-letter external message indicator.
    pub external_indicator: String,

    /// Indicator of the key list the message was encrypted with.
    pub key_list_indicator: String,

    /// Ciphertext body with group spacing removed.
    pub ciphertext: String,
}

/// The standard encrypt/decrypt procedure, layered over one converter.
#[derive(Debug, Default)]
pub struct Procedure {
    converter: Converter,
    key_list: Option<KeyList>,
}

impl Procedure {
    /// Builds a procedure with no key list configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a procedure configured with `key_list`.
    pub fn with_key_list(key_list: KeyList) -> Result<Self, ProcedureError> {
        let mut procedure = Self::new();
        procedure.set_key_list(key_list)?;
        Ok(procedure)
    }

    /// Configures the converter from `key_list` and uses it for all future
    /// operations.
    pub fn set_key_list(&mut self, key_list: KeyList) -> Result<(), ProcedureError> {
        if !KeyList::is_valid_indicator(&key_list.indicator) {
            return Err(ProcedureError::InvalidKeyListIndicator {
                indicator: key_list.indicator,
            });
        }
        self.converter.configure(&key_list)?;
        self.key_list = Some(key_list);
        Ok(())
    }

    /// The currently configured key list, if any.
    pub fn key_list(&self) -> Option<&KeyList> {
        self.key_list.as_ref()
    }

    /// Encrypts `plaintext` and frames it as a complete message.
    ///
    /// Missing indicators in `options` are chosen at random from `rng`.
    /// Returns `pad1 pad2 body pad1 pad2` where `pad1` is the doubled
    /// system indicator plus the first half of the external indicator and
    /// `pad2` is the second half plus the key list indicator.
    pub fn encrypt(
        &mut self,
        plaintext: &str,
        options: &MessageOptions,
        rng: &mut impl Rng,
    ) -> Result<String, ProcedureError> {
        let key_list_indicator =
            self.key_list.as_ref().ok_or(ProcedureError::MissingKeyList)?.indicator.clone();

        self.converter.reset_letter_counter();

        let external = match &options.external_indicator {
            Some(setting) => {
                self.converter.set_key_wheels(setting).map_err(|source| {
                    ProcedureError::ExternalIndicator { indicator: setting.clone(), source }
                })?;
                setting.clone()
            },
            None => self.converter.set_random_key_wheels(rng),
        };

        let system = match options.system_indicator {
            Some(letter) if letter.is_ascii_uppercase() => letter,
            Some(letter) => return Err(ProcedureError::SystemIndicator { indicator: letter }),
            None => char::from(b'A' + rng.gen_range(0..26)),
        };

        self.derive_internal_indicator(system)?;
        tracing::debug!(%external, %system, "message indicators resolved");

        let mut body = self.converter.encrypt(plaintext, options.group, options.spaces)?;
        if options.group {
            // Complete a short final group with X padding.
            let letters = body.chars().filter(|&c| c != ' ').count();
            for _ in 0..(5 - letters % 5) % 5 {
                body.push('X');
            }
        }

        let pad1 = format!("{system}{system}{}", &external[..3]);
        let pad2 = format!("{}{key_list_indicator}", &external[3..]);
        let separator = if options.group { " " } else { "" };
        Ok([pad1.as_str(), pad2.as_str(), body.as_str(), pad1.as_str(), pad2.as_str()]
            .join(separator))
    }

    /// Decrypts a framed message produced by [`Procedure::encrypt`].
    ///
    /// The key list indicator recovered from the message must match the
    /// configured key list. The returned plaintext may carry trailing
    /// letters decrypted from the X padding of the final group; the reader
    /// discards them.
    pub fn decrypt(&mut self, message: &str) -> Result<String, ProcedureError> {
        let expected =
            self.key_list.as_ref().ok_or(ProcedureError::MissingKeyList)?.indicator.clone();

        let parsed = Self::parse_message(message)?;
        if parsed.key_list_indicator != expected {
            return Err(ProcedureError::KeyListMismatch {
                expected,
                found: parsed.key_list_indicator,
            });
        }

        self.converter.reset_letter_counter();
        self.converter.set_key_wheels(&parsed.external_indicator).map_err(|source| {
            ProcedureError::ExternalIndicator {
                indicator: parsed.external_indicator.clone(),
                source,
            }
        })?;
        self.derive_internal_indicator(parsed.system_indicator)?;

        Ok(self.converter.decrypt(&parsed.ciphertext, true, true)?)
    }

    /// Validates the framing of `message` and recovers its indicators and
    /// ciphertext body without touching the machine.
    pub fn parse_message(message: &str) -> Result<ParsedMessage, ProcedureError> {
        let malformed = |reason: &str| ProcedureError::MalformedMessage {
            reason: reason.to_owned(),
        };

        let letters: String = message.chars().filter(|&c| c != ' ').collect();
        if let Some(bad) = letters.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(malformed(&format!("unexpected character {bad:?}")));
        }
        if letters.len() < 25 {
            return Err(malformed("too short for two indicator groups and a body"));
        }

        let head = &letters[..10];
        let tail = &letters[letters.len() - 10..];
        if head != tail {
            return Err(malformed("leading and trailing indicator groups differ"));
        }

        let pad1 = &head[..5];
        let pad2 = &head[5..];
        let mut pad1_chars = pad1.chars();
        let system_indicator = pad1_chars.next().ok_or_else(|| malformed("empty message"))?;
        if pad1_chars.next() != Some(system_indicator) {
            return Err(malformed("system indicator is not doubled"));
        }

        Ok(ParsedMessage {
            system_indicator,
            external_indicator: format!("{}{}", &pad1[2..], &pad2[..3]),
            key_list_indicator: pad2[3..].to_owned(),
            ciphertext: letters[10..letters.len() - 10].to_owned(),
        })
    }

    /// Derives the internal message indicator and sets the wheels from it.
    ///
    /// Enciphers twelve copies of the system indicator from the current
    /// wheel setting, then scans the resulting ciphertext left to right,
    /// assigning each wheel the first remaining letter that appears on it.
    fn derive_internal_indicator(&mut self, system: char) -> Result<(), ProcedureError> {
        if !system.is_ascii_uppercase() {
            return Err(ProcedureError::SystemIndicator { indicator: system });
        }

        let probe: String = std::iter::repeat_n(system, INDICATOR_PROBE_LEN).collect();
        let probe_ct = self.converter.encrypt(&probe, false, false)?;

        let mut settings = String::with_capacity(WHEEL_COUNT);
        let mut wheel = 0;
        for letter in probe_ct.chars() {
            if wheel == WHEEL_COUNT {
                break;
            }
            if self.converter.wheel_contains(wheel, letter) {
                self.converter.set_key_wheel(wheel, letter)?;
                settings.push(letter);
                wheel += 1;
            }
        }
        if wheel != WHEEL_COUNT {
            return Err(ProcedureError::InternalIndicator { probe: probe_ct });
        }
        tracing::debug!(internal = %settings, "internal message indicator set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm_key_list() -> KeyList {
        KeyList {
            indicator: "FM".to_owned(),
            lugs: "1-0 2-0*8 0-3*7 0-4*5 0-5*2 1-5 1-6 3-4 4-5".to_owned(),
            pin_list: [
                "BCEJOPSTUVXY".to_owned(),
                "ACDHJLMNOQRUYZ".to_owned(),
                "AEHJLOQRUV".to_owned(),
                "DFGILMNPQS".to_owned(),
                "CEHIJLNPS".to_owned(),
                "ACDFHIMN".to_owned(),
            ],
            letter_check: "TNMYS CRMKK UHLKW LDQHM RQOLW R".to_owned(),
        }
    }

    #[test]
    fn encrypt_without_key_list_is_rejected() {
        let mut procedure = Procedure::new();
        let mut rng = rand::thread_rng();
        assert_eq!(
            procedure.encrypt("HELLO", &MessageOptions::default(), &mut rng),
            Err(ProcedureError::MissingKeyList)
        );
    }

    #[test]
    fn bad_key_list_indicator_is_rejected() {
        let mut key_list = fm_key_list();
        key_list.indicator = "FMX".to_owned();
        assert!(matches!(
            Procedure::with_key_list(key_list),
            Err(ProcedureError::InvalidKeyListIndicator { .. })
        ));
    }

    #[test]
    fn bad_system_indicator_is_rejected() {
        let mut procedure = Procedure::with_key_list(fm_key_list()).unwrap();
        let mut rng = rand::thread_rng();
        let options = MessageOptions {
            system_indicator: Some('g'),
            ..MessageOptions::default()
        };
        assert_eq!(
            procedure.encrypt("HELLO", &options, &mut rng),
            Err(ProcedureError::SystemIndicator { indicator: 'g' })
        );
    }

    #[test]
    fn bad_external_indicator_is_rejected() {
        let mut procedure = Procedure::with_key_list(fm_key_list()).unwrap();
        let mut rng = rand::thread_rng();
        // 'Z' is not on wheel 6.
        let options = MessageOptions {
            external_indicator: Some("ABCDEZ".to_owned()),
            ..MessageOptions::default()
        };
        assert!(matches!(
            procedure.encrypt("HELLO", &options, &mut rng),
            Err(ProcedureError::ExternalIndicator { .. })
        ));
    }

    #[test]
    fn parse_message_recovers_indicators() {
        let parsed =
            Procedure::parse_message("GGABC DEFFM NQHNL CAARZ OLTVX GGABC DEFFM").unwrap();
        assert_eq!(parsed.system_indicator, 'G');
        assert_eq!(parsed.external_indicator, "ABCDEF");
        assert_eq!(parsed.key_list_indicator, "FM");
        assert_eq!(parsed.ciphertext, "NQHNLCAARZOLTVX");
    }

    #[test]
    fn parse_message_rejects_structural_damage() {
        // Too short.
        assert!(Procedure::parse_message("GGABC DEFFM").is_err());
        // Mismatched trailing frame.
        assert!(
            Procedure::parse_message("GGABC DEFFM NQHNL CAARZ OLTVX GGABC DEFFX").is_err()
        );
        // System indicator not doubled.
        assert!(
            Procedure::parse_message("GHABC DEFFM NQHNL CAARZ OLTVX GHABC DEFFM").is_err()
        );
        // Lowercase contamination.
        assert!(
            Procedure::parse_message("ggabc DEFFM NQHNL CAARZ OLTVX ggabc DEFFM").is_err()
        );
    }

    #[test]
    fn decrypt_rejects_foreign_key_list() {
        let mut procedure = Procedure::with_key_list(fm_key_list()).unwrap();
        // Same frame but key list indicator "AA".
        let err = procedure
            .decrypt("GGABC DEFAA NQHNL CAARZ OLTVX GGABC DEFAA")
            .unwrap_err();
        assert_eq!(
            err,
            ProcedureError::KeyListMismatch { expected: "FM".to_owned(), found: "AA".to_owned() }
        );
    }
}
