//! Random pin list dealing and vetting.
//!
//! Pins are dealt like cards: a 156-card deck of 78 effective and 78
//! ineffective markers is shuffled and dealt across the 131 pin positions
//! of the six wheels in alphabet order. A deal is accepted only when the
//! overall effective ratio lands in the 40-60% band and no wheel carries a
//! cyclic run of more than six equal pin states.

use rand::Rng;
use rand::seq::SliceRandom;

use hagelin_core::{TOTAL_PINS, WHEEL_ALPHABETS, WHEEL_COUNT};

use crate::{GeneratorConfig, KeygenError};

/// Deck size dealt per attempt; the historical procedure deals two cards
/// short of six full suits and leaves the surplus unused.
const DECK_SIZE: usize = 156;

/// Longest permitted cyclic run of equal pin states on one wheel.
const MAX_RUN: usize = 6;

/// Deals pin lists until one passes [`pin_list_check`] or the attempt
/// ceiling is reached.
pub(crate) fn generate_pin_list(
    rng: &mut impl Rng,
    config: &GeneratorConfig,
) -> Result<[String; WHEEL_COUNT], KeygenError> {
    let mut deck = [false; DECK_SIZE];
    for card in deck.iter_mut().take(DECK_SIZE / 2) {
        *card = true;
    }

    for attempt in 1..=config.max_pin_attempts {
        deck.shuffle(rng);
        let mut cards = deck.iter().copied();

        let mut pin_list: [String; WHEEL_COUNT] = Default::default();
        for (pins, alphabet) in pin_list.iter_mut().zip(WHEEL_ALPHABETS) {
            *pins = alphabet.chars().filter(|_| cards.next() == Some(true)).collect();
        }

        if pin_list_check(&pin_list) {
            tracing::info!(attempt, "pin list generated");
            return Ok(pin_list);
        }
        tracing::debug!(attempt, "pin list rejected");
    }
    Err(KeygenError::PinSearchExhausted { attempts: config.max_pin_attempts })
}

/// True if `pin_list` meets the procedural criteria: effective ratio within
/// 40-60% of all pins and no over-long cyclic run on any wheel.
pub(crate) fn pin_list_check(pin_list: &[String; WHEEL_COUNT]) -> bool {
    let effective: usize = pin_list.iter().map(String::len).sum();
    #[allow(clippy::cast_precision_loss)]
    let ratio = effective as f64 / TOTAL_PINS as f64;
    if !(0.4..=0.6).contains(&ratio) {
        tracing::debug!(ratio, "pin ratio outside 40-60% band");
        return false;
    }

    for (pins, alphabet) in pin_list.iter().zip(WHEEL_ALPHABETS) {
        let states: Vec<bool> = alphabet.chars().map(|c| pins.contains(c)).collect();
        if has_run_over(&states, true) || has_run_over(&states, false) {
            tracing::debug!("pin list has a run of more than {MAX_RUN} equal pins");
            return false;
        }
    }

    true
}

/// True if `states`, read cyclically, contains more than [`MAX_RUN`]
/// consecutive entries equal to `value`.
fn has_run_over(states: &[bool], value: bool) -> bool {
    let n = states.len();
    (0..n).any(|start| (0..=MAX_RUN).all(|k| states[(start + k) % n] == value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn run_detection_sees_wrap_around() {
        // Four trailing and three leading effective pins form a cyclic run
        // of seven.
        let mut states = vec![false; 19];
        for i in [15, 16, 17, 18, 0, 1, 2] {
            states[i] = true;
        }
        assert!(has_run_over(&states, true));
        states[0] = false;
        assert!(!has_run_over(&states, true));
    }

    #[test]
    fn run_detection_handles_uniform_wheel() {
        assert!(has_run_over(&[true; 17], true));
        assert!(has_run_over(&[false; 17], false));
        assert!(!has_run_over(&[false; 17], true));
    }

    #[test]
    fn exact_run_of_six_is_allowed() {
        let mut states = vec![false; 26];
        for s in states.iter_mut().take(6) {
            *s = true;
        }
        assert!(!has_run_over(&states, true));
        states[6] = true;
        assert!(has_run_over(&states, true));
    }

    #[test]
    fn ratio_band_is_enforced() {
        // All pins ineffective: ratio 0.
        let empty: [String; WHEEL_COUNT] = Default::default();
        assert!(!pin_list_check(&empty));

        // All pins effective: ratio 1 (and runs everywhere).
        let full: [String; WHEEL_COUNT] =
            WHEEL_ALPHABETS.map(std::borrow::ToOwned::to_owned);
        assert!(!pin_list_check(&full));
    }

    #[test]
    fn historical_pin_list_passes() {
        let pin_list: [String; WHEEL_COUNT] = [
            "BCEJOPSTUVXY".to_owned(),
            "ACDHJLMNOQRUYZ".to_owned(),
            "AEHJLOQRUV".to_owned(),
            "DFGILMNPQS".to_owned(),
            "CEHIJLNPS".to_owned(),
            "ACDFHIMN".to_owned(),
        ];
        assert!(pin_list_check(&pin_list));
    }

    #[test]
    fn generated_pin_lists_satisfy_all_criteria() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let config = GeneratorConfig::default();
        for _ in 0..10 {
            let pin_list = generate_pin_list(&mut rng, &config).unwrap();
            assert!(pin_list_check(&pin_list));
            // Dealt pins stay in alphabet order within each wheel.
            for (pins, alphabet) in pin_list.iter().zip(WHEEL_ALPHABETS) {
                let mut last = None;
                for c in pins.chars() {
                    let index = alphabet.find(c);
                    assert!(index.is_some());
                    assert!(index > last);
                    last = index;
                }
            }
        }
    }

    #[test]
    fn zero_attempt_ceiling_exhausts_immediately() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let config = GeneratorConfig { max_pin_attempts: 0, ..GeneratorConfig::default() };
        assert_eq!(
            generate_pin_list(&mut rng, &config),
            Err(KeygenError::PinSearchExhausted { attempts: 0 })
        );
    }
}
