//! Encoding, win relation, and weighted sampling.
//!
//! All functions are pure except `sample_choice`, which draws from the
//! caller's RNG.

use crate::core::{Choice, ChoiceRng, Distribution, RuleError, OPTIONS, OPTION_COUNT, RPS};

/// Convert a letter abbreviation to its option.
///
/// The letter is lowercased first, so `'P'` and `'p'` are equivalent.
///
/// ```
/// use rps_engine::core::Choice;
/// use rps_engine::rules::letter_to_choice;
///
/// assert_eq!(letter_to_choice('r'), Ok(Choice::Rock));
/// assert_eq!(letter_to_choice('P'), Ok(Choice::Paper));
/// assert!(letter_to_choice('X').is_err());
/// ```
pub fn letter_to_choice(letter: char) -> Result<Choice, RuleError> {
    let lower = letter.to_ascii_lowercase();
    let position = RPS
        .chars()
        .position(|c| c == lower)
        .ok_or(RuleError::InvalidLetter(letter))?;
    Ok(OPTIONS[position])
}

/// The option that beats `choice`: `(choice + 1) mod 3`.
#[must_use]
pub fn what_beats(choice: Choice) -> Choice {
    OPTIONS[(choice.index() as usize + 1) % OPTION_COUNT]
}

/// Whether `a` beats `b`: `(a - b) mod 3 == 1`.
///
/// Identical choices never beat each other.
#[must_use]
pub fn beats(a: Choice, b: Choice) -> bool {
    (a.index() + OPTION_COUNT as u8 - b.index()) % OPTION_COUNT as u8 == 1
}

/// Draw an option with probability proportional to its weight.
///
/// If no option has positive weight the draw falls back to uniform.
pub fn sample_choice(distribution: &Distribution, rng: &mut ChoiceRng) -> Choice {
    let choice = match rng.choose_weighted(distribution.weights()) {
        Some(index) => OPTIONS[index],
        None => {
            tracing::warn!(
                weights = ?distribution.weights(),
                "distribution has no positive weight, drawing uniformly"
            );
            OPTIONS[rng.gen_index(OPTION_COUNT)]
        }
    };
    tracing::trace!(%choice, "sampled choice");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_to_choice_lowercase() {
        assert_eq!(letter_to_choice('r'), Ok(Choice::Rock));
        assert_eq!(letter_to_choice('p'), Ok(Choice::Paper));
        assert_eq!(letter_to_choice('s'), Ok(Choice::Scissors));
    }

    #[test]
    fn test_letter_to_choice_uppercase() {
        assert_eq!(letter_to_choice('R'), Ok(Choice::Rock));
        assert_eq!(letter_to_choice('P'), Ok(Choice::Paper));
        assert_eq!(letter_to_choice('S'), Ok(Choice::Scissors));
    }

    #[test]
    fn test_letter_to_choice_invalid() {
        assert_eq!(letter_to_choice('x'), Err(RuleError::InvalidLetter('x')));
        assert_eq!(letter_to_choice('X'), Err(RuleError::InvalidLetter('X')));
        assert!(letter_to_choice(' ').is_err());
        assert!(letter_to_choice('ß').is_err());
    }

    #[test]
    fn test_what_beats() {
        assert_eq!(what_beats(Choice::Rock), Choice::Paper);
        assert_eq!(what_beats(Choice::Paper), Choice::Scissors);
        assert_eq!(what_beats(Choice::Scissors), Choice::Rock);
    }

    #[test]
    fn test_beats_examples() {
        assert!(!beats(Choice::Rock, Choice::Rock));
        assert!(!beats(Choice::Rock, Choice::Paper));
        assert!(beats(Choice::Paper, Choice::Rock));
        assert!(beats(Choice::Rock, Choice::Scissors));
    }

    #[test]
    fn test_beats_matches_what_beats() {
        for a in OPTIONS {
            for b in OPTIONS {
                assert_eq!(beats(a, b), a == what_beats(b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_sample_degenerate() {
        let mut rng = ChoiceRng::new(42);
        let distr = Distribution::only(Choice::Scissors);
        for _ in 0..100 {
            assert_eq!(sample_choice(&distr, &mut rng), Choice::Scissors);
        }
    }

    #[test]
    fn test_sample_all_zero_is_uniform_fallback() {
        let mut rng = ChoiceRng::new(42);
        let distr = Distribution::new(0.0, 0.0, 0.0);
        let mut seen = [false; OPTION_COUNT];
        for _ in 0..300 {
            seen[sample_choice(&distr, &mut rng).index() as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
