//! Rule engine integration tests.

use proptest::prelude::*;

use rps_engine::core::{Choice, ChoiceRng, Distribution, RuleError, OPTIONS, RPS};
use rps_engine::rules::{beats, letter_to_choice, sample_choice, what_beats};

fn any_choice() -> impl Strategy<Value = Choice> {
    (0u8..3).prop_map(|k| Choice::from_index(k).unwrap())
}

// =============================================================================
// Letter Conversion Tests
// =============================================================================

#[test]
fn test_letter_position_in_rps() {
    for (i, letter) in RPS.chars().enumerate() {
        assert_eq!(letter_to_choice(letter).unwrap().index() as usize, i);
        assert_eq!(
            letter_to_choice(letter.to_ascii_uppercase()).unwrap().index() as usize,
            i
        );
    }
}

#[test]
fn test_invalid_letter_is_error() {
    assert_eq!(letter_to_choice('x'), Err(RuleError::InvalidLetter('x')));
}

// =============================================================================
// Win Relation Tests
// =============================================================================

#[test]
fn test_what_beats_is_successor() {
    for k in 0..3u8 {
        let choice = Choice::from_index(k).unwrap();
        assert_eq!(what_beats(choice).index(), (k + 1) % 3);
    }
}

#[test]
fn test_beats_concrete_cases() {
    assert!(!beats(Choice::Rock, Choice::Rock));
    assert!(!beats(Choice::Rock, Choice::Paper));
    assert!(beats(Choice::Paper, Choice::Rock));
    assert!(beats(Choice::Rock, Choice::Scissors));
}

proptest! {
    #[test]
    fn prop_beats_matches_what_beats(a in any_choice(), b in any_choice()) {
        prop_assert_eq!(beats(a, b), a == what_beats(b));
    }

    #[test]
    fn prop_beats_anti_symmetric(a in any_choice(), b in any_choice()) {
        if a == b {
            prop_assert!(!beats(a, a));
        } else {
            prop_assert!(beats(a, b) ^ beats(b, a));
        }
    }

    #[test]
    fn prop_beats_modular_difference(a in any_choice(), b in any_choice()) {
        let diff = (a.index() as i32 - b.index() as i32).rem_euclid(3);
        prop_assert_eq!(beats(a, b), diff == 1);
    }

    #[test]
    fn prop_sample_only_positive_weights(
        weights in prop::array::uniform3(0.0f64..10.0),
        seed in any::<u64>(),
    ) {
        prop_assume!(weights.iter().any(|w| *w > 0.0));
        let distr = Distribution::new(weights[0], weights[1], weights[2]);
        let mut rng = ChoiceRng::new(seed);
        for _ in 0..20 {
            let choice = sample_choice(&distr, &mut rng);
            prop_assert!(distr[choice] > 0.0);
        }
    }
}

// =============================================================================
// Sampling Tests
// =============================================================================

#[test]
fn test_uniform_sample_membership() {
    let mut rng = ChoiceRng::new(2020);
    let distr = Distribution::from_entries([(0, 1.0), (1, 1.0), (2, 1.0)]).unwrap();
    for _ in 0..1000 {
        let choice = sample_choice(&distr, &mut rng);
        assert!(OPTIONS.contains(&choice));
    }
}

#[test]
fn test_degenerate_distribution_always_rock() {
    let mut rng = ChoiceRng::new(7);
    let distr = Distribution::from_entries([(0, 1.0), (1, 0.0), (2, 0.0)]).unwrap();
    let rocks = (0..1000)
        .filter(|_| sample_choice(&distr, &mut rng) == Choice::Rock)
        .count();
    assert_eq!(rocks, 1000);
}

#[test]
fn test_weighted_frequencies() {
    let mut rng = ChoiceRng::new(99);
    let distr = Distribution::new(3.0, 1.0, 0.0);
    let trials = 10_000;

    let mut counts = [0usize; 3];
    for _ in 0..trials {
        counts[sample_choice(&distr, &mut rng).index() as usize] += 1;
    }

    assert_eq!(counts[2], 0, "zero-weight option should never be drawn");
    let rock_freq = counts[0] as f64 / trials as f64;
    assert!((rock_freq - 0.75).abs() < 0.03, "rock frequency {rock_freq}");
}

#[test]
fn test_huge_finite_weights_keep_proportions() {
    let mut rng = ChoiceRng::new(1);
    let distr = Distribution::new(f64::MAX, f64::MAX, 1.0);
    let trials = 1000;

    let mut counts = [0usize; 3];
    for _ in 0..trials {
        counts[sample_choice(&distr, &mut rng).index() as usize] += 1;
    }

    assert_eq!(counts[2], 0, "negligible weight should never be drawn");
    for count in &counts[..2] {
        let freq = *count as f64 / trials as f64;
        assert!((freq - 0.5).abs() < 0.1, "counts {counts:?}");
    }
    assert_eq!(distr.probability(Choice::Rock), Some(0.5));
}

#[test]
fn test_sampling_deterministic_with_seed() {
    let distr = Distribution::uniform();
    let mut rng1 = ChoiceRng::new(12345);
    let mut rng2 = ChoiceRng::new(12345);

    let seq1: Vec<_> = (0..50).map(|_| sample_choice(&distr, &mut rng1)).collect();
    let seq2: Vec<_> = (0..50).map(|_| sample_choice(&distr, &mut rng2)).collect();

    assert_eq!(seq1, seq2);
}

#[test]
fn test_restored_state_continues_sequence() {
    let distr = Distribution::uniform();
    let mut rng = ChoiceRng::new(5);
    for _ in 0..17 {
        sample_choice(&distr, &mut rng);
    }

    let state = rng.state();
    let expected: Vec<_> = (0..20).map(|_| sample_choice(&distr, &mut rng)).collect();

    let mut restored = ChoiceRng::from_state(&state);
    let actual: Vec<_> = (0..20).map(|_| sample_choice(&distr, &mut restored)).collect();

    assert_eq!(expected, actual);
}

#[test]
fn test_all_zero_weights_still_valid() {
    let mut rng = ChoiceRng::new(1);
    let distr = Distribution::new(0.0, 0.0, 0.0);
    for _ in 0..50 {
        assert!(OPTIONS.contains(&sample_choice(&distr, &mut rng)));
    }
}
