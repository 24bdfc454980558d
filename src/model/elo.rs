//! Elo scoring primitives. Everything here is pure: ratings go in, ratings come out.

use crate::model::{
    constants::{DRAW, LOGISTIC_SCALE, LOSS, WIN},
    structures::score::Score
};

/// The side of a fixture a score is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away
}

/// Probability-like expected score of a side rated `rating_a` against a side rated `rating_b`.
///
/// `expected_score(a, b) + expected_score(b, a) == 1`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / LOGISTIC_SCALE))
}

/// 1 for a win, 0.5 for a draw and 0 for a loss, seen from `side`
pub fn actual_score(home_goals: u32, away_goals: u32, side: Side) -> f64 {
    let home = match home_goals.cmp(&away_goals) {
        std::cmp::Ordering::Greater => WIN,
        std::cmp::Ordering::Equal => DRAW,
        std::cmp::Ordering::Less => LOSS
    };

    match side {
        Side::Home => home,
        Side::Away => WIN - home
    }
}

/// `rating + k * (actual - expected)`, truncated toward zero.
///
/// # Notes
/// For positive ratings truncation floors the result: gains come out slightly
/// smaller and losses slightly larger (1800 - 11.52 gives 1788), so ratings drift
/// downwards. Historical rating series depend on it.
pub fn update_rating(rating: i64, actual: f64, expected: f64, k_factor: f64) -> i64 {
    (rating as f64 + k_factor * (actual - expected)) as i64
}

/// Updates both sides of a fixture from their pre-match ratings.
/// Returns `(new_home_rating, new_away_rating)`.
pub fn update_paired_ratings(rating_home: i64, rating_away: i64, score: Score, k_factor: f64) -> (i64, i64) {
    let expected_home = expected_score(rating_home as f64, rating_away as f64);
    let expected_away = expected_score(rating_away as f64, rating_home as f64);

    let actual_home = actual_score(score.home, score.away, Side::Home);
    let actual_away = actual_score(score.home, score.away, Side::Away);

    (
        update_rating(rating_home, actual_home, expected_home, k_factor),
        update_rating(rating_away, actual_away, expected_away, k_factor)
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use crate::model::{
        constants::{DEFAULT_RATING, K_FACTOR},
        elo::{actual_score, expected_score, update_paired_ratings, update_rating, Side},
        structures::score::Score
    };

    #[test]
    fn test_expected_score_equal_ratings() {
        assert_abs_diff_eq!(expected_score(1800.0, 1800.0), 0.5);
        assert_abs_diff_eq!(expected_score(0.0, 0.0), 0.5);
        assert_abs_diff_eq!(expected_score(2731.0, 2731.0), 0.5);
    }

    #[test]
    fn test_expected_score_400_points() {
        // A 400 point gap is 10:1 odds
        assert_abs_diff_eq!(expected_score(2200.0, 1800.0), 10.0 / 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(expected_score(1800.0, 2200.0), 1.0 / 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_actual_score_home() {
        assert_eq!(actual_score(3, 1, Side::Home), 1.0);
        assert_eq!(actual_score(1, 3, Side::Home), 0.0);
        assert_eq!(actual_score(2, 2, Side::Home), 0.5);
    }

    #[test]
    fn test_actual_score_away() {
        for (home, away) in [(3, 1), (1, 3), (2, 2), (0, 0)] {
            assert_eq!(
                actual_score(home, away, Side::Away),
                1.0 - actual_score(home, away, Side::Home)
            );
        }
    }

    #[test]
    fn test_update_rating() {
        assert_eq!(update_rating(1800, 1.0, 0.5, 32.0), 1816);
        assert_eq!(update_rating(1800, 0.0, 0.5, 32.0), 1784);
        assert_eq!(update_rating(1800, 0.5, 0.5, 32.0), 1800);
    }

    #[test]
    fn test_update_rating_truncates() {
        // 1800 + 32 * 0.36 = 1811.52
        assert_eq!(update_rating(1800, 1.0, 0.64, 32.0), 1811);
        // 1800 - 32 * 0.36 = 1788.48
        assert_eq!(update_rating(1800, 0.0, 0.36, 32.0), 1788);
    }

    #[test]
    fn test_paired_update_between_equals() {
        let (home, away) = update_paired_ratings(DEFAULT_RATING, DEFAULT_RATING, Score::new(2, 0), K_FACTOR);

        assert_eq!(home, 1816);
        assert_eq!(away, 1784);
    }

    #[test]
    fn test_paired_update_is_not_conservative() {
        // expected(1900, 1800) ~= 0.64006, delta ~= 11.5179
        let (home, away) = update_paired_ratings(1900, 1800, Score::new(1, 0), K_FACTOR);
        assert_eq!(home, 1911);
        assert_eq!(away, 1788);
        assert_eq!(home + away, 3699);

        // delta ~= 4.4821 on a draw
        let (home, away) = update_paired_ratings(1900, 1800, Score::new(1, 1), K_FACTOR);
        assert_eq!(home, 1895);
        assert_eq!(away, 1804);
        assert_eq!(home + away, 3699);
    }

    #[test]
    fn test_paired_update_upset() {
        let (home, away) = update_paired_ratings(1800, 1900, Score::new(2, 1), K_FACTOR);

        // The underdog gains more than it would against an equal opponent
        assert!(home - 1800 > 16);
        assert!(1900 - away > 16);
    }

    #[test]
    fn test_paired_update_uses_pre_match_ratings() {
        let (home, away) = update_paired_ratings(1750, 1850, Score::new(0, 0), K_FACTOR);
        let expected_home = update_rating(1750, 0.5, expected_score(1750.0, 1850.0), K_FACTOR);
        let expected_away = update_rating(1850, 0.5, expected_score(1850.0, 1750.0), K_FACTOR);

        assert_eq!((home, away), (expected_home, expected_away));
    }

    proptest! {
        #[test]
        fn prop_expected_score_is_symmetric(a in 0.0f64..4000.0, b in 0.0f64..4000.0) {
            prop_assert!((expected_score(a, b) + expected_score(b, a) - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_expected_score_in_open_interval(a in 0.0f64..4000.0, b in 0.0f64..4000.0) {
            let e = expected_score(a, b);
            prop_assert!(e > 0.0 && e < 1.0);
        }

        #[test]
        fn prop_expected_score_monotonic(a in 0.0f64..4000.0, b in 0.0f64..4000.0, gain in 1.0f64..500.0) {
            prop_assert!(expected_score(a + gain, b) > expected_score(a, b));
        }

        #[test]
        fn prop_winner_never_loses_rating(home in 1000i64..2600, away in 1000i64..2600, goals in 1u32..6) {
            let (new_home, new_away) = update_paired_ratings(home, away, Score::new(goals, 0), K_FACTOR);
            prop_assert!(new_home >= home);
            prop_assert!(new_away <= away);
        }
    }
}
