//! Wilson score confidence intervals on win rates.

use serde::{Deserialize, Serialize};

/// Wilson score bounds on a true win rate, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WilsonInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Wilson score interval for `wins` out of `wins + losses` decided games
///
/// `z` is the critical value for the desired confidence level (1.96 for
/// 95%, 1.645 for 90%). Draws are excluded from the total, consistent with
/// the win-rate definition. Zero decided games yields (0, 100): maximal
/// uncertainty, not an error.
#[must_use]
pub fn wilson_interval(wins: u64, losses: u64, z: f64) -> WilsonInterval {
    let total = wins + losses;
    if total == 0 {
        return WilsonInterval {
            lower: 0.0,
            upper: 100.0,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let n = total as f64;
    #[allow(clippy::cast_precision_loss)]
    let p = wins as f64 / n;
    let z_sq = z * z;

    let denom = 1.0 + z_sq / n;
    let center = (p + z_sq / (2.0 * n)) / denom;
    let margin = z * ((p * (1.0 - p) / n) + z_sq / (4.0 * n * n)).sqrt() / denom;

    WilsonInterval {
        lower: ((center - margin) * 100.0).max(0.0),
        upper: ((center + margin) * 100.0).min(100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_interval() {
        // 6 wins, 1 loss at 95%: lower ~48.7, upper ~97.4
        let interval = wilson_interval(6, 1, 1.96);
        assert!((interval.lower - 48.65).abs() < 0.1);
        assert!((interval.upper - 97.46).abs() < 0.1);
    }

    #[test]
    fn test_zero_sample_is_maximally_uncertain() {
        let interval = wilson_interval(0, 0, 1.96);
        assert!((interval.lower - 0.0).abs() < 1e-12);
        assert!((interval.upper - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_bracket_the_measured_rate() {
        for (wins, losses) in [(1u64, 0u64), (0, 1), (5, 5), (30, 10), (100, 1)] {
            let interval = wilson_interval(wins, losses, 1.96);
            let measured = wins as f64 * 100.0 / (wins + losses) as f64;
            assert!(
                interval.lower <= measured + 1e-9 && measured <= interval.upper + 1e-9,
                "CI ({}, {}) does not bracket {measured} for {wins}-{losses}",
                interval.lower,
                interval.upper
            );
            assert!(interval.lower >= 0.0 && interval.upper <= 100.0);
        }
    }

    #[test]
    fn test_narrower_at_lower_confidence() {
        let ninety = wilson_interval(30, 20, 1.645);
        let ninety_five = wilson_interval(30, 20, 1.96);
        assert!(ninety.upper - ninety.lower < ninety_five.upper - ninety_five.lower);
    }

    #[test]
    fn test_more_games_tighten_the_interval() {
        let few = wilson_interval(6, 4, 1.96);
        let many = wilson_interval(60, 40, 1.96);
        assert!(many.upper - many.lower < few.upper - few.lower);
    }
}
