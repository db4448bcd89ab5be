//! Stake Sizing Engine
//!
//! Converts a win probability and decimal odds into a recommended wager
//! amount under three bankroll-management strategies.
//!
//! The Kelly criterion formula:
//!     f* = (b*p - q) / b = (p*odds - 1) / (odds - 1)
//!
//! Where:
//!     f* = fraction of bankroll to bet
//!     b = odds - 1 (net odds)
//!     p = probability of winning
//!     q = 1 - p (probability of losing)
//!     odds = decimal odds (e.g., 1.91 ≈ American -110)

use crate::error::{
    validate_bankroll, validate_decimal_odds, validate_probability, validate_target_profit,
    validate_unit_percent, EngineError,
};
use crate::models::StakeSuggestions;

/// Default ceiling on the Kelly stake, as a fraction of bankroll.
///
/// Full Kelly is notoriously volatile; capping the recommended fraction at
/// a quarter of the bankroll bounds the worst-case single-bet exposure.
pub const DEFAULT_KELLY_CAP: f64 = 0.25;

/// Calculate the raw Kelly fraction for a single bet
///
/// # Arguments
/// * `probability` - Estimated probability of winning (0-1)
/// * `odds` - Decimal odds (must be > 1.0)
///
/// # Returns
/// Kelly fraction (can be negative when the edge is negative)
///
/// # Examples
/// ```
/// use picklabs::core::sizing::kelly_fraction;
/// let f = kelly_fraction(0.55, 1.91).unwrap();
/// assert!((f - 0.0555).abs() < 0.001);
/// ```
pub fn kelly_fraction(probability: f64, odds: f64) -> Result<f64, EngineError> {
    validate_probability(probability)?;
    validate_decimal_odds(odds)?;

    // f* = (p * odds - 1) / (odds - 1)
    Ok((probability * odds - 1.0) / (odds - 1.0))
}

/// Expected profit per unit staked at probability `p` and decimal odds `d`
///
/// edge = (d - 1) * p - (1 - p). Positive edge signals a favorable bet.
/// Reported alongside recommendations; it does not gate sizing.
pub fn edge(probability: f64, odds: f64) -> f64 {
    (odds - 1.0) * probability - (1.0 - probability)
}

/// Stake sizing engine bound to a fixed bankroll.
///
/// The bankroll is fixed for the engine's lifetime; build a new engine to
/// size against an updated bankroll. All methods are pure over their
/// arguments, so one engine can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct BettingEngine {
    bankroll: f64,
    kelly_cap: f64,
}

impl BettingEngine {
    /// Create an engine with the default Kelly cap
    pub fn new(bankroll: f64) -> Result<Self, EngineError> {
        Self::with_kelly_cap(bankroll, DEFAULT_KELLY_CAP)
    }

    /// Create an engine with a custom Kelly cap (fraction of bankroll in (0, 1])
    pub fn with_kelly_cap(bankroll: f64, kelly_cap: f64) -> Result<Self, EngineError> {
        validate_bankroll(bankroll)?;
        if !kelly_cap.is_finite() || kelly_cap <= 0.0 || kelly_cap > 1.0 {
            return Err(EngineError::InvalidParameter(format!(
                "kelly cap must be in (0, 1], got {}",
                kelly_cap
            )));
        }

        Ok(Self { bankroll, kelly_cap })
    }

    pub fn bankroll(&self) -> f64 {
        self.bankroll
    }

    pub fn kelly_cap(&self) -> f64 {
        self.kelly_cap
    }

    /// Kelly-criterion stake
    ///
    /// The Kelly fraction is clamped at zero (a negative-edge bet is never
    /// recommended) and capped at the configured fraction of bankroll.
    ///
    /// # Examples
    /// ```
    /// use picklabs::core::sizing::BettingEngine;
    /// let engine = BettingEngine::new(1000.0).unwrap();
    /// let stake = engine.kelly_bet(0.55, 1.91).unwrap();
    /// assert!((stake - 55.49).abs() < 0.01);
    /// ```
    pub fn kelly_bet(&self, probability: f64, odds: f64) -> Result<f64, EngineError> {
        let fraction = kelly_fraction(probability, odds)?
            .max(0.0)
            .min(self.kelly_cap);

        Ok(self.bankroll * fraction)
    }

    /// Fixed-fraction stake: `bankroll * unit_percent`, independent of
    /// probability or odds
    pub fn fixed_unit_bet(&self, unit_percent: f64) -> Result<f64, EngineError> {
        validate_unit_percent(unit_percent)?;

        Ok(self.bankroll * unit_percent)
    }

    /// Stake required so that a win yields exactly `target` profit:
    /// `target / (odds - 1)`
    pub fn target_profit_bet(&self, target: f64, odds: f64) -> Result<f64, EngineError> {
        validate_target_profit(target)?;
        validate_decimal_odds(odds)?;

        Ok(target / (odds - 1.0))
    }

    /// Compute all three strategy amounts for one bet
    pub fn suggestions(
        &self,
        probability: f64,
        odds: f64,
        unit_percent: f64,
        target: f64,
    ) -> Result<StakeSuggestions, EngineError> {
        Ok(StakeSuggestions {
            kelly: self.kelly_bet(probability, odds)?,
            fixed: self.fixed_unit_bet(unit_percent)?,
            target: self.target_profit_bet(target, odds)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelly_fraction_positive_edge() {
        // p = 0.55 at -110: f = (0.55 * 1.91 - 1) / 0.91
        let f = kelly_fraction(0.55, 1.91).unwrap();
        assert!((f - 0.055494).abs() < 0.0001);
    }

    #[test]
    fn test_kelly_fraction_negative_edge() {
        let f = kelly_fraction(0.40, 2.0).unwrap();
        assert!(f < 0.0);
    }

    #[test]
    fn test_kelly_fraction_invalid_odds() {
        assert_eq!(
            kelly_fraction(0.55, 1.0),
            Err(EngineError::InvalidOdds(1.0))
        );
    }

    #[test]
    fn test_kelly_bet_never_negative() {
        let engine = BettingEngine::new(1000.0).unwrap();

        for p in [0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0] {
            for d in [1.01, 1.5, 1.91, 2.5, 5.0] {
                let stake = engine.kelly_bet(p, d).unwrap();
                assert!(stake >= 0.0, "negative stake for p={}, d={}", p, d);
            }
        }
    }

    #[test]
    fn test_kelly_bet_zero_on_nonpositive_edge() {
        let engine = BettingEngine::new(1000.0).unwrap();

        // Break-even: p = 1/d exactly
        let stake = engine.kelly_bet(0.5, 2.0).unwrap();
        assert_eq!(stake, 0.0);

        // Clearly unfavorable
        let stake = engine.kelly_bet(0.3, 2.0).unwrap();
        assert_eq!(stake, 0.0);
    }

    #[test]
    fn test_kelly_bet_cap_applied() {
        let engine = BettingEngine::new(1000.0).unwrap();

        // Full Kelly here is (3.0 * 0.9 - 1) / 2 = 0.85 of bankroll
        let stake = engine.kelly_bet(0.9, 3.0).unwrap();
        assert!((stake - 250.0).abs() < 1e-9); // capped at 0.25

        let loose = BettingEngine::with_kelly_cap(1000.0, 1.0).unwrap();
        let stake = loose.kelly_bet(0.9, 3.0).unwrap();
        assert!((stake - 850.0).abs() < 1e-9);
    }

    #[test]
    fn test_kelly_bet_invalid_odds_every_probability() {
        let engine = BettingEngine::new(1000.0).unwrap();

        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(
                engine.kelly_bet(p, 1.0),
                Err(EngineError::InvalidOdds(1.0))
            );
        }
    }

    #[test]
    fn test_kelly_bet_invalid_probability() {
        let engine = BettingEngine::new(1000.0).unwrap();
        assert!(engine.kelly_bet(1.5, 1.91).is_err());
        assert!(engine.kelly_bet(-0.1, 1.91).is_err());
    }

    #[test]
    fn test_fixed_unit_bet() {
        let engine = BettingEngine::new(1000.0).unwrap();
        let stake = engine.fixed_unit_bet(0.02).unwrap();
        assert!((stake - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_unit_bet_linear() {
        let engine = BettingEngine::new(1000.0).unwrap();
        let one = engine.fixed_unit_bet(0.02).unwrap();
        let two = engine.fixed_unit_bet(0.04).unwrap();
        assert!((two - 2.0 * one).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_unit_bet_out_of_range() {
        let engine = BettingEngine::new(1000.0).unwrap();
        assert!(engine.fixed_unit_bet(0.0).is_err());
        assert!(engine.fixed_unit_bet(1.01).is_err());
        assert!(engine.fixed_unit_bet(-0.02).is_err());
    }

    #[test]
    fn test_target_profit_bet_round_trip() {
        let engine = BettingEngine::new(1000.0).unwrap();

        for d in [1.5, 1.91, 2.5, 4.0] {
            let stake = engine.target_profit_bet(50.0, d).unwrap();
            // Staking the recommendation at odds d wins exactly the target
            assert!((stake * (d - 1.0) - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_target_profit_bet_invalid() {
        let engine = BettingEngine::new(1000.0).unwrap();
        assert_eq!(
            engine.target_profit_bet(50.0, 1.0),
            Err(EngineError::InvalidOdds(1.0))
        );
        assert!(engine.target_profit_bet(0.0, 1.91).is_err());
        assert!(engine.target_profit_bet(-10.0, 1.91).is_err());
    }

    #[test]
    fn test_edge_helper() {
        // -110 both ways at p = 0.55
        let e = edge(0.55, 1.91);
        assert!((e - 0.0505).abs() < 1e-9);

        // Fair coin at even odds has zero edge
        assert!(edge(0.5, 2.0).abs() < 1e-9);

        // Unfavorable
        assert!(edge(0.4, 2.0) < 0.0);
    }

    #[test]
    fn test_engine_rejects_bad_bankroll() {
        assert!(BettingEngine::new(0.0).is_err());
        assert!(BettingEngine::new(-100.0).is_err());
    }

    #[test]
    fn test_engine_rejects_bad_cap() {
        assert!(BettingEngine::with_kelly_cap(1000.0, 0.0).is_err());
        assert!(BettingEngine::with_kelly_cap(1000.0, 1.5).is_err());
    }

    #[test]
    fn test_suggestions_bundle() {
        let engine = BettingEngine::new(1000.0).unwrap();
        let s = engine.suggestions(0.55, 1.91, 0.02, 50.0).unwrap();

        assert!((s.kelly - 55.494505).abs() < 0.001);
        assert!((s.fixed - 20.0).abs() < 1e-9);
        assert!((s.target - 54.945054).abs() < 0.001);
    }
}
