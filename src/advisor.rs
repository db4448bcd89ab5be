//! Live Slate Advisor
//!
//! Turns a slate of live bet candidates into per-bet stake advice: win
//! probability, edge and the three strategy amounts, keyed by bet id.

use std::collections::HashMap;

use tracing::warn;

use crate::core::sizing::{edge, BettingEngine, DEFAULT_KELLY_CAP};
use crate::error::{validate_target_profit, validate_unit_percent, EngineError};
use crate::models::{BetAdvice, LiveBet};

/// Advisor configuration.
///
/// Defaults match the reference deployment: a 1,000-unit bankroll, 2% fixed
/// units and a 50-unit profit target.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub bankroll: f64,
    pub unit_percent: f64,
    pub target_profit: f64,
    pub kelly_cap: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            bankroll: 1000.0,
            unit_percent: 0.02,
            target_profit: 50.0,
            kelly_cap: DEFAULT_KELLY_CAP,
        }
    }
}

/// Stateless advisor shared by all callers of the live path
#[derive(Debug, Clone)]
pub struct Advisor {
    engine: BettingEngine,
    unit_percent: f64,
    target_profit: f64,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Result<Self, EngineError> {
        validate_unit_percent(config.unit_percent)?;
        validate_target_profit(config.target_profit)?;
        let engine = BettingEngine::with_kelly_cap(config.bankroll, config.kelly_cap)?;

        Ok(Self {
            engine,
            unit_percent: config.unit_percent,
            target_profit: config.target_profit,
        })
    }

    pub fn engine(&self) -> &BettingEngine {
        &self.engine
    }

    /// Advice for a single bet.
    ///
    /// Percentages are rounded for presentation (probability to one decimal,
    /// edge to two); stake amounts are exact.
    pub fn advise(&self, bet: &LiveBet) -> Result<BetAdvice, EngineError> {
        let suggestions = self.engine.suggestions(
            bet.win_probability,
            bet.decimal_odds,
            self.unit_percent,
            self.target_profit,
        )?;

        Ok(BetAdvice {
            win_probability_pct: round_to(bet.win_probability * 100.0, 1),
            edge_pct: round_to(edge(bet.win_probability, bet.decimal_odds) * 100.0, 2),
            suggestions,
        })
    }

    /// Advice for a whole slate, keyed by bet id.
    ///
    /// Invalid entries are dropped with a warning; one bad bet never fails
    /// the slate.
    pub fn advise_slate(&self, bets: &[LiveBet]) -> HashMap<String, BetAdvice> {
        let mut advice = HashMap::with_capacity(bets.len());

        for bet in bets {
            match self.advise(bet) {
                Ok(a) => {
                    advice.insert(bet.id.clone(), a);
                }
                Err(e) => {
                    warn!(id = %bet.id, error = %e, "skipping invalid slate entry");
                }
            }
        }

        advice
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
