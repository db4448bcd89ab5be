use serde::{Deserialize, Serialize};

/// Historical player-prop record supplied by the data layer.
///
/// One row per graded game: the sportsbook line, the model's projection and
/// the realized stat. Immutable once loaded; the backtest consumes it
/// read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropRecord {
    pub player: String,
    pub sportsbook_line: f64,
    pub projected_points: f64,
    pub actual_points: f64,
}

/// A live bet candidate: a model win probability against offered odds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveBet {
    pub id: String,
    pub win_probability: f64,
    pub decimal_odds: f64,
}

/// Bankroll-management strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Kelly,
    Fixed,
    Target,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Kelly => "kelly",
            Strategy::Fixed => "fixed",
            Strategy::Target => "target",
        }
    }
}

/// A single strategy's recommended wager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeRecommendation {
    pub strategy: Strategy,
    pub amount: f64,
}

/// All three strategy amounts for one bet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeSuggestions {
    pub kelly: f64,
    pub fixed: f64,
    pub target: f64,
}

impl StakeSuggestions {
    pub fn as_recommendations(&self) -> [StakeRecommendation; 3] {
        [
            StakeRecommendation {
                strategy: Strategy::Kelly,
                amount: self.kelly,
            },
            StakeRecommendation {
                strategy: Strategy::Fixed,
                amount: self.fixed,
            },
            StakeRecommendation {
                strategy: Strategy::Target,
                amount: self.target,
            },
        ]
    }
}

/// Live advice for one bet: probability and edge as percentages plus the
/// per-strategy stake amounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetAdvice {
    pub win_probability_pct: f64,
    pub edge_pct: f64,
    pub suggestions: StakeSuggestions,
}

/// Direction of a graded prop bet relative to the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetDirection {
    Over,
    Under,
}

impl BetDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BetDirection::Over => "over",
            BetDirection::Under => "under",
        }
    }
}
