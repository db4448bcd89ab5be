//! Backtest Runner
//!
//! Replays historical prop predictions against realized outcomes to measure
//! the profitability of an edge-threshold betting strategy.

use super::metrics::{calculate_risk_metrics, RiskMetrics};
use crate::models::{BetDirection, PropRecord};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Backtest runner configuration.
///
/// Threshold and payout are policy, injected at construction rather than
/// hardcoded in the grading loop.
#[derive(Debug, Clone)]
pub struct BacktestConfig {
    /// Minimum absolute projection-vs-line difference required to bet
    pub edge_threshold: f64,
    /// Units won per unit staked on a winning bet (0.91 ≈ standard -110)
    pub payout_rate: f64,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            edge_threshold: 2.0,
            payout_rate: 0.91,
        }
    }
}

/// Runner lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Accumulating,
    Finalized,
}

/// One graded bet from a backtest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetRecord {
    pub player: String,
    pub line: f64,
    pub projection: f64,
    pub actual: f64,
    pub edge: f64,
    pub direction: BetDirection,
    pub won: bool,
    pub profit_units: f64,
}

/// Aggregate results of a finalized run.
///
/// `wins + losses == total_bets` always; the percentage fields are 0 for a
/// run that placed no bets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestSummary {
    pub total_bets: usize,
    pub wins: usize,
    pub losses: usize,
    pub units_profit: f64,
    pub win_rate_pct: f64,
    pub roi_pct: f64,
}

/// Full backtest output: the aggregate, every graded bet, input accounting
/// and risk metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    pub summary: BacktestSummary,
    pub bets: Vec<BetRecord>,
    pub records_seen: usize,
    pub skipped_below_threshold: usize,
    pub malformed_records: usize,
    pub risk: RiskMetrics,
}

/// Backtest runner: folds prediction records into an aggregate.
///
/// Lifecycle is `Idle -> Accumulating -> Finalized`. `finalize` consumes the
/// runner, so a finalized run can never accumulate again; a fresh run takes
/// a fresh runner. The accumulator is local mutable state, updated
/// sequentially in input order.
#[derive(Debug)]
pub struct BacktestRunner {
    config: BacktestConfig,
    state: RunState,
    records_seen: usize,
    skipped_below_threshold: usize,
    malformed_records: usize,
    wins: usize,
    losses: usize,
    units_profit: f64,
    bets: Vec<BetRecord>,
}

impl BacktestRunner {
    pub fn new(config: BacktestConfig) -> Self {
        Self {
            config,
            state: RunState::Idle,
            records_seen: 0,
            skipped_below_threshold: 0,
            malformed_records: 0,
            wins: 0,
            losses: 0,
            units_profit: 0.0,
            bets: Vec::new(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &BacktestConfig {
        &self.config
    }

    /// Fold one record into the aggregate.
    ///
    /// A record with any non-finite field is counted as malformed and
    /// skipped; one bad row never aborts the run. Records whose projection
    /// differs from the line by less than the threshold are skipped without
    /// touching the bet counters.
    ///
    /// Grading policy: the projected side wins only on a strict beat of the
    /// line. A push (actual exactly on the line) grades as a loss.
    pub fn record(&mut self, rec: &PropRecord) {
        if self.state == RunState::Idle {
            self.state = RunState::Accumulating;
        }
        self.records_seen += 1;

        if !rec.sportsbook_line.is_finite()
            || !rec.projected_points.is_finite()
            || !rec.actual_points.is_finite()
        {
            warn!(player = %rec.player, "skipping malformed record");
            self.malformed_records += 1;
            return;
        }

        let edge = rec.projected_points - rec.sportsbook_line;
        if edge.abs() < self.config.edge_threshold {
            self.skipped_below_threshold += 1;
            return;
        }

        // edge == 0 never reaches here (a zero edge is always under threshold)
        let direction = if edge > 0.0 {
            BetDirection::Over
        } else {
            BetDirection::Under
        };

        let won = match direction {
            BetDirection::Over => rec.actual_points > rec.sportsbook_line,
            BetDirection::Under => rec.actual_points < rec.sportsbook_line,
        };

        let profit_units = if won {
            self.wins += 1;
            self.config.payout_rate
        } else {
            self.losses += 1;
            -1.0
        };
        self.units_profit += profit_units;

        self.bets.push(BetRecord {
            player: rec.player.clone(),
            line: rec.sportsbook_line,
            projection: rec.projected_points,
            actual: rec.actual_points,
            edge,
            direction,
            won,
            profit_units,
        });
    }

    /// Finalize the run, consuming the runner
    pub fn finalize(mut self) -> BacktestReport {
        self.state = RunState::Finalized;

        let total_bets = self.wins + self.losses;
        let (win_rate_pct, roi_pct) = if total_bets > 0 {
            (
                100.0 * self.wins as f64 / total_bets as f64,
                100.0 * self.units_profit / total_bets as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let risk = calculate_risk_metrics(&self.bets);

        BacktestReport {
            summary: BacktestSummary {
                total_bets,
                wins: self.wins,
                losses: self.losses,
                units_profit: self.units_profit,
                win_rate_pct,
                roi_pct,
            },
            bets: self.bets,
            records_seen: self.records_seen,
            skipped_below_threshold: self.skipped_below_threshold,
            malformed_records: self.malformed_records,
            risk,
        }
    }

    /// Fold a whole record sequence in input order and finalize
    pub fn run(mut self, records: &[PropRecord]) -> BacktestReport {
        for rec in records {
            self.record(rec);
        }
        self.finalize()
    }
}
