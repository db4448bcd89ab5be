//! PickLabs - Sports betting decision and simulation engine
//!
//! This library provides:
//! - Stake sizing under three bankroll-management strategies
//!   (Kelly criterion, fixed fraction, target profit)
//! - Edge derivation from win probability and decimal odds
//! - A backtest runner that replays historical prop predictions against
//!   realized outcomes and reports win rate, profit and ROI
//! - A live slate advisor and a CSV loader for historical records
//!
//! # Example
//!
//! ```
//! use picklabs::core::sizing::BettingEngine;
//! use picklabs::backtesting::{BacktestConfig, BacktestRunner};
//!
//! // Size a single bet against a 1,000-unit bankroll
//! let engine = BettingEngine::new(1000.0).unwrap();
//! let stake = engine.kelly_bet(0.55, 1.91).unwrap();
//! assert!(stake > 0.0);
//!
//! // Replay a historical slate
//! let runner = BacktestRunner::new(BacktestConfig::default());
//! let report = runner.run(&[]);
//! assert_eq!(report.summary.total_bets, 0);
//! ```

pub mod advisor;
pub mod backtesting;
pub mod core;
pub mod data;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use advisor::{Advisor, AdvisorConfig};
pub use backtesting::{BacktestConfig, BacktestReport, BacktestRunner, BacktestSummary, BetRecord};
pub use self::core::sizing::{edge, kelly_fraction, BettingEngine};
pub use data::load_prop_records;
pub use error::EngineError;
pub use models::{
    BetAdvice, BetDirection, LiveBet, PropRecord, StakeRecommendation, StakeSuggestions, Strategy,
};
