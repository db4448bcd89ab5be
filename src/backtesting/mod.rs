//! Backtesting engine for validating betting strategies

pub mod metrics;
pub mod runner;

pub use metrics::{analyze_by_direction, calculate_risk_metrics, DirectionBreakdown, RiskMetrics};
pub use runner::{
    BacktestConfig, BacktestReport, BacktestRunner, BacktestSummary, BetRecord, RunState,
};
