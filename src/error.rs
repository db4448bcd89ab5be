use thiserror::Error;

/// Engine error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Decimal odds at or below 1.0 (no payout, division by zero at exactly 1.0)
    #[error("Invalid odds: decimal odds must be greater than 1.0, got {0}")]
    InvalidOdds(f64),
    /// Out-of-range probability, bankroll, unit percent or target
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Informational: the input sequence contained no records.
    /// A backtest over zero records is well-defined (zero aggregate) and
    /// never raises this; it exists so callers can warn about empty feeds.
    #[error("Empty input: no prediction records supplied")]
    EmptyInput,
}

/// Validation functions

pub fn validate_probability(prob: f64) -> Result<(), EngineError> {
    if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
        return Err(EngineError::InvalidParameter(format!(
            "win probability must be between 0 and 1, got {}",
            prob
        )));
    }
    Ok(())
}

pub fn validate_decimal_odds(odds: f64) -> Result<(), EngineError> {
    if !odds.is_finite() || odds <= 1.0 {
        return Err(EngineError::InvalidOdds(odds));
    }
    Ok(())
}

pub fn validate_bankroll(bankroll: f64) -> Result<(), EngineError> {
    if !bankroll.is_finite() || bankroll <= 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "bankroll must be positive, got {}",
            bankroll
        )));
    }
    Ok(())
}

pub fn validate_unit_percent(unit_percent: f64) -> Result<(), EngineError> {
    if !unit_percent.is_finite() || unit_percent <= 0.0 || unit_percent > 1.0 {
        return Err(EngineError::InvalidParameter(format!(
            "unit percent must be in (0, 1], got {}",
            unit_percent
        )));
    }
    Ok(())
}

pub fn validate_target_profit(target: f64) -> Result<(), EngineError> {
    if !target.is_finite() || target <= 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "target profit must be positive, got {}",
            target
        )));
    }
    Ok(())
}
