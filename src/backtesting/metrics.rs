//! Backtest Metrics
//!
//! Risk metrics and per-dimension breakdowns computed over graded bets.

use super::runner::BetRecord;
use crate::models::BetDirection;
use serde::{Deserialize, Serialize};

/// Risk metrics over a run's graded bets, in units
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub gross_win_units: f64,
    pub gross_loss_units: f64,
    /// Gross wins / gross losses. `None` when the run had no losing bets.
    pub profit_factor: Option<f64>,
    /// Largest peak-to-trough drop of the cumulative profit curve
    pub max_drawdown_units: f64,
}

/// Calculate risk metrics from graded bets
pub fn calculate_risk_metrics(bets: &[BetRecord]) -> RiskMetrics {
    if bets.is_empty() {
        return RiskMetrics::default();
    }

    let gross_win_units: f64 = bets
        .iter()
        .filter(|b| b.profit_units > 0.0)
        .map(|b| b.profit_units)
        .sum();
    let gross_loss_units: f64 = bets
        .iter()
        .filter(|b| b.profit_units < 0.0)
        .map(|b| -b.profit_units)
        .sum();

    let profit_factor = if gross_loss_units > 0.0 {
        Some(gross_win_units / gross_loss_units)
    } else {
        None
    };

    // Peak-to-trough scan over the cumulative profit curve
    let mut cumulative = 0.0f64;
    let mut peak = 0.0f64;
    let mut max_drawdown_units = 0.0f64;
    for bet in bets {
        cumulative += bet.profit_units;
        if cumulative > peak {
            peak = cumulative;
        }
        let drawdown = peak - cumulative;
        if drawdown > max_drawdown_units {
            max_drawdown_units = drawdown;
        }
    }

    RiskMetrics {
        gross_win_units,
        gross_loss_units,
        profit_factor,
        max_drawdown_units,
    }
}

/// Per-direction slice of a run's bets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionBreakdown {
    pub direction: BetDirection,
    pub bets: usize,
    pub wins: usize,
    pub hit_rate_pct: f64,
    pub net_units: f64,
}

/// Break a run's bets down by over/under direction.
///
/// Directions with no bets are omitted.
pub fn analyze_by_direction(bets: &[BetRecord]) -> Vec<DirectionBreakdown> {
    [BetDirection::Over, BetDirection::Under]
        .iter()
        .filter_map(|&direction| {
            let group: Vec<&BetRecord> = bets.iter().filter(|b| b.direction == direction).collect();
            if group.is_empty() {
                return None;
            }

            let wins = group.iter().filter(|b| b.won).count();
            let net_units: f64 = group.iter().map(|b| b.profit_units).sum();

            Some(DirectionBreakdown {
                direction,
                bets: group.len(),
                wins,
                hit_rate_pct: 100.0 * wins as f64 / group.len() as f64,
                net_units,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bet(direction: BetDirection, won: bool, profit_units: f64) -> BetRecord {
        let (projection, edge) = match direction {
            BetDirection::Over => (28.0, 3.0),
            BetDirection::Under => (22.0, -3.0),
        };
        BetRecord {
            player: "Player".to_string(),
            line: 25.0,
            projection,
            actual: 26.0,
            edge,
            direction,
            won,
            profit_units,
        }
    }

    #[test]
    fn test_risk_metrics_empty() {
        let metrics = calculate_risk_metrics(&[]);
        assert_eq!(metrics.gross_win_units, 0.0);
        assert_eq!(metrics.gross_loss_units, 0.0);
        assert!(metrics.profit_factor.is_none());
        assert_eq!(metrics.max_drawdown_units, 0.0);
    }

    #[test]
    fn test_risk_metrics_mixed_run() {
        let bets = vec![
            bet(BetDirection::Over, true, 0.91),
            bet(BetDirection::Over, false, -1.0),
            bet(BetDirection::Under, true, 0.91),
            bet(BetDirection::Under, false, -1.0),
        ];
        let metrics = calculate_risk_metrics(&bets);

        assert!((metrics.gross_win_units - 1.82).abs() < 1e-9);
        assert!((metrics.gross_loss_units - 2.0).abs() < 1e-9);
        assert!((metrics.profit_factor.unwrap() - 0.91).abs() < 1e-9);
    }

    #[test]
    fn test_risk_metrics_no_losses() {
        let bets = vec![
            bet(BetDirection::Over, true, 0.91),
            bet(BetDirection::Under, true, 0.91),
        ];
        let metrics = calculate_risk_metrics(&bets);

        assert!(metrics.profit_factor.is_none());
        assert_eq!(metrics.max_drawdown_units, 0.0);
    }

    #[test]
    fn test_max_drawdown() {
        // Cumulative: 0.91, -0.09, -1.09 -> peak 0.91, trough -1.09
        let bets = vec![
            bet(BetDirection::Over, true, 0.91),
            bet(BetDirection::Over, false, -1.0),
            bet(BetDirection::Over, false, -1.0),
        ];
        let metrics = calculate_risk_metrics(&bets);

        assert!((metrics.max_drawdown_units - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_by_direction() {
        let bets = vec![
            bet(BetDirection::Over, true, 0.91),
            bet(BetDirection::Over, false, -1.0),
            bet(BetDirection::Under, true, 0.91),
        ];
        let breakdown = analyze_by_direction(&bets);

        assert_eq!(breakdown.len(), 2);

        let over = &breakdown[0];
        assert_eq!(over.direction, BetDirection::Over);
        assert_eq!(over.bets, 2);
        assert_eq!(over.wins, 1);
        assert!((over.hit_rate_pct - 50.0).abs() < 1e-9);
        assert!((over.net_units + 0.09).abs() < 1e-9);

        let under = &breakdown[1];
        assert_eq!(under.direction, BetDirection::Under);
        assert_eq!(under.bets, 1);
    }

    #[test]
    fn test_analyze_by_direction_omits_empty() {
        let bets = vec![bet(BetDirection::Over, true, 0.91)];
        let breakdown = analyze_by_direction(&bets);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].direction, BetDirection::Over);
    }
}
