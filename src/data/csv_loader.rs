//! CSV loading for historical prop records
//!
//! The defensive parsing for the ingestion boundary lives here; the grading
//! core only ever sees well-typed records.

use polars::prelude::*;
use std::path::Path;
use tracing::warn;

use crate::models::PropRecord;

/// Load historical prop records from a CSV with columns
/// `player, sportsbook_line, actual_points, projected_points`.
///
/// Integer-typed numeric columns are cast to f64 (lines are halves, actuals
/// are often whole numbers). Rows with missing fields are dropped with a
/// warning rather than failing the load.
pub fn load_prop_records<P: AsRef<Path>>(csv_path: P) -> Result<Vec<PropRecord>, PolarsError> {
    let df = CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(csv_path.as_ref().to_path_buf()))?
        .finish()?;

    let player_col = df.column("player")?.str()?;
    let line_series = df.column("sportsbook_line")?.cast(&DataType::Float64)?;
    let line_col = line_series.f64()?;
    let actual_series = df.column("actual_points")?.cast(&DataType::Float64)?;
    let actual_col = actual_series.f64()?;
    let projection_series = df.column("projected_points")?.cast(&DataType::Float64)?;
    let projection_col = projection_series.f64()?;

    let mut records = Vec::with_capacity(df.height());
    let mut dropped = 0usize;

    for i in 0..df.height() {
        if let (Some(player), Some(line), Some(actual), Some(projection)) = (
            player_col.get(i),
            line_col.get(i),
            actual_col.get(i),
            projection_col.get(i),
        ) {
            records.push(PropRecord {
                player: player.to_string(),
                sportsbook_line: line,
                projected_points: projection,
                actual_points: actual,
            });
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        warn!(dropped, "dropped rows with missing fields");
    }

    Ok(records)
}
