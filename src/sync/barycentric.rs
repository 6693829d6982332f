use crate::{
    foundation::core::Position,
    foundation::error::{TrajectoryError, TrajectoryResult},
};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Arithmetic mean of `positions`; the origin for an empty slice.
pub fn centroid(positions: &[Position]) -> Position {
    if positions.is_empty() {
        return Position::ZERO;
    }
    let sum = positions
        .iter()
        .fold(Position::ZERO, |acc, p| acc + *p);
    sum / positions.len() as f64
}

/// Weighted virtual center of `positions`.
///
/// `weights` must be finite, index-aligned with `positions`, and sum to 1.
pub fn weighted_centroid(positions: &[Position], weights: &[f64]) -> TrajectoryResult<Position> {
    if positions.len() != weights.len() {
        return Err(TrajectoryError::validation(format!(
            "{} positions but {} weights",
            positions.len(),
            weights.len()
        )));
    }
    if let Some(w) = weights.iter().find(|w| !w.is_finite()) {
        return Err(TrajectoryError::validation(format!("weight {w} is not finite")));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(TrajectoryError::validation(format!(
            "weights must sum to 1, got {sum}"
        )));
    }
    Ok(positions
        .iter()
        .zip(weights)
        .fold(Position::ZERO, |acc, (p, w)| acc + *p * *w))
}

/// Offset of every position from `center`, index-aligned with `positions`.
pub fn offsets(positions: &[Position], center: Position) -> Vec<Position> {
    positions.iter().map(|p| *p - center).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sync/barycentric.rs"]
mod tests;
