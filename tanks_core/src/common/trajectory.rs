//! Sampling a ballistic path and scanning it against boxes

use crate::utils::{Bounds, Vector2};

use super::{error::DomainError, shot::Shot};

/// Time ordered positions of a projectile, from launch until it returns to y = 0
pub type Trajectory = Vec<Vector2>;

/// Samples `sample_count` positions with launch and landing times both included.
///
/// Landing is the moment the projectile comes back to y = 0, regardless of
/// the height it was fired from.
pub fn compute_trajectory(shot: &Shot, sample_count: usize) -> Result<Trajectory, DomainError> {
    let t_final = shot.flight_time()?;

    let trajectory = match sample_count {
        0 => Vec::new(),
        1 => vec![shot.origin],
        _ => {
            let steps = (sample_count - 1) as f64;
            let mut points: Trajectory = (0..sample_count)
                .map(|i| shot.position_at(t_final * (i as f64 / steps)))
                .collect();

            // t_final is a root of y(t); drop the rounding residue so the
            // landing point sits exactly on the ground
            if let Some(landing) = points.last_mut() {
                landing.y = 0.0;
            }
            points
        }
    };

    Ok(trajectory)
}

/// Index of the first point, in time order, that lies inside `bounds`
pub fn first_index_in_box(points: &[Vector2], bounds: &Bounds) -> Option<usize> {
    points.iter().position(|point| bounds.contains(point))
}

/// Drops the first point inside `bounds` and everything after it.
/// A path that never enters the box comes back untouched.
pub fn truncate_at_first_intersection(mut points: Trajectory, bounds: &Bounds) -> Trajectory {
    if let Some(index) = first_index_in_box(&points, bounds) {
        points.truncate(index);
    }

    points
}
