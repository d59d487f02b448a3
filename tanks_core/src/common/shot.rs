//! A single artillery shell and the rules for whether it hits

use tracing::debug;

use crate::utils::{Bounds, Vector2};

use super::{
    constants::SHOT_SAMPLE_COUNT,
    error::DomainError,
    trajectory::{compute_trajectory, first_index_in_box, truncate_at_first_intersection, Trajectory},
};

/// Launch parameters of a shell fired from a tank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    /// Launch position, the center of the firing tank
    pub origin: Vector2,
    /// Muzzle speed
    pub velocity: f64,
    /// Elevation in degrees, counter clockwise from the +x axis
    pub angle: f64,
    /// Downward acceleration
    pub gravity: f64,
}

impl Shot {
    /// Horizontal and vertical launch speed
    pub fn components(&self) -> Vector2 {
        let theta = self.angle.to_radians();
        Vector2::new(self.velocity * theta.cos(), self.velocity * theta.sin())
    }

    /// Position `t` seconds after launch
    pub fn position_at(&self, t: f64) -> Vector2 {
        self.origin
            .plus(&self.components().scale(t))
            .plus(&Vector2::new(0.0, -0.5 * self.gravity * t * t))
    }

    /// Time until the shell is back at y = 0.
    ///
    /// Positive root of `0.5 g t^2 - vy t - y0 = 0`.
    pub fn flight_time(&self) -> Result<f64, DomainError> {
        if !(self.gravity > 0.0) {
            return Err(DomainError::NonPositiveGravity(self.gravity));
        }

        for (parameter, value) in [
            ("x0", self.origin.x),
            ("y0", self.origin.y),
            ("velocity", self.velocity),
            ("angle", self.angle),
            ("gravity", self.gravity),
        ] {
            if !value.is_finite() {
                return Err(DomainError::NonFinite { parameter, value });
            }
        }

        let rise = self.components().y / self.gravity;
        let discriminant = rise * rise + 2.0 * self.origin.y / self.gravity;
        if discriminant < 0.0 {
            return Err(DomainError::NoLanding { discriminant });
        }

        let t_final = rise + discriminant.sqrt();
        if t_final < 0.0 {
            return Err(DomainError::NoLanding { discriminant });
        }

        Ok(t_final)
    }
}

/// Result of firing at a target past an obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct ShotResolution {
    pub hit: bool,
    /// The flight path up to (not including) the first point inside the obstacle
    pub path: Trajectory,
}

/// Fires `shot` and reports whether it reaches `target` before `obstacle`.
///
/// The path is cut where it first enters the obstacle and only the remainder
/// is tested against the target, so a blocked shell never counts.
pub fn resolve_shot(
    target: &Bounds,
    obstacle: &Bounds,
    shot: &Shot,
) -> Result<ShotResolution, DomainError> {
    resolve_shot_with_samples(target, obstacle, shot, SHOT_SAMPLE_COUNT)
}

pub fn resolve_shot_with_samples(
    target: &Bounds,
    obstacle: &Bounds,
    shot: &Shot,
    sample_count: usize,
) -> Result<ShotResolution, DomainError> {
    let full = compute_trajectory(shot, sample_count)?;
    let path = truncate_at_first_intersection(full, obstacle);
    let hit = first_index_in_box(&path, target).is_some();

    debug!(
        velocity = shot.velocity,
        angle = shot.angle,
        samples = sample_count,
        kept = path.len(),
        hit,
        "shot resolved"
    );

    Ok(ShotResolution { hit, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::{GRAVITY, OBSTACLE_BOX, TANK1_BOX, TANK2_BOX};

    fn from_tank(tank: &Bounds, velocity: f64, angle: f64) -> Shot {
        Shot {
            origin: tank.center(),
            velocity,
            angle,
            gravity: GRAVITY,
        }
    }

    #[test]
    fn flat_shot_is_stopped_by_the_obstacle() {
        let shot = from_tank(&TANK1_BOX, 40.0, 45.0);
        let resolution = resolve_shot(&TANK2_BOX, &OBSTACLE_BOX, &shot).unwrap();

        assert!(!resolution.hit);
        // the kept path ends just short of the wall face
        let last = resolution.path.last().unwrap();
        assert!(last.x < OBSTACLE_BOX.left);
        assert!((last.x - OBSTACLE_BOX.left).abs() < 0.05);
    }

    #[test]
    fn without_the_obstacle_the_same_flat_shot_overshoots() {
        let shot = from_tank(&TANK1_BOX, 40.0, 45.0);
        let nowhere = Bounds::new(-10.0, -5.0, -10.0, -5.0);
        let resolution = resolve_shot(&TANK2_BOX, &nowhere, &shot).unwrap();

        assert!(!resolution.hit);
        assert!(resolution.path.last().unwrap().x > TANK2_BOX.right);
    }

    #[test]
    fn lob_over_the_obstacle_hits() {
        let shot = from_tank(&TANK1_BOX, 39.6, 75.0);
        let resolution = resolve_shot(&TANK2_BOX, &OBSTACLE_BOX, &shot).unwrap();

        assert!(resolution.hit);
        // the obstacle never cut the path short
        assert_eq!(resolution.path.len(), SHOT_SAMPLE_COUNT);

        let entry = first_index_in_box(&resolution.path, &TANK2_BOX).unwrap();
        assert!(TANK2_BOX.contains(&resolution.path[entry]));
    }

    #[test]
    fn player_two_mirrors_player_one() {
        let shot = from_tank(&TANK2_BOX, 39.6, 105.0);
        let resolution = resolve_shot(&TANK1_BOX, &OBSTACLE_BOX, &shot).unwrap();

        assert!(resolution.hit);
    }

    #[test]
    fn over_the_wall_but_long() {
        let shot = from_tank(&TANK1_BOX, 45.0, 75.0);
        let resolution = resolve_shot(&TANK2_BOX, &OBSTACLE_BOX, &shot).unwrap();

        assert!(!resolution.hit);
        assert_eq!(resolution.path.len(), SHOT_SAMPLE_COUNT);
    }

    #[test]
    fn short_shot_lands_before_the_wall() {
        let shot = from_tank(&TANK1_BOX, 10.0, 45.0);
        let resolution = resolve_shot(&TANK2_BOX, &OBSTACLE_BOX, &shot).unwrap();

        assert!(!resolution.hit);
        assert!(resolution.path.last().unwrap().x < OBSTACLE_BOX.left);
    }

    #[test]
    fn dropped_shell_misses_and_does_not_error() {
        for angle in [0.0, 45.0, 90.0, -90.0] {
            let shot = from_tank(&TANK1_BOX, 0.0, angle);
            let resolution = resolve_shot(&TANK2_BOX, &OBSTACLE_BOX, &shot).unwrap();
            assert!(!resolution.hit);
        }
    }

    #[test]
    fn flight_time_from_height_with_no_speed() {
        let shot = Shot {
            origin: Vector2::new(0.0, 19.6),
            velocity: 0.0,
            angle: 0.0,
            gravity: GRAVITY,
        };
        assert!((shot.flight_time().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn underground_origin_fired_downwards_never_lands() {
        let shot = Shot {
            origin: Vector2::new(0.0, -5.0),
            velocity: 1.0,
            angle: -90.0,
            gravity: GRAVITY,
        };
        assert!(matches!(shot.flight_time(), Err(DomainError::NoLanding { .. })));
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        let shot = from_tank(&TANK1_BOX, f64::INFINITY, 45.0);
        assert!(matches!(
            resolve_shot(&TANK2_BOX, &OBSTACLE_BOX, &shot),
            Err(DomainError::NonFinite { parameter: "velocity", .. })
        ));
    }
}
