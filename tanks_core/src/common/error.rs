use thiserror::Error;

use crate::utils::Bounds;

/// Invalid physics or board parameters.
///
/// These come from the program setting up a game, never from a player, so
/// they are not recoverable once a game is running.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("gravity must be positive, got {0}")]
    NonPositiveGravity(f64),

    #[error("box `{name}` is inverted or not finite: {bounds:?}")]
    InvalidBox { name: String, bounds: Bounds },

    #[error("tank `{name}` fires from height {height}, which is not above the ground")]
    LaunchBelowGround { name: String, height: f64 },

    #[error("{parameter} must be a finite number, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("projectile never returns to the ground (discriminant {discriminant})")]
    NoLanding { discriminant: f64 },

    #[error("invalid game configuration: {0}")]
    Config(String),
}
