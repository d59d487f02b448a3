use serde::{Deserialize, Serialize};

use crate::common::error::DomainError;

/// A sampled position on the board
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn plus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x + coord.x,
            y: self.y + coord.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Axis aligned rectangle with inclusive edges
///
/// Tanks, the central obstacle and shot targets are all described this way.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Bounds {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Whether the point lies within both the horizontal and vertical ranges
    pub fn contains(&self, point: &Vector2) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.bottom..=self.top).contains(&point.y)
    }

    /// Geometric center, which is where a tank fires from
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.left + self.right, self.bottom + self.top).scale(0.5)
    }

    /// Rejects inverted or non-finite edges. `name` identifies the box in the error.
    pub fn validate(&self, name: &str) -> Result<(), DomainError> {
        let finite = [self.left, self.right, self.bottom, self.top]
            .iter()
            .all(|edge| edge.is_finite());

        if finite && self.left <= self.right && self.bottom <= self.top {
            Ok(())
        } else {
            Err(DomainError::InvalidBox {
                name: name.to_string(),
                bounds: *self,
            })
        }
    }
}
