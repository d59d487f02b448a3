use crate::utils::Bounds;

use super::{
    constants::{OBSTACLE_BOX, TANK1_BOX, TANK2_BOX},
    error::DomainError,
    player::PlayerNum,
};

/// Where the two tanks and the wall between them sit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub tank1: Bounds,
    pub tank2: Bounds,
    pub obstacle: Bounds,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            tank1: TANK1_BOX,
            tank2: TANK2_BOX,
            obstacle: OBSTACLE_BOX,
        }
    }
}

impl Board {
    /// The tank belonging to `player`
    pub fn tank(&self, player: PlayerNum) -> &Bounds {
        match player {
            PlayerNum::One => &self.tank1,
            PlayerNum::Two => &self.tank2,
        }
    }

    /// The tank `player` is shooting at
    pub fn target_of(&self, player: PlayerNum) -> &Bounds {
        self.tank(player.other())
    }

    /// Boxes must be well formed and both tanks must fire from above y = 0,
    /// otherwise some aims would never come back down to the ground.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, tank) in [("tank1", &self.tank1), ("tank2", &self.tank2)] {
            tank.validate(name)?;

            let height = tank.center().y;
            if height <= 0.0 {
                return Err(DomainError::LaunchBelowGround {
                    name: name.to_string(),
                    height,
                });
            }
        }

        self.obstacle.validate("obstacle")
    }
}
