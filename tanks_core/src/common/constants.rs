//! Up front configuration values

use crate::utils::Bounds;

use super::interface::{ColorTag, LineStyle};

/// Acceleration due to gravity used when nothing else is configured
pub const GRAVITY: f64 = 9.8;

/// Player 1's tank, bottom left of the board
pub const TANK1_BOX: Bounds = Bounds::new(10.0, 15.0, 0.0, 5.0);
/// Player 2's tank, bottom right of the board
pub const TANK2_BOX: Bounds = Bounds::new(90.0, 95.0, 0.0, 5.0);
/// The wall between the two tanks
pub const OBSTACLE_BOX: Bounds = Bounds::new(40.0, 60.0, 0.0, 50.0);

/// Horizontal extent of the plotted board
pub const BOARD_X_RANGE: (f64, f64) = (0.0, 100.0);
/// Vertical extent of the plotted board
pub const BOARD_Y_RANGE: (f64, f64) = (0.0, 100.0);

/// Number of samples used when deciding whether a shot hits.
/// Dense enough to stand in for continuous time on the default board.
pub const SHOT_SAMPLE_COUNT: usize = 10_000;

pub const TANK1_COLOR: ColorTag = ColorTag::Blue;
pub const TANK2_COLOR: ColorTag = ColorTag::Red;
pub const OBSTACLE_COLOR: ColorTag = ColorTag::Black;

/// Solid black line, two units wide
pub const SHOT_STYLE: LineStyle = LineStyle {
    color: ColorTag::Black,
    width: 2.0,
};
