//! Collaborators the game talks to but does not own
//!
//! The turn loop only ever calls into these traits, so a terminal, a plot
//! window or a scripted test double can all drive the same game.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::utils::{Bounds, Vector2};

/// Every real number, for prompts that accept anything numeric
pub const ANY_NUMBER: RangeInclusive<f64> = f64::NEG_INFINITY..=f64::INFINITY;

/// Source of numeric shot parameters
pub trait ShotInput {
    /// Block until a number within `range` (inclusive) is supplied.
    ///
    /// Implementations re-prompt on anything unparseable or out of range.
    /// `None` means the source is closed and no number will ever arrive.
    fn prompt_number(&mut self, prompt: &str, range: RangeInclusive<f64>) -> Option<f64>;
}

/// Pause between turns until the players are ready
pub trait Acknowledge {
    fn acknowledge(&mut self, prompt: &str);
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Blue,
    Red,
    Black,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: ColorTag,
    pub width: f64,
}

/// One way drawing notifications. Nothing is ever read back.
pub trait Renderer {
    fn clear_board(&mut self);
    fn draw_box(&mut self, bounds: &Bounds, color: ColorTag);
    fn draw_line(&mut self, points: &[Vector2], style: LineStyle);
    fn set_title(&mut self, text: &str);
    fn set_view_bounds(&mut self, x_range: (f64, f64), y_range: (f64, f64));
    fn refresh(&mut self);
}

/// Renderer that drops everything, for headless games
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear_board(&mut self) {}
    fn draw_box(&mut self, _: &Bounds, _: ColorTag) {}
    fn draw_line(&mut self, _: &[Vector2], _: LineStyle) {}
    fn set_title(&mut self, _: &str) {}
    fn set_view_bounds(&mut self, _: (f64, f64), _: (f64, f64)) {}
    fn refresh(&mut self) {}
}
