//! Drawing calls captured as plain data
//!
//! A renderer can either act on each call straight away or record them as
//! [`RenderCommand`]s to replay, inspect or ship somewhere else later.

use serde::{Deserialize, Serialize};

use tanks_core::{
    utils::{Bounds, Vector2},
    ColorTag, LineStyle, Renderer,
};

/// One call made on a [`Renderer`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearBoard,
    DrawBox { bounds: Bounds, color: ColorTag },
    DrawLine { points: Vec<Vector2>, style: LineStyle },
    SetTitle(String),
    SetViewBounds { x_range: (f64, f64), y_range: (f64, f64) },
    Refresh,
}

/// Renderer that keeps every call it receives, in order
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    pub commands: Vec<RenderCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command groups, each ending with the `Refresh` that displayed it.
    /// Commands after the last refresh were never shown and are left out.
    pub fn frames(&self) -> Vec<&[RenderCommand]> {
        self.commands
            .split_inclusive(|command| matches!(command, RenderCommand::Refresh))
            .filter(|frame| matches!(frame.last(), Some(RenderCommand::Refresh)))
            .collect()
    }

    /// Every shot line drawn so far
    pub fn lines(&self) -> impl Iterator<Item = &[Vector2]> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::DrawLine { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    /// Every title set so far
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::SetTitle(title) => Some(title.as_str()),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for CommandRecorder {
    fn clear_board(&mut self) {
        self.commands.push(RenderCommand::ClearBoard);
    }

    fn draw_box(&mut self, bounds: &Bounds, color: ColorTag) {
        self.commands.push(RenderCommand::DrawBox {
            bounds: *bounds,
            color,
        });
    }

    fn draw_line(&mut self, points: &[Vector2], style: LineStyle) {
        self.commands.push(RenderCommand::DrawLine {
            points: points.to_vec(),
            style,
        });
    }

    fn set_title(&mut self, text: &str) {
        self.commands.push(RenderCommand::SetTitle(text.to_string()));
    }

    fn set_view_bounds(&mut self, x_range: (f64, f64), y_range: (f64, f64)) {
        self.commands
            .push(RenderCommand::SetViewBounds { x_range, y_range });
    }

    fn refresh(&mut self) {
        self.commands.push(RenderCommand::Refresh);
    }
}
