//! Text plot of the board for terminals

use std::io::Write;

use tanks_core::{
    common::constants::{BOARD_X_RANGE, BOARD_Y_RANGE},
    utils::{Bounds, Vector2},
    ColorTag, LineStyle, Renderer,
};
use tanks_events::{CommandRecorder, RenderCommand};

pub const PLOT_COLUMNS: usize = 80;
pub const PLOT_ROWS: usize = 30;

const EMPTY: char = ' ';

fn fill_glyph(color: ColorTag) -> char {
    match color {
        ColorTag::Blue => 'B',
        ColorTag::Red => 'R',
        ColorTag::Black => '#',
    }
}

fn line_glyph(color: ColorTag) -> char {
    match color {
        ColorTag::Blue => 'o',
        ColorTag::Red => 'x',
        ColorTag::Black => '*',
    }
}

/// Character grid covering the current view, row 0 at the top
struct Canvas {
    cells: Vec<Vec<char>>,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Canvas {
    fn new(columns: usize, rows: usize, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            cells: vec![vec![EMPTY; columns]; rows],
            x_range,
            y_range,
        }
    }

    fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    fn rows(&self) -> usize {
        self.cells.len()
    }

    fn column(&self, x: f64) -> isize {
        let (low, high) = self.x_range;
        ((x - low) / (high - low) * (self.columns() as f64 - 1.0)).round() as isize
    }

    fn row(&self, y: f64) -> isize {
        let (low, high) = self.y_range;
        let from_bottom = ((y - low) / (high - low) * (self.rows() as f64 - 1.0)).round() as isize;
        (self.rows() as isize - 1).saturating_sub(from_bottom)
    }

    fn put(&mut self, column: isize, row: isize, glyph: char) {
        if column < 0 || row < 0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|cells| cells.get_mut(column as usize))
        {
            *cell = glyph;
        }
    }

    /// Fills the part of `bounds` that falls on the grid
    fn fill(&mut self, bounds: &Bounds, glyph: char) {
        let last_row = self.rows() as isize - 1;
        let last_column = self.columns() as isize - 1;
        let rows = self.row(bounds.top).max(0)..=self.row(bounds.bottom).min(last_row);
        let columns = self.column(bounds.left).max(0)..=self.column(bounds.right).min(last_column);

        for row in rows {
            for column in columns.clone() {
                self.put(column, row, glyph);
            }
        }
    }

    fn plot(&mut self, points: &[Vector2], glyph: char) {
        for point in points {
            self.put(self.column(point.x), self.row(point.y), glyph);
        }
    }
}

/// Draws everything since the last `ClearBoard` as a bordered text grid
pub fn rasterize(commands: &[RenderCommand], columns: usize, rows: usize) -> Vec<String> {
    let (x_range, y_range) = commands
        .iter()
        .rev()
        .find_map(|command| match command {
            RenderCommand::SetViewBounds { x_range, y_range } => Some((*x_range, *y_range)),
            _ => None,
        })
        .unwrap_or((BOARD_X_RANGE, BOARD_Y_RANGE));

    let mut canvas = Canvas::new(columns, rows, x_range, y_range);
    let mut title = String::new();

    for command in commands {
        match command {
            RenderCommand::ClearBoard => {
                canvas = Canvas::new(columns, rows, x_range, y_range);
                title.clear();
            }
            RenderCommand::DrawBox { bounds, color } => canvas.fill(bounds, fill_glyph(*color)),
            RenderCommand::DrawLine { points, style } => {
                canvas.plot(points, line_glyph(style.color))
            }
            RenderCommand::SetTitle(text) => title = text.clone(),
            RenderCommand::SetViewBounds { .. } | RenderCommand::Refresh => {}
        }
    }

    let border = format!("+{}+", "-".repeat(columns));
    let mut lines = Vec::with_capacity(rows + 3);
    lines.push(format!("{:^width$}", title, width = columns + 2));
    lines.push(border.clone());
    lines.extend(
        canvas
            .cells
            .iter()
            .map(|cells| format!("|{}|", cells.iter().collect::<String>())),
    );
    lines.push(border);
    lines
}

/// Renderer that prints the board to a terminal each time it is refreshed
pub struct TerminalPlot<W> {
    out: W,
    scene: CommandRecorder,
    columns: usize,
    rows: usize,
}

impl<W: Write> TerminalPlot<W> {
    pub fn new(out: W) -> Self {
        Self::with_size(out, PLOT_COLUMNS, PLOT_ROWS)
    }

    pub fn with_size(out: W, columns: usize, rows: usize) -> Self {
        Self {
            out,
            scene: CommandRecorder::new(),
            columns,
            rows,
        }
    }
}

impl<W: Write> Renderer for TerminalPlot<W> {
    fn clear_board(&mut self) {
        self.scene.clear();
        self.scene.clear_board();
    }

    fn draw_box(&mut self, bounds: &Bounds, color: ColorTag) {
        self.scene.draw_box(bounds, color);
    }

    fn draw_line(&mut self, points: &[Vector2], style: LineStyle) {
        self.scene.draw_line(points, style);
    }

    fn set_title(&mut self, text: &str) {
        self.scene.set_title(text);
    }

    fn set_view_bounds(&mut self, x_range: (f64, f64), y_range: (f64, f64)) {
        self.scene.set_view_bounds(x_range, y_range);
    }

    fn refresh(&mut self) {
        let mut frame = rasterize(&self.scene.commands, self.columns, self.rows).join("\n");
        frame.push('\n');

        if let Err(err) = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
        {
            tracing::warn!(%err, "failed to draw the board");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanks_core::common::constants::{OBSTACLE_BOX, SHOT_STYLE, TANK1_BOX, TANK2_BOX};

    fn board(renderer: &mut impl Renderer) {
        renderer.clear_board();
        renderer.draw_box(&TANK1_BOX, ColorTag::Blue);
        renderer.draw_box(&TANK2_BOX, ColorTag::Red);
        renderer.draw_box(&OBSTACLE_BOX, ColorTag::Black);
        renderer.set_title("Player 1 turn");
        renderer.set_view_bounds((0.0, 100.0), (0.0, 100.0));
    }

    #[test]
    fn board_layout_on_a_small_grid() {
        let mut scene = CommandRecorder::new();
        board(&mut scene);

        let lines = rasterize(&scene.commands, 11, 11);

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0].trim(), "Player 1 turn");
        assert_eq!(lines[1], "+-----------+");
        // top half of the obstacle, above the tanks
        assert_eq!(lines[7], "|    ###    |");
        // bottom two rows: both tanks and the obstacle base
        assert_eq!(lines[11], "| BB ###  RR|");
        assert_eq!(lines[12], "| BB ###  RR|");
        assert_eq!(lines[13], "+-----------+");
    }

    #[test]
    fn shot_line_is_plotted_over_the_board() {
        let mut scene = CommandRecorder::new();
        board(&mut scene);
        scene.draw_line(
            &[Vector2::new(0.0, 100.0), Vector2::new(100.0, 100.0)],
            SHOT_STYLE,
        );

        let lines = rasterize(&scene.commands, 11, 11);
        assert_eq!(lines[2], "|*         *|");
    }

    #[test]
    fn clearing_starts_a_fresh_picture() {
        let mut scene = CommandRecorder::new();
        board(&mut scene);
        scene.clear_board();

        let lines = rasterize(&scene.commands, 5, 3);
        assert!(lines[0].trim().is_empty());
        assert!(lines[2..5].iter().all(|line| line == "|     |"));
    }

    #[test]
    fn points_off_the_view_are_skipped() {
        let mut scene = CommandRecorder::new();
        scene.draw_line(
            &[Vector2::new(-50.0, 50.0), Vector2::new(150.0, -20.0)],
            SHOT_STYLE,
        );

        let lines = rasterize(&scene.commands, 5, 3);
        assert!(lines[2..5].iter().all(|line| line == "|     |"));
    }

    #[test]
    fn enormous_box_is_clipped_to_the_grid() {
        let mut scene = CommandRecorder::new();
        scene.set_view_bounds((0.0, 100.0), (0.0, 100.0));
        scene.draw_box(&Bounds::new(-1e300, 1e300, -1e300, 5.0), ColorTag::Black);
        scene.draw_line(
            &[Vector2::new(0.0, -1e300), Vector2::new(1e300, 1e300)],
            SHOT_STYLE,
        );

        let lines = rasterize(&scene.commands, 5, 3);
        assert_eq!(lines[2], "|     |");
        assert_eq!(lines[3], "|     |");
        assert_eq!(lines[4], "|#####|");
    }

    #[test]
    fn each_refresh_prints_a_frame() {
        let mut out = Vec::new();
        let mut plot = TerminalPlot::with_size(&mut out, 11, 11);
        board(&mut plot);
        plot.refresh();
        plot.draw_line(&[Vector2::new(50.0, 100.0)], SHOT_STYLE);
        plot.refresh();
        drop(plot);

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("Player 1 turn").count(), 2);
        assert_eq!(printed.matches('*').count(), 1);
    }
}
