//! Text-mode plots for the terminal
//!
//! A [`Canvas`] is a grid of characters addressed by column and row, row 0 at
//! the top. [`graph`] draws function graphs over [-2π, 2π] and
//! [`unit_circle`] draws the circle with the standard angles marked.

pub mod graph;

pub use graph::{render_graph, Graph};

use crate::constants::TAU;
use crate::content::KEY_ANGLES;

/// Character grid that plots are drawn on
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    /// Creates a blank canvas
    ///
    /// # Arguments
    ///
    /// * `width` - Number of columns
    /// * `height` - Number of rows, row 0 at the top
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sets a cell, ignoring coordinates outside the grid
    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = ch;
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Writes `text` starting at `col`, clipped at the right edge
    pub fn write_str(&mut self, col: usize, row: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.set(col + i, row, ch);
        }
    }

    /// Rows joined by newlines with trailing blanks removed
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Linear map of `value` in `[lo, hi]` onto cell index `0..=(cells - 1)`
pub(crate) fn scale(value: f64, lo: f64, hi: f64, cells: usize) -> Option<usize> {
    if cells == 0 || !(lo..=hi).contains(&value) {
        return None;
    }
    let t = (value - lo) / (hi - lo);
    Some((t * (cells - 1) as f64).round() as usize)
}

/// Draws the unit circle with the sixteen key angles marked `o`
///
/// Terminal cells are about twice as tall as they are wide, so the circle
/// uses twice as many columns as rows.
pub fn unit_circle(height: usize) -> String {
    let height = height.max(11) | 1; // odd so the x-axis has its own row
    let width = 2 * height + 1;
    let mut canvas = Canvas::new(width, height);

    let extent = 1.25;
    let to_cell = |x: f64, y: f64| {
        let col = scale(x, -extent, extent, width)?;
        let row = scale(-y, -extent, extent, height)?;
        Some((col, row))
    };

    if let Some((axis_col, axis_row)) = to_cell(0.0, 0.0) {
        for col in 0..width {
            canvas.set(col, axis_row, '-');
        }
        for row in 0..height {
            canvas.set(axis_col, row, '|');
        }
        canvas.set(axis_col, axis_row, '+');
    }

    let steps = 8 * width;
    for i in 0..steps {
        let theta = i as f64 / steps as f64 * TAU;
        if let Some((col, row)) = to_cell(theta.cos(), theta.sin()) {
            canvas.set(col, row, '.');
        }
    }

    for key in KEY_ANGLES.iter() {
        if let Some((col, row)) = to_cell(key.radians.cos(), key.radians.sin()) {
            canvas.set(col, row, 'o');
        }
    }

    let mut out = String::from("Unit Circle (x = cos θ, y = sin θ)\n");
    out.push_str(&canvas.render());
    out
}
