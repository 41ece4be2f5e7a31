//! Graphs of `A·f(Bx − C) + D` for f ∈ {sin, cos, tan} over [-2π, 2π]

use std::f64::consts::{FRAC_PI_2, PI};

use super::{scale, Canvas};
use crate::angle::rationalize;
use crate::trig::TrigFunction;

const X_MIN: f64 = -2.0 * PI;
const X_MAX: f64 = 2.0 * PI;
/// Samples taken per column so steep sections still leave a trace
const SAMPLES_PER_COLUMN: usize = 3;
/// Tangent values at or beyond this magnitude are not drawn
const TAN_CLIP: f64 = 10.0;
/// More asymptotes than this in view are not marked individually
pub const MAX_ASYMPTOTES: usize = 256;

/// A (possibly transformed) trigonometric function to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub function: TrigFunction,
    /// A
    pub amplitude: f64,
    /// B
    pub frequency: f64,
    /// C
    pub phase: f64,
    /// D
    pub shift: f64,
    pub title: String,
}

impl Graph {
    /// `sin x`, `cos x` or `tan x`
    pub fn basic(function: TrigFunction) -> Self {
        let title = match function {
            TrigFunction::Sin => "Sine Function (sin x)",
            TrigFunction::Cos => "Cosine Function (cos x)",
            TrigFunction::Tan => "Tangent Function (tan x)",
        };
        Self {
            function,
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
            shift: 0.0,
            title: title.to_string(),
        }
    }

    /// `A·f(Bx − C) + D`
    pub fn transformed(function: TrigFunction, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            function,
            amplitude: a,
            frequency: b,
            phase: c,
            shift: d,
            title: format!("{a} {function}({b}x - {c}) + {d}"),
        }
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.amplitude * self.function.apply(self.frequency * x - self.phase) + self.shift
    }

    /// Vertical asymptotes in `[lo, hi]`, where `Bx − C = π/2 + nπ`
    ///
    /// # Arguments
    ///
    /// * `lo`, `hi` - Visible x interval
    ///
    /// # Returns
    ///
    /// Ascending x positions. Empty for sine and cosine, and when more than
    /// [`MAX_ASYMPTOTES`] would fall in the interval: at that density they
    /// cover every column of any canvas.
    pub fn asymptotes(&self, lo: f64, hi: f64) -> Vec<f64> {
        if self.function != TrigFunction::Tan || self.frequency == 0.0 || self.amplitude == 0.0 {
            return Vec::new();
        }
        let b = self.frequency;
        let at = |n: f64| (FRAC_PI_2 + n * PI + self.phase) / b;
        // n range covering [lo, hi] for either sign of b
        let n_a = ((lo * b - self.phase - FRAC_PI_2) / PI).floor();
        let n_b = ((hi * b - self.phase - FRAC_PI_2) / PI).floor();
        let n_lo = n_a.min(n_b);
        let span = (n_a - n_b).abs() + 1.0;
        if span.is_nan() || span > MAX_ASYMPTOTES as f64 {
            log::debug!("{span} asymptotes in [{lo}, {hi}] for B = {b}, not marking them");
            return Vec::new();
        }

        let mut xs: Vec<f64> = (0..=span as usize)
            .map(|i| at(n_lo + i as f64))
            .filter(|x| (lo..=hi).contains(x))
            .collect();
        xs.sort_by(f64::total_cmp);
        xs
    }

    /// Visible y interval
    pub fn y_range(&self) -> (f64, f64) {
        match self.function {
            TrigFunction::Tan => (self.shift - 5.0, self.shift + 5.0),
            TrigFunction::Sin | TrigFunction::Cos => {
                let reach = self.amplitude.abs() + 0.5;
                ((self.shift - reach).min(-3.0), (self.shift + reach).max(3.0))
            }
        }
    }
}

/// Renders `graph` on a `width` × `height` grid plus a tick label row
pub fn render_graph(graph: &Graph, width: usize, height: usize) -> String {
    let (y_lo, y_hi) = graph.y_range();
    let mut canvas = Canvas::new(width, height + 1);
    let label_row = height;

    let axis_row = scale(0.0, -y_hi, -y_lo, height);
    let axis_col = scale(0.0, X_MIN, X_MAX, width);

    if let Some(row) = axis_row {
        for col in 0..width {
            canvas.set(col, row, '-');
        }
    }
    if let Some(col) = axis_col {
        for row in 0..height {
            canvas.set(col, row, '|');
        }
    }

    for x in graph.asymptotes(X_MIN, X_MAX) {
        if let Some(col) = scale(x, X_MIN, X_MAX, width) {
            for row in 0..height {
                canvas.set(col, row, ':');
            }
        }
    }

    let samples = width * SAMPLES_PER_COLUMN;
    for i in 0..samples {
        let x = X_MIN + (X_MAX - X_MIN) * i as f64 / (samples - 1).max(1) as f64;
        let y = graph.eval(x);
        if !y.is_finite() {
            continue;
        }
        if graph.function == TrigFunction::Tan && (y - graph.shift).abs() >= TAN_CLIP {
            continue;
        }
        let col = scale(x, X_MIN, X_MAX, width);
        let row = scale(-y, -y_hi, -y_lo, height);
        if let (Some(col), Some(row)) = (col, row) {
            canvas.set(col, row, '*');
        }
    }

    // π/2 ticks labelled in π notation, skipping labels that would overlap
    let mut next_free = 0;
    for k in -4..=4 {
        let x = k as f64 * FRAC_PI_2;
        let Some(col) = scale(x, X_MIN, X_MAX, width) else {
            continue;
        };
        if let Some(row) = axis_row {
            if canvas.get(col, row) == Some('-') {
                canvas.set(col, row, '+');
            }
        }
        let label = rationalize(x);
        let len = label.chars().count();
        let start = col.saturating_sub(len / 2).min(width.saturating_sub(len));
        if start >= next_free {
            canvas.write_str(start, label_row, &label);
            next_free = start + len + 1;
        }
    }

    format!(
        "{}\n{}\ny from {:.2} to {:.2}",
        graph.title,
        canvas.render(),
        y_lo,
        y_hi
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_transformed_eval() {
        let g = Graph::transformed(TrigFunction::Sin, 2.0, 3.0, PI, 1.0);
        // 2·sin(3·π/2 − π) + 1 = 2·sin(π/2) + 1
        assert_abs_diff_eq!(g.eval(FRAC_PI_2), 3.0, epsilon = 1e-12);
        assert_eq!(g.title, "2 sin(3x - 3.141592653589793) + 1");
    }

    #[test]
    fn test_basic_tangent_asymptotes() {
        let g = Graph::basic(TrigFunction::Tan);
        let labels: Vec<String> = g.asymptotes(X_MIN, X_MAX).into_iter().map(rationalize).collect();
        assert_eq!(labels, ["-3π/2", "-π/2", "π/2", "3π/2"]);
    }

    #[test]
    fn test_scaled_tangent_asymptotes() {
        // tan(2x): 2x = π/2 + nπ
        let g = Graph::transformed(TrigFunction::Tan, 1.0, 2.0, 0.0, 0.0);
        let xs = g.asymptotes(0.0, PI);
        assert_eq!(xs.len(), 2);
        assert_abs_diff_eq!(xs[0], PI / 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(xs[1], 3.0 * PI / 4.0, epsilon = 1e-12);

        // negative frequency mirrors the same set
        let g = Graph::transformed(TrigFunction::Tan, 1.0, -2.0, 0.0, 0.0);
        assert_eq!(g.asymptotes(0.0, PI).len(), 2);

        assert!(Graph::basic(TrigFunction::Sin).asymptotes(X_MIN, X_MAX).is_empty());
    }

    #[rstest]
    #[case(1e12, 0.0)]
    #[case(1e300, 0.0)]
    #[case(-1e300, 0.0)]
    #[case(1.0, 1e300)]
    fn test_extreme_tangent_parameters_do_not_panic(#[case] b: f64, #[case] c: f64) {
        let g = Graph::transformed(TrigFunction::Tan, 1.0, b, c, 0.0);
        assert!(g.asymptotes(X_MIN, X_MAX).len() <= MAX_ASYMPTOTES);
        let text = render_graph(&g, 60, 15);
        assert_eq!(text.lines().count(), 18);
    }

    #[test]
    fn test_dense_asymptotes_are_dropped() {
        // tan(100x) has about 400 asymptotes over [-2π, 2π]
        let g = Graph::transformed(TrigFunction::Tan, 1.0, 100.0, 0.0, 0.0);
        assert!(g.asymptotes(X_MIN, X_MAX).is_empty());
        // tan(10x) has 40
        let g = Graph::transformed(TrigFunction::Tan, 1.0, 10.0, 0.0, 0.0);
        assert_eq!(g.asymptotes(X_MIN, X_MAX).len(), 40);
    }

    #[test]
    fn test_y_range() {
        assert_eq!(Graph::basic(TrigFunction::Sin).y_range(), (-3.0, 3.0));
        assert_eq!(Graph::basic(TrigFunction::Tan).y_range(), (-5.0, 5.0));
        let tall = Graph::transformed(TrigFunction::Cos, 4.0, 1.0, 0.0, 1.0);
        assert_eq!(tall.y_range(), (-3.5, 5.5));
    }

    #[test]
    fn test_render_has_title_ticks_and_curve() {
        let text = render_graph(&Graph::basic(TrigFunction::Sin), 72, 15);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sine Function (sin x)");
        // title, 15 plot rows, tick labels, y range
        assert_eq!(lines.len(), 18);
        assert!(lines[16].contains("-2π"));
        assert!(lines[16].contains("2π"));
        assert!(text.contains('*'));
        assert_eq!(lines[17], "y from -3.00 to 3.00");
    }

    #[test]
    fn test_render_tangent_marks_asymptotes() {
        let text = render_graph(&Graph::basic(TrigFunction::Tan), 72, 15);
        assert!(text.contains(':'));
    }
}
