//! Interactive calculators attached to the lesson screens
//!
//! Bad input (unparsable numbers, impossible triangles) is reported and the
//! calculator returns to its screen; only I/O failures and end of input
//! propagate.

use std::f64::consts::PI;
use std::io::{BufRead, Write};

use super::Guide;
use crate::angle::{rationalize, Angle};
use crate::constants::RAD2DEG;
use crate::content::KEY_ANGLES;
use crate::parse::{parse_angle, parse_number};
use crate::plot::{self, render_graph, Graph};
use crate::triangle::{self, Triangle};
use crate::trig::{self, TrigFunction, TrigValue};
use crate::{GuideError, Result};

impl<R: BufRead, W: Write> Guide<R, W> {
    /// Runs `body` under a heading, reporting input errors instead of failing
    fn calculator<F>(&mut self, title: &str, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        writeln!(self.out, "\n=== {title} ===")?;
        match body(self) {
            Err(e @ (GuideError::Parse(_) | GuideError::Triangle(_))) => {
                log::debug!("calculator '{title}' rejected input: {e}");
                writeln!(self.out, "{e}")?;
                Ok(())
            }
            other => other,
        }
    }

    fn read_number(&mut self, text: &str) -> Result<f64> {
        let line = self.prompt(text)?;
        Ok(parse_number(&line)?)
    }

    fn read_angle(&mut self, text: &str) -> Result<(String, Angle)> {
        let line = self.prompt(text)?;
        let angle = parse_angle(&line)?;
        Ok((line.trim().to_string(), angle))
    }

    fn precision(&self) -> usize {
        self.config.decimal_places
    }

    pub(super) fn angle_converter(&mut self) -> Result<()> {
        self.calculator("Angle Converter", |g| {
            let choice = g.prompt("Convert (1) Degrees to Radians or (2) Radians to Degrees? ")?;
            match choice.trim() {
                "1" => {
                    let degrees = g.read_number("Enter angle in degrees: ")?;
                    let angle = Angle::from_degrees(degrees);
                    writeln!(
                        g.out,
                        "{degrees}° = {:.6} radians = {}",
                        angle.to_radians(),
                        angle.pi_notation()
                    )?;
                }
                "2" => {
                    let multiple = g.read_number(
                        "Enter angle in radians (as a multiple of π, e.g., 0.5 for π/2): ",
                    )?;
                    let angle = Angle::from_pi_multiple(multiple);
                    writeln!(
                        g.out,
                        "{multiple} = {} = {:.2}°",
                        angle.pi_notation(),
                        multiple * 180.0
                    )?;
                }
                _ => writeln!(g.out, "Invalid choice.")?,
            }
            Ok(())
        })
    }

    pub(super) fn unit_circle_plot(&mut self) -> Result<()> {
        let answer = self.prompt(
            "\nWould you like to see a visual representation of the unit circle? (y/n) ",
        )?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }

        writeln!(self.out, "\n{}", plot::unit_circle(self.config.plot_height))?;
        writeln!(self.out, "\n{:<8}{:<8}{:<20}", "Angle", "Radians", "(cos θ, sin θ)")?;
        for key in KEY_ANGLES.iter() {
            let point = format!("({:.3}, {:.3})", key.radians.cos(), key.radians.sin());
            writeln!(
                self.out,
                "{:<8}{:<8}{point:<20}",
                format!("{}°", key.degrees),
                key.label
            )?;
        }
        Ok(())
    }

    pub(super) fn trig_calculator(&mut self) -> Result<()> {
        self.calculator("Trigonometric Function Calculator", |g| {
            let (text, angle) =
                g.read_angle("Enter an angle in degrees or radians (e.g., '45' or 'pi/4'): ")?;
            let radians = angle.to_radians();

            if angle.is_degrees() {
                writeln!(
                    g.out,
                    "\nValues for {}° ({radians:.4} radians):",
                    angle.to_degrees()
                )?;
            } else {
                writeln!(
                    g.out,
                    "\nValues for {text} radians ({:.2}°):",
                    angle.to_degrees()
                )?;
            }
            writeln!(g.out, "Exact angle: {}", angle.pi_notation())?;

            let p = g.precision();
            for (name, value) in trig::evaluate(radians).entries() {
                match value {
                    TrigValue::Defined(v) => writeln!(g.out, "{name} = {v:.p$}")?,
                    TrigValue::Undefined => {
                        writeln!(g.out, "{name} = undefined (division by zero)")?
                    }
                }
            }
            Ok(())
        })
    }

    pub(super) fn graph_visualizer(&mut self) -> Result<()> {
        self.calculator("Trigonometric Function Visualizer", |g| {
            writeln!(g.out, "Which function would you like to visualize?")?;
            writeln!(g.out, "1. Sine")?;
            writeln!(g.out, "2. Cosine")?;
            writeln!(g.out, "3. Tangent")?;
            writeln!(g.out, "4. Transformed Trig Function")?;

            let graph = match g.prompt("\nEnter your choice (1-4): ")?.trim() {
                "1" => Graph::basic(TrigFunction::Sin),
                "2" => Graph::basic(TrigFunction::Cos),
                "3" => Graph::basic(TrigFunction::Tan),
                "4" => {
                    writeln!(g.out, "\nEnter parameters for f(x) = A sin(Bx - C) + D:")?;
                    let a = g.read_number("A (amplitude): ")?;
                    let b = g.read_number("B (affects period): ")?;
                    let c = g.read_number("C (affects phase shift): ")?;
                    let d = g.read_number("D (vertical shift): ")?;
                    let function = match g.prompt("Function type (sin, cos, tan): ")?.parse() {
                        Ok(function) => function,
                        Err(_) => {
                            writeln!(g.out, "Invalid function type. Using sine.")?;
                            TrigFunction::Sin
                        }
                    };
                    Graph::transformed(function, a, b, c, d)
                }
                _ => {
                    writeln!(g.out, "Invalid choice.")?;
                    return Ok(());
                }
            };

            let width = g.config.effective_plot_width();
            let height = g.config.plot_height;
            writeln!(g.out, "\n{}", render_graph(&graph, width, height))?;
            Ok(())
        })
    }

    pub(super) fn inverse_calculator(&mut self) -> Result<()> {
        self.calculator("Inverse Trig Calculator", |g| {
            let x = g.read_number("Enter a value x: ")?;
            let result = trig::inverse(x);
            let p = g.precision();

            for (name, value) in [("arcsin", result.arcsin), ("arccos", result.arccos)] {
                match value {
                    TrigValue::Defined(v) => writeln!(
                        g.out,
                        "{name}({x}) = {} = {v:.p$} rad = {:.2}°",
                        rationalize(v),
                        v * RAD2DEG
                    )?,
                    TrigValue::Undefined => writeln!(
                        g.out,
                        "{name}({x}) = undefined (x must be in [-1, 1])"
                    )?,
                }
            }
            let v = result.arctan;
            writeln!(
                g.out,
                "arctan({x}) = {} = {v:.p$} rad = {:.2}°",
                rationalize(v),
                v * RAD2DEG
            )?;
            Ok(())
        })
    }

    pub(super) fn identity_checker(&mut self) -> Result<()> {
        self.calculator("Identity Checker", |g| {
            let (_, angle) = g.read_angle("Enter an angle to check the identities at: ")?;
            let r = trig::evaluate(angle.to_radians());
            let p = g.precision();

            writeln!(g.out, "\nAt θ = {} ({}):", angle, angle.pi_notation())?;
            writeln!(
                g.out,
                "sin²θ + cos²θ = {:.p$}",
                r.sin * r.sin + r.cos * r.cos
            )?;
            match (r.tan.value(), r.sec.value()) {
                (Some(tan), Some(sec)) => writeln!(
                    g.out,
                    "1 + tan²θ = {:.p$}, sec²θ = {:.p$}",
                    1.0 + tan * tan,
                    sec * sec
                )?,
                _ => writeln!(g.out, "1 + tan²θ = sec²θ: undefined at this angle")?,
            }
            match (r.cot.value(), r.csc.value()) {
                (Some(cot), Some(csc)) => writeln!(
                    g.out,
                    "1 + cot²θ = {:.p$}, csc²θ = {:.p$}",
                    1.0 + cot * cot,
                    csc * csc
                )?,
                _ => writeln!(g.out, "1 + cot²θ = csc²θ: undefined at this angle")?,
            }
            Ok(())
        })
    }

    pub(super) fn equation_solver(&mut self) -> Result<()> {
        self.calculator("Trig Equation Solver", |g| {
            let function: TrigFunction = match g.prompt("Function (sin, cos, tan): ")?.parse() {
                Ok(function) => function,
                Err(message) => {
                    writeln!(g.out, "Invalid function: {message}")?;
                    return Ok(());
                }
            };
            let k = g.read_number(&format!("Solve {function} x = "))?;

            let solutions = trig::solve_equation(function, k);
            if solutions.is_empty() {
                writeln!(g.out, "No solution: {function} x only takes values in [-1, 1].")?;
                return Ok(());
            }

            writeln!(g.out, "\nSolutions of {function} x = {k} in [0, 2π):")?;
            for x in &solutions {
                writeln!(g.out, "x = {} ({:.2}°)", rationalize(*x), x * RAD2DEG)?;
            }
            let period = match function {
                TrigFunction::Tan => PI,
                TrigFunction::Sin | TrigFunction::Cos => 2.0 * PI,
            };
            writeln!(
                g.out,
                "General solution: add {}·n for any integer n",
                rationalize(period)
            )?;
            Ok(())
        })
    }

    pub(super) fn triangle_solver(&mut self) -> Result<()> {
        self.calculator("Triangle Solver", |g| {
            writeln!(g.out, "1. Three sides (SSS)")?;
            writeln!(g.out, "2. Two sides and the included angle (SAS)")?;
            writeln!(g.out, "3. Two angles and the included side (ASA)")?;

            let triangle = match g.prompt("\nEnter your choice (1-3): ")?.trim() {
                "1" => {
                    let a = g.read_number("Side a: ")?;
                    let b = g.read_number("Side b: ")?;
                    let c = g.read_number("Side c: ")?;
                    triangle::solve_sss(a, b, c)?
                }
                "2" => {
                    let a = g.read_number("Side a: ")?;
                    let b = g.read_number("Side b: ")?;
                    let gamma = g.read_number("Angle C (degrees): ")?;
                    triangle::solve_sas(a, b, gamma)?
                }
                "3" => {
                    let alpha = g.read_number("Angle A (degrees): ")?;
                    let beta = g.read_number("Angle B (degrees): ")?;
                    let c = g.read_number("Side c: ")?;
                    triangle::solve_asa(alpha, beta, c)?
                }
                _ => {
                    writeln!(g.out, "Invalid choice.")?;
                    return Ok(());
                }
            };
            g.print_triangle(&triangle)
        })
    }

    fn print_triangle(&mut self, t: &Triangle) -> Result<()> {
        let p = self.precision();
        writeln!(self.out, "\n{:<8}{:<16}{:<16}", "Vertex", "Opposite side", "Angle")?;
        writeln!(self.out, "{}", "-".repeat(40))?;
        for (i, vertex) in ['A', 'B', 'C'].iter().enumerate() {
            writeln!(
                self.out,
                "{vertex:<8}{:<16}{:<16}",
                format!("{:.p$}", t.sides[i]),
                format!("{:.p$}°", t.angles_deg[i])
            )?;
        }
        writeln!(self.out, "Perimeter = {:.p$}", t.perimeter())?;
        writeln!(self.out, "Area = {:.p$}", t.area())?;
        Ok(())
    }
}
