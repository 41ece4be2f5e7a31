//! Trigonometry lesson screens

use std::io::{BufRead, Write};

use super::Guide;
use crate::content::tables::*;
use crate::Result;

impl<R: BufRead, W: Write> Guide<R, W> {
    pub(super) fn angle_measure(&mut self) -> Result<()> {
        writeln!(self.out, "=== ANGLE MEASURE ===")?;
        self.section("Degrees vs. Radians")?;
        self.bullets(&ANGLE_MEASURE_NOTES)?;

        self.section("Important Angle Measurements")?;
        self.table3(("Degrees", "Radians", "Simplified"), [10, 12, 15], &ANGLE_CHART)?;

        self.section("Arc Length")?;
        self.bullets(&[ARC_LENGTH])?;
        self.section("Sector Area")?;
        self.bullets(&[SECTOR_AREA])?;

        self.angle_converter()
    }

    pub(super) fn unit_circle(&mut self) -> Result<()> {
        writeln!(self.out, "=== THE UNIT CIRCLE ===")?;
        self.section("Basic Concept")?;
        self.bullets(&UNIT_CIRCLE_NOTES)?;

        self.section("Unit Circle Coordinates")?;
        self.table3(
            ("Degrees", "Radians", "Coordinates (cos θ, sin θ)"),
            [10, 10, 30],
            &UNIT_CIRCLE,
        )?;

        self.unit_circle_plot()
    }

    pub(super) fn trig_functions(&mut self) -> Result<()> {
        writeln!(self.out, "=== TRIGONOMETRIC FUNCTIONS ===")?;
        self.section("The Six Trigonometric Functions")?;
        writeln!(
            self.out,
            "For an angle θ in standard position with point (x, y) on the terminal ray at distance r from origin:\n"
        )?;
        self.table3(("Function", "Definition", "Unit Circle (r=1)"), [12, 18, 20], &SIX_FUNCTIONS)?;

        self.section("Right Triangle Definitions")?;
        writeln!(self.out, "For a right triangle with angle θ:\n")?;
        writeln!(self.out, "{:<8}{:<35}", "Function", "Definition")?;
        writeln!(self.out, "{}", "-".repeat(43))?;
        for (func, definition) in RIGHT_TRIANGLE {
            writeln!(self.out, "{func:<8}{definition:<35}")?;
        }

        self.section("Domains and Ranges")?;
        self.table3(("Function", "Domain", "Range"), [8, 40, 25], &DOMAINS_RANGES)?;

        self.section("Key Identities")?;
        self.bullets(&KEY_IDENTITIES)?;

        self.trig_calculator()
    }

    pub(super) fn trig_graphs(&mut self) -> Result<()> {
        writeln!(self.out, "=== GRAPHS OF TRIGONOMETRIC FUNCTIONS ===")?;
        for (title, properties) in GRAPH_PROPERTIES {
            self.section(title)?;
            self.bullets(properties)?;
        }

        self.section("Transformations of Trigonometric Functions")?;
        writeln!(self.out, "For a function of the form f(x) = A sin(Bx - C) + D:")?;
        self.bullets(&TRANSFORMATIONS)?;

        self.graph_visualizer()
    }

    pub(super) fn inverse_trig(&mut self) -> Result<()> {
        writeln!(self.out, "=== INVERSE TRIGONOMETRIC FUNCTIONS ===")?;
        self.section("Definitions and Notation")?;
        self.bullets(&INVERSE_DEFINITIONS)?;

        self.section("Domains and Ranges")?;
        self.table3(("Function", "Domain", "Range"), [10, 25, 25], &INVERSE_DOMAINS_RANGES)?;

        self.section("Key Values")?;
        writeln!(
            self.out,
            "{:<10}{:<15}{:<15}{:<15}",
            "x", "arcsin x", "arccos x", "arctan x"
        )?;
        writeln!(self.out, "{}", "-".repeat(55))?;
        for (x, asin, acos, atan) in INVERSE_KEY_VALUES {
            writeln!(self.out, "{x:<10}{asin:<15}{acos:<15}{atan:<15}")?;
        }

        self.section("Important Identities")?;
        self.bullets(&INVERSE_IDENTITIES)?;

        self.inverse_calculator()
    }

    pub(super) fn trig_identities(&mut self) -> Result<()> {
        writeln!(self.out, "=== TRIGONOMETRIC IDENTITIES ===")?;
        for (group, identities) in IDENTITY_GROUPS {
            self.section(&format!("{group} Identities"))?;
            self.bullets(identities)?;
        }

        self.identity_checker()
    }

    pub(super) fn solving_equations(&mut self) -> Result<()> {
        writeln!(self.out, "=== SOLVING TRIGONOMETRIC EQUATIONS ===")?;
        self.section("Strategy")?;
        for (i, step) in EQUATION_STRATEGY.iter().enumerate() {
            writeln!(self.out, "{}. {step}", i + 1)?;
        }

        self.equation_solver()
    }

    pub(super) fn law_sines_cosines(&mut self) -> Result<()> {
        writeln!(self.out, "=== LAW OF SINES & COSINES ===")?;
        self.section("Law of Sines")?;
        self.bullets(&LAW_OF_SINES)?;
        self.section("Law of Cosines")?;
        self.bullets(&LAW_OF_COSINES)?;
        self.section("Triangle Area")?;
        self.bullets(&TRIANGLE_AREA)?;

        self.triangle_solver()
    }
}
