//! Menu registry and static lesson content
//!
//! Everything here is literal text; the [`guide`](crate::guide) module decides
//! how it is laid out on screen.

use lazy_static::lazy_static;

use crate::angle::rationalize;
use crate::constants::DEG2RAD;

pub mod tables;

/// Chapters on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Fundamentals,
    PolynomialRational,
    ExponentialLogarithmic,
    Trigonometry,
    AnalyticGeometry,
    VectorsMatrices,
    SequencesSeries,
    IntroCalculus,
    Exit,
}

/// Sections on the trigonometry menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigTopic {
    AngleMeasure,
    UnitCircle,
    TrigFunctions,
    Graphs,
    InverseTrig,
    Identities,
    SolvingEquations,
    LawOfSinesCosines,
    Back,
}

/// One selectable line of a menu
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry<T> {
    pub key: &'static str,
    pub name: &'static str,
    pub item: T,
}

const fn entry<T>(key: &'static str, name: &'static str, item: T) -> MenuEntry<T> {
    MenuEntry { key, name, item }
}

pub const MAIN_MENU: [MenuEntry<Topic>; 9] = [
    entry("1", "Fundamentals", Topic::Fundamentals),
    entry("2", "Polynomial & Rational Functions", Topic::PolynomialRational),
    entry("3", "Exponential & Logarithmic Functions", Topic::ExponentialLogarithmic),
    entry("4", "Trigonometry", Topic::Trigonometry),
    entry("5", "Analytic Geometry", Topic::AnalyticGeometry),
    entry("6", "Vectors & Matrices", Topic::VectorsMatrices),
    entry("7", "Sequences & Series", Topic::SequencesSeries),
    entry("8", "Introduction to Calculus", Topic::IntroCalculus),
    entry("9", "Exit", Topic::Exit),
];

pub const TRIG_MENU: [MenuEntry<TrigTopic>; 9] = [
    entry("1", "Angle Measure", TrigTopic::AngleMeasure),
    entry("2", "Unit Circle", TrigTopic::UnitCircle),
    entry("3", "Trigonometric Functions", TrigTopic::TrigFunctions),
    entry("4", "Graphs of Trig Functions", TrigTopic::Graphs),
    entry("5", "Inverse Trig Functions", TrigTopic::InverseTrig),
    entry("6", "Trigonometric Identities", TrigTopic::Identities),
    entry("7", "Solving Trig Equations", TrigTopic::SolvingEquations),
    entry("8", "Law of Sines & Cosines", TrigTopic::LawOfSinesCosines),
    entry("9", "Return to Main Menu", TrigTopic::Back),
];

/// Looks up the item selected by `choice` (surrounding whitespace ignored)
pub fn select<T: Copy>(menu: &[MenuEntry<T>], choice: &str) -> Option<T> {
    let choice = choice.trim();
    menu.iter().find(|e| e.key == choice).map(|e| e.item)
}

/// Heading and bullet list for the chapters without calculators
#[derive(Debug, Clone, Copy)]
pub struct Overview {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

/// Overview text for a non-trigonometry chapter
pub fn overview(topic: Topic) -> Option<Overview> {
    let (title, bullets): (&'static str, &'static [&'static str]) = match topic {
        Topic::Fundamentals => (
            "FUNDAMENTALS",
            &[
                "Real numbers",
                "Cartesian coordinates",
                "Functions introduction",
                "Function operations",
                "Function transformations",
            ],
        ),
        Topic::PolynomialRational => (
            "POLYNOMIAL & RATIONAL FUNCTIONS",
            &[
                "Polynomials",
                "Rational functions",
                "Partial fractions",
                "Asymptotes",
            ],
        ),
        Topic::ExponentialLogarithmic => (
            "EXPONENTIAL & LOGARITHMIC FUNCTIONS",
            &[
                "Exponential functions",
                "Logarithmic functions",
                "Solving exponential and logarithmic equations",
                "Applications",
            ],
        ),
        Topic::AnalyticGeometry => (
            "ANALYTIC GEOMETRY",
            &[
                "Conics introduction",
                "Circles",
                "Ellipses",
                "Hyperbolas",
                "Parabolas",
            ],
        ),
        Topic::VectorsMatrices => (
            "VECTORS & MATRICES",
            &[
                "Vectors",
                "Dot and cross products",
                "Matrices",
                "Matrix operations",
                "Determinants",
                "Systems of equations",
            ],
        ),
        Topic::SequencesSeries => (
            "SEQUENCES & SERIES",
            &[
                "Sequences",
                "Series",
                "Arithmetic sequences",
                "Geometric sequences",
                "Binomial theorem",
            ],
        ),
        Topic::IntroCalculus => (
            "INTRODUCTION TO CALCULUS",
            &["Limits", "Continuity", "Derivative preview", "Applications"],
        ),
        Topic::Trigonometry | Topic::Exit => return None,
    };
    Some(Overview { title, bullets })
}

/// A labelled point on the unit circle
#[derive(Debug, Clone, PartialEq)]
pub struct KeyAngle {
    pub degrees: f64,
    pub radians: f64,
    /// Radian label in π notation
    pub label: String,
}

/// Degrees of the sixteen standard unit-circle angles
const KEY_ANGLE_DEGREES: [f64; 16] = [
    0.0, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 180.0, 210.0, 225.0, 240.0, 270.0, 300.0,
    315.0, 330.0,
];

lazy_static! {
    /// The sixteen standard angles with their π-notation labels
    pub static ref KEY_ANGLES: Vec<KeyAngle> = KEY_ANGLE_DEGREES
        .iter()
        .map(|&degrees| {
            let radians = degrees * DEG2RAD;
            KeyAngle {
                degrees,
                radians,
                label: rationalize(radians),
            }
        })
        .collect();
}
