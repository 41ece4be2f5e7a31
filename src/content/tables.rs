//! Reference tables shown on the trigonometry screens

/// Degrees, radians, simplified radians
pub const ANGLE_CHART: [(&str, &str, &str); 8] = [
    ("0°", "0", "0"),
    ("30°", "π/6", "π/6"),
    ("45°", "π/4", "π/4"),
    ("60°", "π/3", "π/3"),
    ("90°", "π/2", "π/2"),
    ("180°", "π", "π"),
    ("270°", "3π/2", "3π/2"),
    ("360°", "2π", "2π"),
];

pub const ANGLE_MEASURE_NOTES: [&str; 4] = [
    "Degrees: A full circle is 360°",
    "Radians: A full circle is 2π radians",
    "Conversion: π radians = 180°",
    "Formula: radians = (degrees × π) / 180",
];

pub const ARC_LENGTH: &str = "s = rθ (where s = arc length, r = radius, θ = angle in radians)";
pub const SECTOR_AREA: &str =
    "A = (1/2)r²θ (where A = sector area, r = radius, θ = angle in radians)";

pub const UNIT_CIRCLE_NOTES: [&str; 5] = [
    "A unit circle has radius 1 and is centered at the origin (0, 0)",
    "Any point (x, y) on the unit circle satisfies x² + y² = 1",
    "For an angle θ in standard position:",
    "  x-coordinate = cos θ",
    "  y-coordinate = sin θ",
];

/// Degrees, radians, exact coordinates (cos θ, sin θ)
pub const UNIT_CIRCLE: [(&str, &str, &str); 17] = [
    ("0°", "0", "(1, 0)"),
    ("30°", "π/6", "(√3/2, 1/2)"),
    ("45°", "π/4", "(√2/2, √2/2)"),
    ("60°", "π/3", "(1/2, √3/2)"),
    ("90°", "π/2", "(0, 1)"),
    ("120°", "2π/3", "(-1/2, √3/2)"),
    ("135°", "3π/4", "(-√2/2, √2/2)"),
    ("150°", "5π/6", "(-√3/2, 1/2)"),
    ("180°", "π", "(-1, 0)"),
    ("210°", "7π/6", "(-√3/2, -1/2)"),
    ("225°", "5π/4", "(-√2/2, -√2/2)"),
    ("240°", "4π/3", "(-1/2, -√3/2)"),
    ("270°", "3π/2", "(0, -1)"),
    ("300°", "5π/3", "(1/2, -√3/2)"),
    ("315°", "7π/4", "(√2/2, -√2/2)"),
    ("330°", "11π/6", "(√3/2, -1/2)"),
    ("360°", "2π", "(1, 0)"),
];

/// Function, definition on a terminal ray, definition on the unit circle
pub const SIX_FUNCTIONS: [(&str, &str, &str); 6] = [
    ("Sine", "sin θ = y/r", "sin θ = y"),
    ("Cosine", "cos θ = x/r", "cos θ = x"),
    ("Tangent", "tan θ = y/x", "tan θ = y/x"),
    ("Cosecant", "csc θ = r/y", "csc θ = 1/y"),
    ("Secant", "sec θ = r/x", "sec θ = 1/x"),
    ("Cotangent", "cot θ = x/y", "cot θ = x/y"),
];

pub const RIGHT_TRIANGLE: [(&str, &str); 6] = [
    ("sin θ", "Opposite side / Hypotenuse"),
    ("cos θ", "Adjacent side / Hypotenuse"),
    ("tan θ", "Opposite side / Adjacent side"),
    ("csc θ", "Hypotenuse / Opposite side"),
    ("sec θ", "Hypotenuse / Adjacent side"),
    ("cot θ", "Adjacent side / Opposite side"),
];

/// Function, domain, range
pub const DOMAINS_RANGES: [(&str, &str, &str); 6] = [
    ("sin θ", "All real numbers", "[-1, 1]"),
    ("cos θ", "All real numbers", "[-1, 1]"),
    ("tan θ", "All real numbers except θ = π/2 + nπ", "All real numbers"),
    ("csc θ", "All real numbers except θ = nπ", "(-∞, -1] ∪ [1, ∞)"),
    ("sec θ", "All real numbers except θ = π/2 + nπ", "(-∞, -1] ∪ [1, ∞)"),
    ("cot θ", "All real numbers except θ = nπ", "All real numbers"),
];

pub const KEY_IDENTITIES: [&str; 3] = [
    "Reciprocal Identities: csc θ = 1/sin θ, sec θ = 1/cos θ, cot θ = 1/tan θ",
    "Quotient Identities: tan θ = sin θ/cos θ, cot θ = cos θ/sin θ",
    "Pythagorean Identities: sin²θ + cos²θ = 1, 1 + tan²θ = sec²θ, 1 + cot²θ = csc²θ",
];

/// Heading and property lines for each basic graph
pub const GRAPH_PROPERTIES: [(&str, &[&str]); 3] = [
    (
        "Sine Function",
        &["f(x) = sin x", "Domain: All real numbers", "Range: [-1, 1]", "Period: 2π"],
    ),
    (
        "Cosine Function",
        &["f(x) = cos x", "Domain: All real numbers", "Range: [-1, 1]", "Period: 2π"],
    ),
    (
        "Tangent Function",
        &[
            "f(x) = tan x",
            "Domain: All real numbers except x = π/2 + nπ",
            "Range: All real numbers",
            "Period: π",
            "Vertical asymptotes at x = π/2 + nπ",
        ],
    ),
];

pub const TRANSFORMATIONS: [&str; 4] = [
    "|A| is the amplitude (for sine and cosine only)",
    "2π/|B| is the period",
    "C/B is the phase shift (right if positive, left if negative)",
    "D is the vertical shift",
];

pub const INVERSE_DEFINITIONS: [&str; 6] = [
    "arcsin x = sin⁻¹ x: The angle whose sine is x",
    "arccos x = cos⁻¹ x: The angle whose cosine is x",
    "arctan x = tan⁻¹ x: The angle whose tangent is x",
    "arccsc x = csc⁻¹ x: The angle whose cosecant is x",
    "arcsec x = sec⁻¹ x: The angle whose secant is x",
    "arccot x = cot⁻¹ x: The angle whose cotangent is x",
];

/// Function, domain, range
pub const INVERSE_DOMAINS_RANGES: [(&str, &str, &str); 6] = [
    ("arcsin x", "[-1, 1]", "[-π/2, π/2]"),
    ("arccos x", "[-1, 1]", "[0, π]"),
    ("arctan x", "All real numbers", "(-π/2, π/2)"),
    ("arccsc x", "(-∞, -1] ∪ [1, ∞)", "[-π/2, 0) ∪ (0, π/2]"),
    ("arcsec x", "(-∞, -1] ∪ [1, ∞)", "[0, π/2) ∪ (π/2, π]"),
    ("arccot x", "All real numbers", "(0, π)"),
];

/// x, arcsin x, arccos x, arctan x
pub const INVERSE_KEY_VALUES: [(&str, &str, &str, &str); 9] = [
    ("-1", "-π/2", "π", "-π/4"),
    ("-√3/2", "-π/3", "5π/6", "-"),
    ("-√2/2", "-π/4", "3π/4", "-"),
    ("-1/2", "-π/6", "2π/3", "-"),
    ("0", "0", "π/2", "0"),
    ("1/2", "π/6", "π/3", "-"),
    ("√2/2", "π/4", "π/4", "-"),
    ("√3/2", "π/3", "π/6", "-"),
    ("1", "π/2", "0", "π/4"),
];

pub const INVERSE_IDENTITIES: [&str; 4] = [
    "arcsin(-x) = -arcsin x",
    "arccos(-x) = π - arccos x",
    "arctan(-x) = -arctan x",
    "arcsin x + arccos x = π/2",
];

/// Group heading and the identities in it
pub const IDENTITY_GROUPS: [(&str, &[&str]); 6] = [
    (
        "Pythagorean",
        &["sin²θ + cos²θ = 1", "1 + tan²θ = sec²θ", "1 + cot²θ = csc²θ"],
    ),
    (
        "Even/Odd",
        &["sin(-θ) = -sin θ", "cos(-θ) = cos θ", "tan(-θ) = -tan θ"],
    ),
    (
        "Cofunction",
        &[
            "sin(π/2 - θ) = cos θ",
            "cos(π/2 - θ) = sin θ",
            "tan(π/2 - θ) = cot θ",
        ],
    ),
    (
        "Sum and Difference",
        &[
            "sin(α ± β) = sin α cos β ± cos α sin β",
            "cos(α ± β) = cos α cos β ∓ sin α sin β",
            "tan(α ± β) = (tan α ± tan β) / (1 ∓ tan α tan β)",
        ],
    ),
    (
        "Double Angle",
        &[
            "sin 2θ = 2 sin θ cos θ",
            "cos 2θ = cos²θ - sin²θ = 2cos²θ - 1 = 1 - 2sin²θ",
            "tan 2θ = 2 tan θ / (1 - tan²θ)",
        ],
    ),
    (
        "Half Angle",
        &[
            "sin(θ/2) = ±√((1 - cos θ)/2)",
            "cos(θ/2) = ±√((1 + cos θ)/2)",
            "tan(θ/2) = (1 - cos θ) / sin θ = sin θ / (1 + cos θ)",
        ],
    ),
];

pub const EQUATION_STRATEGY: [&str; 5] = [
    "Isolate the trigonometric function (e.g. sin x = k)",
    "Check the range: sin x = k and cos x = k need -1 ≤ k ≤ 1",
    "Find the reference angle with the inverse function",
    "Use the signs of each quadrant to find every solution in [0, 2π)",
    "Add multiples of the period for the general solution (2π for sin/cos, π for tan)",
];

pub const LAW_OF_SINES: [&str; 3] = [
    "a/sin A = b/sin B = c/sin C",
    "Use when you know two angles and a side (AAS or ASA)",
    "SSA may have zero, one or two solutions (the ambiguous case)",
];

pub const LAW_OF_COSINES: [&str; 4] = [
    "c² = a² + b² - 2ab cos C",
    "cos C = (a² + b² - c²) / (2ab)",
    "Use when you know two sides and the included angle (SAS)",
    "or all three sides (SSS)",
];

pub const TRIANGLE_AREA: [&str; 2] = [
    "Area = (1/2)ab sin C",
    "Heron: Area = √(s(s-a)(s-b)(s-c)), s = (a + b + c)/2",
];
