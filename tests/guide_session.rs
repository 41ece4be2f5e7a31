//! Scripted sessions through the trigonometry calculators

use std::io::Cursor;

use precalc_guide::{Guide, GuideConfig};
use rstest::{fixture, rstest};

#[fixture]
fn config() -> GuideConfig {
    GuideConfig {
        clear_screen: false,
        pause_after_screen: false,
        plot_width: Some(60),
        plot_height: 15,
        ..GuideConfig::default()
    }
}

/// Enters trigonometry topic `topic`, feeds `answers`, then backs out and exits
fn run_topic(config: GuideConfig, topic: u8, answers: &[&str]) -> String {
    let mut script = format!("4\n{topic}\n");
    for answer in answers {
        script.push_str(answer);
        script.push('\n');
    }
    script.push_str("9\n9\n");

    let mut guide = Guide::new(Cursor::new(script), Vec::new(), config);
    guide.run().unwrap();
    let out = String::from_utf8(guide.into_output()).unwrap();
    assert!(out.ends_with("Goodbye!\n"), "session did not exit cleanly");
    out
}

#[rstest]
fn degrees_to_radians(config: GuideConfig) {
    let out = run_topic(config, 1, &["1", "180"]);
    assert!(out.contains("=== ANGLE MEASURE ==="));
    assert!(out.contains("180° = 3.141593 radians = π"));
}

#[rstest]
fn radians_to_degrees(config: GuideConfig) {
    let out = run_topic(config, 1, &["2", "0.5"]);
    assert!(out.contains("0.5 = π/2 = 90.00°"));
}

#[rstest]
fn converter_rejects_unknown_choice(config: GuideConfig) {
    let out = run_topic(config, 1, &["3"]);
    assert!(out.contains("Invalid choice."));
}

#[rstest]
fn unit_circle_legend_on_request(config: GuideConfig) {
    let out = run_topic(config.clone(), 2, &["y"]);
    assert!(out.contains("Angle   Radians"));
    assert!(out.contains("(0.707, 0.707)"));

    let out = run_topic(config, 2, &["n"]);
    assert!(!out.contains("(0.707, 0.707)"));
}

#[rstest]
fn trig_values_in_degrees(config: GuideConfig) {
    let out = run_topic(config, 3, &["45"]);
    assert!(out.contains("Values for 45° (0.7854 radians):"));
    assert!(out.contains("Exact angle: π/4"));
    assert!(out.contains("sin = 0.707107"));
    assert!(out.contains("tan = 1.000000"));
    assert!(out.contains("sec = 1.414214"));
}

#[rstest]
fn trig_values_at_a_singularity(config: GuideConfig) {
    let out = run_topic(config, 3, &["pi/2"]);
    assert!(out.contains("Values for pi/2 radians (90.00°):"));
    assert!(out.contains("tan = undefined (division by zero)"));
    assert!(out.contains("sec = undefined (division by zero)"));
    assert!(out.contains("cot = 0.000000"));
}

#[rstest]
fn trig_values_follow_precision(config: GuideConfig) {
    let config = GuideConfig {
        decimal_places: 2,
        ..config
    };
    let out = run_topic(config, 3, &["30"]);
    assert!(out.contains("sin = 0.50"));
    assert!(out.contains("cos = 0.87"));
}

#[rstest]
#[case("foo")]
#[case("pi/0")]
#[case("2 +")]
fn bad_angle_is_reported(config: GuideConfig, #[case] input: &str) {
    let out = run_topic(config, 3, &[input]);
    assert!(out.contains("Invalid input:"), "{input}");
    assert!(!out.contains("Exact angle"));
}

#[rstest]
fn graph_of_sine(config: GuideConfig) {
    let out = run_topic(config, 4, &["1"]);
    assert!(out.contains("Sine Function (sin x)"));
    assert!(out.contains("y from -3.00 to 3.00"));
}

#[rstest]
fn transformed_graph_defaults_to_sine(config: GuideConfig) {
    let out = run_topic(config, 4, &["4", "2", "1", "0", "0", "sec"]);
    assert!(out.contains("Invalid function type. Using sine."));
    assert!(out.contains("2 sin(1x - 0) + 0"));
}

#[rstest]
#[case("1e300")]
#[case("1e12")]
fn extreme_tangent_frequency_still_draws(config: GuideConfig, #[case] b: &str) {
    let out = run_topic(config, 4, &["4", "1", b, "0", "0", "tan"]);
    assert!(out.contains("y from -5.00 to 5.00"));
}

#[rstest]
fn inverse_values(config: GuideConfig) {
    let out = run_topic(config.clone(), 5, &["0.5"]);
    assert!(out.contains("arcsin(0.5) = π/6"));
    assert!(out.contains("arccos(0.5) = π/3"));
    assert!(out.contains("arctan(0.5) = 0.1476π"));

    let out = run_topic(config, 5, &["2"]);
    assert!(out.contains("arcsin(2) = undefined"));
    assert!(out.contains("arccos(2) = undefined"));
    assert!(out.contains("arctan(2) = "));
}

#[rstest]
fn identities_hold(config: GuideConfig) {
    let out = run_topic(config.clone(), 6, &["30"]);
    assert!(out.contains("At θ = 30° (π/6):"));
    assert!(out.contains("sin²θ + cos²θ = 1.000000"));
    assert!(out.contains("1 + cot²θ = 4.000000, csc²θ = 4.000000"));

    let out = run_topic(config, 6, &["90"]);
    assert!(out.contains("1 + tan²θ = sec²θ: undefined at this angle"));
}

#[rstest]
fn sine_equation(config: GuideConfig) {
    let out = run_topic(config, 7, &["sin", "1/2"]);
    assert!(out.contains("x = π/6 (30.00°)"));
    assert!(out.contains("x = 5π/6 (150.00°)"));
    assert!(out.contains("add 2π·n"));
}

#[rstest]
fn cosine_equation_out_of_range(config: GuideConfig) {
    let out = run_topic(config, 7, &["cos", "2"]);
    assert!(out.contains("No solution"));
}

#[rstest]
fn right_triangle_from_sides(config: GuideConfig) {
    let out = run_topic(config, 8, &["1", "3", "4", "5"]);
    assert!(out.contains("90.000000°"));
    assert!(out.contains("Perimeter = 12.000000"));
    assert!(out.contains("Area = 6.000000"));
}

#[rstest]
fn impossible_triangle_is_reported(config: GuideConfig) {
    let out = run_topic(config, 8, &["1", "1", "1", "5"]);
    assert!(out.contains("Invalid triangle:"));
    assert!(!out.contains("Area ="));
}

#[rstest]
fn overflowing_triangle_is_reported(config: GuideConfig) {
    let out = run_topic(config, 8, &["1", "1e200", "1e200", "1e200"]);
    assert!(out.contains("Invalid triangle: measurements are too large"));
    assert!(!out.contains("NaN"));
}

#[rstest]
fn input_closing_mid_calculator_ends_session(config: GuideConfig) {
    let mut guide = Guide::new(Cursor::new("4\n3\n"), Vec::new(), config);
    guide.run().unwrap();
    let out = String::from_utf8(guide.into_output()).unwrap();
    assert!(out.contains("Enter an angle in degrees or radians"));
    assert!(!out.contains("Goodbye!"));
}
