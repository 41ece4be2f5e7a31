//! Behavioural properties of π rationalization and trig evaluation

use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use precalc_guide::constants::TOLERANCE;
use precalc_guide::parse::parse_angle;
use precalc_guide::{evaluate, rationalize, TrigValue};
use rstest::rstest;

/// Reads back "nπ/d", "nπ", "π", "-π/3" and friends as a multiple of π
fn parse_pi_fraction(text: &str) -> Option<f64> {
    if text == "0" {
        return Some(0.0);
    }
    let (numerator, denominator) = match text.split_once("π") {
        Some((n, "")) => (n, "1"),
        Some((n, rest)) => (n, rest.strip_prefix('/')?),
        None => return None,
    };
    let numerator: f64 = match numerator {
        "" => 1.0,
        "-" => -1.0,
        n => n.parse().ok()?,
    };
    let denominator: f64 = denominator.parse().ok()?;
    Some(numerator / denominator)
}

#[test]
fn integer_multiples_of_pi() {
    for k in -40i64..=40 {
        let expected = match k {
            0 => "0".to_string(),
            1 => "π".to_string(),
            -1 => "-π".to_string(),
            k => format!("{k}π"),
        };
        assert_eq!(rationalize(k as f64 * PI), expected, "k = {k}");
    }
}

#[rstest]
#[case(2.0e6)]
#[case(123_456_789.0)]
#[case(4.0e18)]
#[case(1.0e19)]
#[case(-3.0e25)]
#[case(1.0e300)]
fn large_integer_multiples_keep_every_digit(#[case] k: f64) {
    let text = rationalize(k * PI);
    assert!(!text.contains('.'), "{text}");
    assert_ne!(text, format!("{}π", i64::MAX));
    let multiple = parse_pi_fraction(&text).unwrap();
    assert!((multiple - k).abs() <= k.abs() * 1e-15, "{k}: {text}");
}

#[test]
fn huge_degree_input_is_not_saturated() {
    let radians = parse_angle("1e22").unwrap().to_radians();
    let frac = radians / PI;
    let text = rationalize(radians);
    let multiple = parse_pi_fraction(&text).unwrap();
    assert_eq!(multiple, frac.round(), "{text}");
    assert!(text.starts_with("55555555555555"), "{text}");
}

#[test]
fn tolerance_is_measured_in_multiples_of_pi() {
    // 0.5e-10 away from 1/4 still matches, 1.5e-10 away does not
    assert_eq!(rationalize((0.25 + 0.5e-10) * PI), "π/4");
    assert_eq!(rationalize((0.25 + 1.5e-10) * PI), "0.2500π");
    assert_eq!(rationalize((-2.0 / 3.0 - 1.5e-10) * PI), "-0.6667π");
    // an offset of 1.5e-10 radians is only 4.8e-11 in multiples of π
    assert_eq!(rationalize(PI / 4.0 + 1.5e-10), "π/4");
}

#[test]
fn zero_and_pi_checks_use_radians() {
    assert_eq!(rationalize(0.5e-10), "0");
    // 4e-10 rad is 1.3e-10 in multiples of π, outside every check
    assert_eq!(rationalize(4.0e-10), "0.0000π");
    assert_eq!(rationalize(PI + 0.5e-10), "π");
    assert_eq!(rationalize(-PI - 0.5e-10), "-π");
}

#[rstest]
#[case(PI / 6.0, "π/6")]
#[case(5.0 * PI / 6.0, "5π/6")]
#[case(-PI / 3.0, "-π/3")]
#[case(7.0 * PI / 4.0, "7π/4")]
#[case(-11.0 * PI / 12.0, "-11π/12")]
fn named_fractions(#[case] radians: f64, #[case] expected: &str) {
    assert_eq!(rationalize(radians), expected);
}

#[test]
fn fractions_reconstruct_their_input() {
    for d in 1..=12 {
        for n in -12..=12 {
            let radians = n as f64 / d as f64 * PI;
            let text = rationalize(radians);
            let multiple = parse_pi_fraction(&text)
                .unwrap_or_else(|| panic!("{text} is not a π fraction"));
            assert!(
                (multiple * PI - radians).abs() < TOLERANCE,
                "{n}/{d}: {text}"
            );
        }
    }
}

#[test]
fn fallback_is_a_decimal_multiple() {
    for radians in [1.0, 2.5, -0.1, PI / 13.0, 13.0 * PI / 12.0] {
        let text = rationalize(radians);
        let digits = text.strip_suffix('π').unwrap();
        let multiple: f64 = digits.parse().unwrap();
        assert_eq!(digits.split_once('.').unwrap().1.len(), 4, "{text}");
        assert_abs_diff_eq!(multiple, radians / PI, epsilon = 5e-5);
    }
}

#[test]
fn rationalize_is_deterministic() {
    for i in 0..500 {
        let radians = (i as f64 - 250.0) * 0.0731;
        assert_eq!(rationalize(radians), rationalize(radians));
    }
}

#[test]
fn evaluate_at_zero() {
    let r = evaluate(0.0);
    assert_eq!(r.sin, 0.0);
    assert_eq!(r.cos, 1.0);
    assert_eq!(r.tan, TrigValue::Defined(0.0));
    assert_eq!(r.csc, TrigValue::Undefined);
    assert_eq!(r.sec, TrigValue::Defined(1.0));
    assert_eq!(r.cot, TrigValue::Undefined);
}

#[test]
fn evaluate_at_right_angle() {
    let r = evaluate(FRAC_PI_2);
    assert_abs_diff_eq!(r.sin, 1.0);
    assert_abs_diff_eq!(r.cos, 0.0, epsilon = 1e-15);
    assert!(r.tan.is_undefined());
    assert_abs_diff_eq!(r.csc.value().unwrap(), 1.0);
    assert!(r.sec.is_undefined());
    assert_abs_diff_eq!(r.cot.value().unwrap(), 0.0, epsilon = 1e-15);
}

#[test]
fn evaluate_at_straight_angle() {
    let r = evaluate(PI);
    assert_abs_diff_eq!(r.sin, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(r.cos, -1.0);
    assert_abs_diff_eq!(r.tan.value().unwrap(), 0.0, epsilon = 1e-15);
    assert!(r.csc.is_undefined());
    assert_abs_diff_eq!(r.sec.value().unwrap(), -1.0);
    assert!(r.cot.is_undefined());
}

#[test]
fn finite_away_from_quarter_turns() {
    for i in 0..2000 {
        let radians = -10.0 + i as f64 * 0.01;
        let quarter = radians / FRAC_PI_2;
        if (quarter - quarter.round()).abs() * FRAC_PI_2 < 1e-6 {
            continue;
        }
        let r = evaluate(radians);
        for (name, value) in r.entries() {
            let v = value
                .value()
                .unwrap_or_else(|| panic!("{name}({radians}) undefined"));
            assert!(v.is_finite(), "{name}({radians}) = {v}");
        }
    }
}

#[test]
fn evaluate_is_idempotent() {
    for i in 0..200 {
        let radians = i as f64 * 0.173 - 17.0;
        let a = evaluate(radians);
        let b = evaluate(radians);
        assert_eq!(a.sin.to_bits(), b.sin.to_bits());
        assert_eq!(a.cos.to_bits(), b.cos.to_bits());
        for ((_, x), (_, y)) in a.entries().into_iter().zip(b.entries()) {
            assert_eq!(x.value().map(f64::to_bits), y.value().map(f64::to_bits));
        }
    }
}
