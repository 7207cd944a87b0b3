use std::f64::consts::PI;

use crate::complex::ComplexNumber;
use crate::error::Error;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn assert_approx(expected: (f64, f64), actual: &ComplexNumber) {
    assert!(
        approx_eq(expected.0, actual.real()) && approx_eq(expected.1, actual.imaginary()),
        "expected {:?}, got ({}, {})",
        expected,
        actual.real(),
        actual.imaginary()
    );
}

#[test]
fn test1_construction_derives_polar_form() {
    let c = ComplexNumber::new(3.0, 4.0);

    assert_eq!(3.0, c.real());
    assert_eq!(4.0, c.imaginary());
    assert_eq!(5.0, c.magnitude());
    assert!(approx_eq(0.9272952180016122, c.angle()));
}

#[test]
fn test2_convenience_constructors() {
    let r = ComplexNumber::from_real(2.5);
    assert_eq!(2.5, r.real());
    assert_eq!(0.0, r.imaginary());

    let i = ComplexNumber::from_imaginary(-3.0);
    assert_eq!(0.0, i.real());
    assert_eq!(-3.0, i.imaginary());

    let p = ComplexNumber::from_magnitude_and_angle(2.0, PI / 2.0);
    assert_approx((0.0, 2.0), &p);
    assert!(approx_eq(2.0, p.magnitude()));
}

#[test]
fn test3_parse_fixtures() {
    let c = ComplexNumber::parse("2.5-3i").unwrap();
    assert_eq!(2.5, c.real());
    assert_eq!(-3.0, c.imaginary());

    let c = ComplexNumber::parse("-3i").unwrap();
    assert_eq!(0.0, c.real());
    assert_eq!(-3.0, c.imaginary());

    let c = ComplexNumber::parse("2.5").unwrap();
    assert_eq!(2.5, c.real());
    assert_eq!(0.0, c.imaginary());

    let c = ComplexNumber::parse("+.5+1.25i").unwrap();
    assert_eq!(0.5, c.real());
    assert_eq!(1.25, c.imaginary());

    // whitespace around the number is trimmed
    let c = ComplexNumber::parse("  2.5-3i  ").unwrap();
    assert_eq!(2.5, c.real());
    assert_eq!(-3.0, c.imaginary());
}

#[test]
fn test4_parse_suffix_case() {
    // only the combined form accepts an uppercase suffix
    let c = ComplexNumber::parse("2+3I").unwrap();
    assert_eq!(2.0, c.real());
    assert_eq!(3.0, c.imaginary());

    assert_eq!(
        Err(Error::Parse(String::from("3I"))),
        ComplexNumber::parse("3I")
    );
}

#[test]
fn test5_parse_rejects_malformed_input() {
    for input in ["", "abc", "i", "2.5+", "2.5 - 3i", "1+2j", "1.2.3"] {
        assert_eq!(
            Err(Error::Parse(String::from(input))),
            ComplexNumber::parse(input),
            "input {input:?} should not parse"
        );
    }
}

#[test]
fn test6_add_sub_round_trip() {
    let c = ComplexNumber::new(1.5, -2.25);
    let v = ComplexNumber::new(-0.75, 4.0);

    let back = c.add(&v).sub(&v);
    assert_approx((1.5, -2.25), &back);
}

#[test]
fn test7_mul_and_div() {
    let a = ComplexNumber::new(3.0, 4.0);
    let b = ComplexNumber::new(1.0, 2.0);

    assert_approx((-5.0, 10.0), &a.mul(&b));
    assert_approx((2.2, -0.4), &a.div(&b));

    // multiplying the quotient back recovers the dividend
    assert_approx((3.0, 4.0), &a.div(&b).mul(&b));
}

#[test]
fn test8_div_by_zero_propagates_non_finite_values() {
    let c = ComplexNumber::new(1.0, 1.0);
    let q = c.div(&ComplexNumber::new(0.0, 0.0));

    assert!(q.real().is_nan() || q.real().is_infinite());
}

#[test]
fn test9_power() {
    assert_eq!(
        Err(Error::InvalidArgument("exponent must be non-negative")),
        ComplexNumber::new(1.0, 1.0).power(-1)
    );

    // zeroth power is the multiplicative identity, even for zero
    let identity = ComplexNumber::new(0.0, 0.0).power(0).unwrap();
    assert_eq!(1.0, identity.real());
    assert_eq!(0.0, identity.imaginary());

    let c = ComplexNumber::new(1.0, -1.0);
    assert_approx((16.0, 0.0), &c.power(8).unwrap());

    let via_mul = c.mul(&c).mul(&c);
    assert_approx((via_mul.real(), via_mul.imaginary()), &c.power(3).unwrap());
}

#[test]
fn test10_root() {
    assert_eq!(
        Err(Error::InvalidArgument("root degree must be at least 1")),
        ComplexNumber::new(1.0, 0.0).root(0)
    );

    let roots = ComplexNumber::from_real(4.0).root(2).unwrap();
    assert_eq!(2, roots.len());
    assert_approx((2.0, 0.0), &roots[0]);
    assert_approx((-2.0, 0.0), &roots[1]);

    // every cube root of c recovers the magnitude of c when cubed
    let c = ComplexNumber::new(2.0, 3.0);
    let roots = c.root(3).unwrap();
    assert_eq!(3, roots.len());
    for root in &roots {
        assert!(approx_eq(c.magnitude(), root.power(3).unwrap().magnitude()));
    }
}

#[test]
fn test11_display() {
    assert_eq!("0i", ComplexNumber::new(0.0, 0.0).to_string());
    assert_eq!("-3i", ComplexNumber::from_imaginary(-3.0).to_string());
    assert_eq!("2.5 - 3i", ComplexNumber::new(2.5, -3.0).to_string());
    assert_eq!("1.125", ComplexNumber::from_real(1.125).to_string());
    assert_eq!("3 + 4.5i", ComplexNumber::new(3.0, 4.5).to_string());
    // at most four decimal digits, trailing zeros trimmed
    assert_eq!("2 + 3.1416i", ComplexNumber::new(2.0, 3.14159).to_string());
    assert_eq!("10", ComplexNumber::from_real(10.00001).to_string());
}

#[test]
fn test12_display_parse_round_trip() {
    for (real, imaginary) in [(2.5, -3.0), (0.0, -3.0), (1.25, 0.0), (-1.5, 2.75)] {
        let c = ComplexNumber::new(real, imaginary);
        let back = ComplexNumber::parse(&c.to_string()).unwrap();
        assert_approx((real, imaginary), &back);
    }
}

#[test]
fn test13_from_str_delegates_to_parse() {
    let c: ComplexNumber = "2.5-3i".parse().unwrap();
    assert_eq!(2.5, c.real());
    assert_eq!(-3.0, c.imaginary());

    assert!("nonsense".parse::<ComplexNumber>().is_err());
}

#[test]
fn test14_demo_chain_golden_value() {
    let c1 = ComplexNumber::new(2.0, 3.0);
    let c2 = ComplexNumber::parse("2.5-3i").unwrap();
    let c3 = c1
        .add(&ComplexNumber::from_magnitude_and_angle(2.0, 1.57))
        .div(&c2)
        .power(3)
        .unwrap()
        .root(2)
        .unwrap()[1];

    assert_eq!("-1.6182 + 0.0688i", c3.to_string());
}
