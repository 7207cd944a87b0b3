use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref REAL_ONLY: Regex = Regex::new(r"^[-+]?[0-9]*\.?[0-9]+$").unwrap();
    static ref IMAGINARY_ONLY: Regex = Regex::new(r"^[-+]?[0-9]*\.?[0-9]+i$").unwrap();
    static ref REAL_AND_IMAGINARY: Regex =
        Regex::new(r"^([-+]?[0-9]*\.?[0-9]+)([-+]?[0-9]*\.?[0-9]+)[iI]$").unwrap();
}

/// Immutable complex number. Rectangular and polar forms are both computed at
/// construction and never change; every operation returns a new value.
///
/// Non-finite inputs are not rejected: NaN and infinity propagate into the
/// magnitude and angle following ordinary IEEE-754 rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexNumber {
    real: f64,
    imaginary: f64,
    magnitude: f64,
    angle: f64,
}

impl ComplexNumber {
    pub fn new(real: f64, imaginary: f64) -> Self {
        ComplexNumber {
            real,
            imaginary,
            magnitude: (real * real + imaginary * imaginary).sqrt(),
            angle: imaginary.atan2(real),
        }
    }

    pub fn from_real(real: f64) -> Self {
        ComplexNumber::new(real, 0.0)
    }

    pub fn from_imaginary(imaginary: f64) -> Self {
        ComplexNumber::new(0.0, imaginary)
    }

    pub fn from_magnitude_and_angle(magnitude: f64, angle: f64) -> Self {
        ComplexNumber::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Parses a complex number from one of three forms, tried in order: a
    /// plain decimal (`"2.5"`), a decimal with a mandatory `i` suffix
    /// (`"-3i"`), or two signed decimals where the second carries the suffix
    /// (`"2.5-3i"`). Only the combined form accepts an uppercase `I`.
    /// Surrounding whitespace is trimmed; internal whitespace is not allowed.
    pub fn parse(s: &str) -> Result<ComplexNumber> {
        let trimmed = s.trim();
        let number = |text: &str| {
            f64::from_str(text).map_err(|_| Error::Parse(s.to_string()))
        };

        if REAL_ONLY.is_match(trimmed) {
            Ok(ComplexNumber::new(number(trimmed)?, 0.0))
        } else if IMAGINARY_ONLY.is_match(trimmed) {
            Ok(ComplexNumber::new(
                0.0,
                number(&trimmed[..trimmed.len() - 1])?,
            ))
        } else if let Some(captures) = REAL_AND_IMAGINARY.captures(trimmed) {
            Ok(ComplexNumber::new(
                number(&captures[1])?,
                number(&captures[2])?,
            ))
        } else {
            Err(Error::Parse(s.to_string()))
        }
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Principal argument, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn add(&self, c: &ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.real + c.real, self.imaginary + c.imaginary)
    }

    pub fn sub(&self, c: &ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.real - c.real, self.imaginary - c.imaginary)
    }

    pub fn mul(&self, c: &ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(
            self.real * c.real - self.imaginary * c.imaginary,
            self.real * c.imaginary + self.imaginary * c.real,
        )
    }

    /// Division as `self · conjugate(c) / |c|²`. A zero-magnitude divisor is
    /// not guarded against; the result carries infinities or NaNs.
    pub fn div(&self, c: &ComplexNumber) -> ComplexNumber {
        let numerator = self.mul(&c.conjugate());
        let denominator = c.magnitude * c.magnitude;
        ComplexNumber::new(numerator.real / denominator, numerator.imaginary / denominator)
    }

    /// Raises to a non-negative integer power in polar form. The scaled angle
    /// is reduced with `%`, so it keeps the sign of the original angle.
    pub fn power(&self, n: i32) -> Result<ComplexNumber> {
        if n < 0 {
            return Err(Error::InvalidArgument("exponent must be non-negative"));
        }
        if n == 0 {
            return Ok(ComplexNumber::new(1.0, 0.0));
        }

        let magnitude = self.magnitude.powi(n);
        let angle = (self.angle * f64::from(n)) % (2.0 * PI);
        Ok(ComplexNumber::new(
            magnitude * angle.cos(),
            magnitude * angle.sin(),
        ))
    }

    /// The n distinct n-th roots, at angles `(angle + 2πk)/n` for
    /// `k = 0..n`, in increasing order of `k`.
    pub fn root(&self, n: i32) -> Result<Vec<ComplexNumber>> {
        if n < 1 {
            return Err(Error::InvalidArgument("root degree must be at least 1"));
        }

        let magnitude = self.magnitude.powf(1.0 / f64::from(n));
        let mut roots = Vec::with_capacity(n as usize);
        for k in 0..n {
            let angle = (self.angle + f64::from(k) * 2.0 * PI) / f64::from(n);
            roots.push(ComplexNumber::new(
                magnitude * angle.cos(),
                magnitude * angle.sin(),
            ));
        }
        Ok(roots)
    }

    fn conjugate(&self) -> ComplexNumber {
        ComplexNumber::new(self.real, -self.imaginary)
    }
}

impl FromStr for ComplexNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ComplexNumber::parse(s)
    }
}

/// Renders with up to four decimal digits, trailing zeros trimmed. A zero
/// real part prints only the imaginary term (`"-3i"`); a zero imaginary part
/// prints only the real term; otherwise both appear joined by the sign of the
/// imaginary part (`"2.5 - 3i"`).
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.real == 0.0 {
            write!(f, "{}i", format_part(self.imaginary))
        } else if self.imaginary > 0.0 {
            write!(
                f,
                "{} + {}i",
                format_part(self.real),
                format_part(self.imaginary)
            )
        } else if self.imaginary < 0.0 {
            write!(
                f,
                "{} - {}i",
                format_part(self.real),
                format_part(self.imaginary.abs())
            )
        } else {
            write!(f, "{}", format_part(self.real))
        }
    }
}

fn format_part(value: f64) -> String {
    let rounded = format!("{value:.4}");
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
