#![doc = r#"aeris-geom: ellipse model derived from identifier digits.

Provides:
- [`Ellipse`]: center, semi-axes and orientation, all pure functions of the
  digit vector and the case selector.
- [`Ellipse::canonical_equation`] / [`Ellipse::general_form`]: conic equations.
- [`Ellipse::boundary`]: a lazy, restartable parametric boundary sample.

Derivation (0-indexed digits `d`, per the case's [`AxisMap`](aeris_core::AxisMap)):
center h = d[0], k = d[1]; semi-axes are the sums of the case's two index
pairs; orientation is vertical iff the case's parity digit is odd.

Examples

```rust
use aeris_core::CaseSelector;
use aeris_geom::{Ellipse, Orientation};

let (e, _check) = Ellipse::from_identifier("12.345.678", CaseSelector::Odd).unwrap();
assert_eq!((e.h(), e.k()), (1, 2));
assert_eq!((e.a(), e.b()), (7, 11));
assert_eq!(e.orientation(), Orientation::Horizontal);
```
"#]

use std::f64::consts::TAU;

use aeris_core::{parse, CaseSelector, CheckToken, CodecError, DigitVector, Scalar};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("derived semi-axis {axis} is {value}, must be at least 1")]
    InvalidAxis { axis: char, value: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// General conic coefficients: `A x^2 + B y^2 + C x + D y + F = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneralForm {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
    pub f: i64,
}

/// An elliptical flight path. Immutable once constructed: center, axes and
/// orientation are decided at construction time and never overwritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ellipse {
    h: i32,
    k: i32,
    a: i32,
    b: i32,
    orientation: Orientation,
    digits: DigitVector,
    case: CaseSelector,
}

impl Ellipse {
    /// Parses `identifier` and derives the ellipse; the check token is handed
    /// back so callers can preserve it through later adjustments.
    pub fn from_identifier(
        identifier: &str,
        case: CaseSelector,
    ) -> Result<(Self, CheckToken), ModelError> {
        let (digits, check) = parse(identifier)?;
        Ok((Self::from_digits(digits, case)?, check))
    }

    /// Derives every attribute from the digit vector per the case's axis map.
    /// Fails with [`ModelError::InvalidAxis`] when a derived semi-axis is < 1.
    pub fn from_digits(digits: DigitVector, case: CaseSelector) -> Result<Self, ModelError> {
        let map = case.axis_map();
        let a = digits.pair_sum(map.a);
        let b = digits.pair_sum(map.b);
        let orientation = if digits[map.parity] % 2 != 0 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        Self::from_parts(
            (i32::from(digits[0]), i32::from(digits[1])),
            (a, b),
            orientation,
            digits,
            case,
        )
    }

    /// Pure constructor over already-decided attributes. The only validation
    /// is the axis invariant; callers own the coherence of the parts.
    pub fn from_parts(
        center: (i32, i32),
        axes: (i32, i32),
        orientation: Orientation,
        digits: DigitVector,
        case: CaseSelector,
    ) -> Result<Self, ModelError> {
        let (a, b) = axes;
        if a < 1 {
            return Err(ModelError::InvalidAxis { axis: 'a', value: a });
        }
        if b < 1 {
            return Err(ModelError::InvalidAxis { axis: 'b', value: b });
        }
        Ok(Self { h: center.0, k: center.1, a, b, orientation, digits, case })
    }

    #[inline]
    pub fn h(&self) -> i32 {
        self.h
    }

    #[inline]
    pub fn k(&self) -> i32 {
        self.k
    }

    #[inline]
    pub fn a(&self) -> i32 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> i32 {
        self.b
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn digits(&self) -> DigitVector {
        self.digits
    }

    #[inline]
    pub fn case(&self) -> CaseSelector {
        self.case
    }

    /// Semi-extents along the local x/y directions: (a, b) when horizontal,
    /// swapped when vertical.
    #[inline]
    pub fn radii(&self) -> (i32, i32) {
        match self.orientation {
            Orientation::Horizontal => (self.a, self.b),
            Orientation::Vertical => (self.b, self.a),
        }
    }

    /// Canonical LaTeX equation, a² under the axis matching the orientation's
    /// major role: horizontal puts a² under x, vertical swaps.
    pub fn canonical_equation(&self) -> String {
        let (h, k) = (self.h, self.k);
        let (a2, b2) = (i64::from(self.a).pow(2), i64::from(self.b).pow(2));
        match self.orientation {
            Orientation::Horizontal => format!(
                "\\frac{{(x - {h})^2}}{{{a2}}} + \\frac{{(y - {k})^2}}{{{b2}}} = 1"
            ),
            Orientation::Vertical => format!(
                "\\frac{{(x - {h})^2}}{{{b2}}} + \\frac{{(y - {k})^2}}{{{a2}}} = 1"
            ),
        }
    }

    /// Algebraic expansion of the canonical form into general conic
    /// coefficients.
    pub fn general_form(&self) -> GeneralForm {
        let h = i64::from(self.h);
        let k = i64::from(self.k);
        let a2 = i64::from(self.a).pow(2);
        let b2 = i64::from(self.b).pow(2);
        match self.orientation {
            Orientation::Horizontal => GeneralForm {
                a: b2,
                b: a2,
                c: -2 * b2 * h,
                d: -2 * a2 * k,
                f: b2 * h * h + a2 * k * k - a2 * b2,
            },
            Orientation::Vertical => GeneralForm {
                a: a2,
                b: b2,
                c: -2 * a2 * h,
                d: -2 * b2 * k,
                f: a2 * h * h + b2 * k * k - a2 * b2,
            },
        }
    }

    /// Parametric boundary sample: `samples` points with θ uniform over
    /// [0, 2π], both endpoints included, constant z = `height`. The iterator
    /// is a pure function of the θ grid; restart by calling again.
    pub fn boundary(&self, samples: usize, height: Scalar) -> BoundaryPoints {
        let (rx, ry) = self.radii();
        BoundaryPoints {
            h: Scalar::from(self.h),
            k: Scalar::from(self.k),
            rx: Scalar::from(rx),
            ry: Scalar::from(ry),
            z: height,
            total: samples,
            index: 0,
        }
    }
}

/// A point on an ellipse boundary at a fixed plot height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

/// Lazy boundary sample over the inclusive θ grid.
#[derive(Clone, Debug)]
pub struct BoundaryPoints {
    h: Scalar,
    k: Scalar,
    rx: Scalar,
    ry: Scalar,
    z: Scalar,
    total: usize,
    index: usize,
}

impl Iterator for BoundaryPoints {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.index >= self.total {
            return None;
        }
        // theta hits TAU exactly on the last sample, closing the outline.
        let theta = if self.total > 1 {
            TAU * self.index as Scalar / (self.total - 1) as Scalar
        } else {
            0.0
        };
        self.index += 1;
        Some(Point3 {
            x: self.h + self.rx * theta.cos(),
            y: self.k + self.ry * theta.sin(),
            z: self.z,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundaryPoints {}
