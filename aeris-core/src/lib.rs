#![doc = r#"aeris-core: digit codec and case tables for identifier-derived flight paths.

This crate provides:
- [`DigitVector`]: the 8 structural digits of an identifier, validated to [0,9].
- [`CheckToken`]: the optional verifier suffix, round-tripped but never interpreted.
- [`parse`] / [`format_identifier`]: the canonical punctuated encoding.
- [`CaseSelector`] and [`AxisMap`]: which digit positions feed which geometric
  attribute, consulted uniformly by the model and the adjustment search.

Examples

```rust
use aeris_core::{parse, format_identifier, CaseSelector};

let (digits, check) = parse("12.345.678-9").unwrap();
assert_eq!(digits.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
assert_eq!(check.as_str(), "9");
assert_eq!(format_identifier(digits.as_slice(), &check), "12.345.678-9");

let map = CaseSelector::Odd.axis_map();
assert_eq!(map.a, (2, 3));
```
"#]

use std::fmt;
use thiserror::Error;

/// Shared scalar type for all geometric computation.
pub type Scalar = f64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("identifier must contain at least 8 digits, found {digits_found}")]
    MalformedIdentifier { digits_found: usize },

    #[error("digit {value} at position {position} is outside 0..=9")]
    DigitOutOfRange { position: usize, value: u8 },
}

/// The 8 structural digits of an identifier, in fixed positional order.
///
/// Immutable once built; [`DigitVector::with_pair`] returns a new value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitVector([u8; 8]);

impl DigitVector {
    pub const LEN: usize = 8;

    /// Validates every digit into [0,9].
    pub fn new(digits: [u8; 8]) -> Result<Self, CodecError> {
        for (position, &value) in digits.iter().enumerate() {
            if value > 9 {
                return Err(CodecError::DigitOutOfRange { position, value });
            }
        }
        Ok(Self(digits))
    }

    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns a copy with the two positions of `slots` replaced by `values`.
    #[inline]
    pub fn with_pair(self, slots: (usize, usize), values: (u8, u8)) -> Self {
        debug_assert!(values.0 <= 9 && values.1 <= 9);
        let mut digits = self.0;
        digits[slots.0] = values.0;
        digits[slots.1] = values.1;
        Self(digits)
    }

    /// Sum of the two digits at `slots`, as carried by derived semi-axes.
    #[inline]
    pub fn pair_sum(&self, slots: (usize, usize)) -> i32 {
        i32::from(self.0[slots.0]) + i32::from(self.0[slots.1])
    }

    /// Canonical punctuated rendering of this vector with `check` appended.
    pub fn format(&self, check: &CheckToken) -> String {
        format_identifier(self.as_slice(), check)
    }
}

impl std::ops::Index<usize> for DigitVector {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl fmt::Debug for DigitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitVector({:?})", self.0)
    }
}

impl fmt::Display for DigitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Verifier suffix carried through every transformation unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckToken(String);

impl CheckToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CheckToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which digit positions map to which geometric attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseSelector {
    /// Source token "1".
    Odd,
    /// Source token "2".
    Even,
}

/// Digit-position table for one case: the index pairs summing to each
/// semi-axis and the index whose parity decides orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisMap {
    pub a: (usize, usize),
    pub b: (usize, usize),
    pub parity: usize,
}

impl CaseSelector {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Odd),
            "2" => Some(Self::Even),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Odd => "1",
            Self::Even => "2",
        }
    }

    /// The single source of truth for case-dependent digit selection.
    #[inline]
    pub fn axis_map(self) -> AxisMap {
        match self {
            Self::Odd => AxisMap { a: (2, 3), b: (4, 5), parity: 7 },
            Self::Even => AxisMap { a: (5, 6), b: (7, 2), parity: 3 },
        }
    }
}

/// Strips every non-digit character, takes the first 8 digits as the
/// structural vector and the remaining digits (concatenated) as the check
/// token. Fails before any geometry is derived when fewer than 8 digits
/// survive the strip.
pub fn parse(identifier: &str) -> Result<(DigitVector, CheckToken), CodecError> {
    let digits: Vec<u8> = identifier
        .chars()
        .filter(char::is_ascii_digit)
        .map(|c| c as u8 - b'0')
        .collect();

    if digits.len() < DigitVector::LEN {
        return Err(CodecError::MalformedIdentifier { digits_found: digits.len() });
    }

    let mut structural = [0u8; DigitVector::LEN];
    structural.copy_from_slice(&digits[..DigitVector::LEN]);
    let check: String = digits[DigitVector::LEN..]
        .iter()
        .map(|&d| char::from(b'0' + d))
        .collect();

    Ok((DigitVector(structural), CheckToken(check)))
}

/// Renders digits in the canonical `DD.DDD.DDD[-check]` form when exactly 8
/// digits are present; any other length falls back to the raw concatenation
/// plus the optional `-check` suffix. No other grouping exists.
pub fn format_identifier(digits: &[u8], check: &CheckToken) -> String {
    let body: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    let grouped = if digits.len() == DigitVector::LEN {
        format!("{}.{}.{}", &body[0..2], &body[2..5], &body[5..8])
    } else {
        body
    };
    if check.is_empty() {
        grouped
    } else {
        format!("{grouped}-{check}")
    }
}
