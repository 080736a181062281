//! Coercion of loosely-typed coordinates into integer [`Position`]s.
//!
//! Every validating entry point in the workspace accepts `P: IntoPosition`
//! rather than a bare [`Position`], so that integer coercion is an explicit,
//! fallible step. Integer inputs convert infallibly. Floating-point and
//! textual inputs are accepted only when they denote an exact integer; a
//! fractional or non-finite component is an error, never truncated.

use crate::error::CoordinateError;
use crate::position::{Axis, Position};
use smallvec::SmallVec;
use std::str::FromStr;

/// Conversion into an integer [`Position`].
pub trait IntoPosition {
    /// Convert `self`, failing if any component is not an exact integer.
    fn into_position(self) -> Result<Position, CoordinateError>;
}

impl IntoPosition for Position {
    fn into_position(self) -> Result<Position, CoordinateError> {
        Ok(self)
    }
}

impl IntoPosition for &Position {
    fn into_position(self) -> Result<Position, CoordinateError> {
        Ok(*self)
    }
}

impl IntoPosition for (i64, i64, i64) {
    fn into_position(self) -> Result<Position, CoordinateError> {
        Ok(self.into())
    }
}

impl IntoPosition for [i64; 3] {
    fn into_position(self) -> Result<Position, CoordinateError> {
        Ok(self.into())
    }
}

impl IntoPosition for (i32, i32, i32) {
    fn into_position(self) -> Result<Position, CoordinateError> {
        Ok(Position::new(self.0.into(), self.1.into(), self.2.into()))
    }
}

impl IntoPosition for [i32; 3] {
    fn into_position(self) -> Result<Position, CoordinateError> {
        let [x, y, z] = self;
        Ok(Position::new(x.into(), y.into(), z.into()))
    }
}

impl IntoPosition for (f64, f64, f64) {
    fn into_position(self) -> Result<Position, CoordinateError> {
        [self.0, self.1, self.2].into_position()
    }
}

impl IntoPosition for [f64; 3] {
    fn into_position(self) -> Result<Position, CoordinateError> {
        let [x, y, z] = self;
        Ok(Position::new(
            exact_integer(Axis::X, x)?,
            exact_integer(Axis::Y, y)?,
            exact_integer(Axis::Z, z)?,
        ))
    }
}

impl IntoPosition for &[i64] {
    fn into_position(self) -> Result<Position, CoordinateError> {
        match *self {
            [x, y, z] => Ok(Position::new(x, y, z)),
            _ => Err(CoordinateError::WrongArity { found: self.len() }),
        }
    }
}

impl IntoPosition for &[f64] {
    fn into_position(self) -> Result<Position, CoordinateError> {
        match *self {
            [x, y, z] => [x, y, z].into_position(),
            _ => Err(CoordinateError::WrongArity { found: self.len() }),
        }
    }
}

/// Accepts `"x,y,z"`, optionally wrapped in parentheses or brackets.
impl IntoPosition for &str {
    fn into_position(self) -> Result<Position, CoordinateError> {
        let trimmed = self.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .or_else(|| trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')))
            .unwrap_or(trimmed);

        let parts: SmallVec<[&str; 3]> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(CoordinateError::WrongArity { found: parts.len() });
        }
        Ok(Position::new(
            parse_component(Axis::X, parts[0])?,
            parse_component(Axis::Y, parts[1])?,
            parse_component(Axis::Z, parts[2])?,
        ))
    }
}

impl FromStr for Position {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.into_position()
    }
}

/// Convert `value` to `i64` without loss, or fail.
fn exact_integer(axis: Axis, value: f64) -> Result<i64, CoordinateError> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Ok(value as i64)
    } else {
        Err(CoordinateError::NonInteger { axis, value })
    }
}

fn parse_component(axis: Axis, text: &str) -> Result<i64, CoordinateError> {
    if let Ok(v) = text.parse::<i64>() {
        return Ok(v);
    }
    match text.parse::<f64>() {
        Ok(v) => exact_integer(axis, v),
        Err(_) => Err(CoordinateError::Unparsable {
            axis,
            input: text.to_string(),
        }),
    }
}
